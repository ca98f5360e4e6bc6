//! Disjoint-set forest (union-find) with path halving and union by rank.
//!
//! Kruskal's trace engine queries this on both endpoints of every candidate
//! edge; the playback UI additionally asks for a full component snapshot at
//! each step so nodes in the same set can share a color. Ties in rank are
//! broken toward the lower index, so the representative of a set never
//! depends on the order unions were issued in.

/// Disjoint-set forest over dense node ids `0..n`.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl UnionFind {
    /// Create `n` singleton sets.
    pub fn new(n: usize) -> Self {
        UnionFind {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    /// Representative of the set containing `x`.
    ///
    /// Iterative path halving: every visited node is re-pointed at its
    /// grandparent. The parent chain strictly shortens toward a self-parented
    /// root, so the walk always terminates.
    pub fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            let grandparent = self.parent[self.parent[x]];
            self.parent[x] = grandparent;
            x = grandparent;
        }
        x
    }

    /// Merge the sets containing `a` and `b`.
    ///
    /// Returns `true` if two distinct sets were joined, `false` if `a` and
    /// `b` were already connected (the cycle case in Kruskal). Repeated
    /// unions of the same pair are no-ops.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let ra = self.find(a);
        let rb = self.find(b);

        if ra == rb {
            return false;
        }

        match self.rank[ra].cmp(&self.rank[rb]) {
            std::cmp::Ordering::Less => self.parent[ra] = rb,
            std::cmp::Ordering::Greater => self.parent[rb] = ra,
            std::cmp::Ordering::Equal => {
                // Lower index wins so representatives are order-independent
                let (root, child) = if ra < rb { (ra, rb) } else { (rb, ra) };
                self.parent[child] = root;
                self.rank[root] += 1;
            }
        }
        true
    }

    /// Whether `a` and `b` are currently in the same set.
    pub fn connected(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    /// Snapshot of the representative of every node, for component coloring.
    pub fn components(&mut self) -> Vec<usize> {
        (0..self.parent.len()).map(|i| self.find(i)).collect()
    }

    /// Number of elements in the forest.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}
