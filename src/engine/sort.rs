//! Merge sort trace with sub-problem scope tracking
//!
//! The trace records enough per step for a UI to draw a bracket over the
//! active sub-array while scrubbing: the full array snapshot, the inclusive
//! `[lo, hi]` scope of the sub-problem being worked on, the midpoint while a
//! merge is in flight, and the indices to highlight (the pair being compared
//! or the slot just written).

/// What happened at one instant of the sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortStepKind {
    /// A sub-array `[lo, hi]` was split at `mid`.
    Divide,
    /// Two candidate elements were compared during a merge.
    Compare,
    /// The smaller candidate was written into its final slot for this merge.
    Place,
    /// A leftover element was copied once one side ran dry.
    Copy,
}

/// One replayable instant of the merge sort.
#[derive(Debug, Clone)]
pub struct SortStep {
    pub kind: SortStepKind,
    /// Snapshot of the whole array at this instant.
    pub values: Vec<i32>,
    /// Inclusive scope of the active sub-problem.
    pub lo: usize,
    pub hi: usize,
    /// Midpoint of the scope, present while merging.
    pub mid: Option<usize>,
    /// Indices to render emphasized.
    pub highlights: Vec<usize>,
    pub description: String,
}

/// Run a top-down merge sort over a copy of `input`, returning the full
/// step trace. The final step's snapshot equals the sorted input; an empty
/// or single-element input sorts trivially and produces no steps.
pub fn merge_sort_trace(input: &[i32]) -> Vec<SortStep> {
    let mut values = input.to_vec();
    let mut steps = Vec::new();
    if values.len() > 1 {
        sort_range(&mut values, 0, input.len() - 1, &mut steps);
    }
    steps
}

fn sort_range(values: &mut Vec<i32>, lo: usize, hi: usize, steps: &mut Vec<SortStep>) {
    if lo >= hi {
        return;
    }
    let mid = lo + (hi - lo) / 2;

    steps.push(SortStep {
        kind: SortStepKind::Divide,
        values: values.clone(),
        lo,
        hi,
        mid: Some(mid),
        highlights: vec![lo, mid, hi],
        description: format!("Divide [{lo}, {hi}] at {mid}"),
    });

    sort_range(values, lo, mid, steps);
    sort_range(values, mid + 1, hi, steps);
    merge(values, lo, mid, hi, steps);
}

fn merge(values: &mut Vec<i32>, lo: usize, mid: usize, hi: usize, steps: &mut Vec<SortStep>) {
    let left: Vec<i32> = values[lo..=mid].to_vec();
    let right: Vec<i32> = values[mid + 1..=hi].to_vec();

    let mut i = 0; // cursor into left
    let mut j = 0; // cursor into right
    let mut k = lo; // write position

    while i < left.len() && j < right.len() {
        steps.push(SortStep {
            kind: SortStepKind::Compare,
            values: values.clone(),
            lo,
            hi,
            mid: Some(mid),
            highlights: vec![lo + i, mid + 1 + j],
            description: format!("Compare {} and {}", left[i], right[j]),
        });

        let taken = if left[i] <= right[j] {
            let v = left[i];
            i += 1;
            v
        } else {
            let v = right[j];
            j += 1;
            v
        };
        values[k] = taken;

        steps.push(SortStep {
            kind: SortStepKind::Place,
            values: values.clone(),
            lo,
            hi,
            mid: Some(mid),
            highlights: vec![k],
            description: format!("Place {taken} at index {k}"),
        });
        k += 1;
    }

    while i < left.len() {
        values[k] = left[i];
        steps.push(SortStep {
            kind: SortStepKind::Copy,
            values: values.clone(),
            lo,
            hi,
            mid: Some(mid),
            highlights: vec![k],
            description: format!("Copy leftover {} to index {k}", left[i]),
        });
        i += 1;
        k += 1;
    }

    while j < right.len() {
        values[k] = right[j];
        steps.push(SortStep {
            kind: SortStepKind::Copy,
            values: values.clone(),
            lo,
            hi,
            mid: Some(mid),
            highlights: vec![k],
            description: format!("Copy leftover {} to index {k}", right[j]),
        });
        j += 1;
        k += 1;
    }
}
