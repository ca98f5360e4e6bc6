//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into four layers:
//!
//! - **[`app`]** — application state, keyboard event loop, auto-play timing
//! - **[`scenes`]** — one [`scenes::Scene`] per demo, adapting an engine's
//!   trace (or the DSL sandbox / puzzle state) to the shared playback surface
//! - **[`panes`]** — stateless render functions for the diagram pane, the
//!   narration pane, and the status bar
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! [`store`] holds the JSON-backed progress map (achievements, puzzle best
//! scores). It is written exclusively from this layer; the algorithm
//! engines never see it.
//!
//! The entry point for consumers is [`App`]: construct it with a boxed
//! [`scenes::Scene`] and call [`App::run`] to start the event loop.

pub mod app;
pub mod panes;
pub mod scenes;
pub mod store;
pub mod theme;

pub use app::App;
