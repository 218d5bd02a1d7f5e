//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`array`]: the working array as coloured bars
//! - [`narration`]: frame message and loop invariant
//! - [`metrics`]: live counters and learner progress
//! - [`info`]: algorithm metadata from the registry
//! - [`quiz`]: modal quiz popup
//! - [`status`]: status bar with keybindings and playback state
//!
//! Each pane exports a stateless `render_*` function; scroll offsets live in
//! [`crate::ui::App`].

mod utils;

pub mod array;
pub mod info;
pub mod metrics;
pub mod narration;
pub mod quiz;
pub mod status;

pub use array::render_array_pane;
pub use info::render_info_pane;
pub use metrics::{render_metrics_pane, MetricsRenderData};
pub use narration::render_narration_pane;
pub use quiz::render_quiz_popup;
pub use status::{render_status_bar, StatusRenderData};
