//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]**: session state, keyboard event loop, pane focus, quiz modal
//! - **[`panes`]**: stateless render functions for each visible pane (array,
//!   narration, info, quiz popup, status bar)
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point is [`App`]: construct it with a [`Playback`] and call
//! [`App::run`] to start the event loop.
//!
//! [`Playback`]: crate::playback::Playback
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
