//! # Introduction
//!
//! sortscope runs classic array algorithms against a private copy of their
//! input and records a frame after every comparison, swap, shift and pass
//! boundary. The finished trace is then stepped forward and backward through
//! a terminal UI built with [ratatui](https://docs.rs/ratatui), with quizzes
//! and progress tracking on top.
//!
//! ## Pipeline
//!
//! ```text
//! (algorithm, array, target) → Generator → Trace → Playback → TUI
//!                                              ↘ Quiz → Progress
//! ```
//!
//! 1. [`algorithms`] — one generator per algorithm, producing a [`trace::Trace`].
//! 2. [`trace`] — the [`trace::Frame`] schema: array copy, narration,
//!    structured [`trace::FrameEvent`], index annotations and counters.
//! 3. [`registry`] — static metadata and Learn-mode questions.
//! 4. [`playback`] — the cursor that walks a trace, with auto-play pacing.
//! 5. [`quiz`] and [`progress`] — prediction quizzes and XP/streak/mastery.
//! 6. [`solver`] — recognises a free-text problem statement.
//! 7. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Algorithms
//!
//! Bubble, insertion and selection sort; binary search on a sorted array;
//! move-zeros (stable two-pointer partition).

pub mod algorithms;
pub mod config;
pub mod error;
pub mod playback;
pub mod progress;
pub mod quiz;
pub mod registry;
pub mod solver;
pub mod trace;
pub mod ui;
