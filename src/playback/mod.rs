//! Playback cursor over a finished trace
//!
//! The trace is immutable; [`Playback`] only owns a frame index plus the
//! auto-play clock. Moving past either end is refused with a
//! [`PlaybackError`] rather than clamped silently, so the UI can report it.
//!
//! # Teaching mode
//!
//! With teaching mode on, movement frames (swaps, shifts) stay on screen for
//! at least [`MOVEMENT_HOLD`] and comparison frames for at least
//! [`COMPARISON_HOLD`]. Auto-play also pauses on pass boundaries and on the
//! final sorted frame.

use crate::error::PlaybackError;
use crate::trace::{Frame, Trace};
use std::time::{Duration, Instant};
use tracing::trace;

/// Minimum dwell time for swap and shift frames in teaching mode
pub const MOVEMENT_HOLD: Duration = Duration::from_millis(800);

/// Minimum dwell time for comparison frames in teaching mode
pub const COMPARISON_HOLD: Duration = Duration::from_millis(550);

/// What one call to [`Playback::tick`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Not playing, blocked, or the delay has not elapsed
    Idle,
    Advanced,
    /// Teaching mode stopped on a pass boundary or the sorted frame
    AutoPaused,
    /// Reached the last frame
    Finished,
}

#[derive(Debug)]
pub struct Playback {
    trace: Trace,
    position: usize,
    playing: bool,
    speed: Duration,
    teaching_mode: bool,
    last_advance: Option<Instant>,
}

impl Playback {
    pub fn new(trace: Trace, speed: Duration) -> Self {
        Playback {
            trace,
            position: 0,
            playing: false,
            speed,
            teaching_mode: false,
            last_advance: None,
        }
    }

    pub fn with_teaching_mode(mut self, enabled: bool) -> Self {
        self.teaching_mode = enabled;
        self
    }

    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    /// The frame under the cursor
    pub fn current(&self) -> &Frame {
        &self.trace[self.position]
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.trace.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trace.is_empty()
    }

    pub fn is_at_start(&self) -> bool {
        self.position == 0
    }

    pub fn is_at_end(&self) -> bool {
        self.position + 1 >= self.trace.len()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn teaching_mode(&self) -> bool {
        self.teaching_mode
    }

    pub fn toggle_teaching_mode(&mut self) -> bool {
        self.teaching_mode = !self.teaching_mode;
        self.teaching_mode
    }

    pub fn speed(&self) -> Duration {
        self.speed
    }

    pub fn set_speed(&mut self, speed: Duration) {
        self.speed = speed;
    }

    /// Step forward one frame
    pub fn step_forward(&mut self) -> Result<(), PlaybackError> {
        if self.is_at_end() {
            return Err(PlaybackError::AtEnd);
        }
        self.position += 1;
        trace!(position = self.position, "step forward");
        Ok(())
    }

    /// Step backward one frame
    pub fn step_backward(&mut self) -> Result<(), PlaybackError> {
        if self.position == 0 {
            return Err(PlaybackError::AtStart);
        }
        self.position -= 1;
        trace!(position = self.position, "step backward");
        Ok(())
    }

    /// Step forward up to `n` frames, returning how many were taken
    pub fn step_forward_by(&mut self, n: usize) -> usize {
        let mut stepped = 0;
        for _ in 0..n {
            if self.step_forward().is_err() {
                break;
            }
            stepped += 1;
        }
        stepped
    }

    pub fn rewind_to_start(&mut self) {
        self.position = 0;
    }

    pub fn jump_to_end(&mut self) {
        self.position = self.trace.len().saturating_sub(1);
    }

    pub fn seek(&mut self, index: usize) -> Result<(), PlaybackError> {
        if index >= self.trace.len() {
            return Err(PlaybackError::OutOfRange {
                index,
                len: self.trace.len(),
            });
        }
        self.position = index;
        Ok(())
    }

    /// Start or stop auto-play; playing from the last frame restarts the trace
    pub fn toggle_play(&mut self) -> bool {
        if self.playing {
            self.pause();
        } else {
            if self.is_at_end() {
                self.rewind_to_start();
            }
            self.playing = true;
            self.last_advance = None;
        }
        self.playing
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// How long the current frame stays up during auto-play
    pub fn effective_delay(&self) -> Duration {
        if !self.teaching_mode {
            return self.speed;
        }
        let event = &self.current().event;
        if event.is_movement() {
            self.speed.max(MOVEMENT_HOLD)
        } else if event.is_comparison() {
            self.speed.max(COMPARISON_HOLD)
        } else {
            self.speed
        }
    }

    /// Advance auto-play if the current frame's delay has elapsed
    ///
    /// `blocked` holds playback in place, e.g. while a quiz is open.
    pub fn tick(&mut self, now: Instant, blocked: bool) -> Tick {
        if !self.playing || blocked {
            return Tick::Idle;
        }
        if self.is_at_end() {
            self.playing = false;
            return Tick::Finished;
        }

        let due = self
            .last_advance
            .map_or(true, |last| {
                now.saturating_duration_since(last) >= self.effective_delay()
            });
        if !due {
            return Tick::Idle;
        }

        self.position += 1;
        self.last_advance = Some(now);

        if self.teaching_mode && self.current().event.is_milestone() {
            self.playing = false;
            return Tick::AutoPaused;
        }
        if self.is_at_end() {
            self.playing = false;
            return Tick::Finished;
        }
        Tick::Advanced
    }
}
