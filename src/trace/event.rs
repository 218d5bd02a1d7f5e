//! Structured description of what a frame represents
//!
//! Every [`Frame`](super::Frame) carries one [`FrameEvent`] next to its
//! narration text. Consumers that need to react to a frame (quiz derivation,
//! teaching-mode pacing, auto-pause) match on the event and never parse the
//! message.

use super::Value;
use serde::{Deserialize, Serialize};

/// Which half of the search range a binary search probe discarded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Half {
    Left,
    Right,
}

/// How the two values of a [`FrameEvent::Compare`] relate to each other
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompareKind {
    /// Neighbours checked for order (bubble sort)
    Adjacent,
    /// Running minimum checked against a candidate (selection sort)
    Minimum,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum FrameEvent {
    /// Initial state, counters at zero
    Start,

    /// Two positions compared; `left < right` always holds
    Compare {
        compare: CompareKind,
        left: usize,
        right: usize,
        left_value: Value,
        right_value: Value,
    },

    /// Insertion sort compared the held key with `a[index]`
    KeyCompare { key: Value, index: usize, value: Value },

    /// Insertion sort picked up `a[index]` as the key
    TakeKey { index: usize, key: Value },

    /// Insertion sort copied `a[from]` into `a[to]`
    Shift { from: usize, to: usize },

    /// Insertion sort dropped the key into its slot
    Place { index: usize, key: Value },

    /// Two positions exchanged
    Swap { left: usize, right: usize },

    /// Selection sort began scanning the unsorted region from `index`
    PassStart { index: usize },

    /// Selection sort found a smaller value
    NewMinimum { index: usize, value: Value },

    /// Selection sort pass where position `index` already held the minimum
    MinimumInPlace { index: usize },

    /// End of an outer pass; `fixed` is the position proven final by it
    PassComplete { pass: u64, fixed: Option<usize> },

    /// Bubble sort pass with no swaps, remaining positions are final
    AlreadySorted,

    /// Terminal success frame for the sorting algorithms
    Sorted,

    /// Binary search compared `a[mid]` against the target
    Probe {
        low: usize,
        mid: usize,
        high: usize,
        value: Value,
        target: Value,
    },

    /// Binary search discarded one half; pointers may sit outside the array
    Narrow { low: isize, high: isize, discarded: Half },

    /// Binary search matched the target
    Found { index: usize },

    /// Binary search exhausted the range
    NotFound,

    /// Move zeros inspected `a[read]` with the write pointer at `write`
    ZeroCheck { read: usize, write: usize, value: Value },

    /// Move zeros found a non-zero already at the write pointer
    InPlace { index: usize },

    /// Move zeros advanced the write pointer
    Advance { write: usize },

    /// Move zeros finished, every zero is at the back
    Settled,
}

impl FrameEvent {
    /// A comparison the quiz layer may ask about
    pub fn is_comparison(&self) -> bool {
        matches!(
            self,
            FrameEvent::Compare { .. }
                | FrameEvent::KeyCompare { .. }
                | FrameEvent::Probe { .. }
                | FrameEvent::ZeroCheck { .. }
        )
    }

    /// A frame that moved values around
    pub fn is_movement(&self) -> bool {
        matches!(self, FrameEvent::Swap { .. } | FrameEvent::Shift { .. })
    }

    /// The last frame of a trace
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            FrameEvent::Sorted
                | FrameEvent::AlreadySorted
                | FrameEvent::Found { .. }
                | FrameEvent::NotFound
                | FrameEvent::Settled
        )
    }

    /// A boundary worth pausing on in teaching mode
    pub fn is_milestone(&self) -> bool {
        matches!(
            self,
            FrameEvent::PassComplete { .. } | FrameEvent::AlreadySorted | FrameEvent::Sorted
        )
    }
}
