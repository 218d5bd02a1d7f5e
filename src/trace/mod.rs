//! Frame model and trace container
//!
//! A [`Trace`] is the full, ordered list of [`Frame`]s produced by one run
//! of a generator. Each frame owns its own copy of the array, so no frame
//! ever observes a later mutation.
//!
//! # Counters
//!
//! [`Counters`] only ever grow across a trace:
//! - one comparison → `comparisons += 1`
//! - one swap → `swaps += 1`, `writes += 2`
//! - one shift or placement → `writes += 1`
//!
//! # Index annotations
//!
//! `highlight`, `comparing`, `swapped`, `active_indices` and
//! `sorted_indices` are sorted, duplicate-free and always inside
//! `[0, array.len())`. An empty annotation means "nothing to mark".

mod builder;
mod event;

pub(crate) use builder::TraceBuilder;
pub use event::{CompareKind, FrameEvent, Half};

use serde::{Deserialize, Serialize};
use std::ops::Index;

/// Element type of every array the generators operate on
pub type Value = f64;

/// Running work counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counters {
    pub comparisons: u64,
    pub swaps: u64,
    pub passes: u64,
    pub writes: u64,
}

impl Counters {
    /// True when no counter is smaller than in `earlier`
    pub fn dominates(&self, earlier: &Counters) -> bool {
        self.comparisons >= earlier.comparisons
            && self.swaps >= earlier.swaps
            && self.passes >= earlier.passes
            && self.writes >= earlier.writes
    }
}

/// One immutable snapshot of an algorithm run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    pub array: Vec<Value>,
    pub message: String,
    pub event: FrameEvent,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub highlight: Vec<usize>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comparing: Vec<usize>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub swapped: Vec<usize>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub active_indices: Vec<usize>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sorted_indices: Vec<usize>,
    #[serde(flatten)]
    pub counters: Counters,
}

impl Frame {
    pub fn is_terminal(&self) -> bool {
        self.event.is_terminal()
    }

    /// Whether position `index` is proven to hold its final value
    pub fn is_sorted_at(&self, index: usize) -> bool {
        self.sorted_indices.binary_search(&index).is_ok()
    }

    /// Every annotation lies inside the array
    pub fn indices_in_bounds(&self) -> bool {
        let len = self.array.len();
        [
            &self.highlight,
            &self.comparing,
            &self.swapped,
            &self.active_indices,
            &self.sorted_indices,
        ]
        .iter()
        .all(|set| set.iter().all(|&i| i < len))
    }
}

/// Complete frame history of one generator run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trace {
    frames: Vec<Frame>,
}

impl Trace {
    /// Generators always emit at least a start and a terminal frame
    pub(crate) fn from_frames(frames: Vec<Frame>) -> Self {
        debug_assert!(!frames.is_empty(), "a trace holds at least one frame");
        Trace { frames }
    }

    /// Get a frame by index
    pub fn get(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    /// Get the number of frames
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn first(&self) -> Option<&Frame> {
        self.frames.first()
    }

    pub fn last(&self) -> Option<&Frame> {
        self.frames.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Frame> {
        self.frames.iter()
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Counters of the final frame
    pub fn totals(&self) -> Counters {
        self.last().map(|f| f.counters).unwrap_or_default()
    }
}

impl Index<usize> for Trace {
    type Output = Frame;

    fn index(&self, index: usize) -> &Frame {
        &self.frames[index]
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Frame;
    type IntoIter = std::slice::Iter<'a, Frame>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}

/// Keep the positions that fall inside `[0, len)`, sorted and deduplicated
pub fn valid_indices<I>(indices: I, len: usize) -> Vec<usize>
where
    I: IntoIterator<Item = usize>,
{
    let mut out: Vec<usize> = indices.into_iter().filter(|&i| i < len).collect();
    out.sort_unstable();
    out.dedup();
    out
}

/// Convert signed search pointers to positions, dropping the ones outside the array
pub fn valid_pointers(pointers: &[isize], len: usize) -> Vec<usize> {
    valid_indices(pointers.iter().filter_map(|&p| usize::try_from(p).ok()), len)
}

/// Render a value the way narration shows it
pub fn fmt_value(value: Value) -> String {
    format!("{}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_indices_filters_and_dedups() {
        assert_eq!(valid_indices([4, 1, 1, 9, 0], 5), vec![0, 1, 4]);
        assert!(valid_indices([0, 1], 0).is_empty());
    }

    #[test]
    fn test_valid_pointers_drop_negative() {
        assert_eq!(valid_pointers(&[-1, 0, 3, 3], 3), vec![0]);
        assert_eq!(valid_pointers(&[2, 1, 2], 4), vec![1, 2]);
    }

    #[test]
    fn test_fmt_value_integral() {
        assert_eq!(fmt_value(5.0), "5");
        assert_eq!(fmt_value(-2.5), "-2.5");
    }

    #[test]
    fn test_counters_dominates() {
        let a = Counters {
            comparisons: 2,
            swaps: 1,
            passes: 0,
            writes: 2,
        };
        let b = Counters {
            comparisons: 3,
            ..a
        };
        assert!(b.dominates(&a));
        assert!(!a.dominates(&b));
    }
}
