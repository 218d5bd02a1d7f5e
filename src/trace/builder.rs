// Trace recording for the generators

use super::{valid_indices, Counters, Frame, FrameEvent, Trace, Value};

/// Private working copy of the input plus the frames recorded so far
#[derive(Debug)]
pub(crate) struct TraceBuilder {
    array: Vec<Value>,
    counters: Counters,
    frames: Vec<Frame>,
}

impl TraceBuilder {
    pub fn new(input: &[Value]) -> Self {
        TraceBuilder {
            array: input.to_vec(),
            counters: Counters::default(),
            frames: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.array.len()
    }

    pub fn at(&self, index: usize) -> Value {
        self.array[index]
    }

    pub fn count_comparison(&mut self) {
        self.counters.comparisons += 1;
    }

    pub fn count_pass(&mut self) {
        self.counters.passes += 1;
    }

    pub fn passes(&self) -> u64 {
        self.counters.passes
    }

    /// Exchange two positions: one swap, two writes
    pub fn swap(&mut self, left: usize, right: usize) {
        self.array.swap(left, right);
        self.counters.swaps += 1;
        self.counters.writes += 2;
    }

    /// Overwrite one position: one write
    pub fn write(&mut self, index: usize, value: Value) {
        self.array[index] = value;
        self.counters.writes += 1;
    }

    /// Start a frame capturing the current array and counters
    pub fn frame(&mut self, event: FrameEvent, message: impl Into<String>) -> PendingFrame<'_> {
        let frame = Frame {
            array: self.array.clone(),
            message: message.into(),
            event,
            highlight: Vec::new(),
            comparing: Vec::new(),
            swapped: Vec::new(),
            active_indices: Vec::new(),
            sorted_indices: Vec::new(),
            counters: self.counters,
        };
        PendingFrame {
            builder: self,
            frame,
        }
    }

    pub fn finish(self) -> Trace {
        Trace::from_frames(self.frames)
    }
}

/// A frame being annotated before it is appended to the trace
#[must_use = "a pending frame is only recorded by calling push()"]
pub(crate) struct PendingFrame<'a> {
    builder: &'a mut TraceBuilder,
    frame: Frame,
}

impl PendingFrame<'_> {
    pub fn highlight(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.frame.highlight = valid_indices(indices, self.frame.array.len());
        self
    }

    pub fn comparing(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.frame.comparing = valid_indices(indices, self.frame.array.len());
        self
    }

    pub fn swapped(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.frame.swapped = valid_indices(indices, self.frame.array.len());
        self
    }

    pub fn active(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.frame.active_indices = valid_indices(indices, self.frame.array.len());
        self
    }

    pub fn sorted(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.frame.sorted_indices = valid_indices(indices, self.frame.array.len());
        self
    }

    pub fn push(self) {
        self.builder.frames.push(self.frame);
    }
}
