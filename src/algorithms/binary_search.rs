//! Binary search trace generator
//!
//! The input must already be ascending. That precondition is the caller's
//! responsibility: on unsorted input the trace is still well formed, but
//! its found / not-found verdict says nothing about the data.

use crate::trace::{fmt_value, valid_pointers, FrameEvent, Half, Trace, TraceBuilder, Value};

pub fn generate(input: &[Value], target: Value) -> Trace {
    let mut t = TraceBuilder::new(input);
    let n = t.len();
    let len = n as isize;

    t.frame(
        FrameEvent::Start,
        format!(
            "Start Binary Search for target={}. (Array must be sorted.)",
            fmt_value(target)
        ),
    )
    .highlight(valid_pointers(&[0, len - 1], n))
    .push();

    let mut low: isize = 0;
    let mut high: isize = len - 1;

    while low <= high {
        // low <= high keeps both pointers inside [0, n)
        let (lo, hi) = (low as usize, high as usize);
        let mid = lo + (hi - lo) / 2;
        let value = t.at(mid);

        t.count_comparison();
        t.frame(
            FrameEvent::Probe {
                low: lo,
                mid,
                high: hi,
                value,
                target,
            },
            format!(
                "Compute mid={} (low={}, high={}). Compare a[mid]={} with target={}.",
                mid,
                lo,
                hi,
                fmt_value(value),
                fmt_value(target)
            ),
        )
        .highlight([lo, mid, hi])
        .comparing([mid])
        .active([lo, hi])
        .push();

        if value == target {
            t.frame(
                FrameEvent::Found { index: mid },
                format!("✅ Found target at index {}.", mid),
            )
            .highlight([mid])
            .sorted([mid])
            .push();
            return t.finish();
        }

        t.count_pass();

        let (discarded, message) = if value < target {
            low = mid as isize + 1;
            (
                Half::Left,
                format!("a[mid] < target → discard left half. New low={}.", low),
            )
        } else {
            high = mid as isize - 1;
            (
                Half::Right,
                format!("a[mid] > target → discard right half. New high={}.", high),
            )
        };

        let bounds = valid_pointers(&[low, high], n);
        t.frame(
            FrameEvent::Narrow {
                low,
                high,
                discarded,
            },
            message,
        )
        .highlight(bounds.iter().copied())
        .active(bounds)
        .push();
    }

    t.frame(
        FrameEvent::NotFound,
        format!(
            "❌ Not found: target={} is not in the array.",
            fmt_value(target)
        ),
    )
    .push();

    t.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_not_found() {
        let trace = generate(&[], 4.0);

        assert_eq!(trace.len(), 2);
        assert!(trace[0].highlight.is_empty());
        assert_eq!(trace[1].event, FrameEvent::NotFound);
        assert_eq!(trace.totals().comparisons, 0);
    }

    #[test]
    fn test_high_below_zero_is_not_highlighted() {
        let trace = generate(&[10.0, 20.0], 1.0);
        let narrow = trace
            .iter()
            .rev()
            .find(|f| matches!(f.event, FrameEvent::Narrow { .. }))
            .unwrap();

        assert_eq!(
            narrow.event,
            FrameEvent::Narrow {
                low: 0,
                high: -1,
                discarded: Half::Right
            }
        );
        assert_eq!(narrow.highlight, vec![0]);
        assert!(trace.iter().all(|f| f.indices_in_bounds()));
    }
}
