//! Bubble sort trace generator
//!
//! Adjacent pairs are compared left to right; each pass pushes the largest
//! remaining value to the end, so the sorted region grows from the right.
//! A pass without swaps proves the rest of the array sorted and ends the
//! trace early.

use crate::trace::{fmt_value, CompareKind, FrameEvent, Trace, TraceBuilder, Value};

pub fn generate(input: &[Value]) -> Trace {
    let mut t = TraceBuilder::new(input);
    let n = t.len();
    let mut sorted: Vec<usize> = Vec::new();

    t.frame(
        FrameEvent::Start,
        "Start Bubble Sort: compare adjacent items and swap if they are out of order.",
    )
    .push();

    if n < 2 {
        t.frame(FrameEvent::Sorted, "Array is already sorted. ✅")
            .sorted(0..n)
            .push();
        return t.finish();
    }

    for pass in 0..n - 1 {
        let mut did_swap = false;

        for j in 0..n - 1 - pass {
            t.count_comparison();
            let (left, right) = (t.at(j), t.at(j + 1));
            t.frame(
                FrameEvent::Compare {
                    compare: CompareKind::Adjacent,
                    left: j,
                    right: j + 1,
                    left_value: left,
                    right_value: right,
                },
                format!(
                    "Compare a[{}]={} and a[{}]={}.",
                    j,
                    fmt_value(left),
                    j + 1,
                    fmt_value(right)
                ),
            )
            .comparing([j, j + 1])
            .highlight([j, j + 1])
            .sorted(sorted.iter().copied())
            .push();

            // Strict comparison keeps equal values in input order
            if left > right {
                t.swap(j, j + 1);
                did_swap = true;
                t.frame(
                    FrameEvent::Swap {
                        left: j,
                        right: j + 1,
                    },
                    format!(
                        "Swapped: {} should come before {}.",
                        fmt_value(t.at(j)),
                        fmt_value(t.at(j + 1))
                    ),
                )
                .swapped([j, j + 1])
                .highlight([j, j + 1])
                .sorted(sorted.iter().copied())
                .push();
            }
        }

        t.count_pass();
        let fixed = n - 1 - pass;
        sorted.insert(0, fixed);

        t.frame(
            FrameEvent::PassComplete {
                pass: t.passes(),
                fixed: Some(fixed),
            },
            format!(
                "Pass {} complete. Index {} is now fixed (sorted region grows from the right).",
                pass + 1,
                fixed
            ),
        )
        .sorted(sorted.iter().copied())
        .push();

        if !did_swap {
            t.frame(
                FrameEvent::AlreadySorted,
                "No swaps in this pass → the array is already sorted. ✅",
            )
            .sorted(0..n)
            .push();
            return t.finish();
        }
    }

    t.frame(FrameEvent::Sorted, "Array sorted successfully. ✅")
        .sorted(0..n)
        .push();

    t.finish()
}
