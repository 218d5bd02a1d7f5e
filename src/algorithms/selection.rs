//! Selection sort trace generator

use crate::trace::{fmt_value, CompareKind, FrameEvent, Trace, TraceBuilder, Value};

pub fn generate(input: &[Value]) -> Trace {
    let mut t = TraceBuilder::new(input);
    let n = t.len();

    t.frame(
        FrameEvent::Start,
        "Start Selection Sort: each pass selects the minimum from the unsorted region and swaps it into place.",
    )
    .push();

    if n < 2 {
        t.frame(FrameEvent::Sorted, "Array is already sorted. ✅")
            .sorted(0..n)
            .push();
        return t.finish();
    }

    for i in 0..n {
        let mut min_idx = i;

        t.frame(
            FrameEvent::PassStart { index: i },
            format!("Pass {}: find the minimum in indices {}..{}.", i + 1, i, n - 1),
        )
        .highlight([i])
        .active([i])
        .sorted(0..i)
        .push();

        for j in i + 1..n {
            t.count_comparison();
            let (current, candidate) = (t.at(min_idx), t.at(j));
            t.frame(
                FrameEvent::Compare {
                    compare: CompareKind::Minimum,
                    left: min_idx,
                    right: j,
                    left_value: current,
                    right_value: candidate,
                },
                format!(
                    "Compare current min a[{}]={} with a[{}]={}.",
                    min_idx,
                    fmt_value(current),
                    j,
                    fmt_value(candidate)
                ),
            )
            .comparing([min_idx, j])
            .highlight([min_idx, j])
            .sorted(0..i)
            .push();

            if candidate < current {
                min_idx = j;
                t.frame(
                    FrameEvent::NewMinimum {
                        index: j,
                        value: candidate,
                    },
                    format!(
                        "New minimum found at index {} (value {}).",
                        j,
                        fmt_value(candidate)
                    ),
                )
                .highlight([j])
                .sorted(0..i)
                .push();
            }
        }

        if min_idx != i {
            t.swap(i, min_idx);
            t.frame(
                FrameEvent::Swap {
                    left: i,
                    right: min_idx,
                },
                format!(
                    "Swap: place minimum into position {} (swap indices {} and {}).",
                    i, i, min_idx
                ),
            )
            .swapped([i, min_idx])
            .highlight([i, min_idx])
            .sorted(0..i)
            .push();
        } else {
            t.frame(
                FrameEvent::MinimumInPlace { index: i },
                format!("Index {} already contains the minimum. No swap needed.", i),
            )
            .highlight([i])
            .sorted(0..i)
            .push();
        }

        t.count_pass();
        t.frame(
            FrameEvent::PassComplete {
                pass: t.passes(),
                fixed: Some(i),
            },
            format!("Pass complete. Prefix (0..{}) is sorted.", i),
        )
        .sorted(0..=i)
        .push();
    }

    t.frame(FrameEvent::Sorted, "Array sorted successfully. ✅")
        .sorted(0..n)
        .push();

    t.finish()
}
