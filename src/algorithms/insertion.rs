//! Insertion sort trace generator
//!
//! The prefix `[0, i)` is kept sorted. Each step lifts `a[i]` as the key,
//! shifts larger prefix values one slot right, and drops the key into the
//! gap.

use crate::trace::{fmt_value, FrameEvent, Trace, TraceBuilder, Value};

pub fn generate(input: &[Value]) -> Trace {
    let mut t = TraceBuilder::new(input);
    let n = t.len();

    t.frame(
        FrameEvent::Start,
        "Start Insertion Sort: the left part is kept sorted; each step inserts the next element into the correct position.",
    )
    .sorted(0..n.min(1))
    .push();

    if n < 2 {
        t.frame(FrameEvent::Sorted, "Array is already sorted. ✅")
            .sorted(0..n)
            .push();
        return t.finish();
    }

    for i in 1..n {
        let key = t.at(i);

        t.frame(
            FrameEvent::TakeKey { index: i, key },
            format!(
                "Take key=a[{}]={}. Insert it into the sorted region (0..{}).",
                i,
                fmt_value(key),
                i - 1
            ),
        )
        .highlight([i])
        .active([i])
        .sorted(0..i)
        .push();

        // Slot the key will land in; everything in (slot, i] has been shifted
        let mut slot = i;
        while slot > 0 {
            let j = slot - 1;
            t.count_comparison();
            let value = t.at(j);
            t.frame(
                FrameEvent::KeyCompare {
                    key,
                    index: j,
                    value,
                },
                format!(
                    "Compare key={} with a[{}]={}. If a[j] > key, shift right.",
                    fmt_value(key),
                    j,
                    fmt_value(value)
                ),
            )
            .comparing([j, j + 1])
            .highlight([j, j + 1])
            .sorted(0..i)
            .push();

            if value <= key {
                break;
            }

            t.write(j + 1, value);
            t.frame(
                FrameEvent::Shift { from: j, to: j + 1 },
                format!("Shift: move a[{}] to a[{}] to make space.", j, j + 1),
            )
            .swapped([j, j + 1])
            .highlight([j, j + 1])
            .sorted(0..i)
            .push();

            slot = j;
        }

        t.write(slot, key);
        t.count_pass();

        t.frame(
            FrameEvent::Place { index: slot, key },
            format!(
                "Place key={} at index {}. Now (0..{}) is sorted.",
                fmt_value(key),
                slot,
                i
            ),
        )
        .highlight([slot])
        .sorted(0..=i)
        .push();
    }

    t.frame(FrameEvent::Sorted, "Array sorted successfully. ✅")
        .sorted(0..n)
        .push();

    t.finish()
}
