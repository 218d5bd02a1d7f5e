//! Move-zeros trace generator (two pointers)
//!
//! `read` walks the array once; `write` marks the next slot for a non-zero
//! value. After processing `[0, read]`, `a[0, write)` holds the non-zeros
//! seen so far in input order and `a[write, read]` holds only zeros.

use crate::trace::{fmt_value, FrameEvent, Trace, TraceBuilder, Value};

pub fn generate(input: &[Value]) -> Trace {
    let mut t = TraceBuilder::new(input);
    let n = t.len();
    let mut write = 0;

    t.frame(
        FrameEvent::Start,
        "Start: Move Zeros to the end (stable relative order of non-zeros).",
    )
    .push();

    for read in 0..n {
        let value = t.at(read);
        t.count_comparison();
        t.frame(
            FrameEvent::ZeroCheck { read, write, value },
            format!(
                "Check a[{}]={}. If it's non-zero, swap into position nz={}.",
                read,
                fmt_value(value),
                write
            ),
        )
        .highlight([read, write])
        .comparing([read])
        .active([read, write])
        .push();

        if value == 0.0 {
            continue;
        }

        if read != write {
            t.swap(write, read);
            t.frame(
                FrameEvent::Swap {
                    left: write,
                    right: read,
                },
                format!(
                    "Swap non-zero into front: swap a[{}] and a[{}].",
                    write, read
                ),
            )
            .highlight([read, write])
            .swapped([write, read])
            .push();
        } else {
            t.frame(
                FrameEvent::InPlace { index: read },
                "Already in correct place (i==nz).",
            )
            .highlight([read])
            .push();
        }

        write += 1;
        t.frame(
            FrameEvent::Advance { write },
            format!("Advance nz to {}.", write),
        )
        .highlight([write])
        .active([read, write])
        .push();
    }

    t.frame(FrameEvent::Settled, "Done: all zeros moved to the end. ✅")
        .sorted(0..n)
        .push();

    t.finish()
}
