// Property tests over randomly generated inputs

use proptest::prelude::*;
use sortscope::algorithms::{self, binary_search, bubble, insertion, move_zeros, AlgorithmId};
use sortscope::trace::{Counters, Frame, FrameEvent, Trace, Value};

const SORTS: [AlgorithmId; 3] = [
    AlgorithmId::BubbleSort,
    AlgorithmId::InsertionSort,
    AlgorithmId::SelectionSort,
];

/// Small integers so duplicates and zeros show up often
fn small_array() -> impl Strategy<Value = Vec<Value>> {
    prop::collection::vec(-6i32..7, 0..10)
        .prop_map(|v| v.into_iter().map(Value::from).collect())
}

fn sorted_copy(values: &[Value]) -> Vec<Value> {
    let mut copy = values.to_vec();
    copy.sort_by(|a, b| a.total_cmp(b));
    copy
}

fn is_ascending(values: &[Value]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}

/// Array contents with insertion sort's held key put back into its hole
fn with_held_key(trace: &Trace) -> Vec<Vec<Value>> {
    let mut hole: Option<(usize, Value)> = None;
    trace
        .iter()
        .map(|frame: &Frame| {
            match frame.event {
                FrameEvent::TakeKey { index, key } => hole = Some((index, key)),
                FrameEvent::Shift { from, .. } => {
                    if let Some((_, key)) = hole {
                        hole = Some((from, key));
                    }
                }
                FrameEvent::Place { .. } => hole = None,
                _ => {}
            }
            let mut array = frame.array.clone();
            if let Some((index, key)) = hole {
                array[index] = key;
            }
            array
        })
        .collect()
}

/// Counter change a frame's event accounts for
fn expected_delta(event: &FrameEvent) -> Counters {
    let (comparisons, swaps, passes, writes) = match event {
        FrameEvent::Compare { .. }
        | FrameEvent::KeyCompare { .. }
        | FrameEvent::Probe { .. }
        | FrameEvent::ZeroCheck { .. } => (1, 0, 0, 0),
        FrameEvent::Swap { .. } => (0, 1, 0, 2),
        FrameEvent::Shift { .. } => (0, 0, 0, 1),
        // Placing the key closes an insertion pass
        FrameEvent::Place { .. } => (0, 0, 1, 1),
        FrameEvent::PassComplete { .. } | FrameEvent::Narrow { .. } => (0, 0, 1, 0),
        _ => (0, 0, 0, 0),
    };
    Counters {
        comparisons,
        swaps,
        passes,
        writes,
    }
}

fn delta(later: &Counters, earlier: &Counters) -> Counters {
    Counters {
        comparisons: later.comparisons - earlier.comparisons,
        swaps: later.swaps - earlier.swaps,
        passes: later.passes - earlier.passes,
        writes: later.writes - earlier.writes,
    }
}

proptest! {
    #[test]
    fn prop_sorts_permute_and_converge(input in small_array()) {
        let expected = sorted_copy(&input);
        for id in SORTS {
            let trace = algorithms::generate(id, &input, None).unwrap();
            for array in with_held_key(&trace) {
                prop_assert_eq!(sorted_copy(&array), expected.clone());
            }
            let last = trace.last().unwrap();
            prop_assert!(is_ascending(&last.array));
            prop_assert!(last.is_terminal());
            prop_assert_eq!(last.sorted_indices.len(), input.len());
        }
    }

    #[test]
    fn prop_counters_never_decrease(input in small_array(), target in -6i32..7) {
        for id in AlgorithmId::ALL {
            let trace = algorithms::generate(id, &input, Some(Value::from(target))).unwrap();
            let first = trace.first().unwrap();
            prop_assert_eq!(first.event.clone(), FrameEvent::Start);
            prop_assert_eq!(first.counters, Counters::default());
            for pair in trace.frames().windows(2) {
                prop_assert!(pair[1].counters.dominates(&pair[0].counters), "{}", id);
            }
        }
    }

    #[test]
    fn prop_counters_match_frame_events(input in small_array(), target in -6i32..7) {
        for id in AlgorithmId::ALL {
            let trace = algorithms::generate(id, &input, Some(Value::from(target))).unwrap();
            for pair in trace.frames().windows(2) {
                prop_assert!(pair[1].counters.dominates(&pair[0].counters), "{}", id);
                prop_assert_eq!(
                    delta(&pair[1].counters, &pair[0].counters),
                    expected_delta(&pair[1].event),
                    "{} at {:?}",
                    id,
                    pair[1].event
                );
            }
        }
    }

    #[test]
    fn prop_indices_in_bounds(input in small_array(), target in -6i32..7) {
        for id in AlgorithmId::ALL {
            let trace = algorithms::generate(id, &input, Some(Value::from(target))).unwrap();
            for frame in &trace {
                prop_assert!(frame.indices_in_bounds(), "{} {:?}", id, frame);
                prop_assert_eq!(frame.array.len(), input.len());
            }
            prop_assert!(trace.last().unwrap().is_terminal());
            prop_assert_eq!(trace.iter().filter(|f| f.is_terminal()).count(), 1);
        }
    }

    #[test]
    fn prop_sorted_set_only_grows(input in small_array()) {
        for id in SORTS {
            let trace = algorithms::generate(id, &input, None).unwrap();
            let mut seen: Vec<usize> = Vec::new();
            for frame in &trace {
                if frame.sorted_indices.is_empty() && seen.is_empty() {
                    continue;
                }
                for index in &seen {
                    prop_assert!(frame.is_sorted_at(*index), "{} lost index {}", id, index);
                }
                seen = frame.sorted_indices.clone();
            }
        }
    }

    #[test]
    fn prop_input_is_not_mutated(input in small_array()) {
        let before = input.clone();
        for id in AlgorithmId::ALL {
            let _ = algorithms::generate(id, &input, Some(0.0)).unwrap();
        }
        prop_assert_eq!(input, before);
    }

    #[test]
    fn prop_binary_search_finds_present_values(input in small_array(), pick in any::<prop::sample::Index>()) {
        let sorted = sorted_copy(&input);
        prop_assume!(!sorted.is_empty());
        let target = sorted[pick.index(sorted.len())];

        let trace = binary_search::generate(&sorted, target);
        match trace.last().unwrap().event {
            FrameEvent::Found { index } => prop_assert_eq!(sorted[index], target),
            ref other => prop_assert!(false, "expected found, got {:?}", other),
        }
    }

    #[test]
    fn prop_binary_search_reports_absent_values(input in small_array()) {
        let sorted = sorted_copy(&input);
        // Half-integers never occur in the input
        let trace = binary_search::generate(&sorted, 0.5);
        prop_assert_eq!(trace.last().unwrap().event.clone(), FrameEvent::NotFound);
        prop_assert!(
            !trace.iter().any(|f| matches!(f.event, FrameEvent::Found { .. })),
            "found frame in a miss trace"
        );

        let max_probes = if sorted.is_empty() {
            0
        } else {
            sorted.len().ilog2() as u64 + 1
        };
        prop_assert!(trace.totals().comparisons <= max_probes);
    }

    #[test]
    fn prop_move_zeros_keeps_non_zero_order(input in small_array()) {
        let trace = move_zeros::generate(&input);
        let last = trace.last().unwrap();

        let expected: Vec<Value> = input.iter().copied().filter(|v| *v != 0.0).collect();
        let kept: Vec<Value> = last.array.iter().copied().filter(|v| *v != 0.0).collect();
        prop_assert_eq!(&kept, &expected);
        prop_assert!(last.array[expected.len()..].iter().all(|v| *v == 0.0));
        prop_assert_eq!(last.counters.writes, 2 * last.counters.swaps);
    }

    #[test]
    fn prop_move_zeros_pointer_windows(input in small_array()) {
        let trace = move_zeros::generate(&input);
        let mut read = 0;

        for frame in &trace {
            match frame.event {
                FrameEvent::ZeroCheck { read: r, .. } => read = r,
                FrameEvent::Advance { write } => {
                    // After [0, read]: non-zeros before write, zeros from write to read
                    prop_assert!(frame.array[..write].iter().all(|v| *v != 0.0), "prefix {:?}", frame.array);
                    prop_assert!(frame.array[write..=read].iter().all(|v| *v == 0.0), "window {:?}", frame.array);
                    let seen: Vec<Value> = input[..=read].iter().copied().filter(|v| *v != 0.0).collect();
                    prop_assert_eq!(&frame.array[..write], &seen[..]);
                }
                _ => {}
            }
        }
    }

    #[test]
    fn prop_bubble_and_insertion_are_stable(value in -6i32..7, len in 2usize..6) {
        let input = vec![Value::from(value); len];
        prop_assert_eq!(bubble::generate(&input).totals().swaps, 0);

        let totals = insertion::generate(&input).totals();
        // Only the placements write; nothing shifts
        prop_assert_eq!(totals.writes, len as u64 - 1);
    }
}
