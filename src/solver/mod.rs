//! Free-text problem recognition
//!
//! Turns a pasted problem statement such as
//! `"Binary search in [3,8,12,19,25] target 19"` into an algorithm choice,
//! an input array, an optional target and a short final answer. Anything
//! that cannot be understood comes back as a [`SolveFailure`] carrying hints,
//! never as a panic.

use crate::algorithms::AlgorithmId;
use crate::registry;
use crate::trace::{fmt_value, Value};
use regex_lite::Regex;
use std::sync::LazyLock;
use thiserror::Error;

static BRACKETED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]").expect("bracket pattern is valid"));
static NOT_NUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^-0-9.]+").expect("separator pattern is valid"));
static TARGET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)target\s*[:=]?\s*(-?\d+(\.\d+)?)").expect("target pattern is valid")
});
static FIND: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)find\s+(-?\d+(\.\d+)?)").expect("find pattern is valid"));
static SEARCH_INTENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)target\s*[:=]?|find\s+\d+").expect("intent pattern is valid")
});

/// A recognised problem, ready to visualize
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    pub algorithm: AlgorithmId,
    pub name: &'static str,
    /// Array to feed the generator
    pub input: Vec<Value>,
    pub target: Option<Value>,
    /// Student-facing final answer
    pub answer: String,
}

/// Why a problem statement could not be solved
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{error}")]
pub struct SolveFailure {
    pub error: String,
    pub hints: Vec<String>,
}

impl SolveFailure {
    fn new(error: impl Into<String>, hints: &[&str]) -> Self {
        SolveFailure {
            error: error.into(),
            hints: hints.iter().map(|h| h.to_string()).collect(),
        }
    }
}

/// Numbers inside the first `[...]`, or anywhere in the text if there is none
///
/// At least two numbers are required.
pub fn extract_array(text: &str) -> Option<Vec<Value>> {
    let raw = BRACKETED
        .captures(text)
        .and_then(|c| c.get(1))
        .map_or(text, |m| m.as_str());

    let nums: Vec<Value> = NOT_NUMERIC
        .split(raw)
        .filter(|s| !s.is_empty())
        .filter_map(|s| s.parse::<Value>().ok())
        .filter(|v| v.is_finite())
        .collect();

    (nums.len() >= 2).then_some(nums)
}

/// `target=25`, `target 25`, `target: 25` or `find 25`
pub fn extract_target(text: &str) -> Option<Value> {
    TARGET
        .captures(text)
        .or_else(|| FIND.captures(text))
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse::<Value>().ok())
        .filter(|v| v.is_finite())
}

/// Pick an algorithm from keywords, falling back to insertion sort
pub fn guess_algorithm(text: &str) -> AlgorithmId {
    let t = text.to_lowercase();

    if t.contains("bubble") {
        AlgorithmId::BubbleSort
    } else if t.contains("insertion") {
        AlgorithmId::InsertionSort
    } else if t.contains("selection") {
        AlgorithmId::SelectionSort
    } else if t.contains("move zero") || t.contains("zeros") {
        AlgorithmId::MoveZeros
    } else if t.contains("binary search") || t.contains("binsearch") || t.contains("search") {
        AlgorithmId::BinarySearch
    } else if SEARCH_INTENT.is_match(text) {
        AlgorithmId::BinarySearch
    } else {
        AlgorithmId::InsertionSort
    }
}

fn join(values: &[Value]) -> String {
    values
        .iter()
        .map(|&v| fmt_value(v))
        .collect::<Vec<_>>()
        .join(", ")
}

fn sorted_copy(values: &[Value]) -> Vec<Value> {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    sorted
}

pub fn solve(problem: &str) -> Result<Solution, SolveFailure> {
    let text = problem.trim();
    if text.is_empty() {
        return Err(SolveFailure::new(
            "Paste a problem statement first.",
            &[
                "Examples:",
                "• Sort: [5,2,9,1]",
                "• Bubble sort [55, 12, 78, 45]",
                "• Binary search in [3,8,12,19,25] target 19",
                "• Move zeros [0,5,0,3,12]",
            ],
        ));
    }

    let algorithm = guess_algorithm(text);
    let name = registry::info_for(algorithm).name;

    let input = extract_array(text).ok_or_else(|| {
        SolveFailure::new(
            "Could not find an input array.",
            &["Use format like: [5, 2, 9, 1] or: Sort this array: [5 2 9 1]"],
        )
    })?;
    let target = extract_target(text);

    match algorithm {
        AlgorithmId::BinarySearch => {
            let target = target.ok_or_else(|| {
                SolveFailure::new(
                    "Binary search needs a target value.",
                    &["Example: binary search in [3,8,12,19,25] target 19"],
                )
            })?;
            let sorted = sorted_copy(&input);
            let found = match sorted.iter().position(|&v| v == target) {
                Some(idx) => format!(
                    "Found {} at index {} (0-based) in sorted array.",
                    fmt_value(target),
                    idx
                ),
                None => format!("Not found: {}.", fmt_value(target)),
            };
            let mut answer = String::new();
            if sorted != input {
                answer.push_str("Input was not sorted; searching the sorted copy.\n");
            }
            answer.push_str(&format!("Sorted array: [{}]\n{}", join(&sorted), found));

            Ok(Solution {
                algorithm,
                name,
                input: sorted,
                target: Some(target),
                answer,
            })
        }

        AlgorithmId::MoveZeros => {
            let (mut out, zeros): (Vec<Value>, Vec<Value>) =
                input.iter().partition(|&&v| v != 0.0);
            out.extend(zeros);
            Ok(Solution {
                algorithm,
                name,
                answer: format!("Result: [{}]", join(&out)),
                input,
                target: None,
            })
        }

        AlgorithmId::BubbleSort | AlgorithmId::InsertionSort | AlgorithmId::SelectionSort => {
            Ok(Solution {
                algorithm,
                name,
                answer: format!("Sorted array: [{}]", join(&sorted_copy(&input))),
                input,
                target: None,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_array_brackets_and_bare() {
        assert_eq!(extract_array("sort [5, 2 9,1]"), Some(vec![5.0, 2.0, 9.0, 1.0]));
        assert_eq!(extract_array("3 -4 5"), Some(vec![3.0, -4.0, 5.0]));
        assert_eq!(extract_array("just [7]"), None);
    }

    #[test]
    fn test_extract_target_forms() {
        assert_eq!(extract_target("target=25"), Some(25.0));
        assert_eq!(extract_target("Target: -3.5"), Some(-3.5));
        assert_eq!(extract_target("please find 12"), Some(12.0));
        assert_eq!(extract_target("sort this"), None);
    }

    #[test]
    fn test_guess_algorithm() {
        assert_eq!(guess_algorithm("Bubble sort [1,2]"), AlgorithmId::BubbleSort);
        assert_eq!(guess_algorithm("move zeros [0,1]"), AlgorithmId::MoveZeros);
        assert_eq!(guess_algorithm("search [1,2] for 2"), AlgorithmId::BinarySearch);
        assert_eq!(guess_algorithm("[1,2,3] target 2"), AlgorithmId::BinarySearch);
        assert_eq!(guess_algorithm("[3,1,2]"), AlgorithmId::InsertionSort);
    }
}
