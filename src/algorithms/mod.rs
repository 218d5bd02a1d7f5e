//! Trace generators
//!
//! One pure function per algorithm. Each runs on a private copy of its
//! input and returns the complete [`Trace`] eagerly:
//! - [`bubble`]: adjacent compare-and-swap, early exit on a clean pass
//! - [`insertion`]: shift larger prefix values right, place the key
//! - [`selection`]: select the minimum of the unsorted region, one swap per pass
//! - [`binary_search`]: halve a sorted range until the target is found or the range is empty
//! - [`move_zeros`]: stable two-pointer partition of non-zeros to the front
//!
//! [`generate`] dispatches on an [`AlgorithmId`].

pub mod binary_search;
pub mod bubble;
pub mod insertion;
pub mod move_zeros;
pub mod selection;

use crate::error::RegistryError;
use crate::trace::{Trace, Value};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Every algorithm with a generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlgorithmId {
    BubbleSort,
    InsertionSort,
    SelectionSort,
    BinarySearch,
    MoveZeros,
}

impl AlgorithmId {
    pub const ALL: [AlgorithmId; 5] = [
        AlgorithmId::BubbleSort,
        AlgorithmId::InsertionSort,
        AlgorithmId::SelectionSort,
        AlgorithmId::BinarySearch,
        AlgorithmId::MoveZeros,
    ];

    /// Stable string id
    pub fn as_str(self) -> &'static str {
        match self {
            AlgorithmId::BubbleSort => "bubble-sort",
            AlgorithmId::InsertionSort => "insertion-sort",
            AlgorithmId::SelectionSort => "selection-sort",
            AlgorithmId::BinarySearch => "binary-search",
            AlgorithmId::MoveZeros => "move-zeros",
        }
    }

    /// Bubble, insertion and selection sort
    pub fn is_sort(self) -> bool {
        matches!(
            self,
            AlgorithmId::BubbleSort | AlgorithmId::InsertionSort | AlgorithmId::SelectionSort
        )
    }

    pub fn needs_target(self) -> bool {
        self == AlgorithmId::BinarySearch
    }
}

impl fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlgorithmId {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bubble-sort" | "bubble" => Ok(AlgorithmId::BubbleSort),
            "insertion-sort" | "insertion" => Ok(AlgorithmId::InsertionSort),
            "selection-sort" | "selection" => Ok(AlgorithmId::SelectionSort),
            "binary-search" | "binary" => Ok(AlgorithmId::BinarySearch),
            "move-zeros" | "zeros" => Ok(AlgorithmId::MoveZeros),
            _ => Err(RegistryError::UnknownAlgorithm {
                id: s.to_string(),
                expected: AlgorithmId::ALL
                    .iter()
                    .map(|id| id.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            }),
        }
    }
}

/// Run the generator for `algorithm`
///
/// `target` is required for binary search and ignored otherwise.
pub fn generate(
    algorithm: AlgorithmId,
    input: &[Value],
    target: Option<Value>,
) -> Result<Trace, RegistryError> {
    let trace = match algorithm {
        AlgorithmId::BubbleSort => bubble::generate(input),
        AlgorithmId::InsertionSort => insertion::generate(input),
        AlgorithmId::SelectionSort => selection::generate(input),
        AlgorithmId::MoveZeros => move_zeros::generate(input),
        AlgorithmId::BinarySearch => {
            let target = target.ok_or(RegistryError::MissingTarget { algorithm })?;
            binary_search::generate(input, target)
        }
    };

    debug!(
        algorithm = %algorithm,
        input_len = input.len(),
        frames = trace.len(),
        comparisons = trace.totals().comparisons,
        "generated trace"
    );

    Ok(trace)
}

/// Look up a generator by string id and run it
pub fn generate_by_id(
    id: &str,
    input: &[Value],
    target: Option<Value>,
) -> Result<Trace, RegistryError> {
    generate(id.parse()?, input, target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ids_and_aliases() {
        for id in AlgorithmId::ALL {
            assert_eq!(id.as_str().parse::<AlgorithmId>(), Ok(id));
        }
        assert_eq!("Bubble".parse::<AlgorithmId>(), Ok(AlgorithmId::BubbleSort));
        assert_eq!("zeros".parse::<AlgorithmId>(), Ok(AlgorithmId::MoveZeros));
    }

    #[test]
    fn test_unknown_id_fails_loudly() {
        let err = generate_by_id("quick-sort", &[1.0], None).unwrap_err();
        assert!(matches!(err, RegistryError::UnknownAlgorithm { ref id, .. } if id == "quick-sort"));
        assert!(err.to_string().contains("bubble-sort"));
    }

    #[test]
    fn test_search_without_target() {
        let err = generate(AlgorithmId::BinarySearch, &[1.0, 2.0], None).unwrap_err();
        assert_eq!(
            err,
            RegistryError::MissingTarget {
                algorithm: AlgorithmId::BinarySearch
            }
        );
    }
}
