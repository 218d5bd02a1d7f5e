//! Static algorithm metadata and Learn-mode questions
//!
//! Nothing here is computed at runtime. [`info_for`] and [`questions_for`]
//! are exhaustive matches over [`AlgorithmId`], so every generator has
//! exactly one metadata entry by construction. The string-keyed
//! [`lookup`] / [`lookup_questions`] front ends exist for callers holding
//! a raw id.

mod catalog;

use crate::algorithms::AlgorithmId;
use catalog::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Sorting,
    Searching,
    Other,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Sorting => "Sorting",
            Category::Searching => "Searching",
            Category::Other => "Other",
        }
    }
}

/// Big-O bounds as display strings
#[derive(Debug, Clone, Copy)]
pub struct Complexity {
    pub best: &'static str,
    pub average: &'static str,
    pub worst: &'static str,
    pub space: &'static str,
}

#[derive(Debug)]
pub struct AlgorithmInfo {
    pub id: AlgorithmId,
    pub name: &'static str,
    pub category: Category,
    pub short: &'static str,
    /// Loop invariant shown while the trace plays
    pub invariant: &'static str,
    pub when_to_use: &'static [&'static str],
    pub complexity: Complexity,
    /// `None` where stability does not apply (searching)
    pub stable: Option<bool>,
    pub in_place: Option<bool>,
    pub notes: &'static [&'static str],
}

#[derive(Debug)]
pub struct QuestionOption {
    pub id: &'static str,
    pub text: &'static str,
    pub correct: bool,
    pub why: &'static str,
}

/// Multiple-choice question; at most one option is correct
#[derive(Debug)]
pub struct Question {
    pub id: &'static str,
    pub prompt: &'static str,
    pub options: &'static [QuestionOption],
    pub tip: Option<&'static str>,
}

impl Question {
    /// Index of the correct option
    pub fn correct_option(&self) -> Option<usize> {
        self.options.iter().position(|o| o.correct)
    }

    /// Whether picking `option` is right, with the option's rationale
    pub fn answer(&self, option: usize) -> Option<(bool, &'static str)> {
        self.options.get(option).map(|o| (o.correct, o.why))
    }
}

pub fn info_for(id: AlgorithmId) -> &'static AlgorithmInfo {
    match id {
        AlgorithmId::BubbleSort => &BUBBLE_SORT,
        AlgorithmId::InsertionSort => &INSERTION_SORT,
        AlgorithmId::SelectionSort => &SELECTION_SORT,
        AlgorithmId::BinarySearch => &BINARY_SEARCH,
        AlgorithmId::MoveZeros => &MOVE_ZEROS,
    }
}

pub fn questions_for(id: AlgorithmId) -> &'static [Question] {
    match id {
        AlgorithmId::BubbleSort => BUBBLE_SORT_QUESTIONS,
        AlgorithmId::InsertionSort => INSERTION_SORT_QUESTIONS,
        AlgorithmId::SelectionSort => SELECTION_SORT_QUESTIONS,
        AlgorithmId::BinarySearch => BINARY_SEARCH_QUESTIONS,
        AlgorithmId::MoveZeros => MOVE_ZEROS_QUESTIONS,
    }
}

/// Metadata by string id; `None` for ids with no generator
pub fn lookup(id: &str) -> Option<&'static AlgorithmInfo> {
    id.parse::<AlgorithmId>().ok().map(info_for)
}

/// Questions by string id; empty for ids with no generator
pub fn lookup_questions(id: &str) -> &'static [Question] {
    id.parse::<AlgorithmId>()
        .map(questions_for)
        .unwrap_or_default()
}

/// All metadata in menu order
pub fn all() -> impl Iterator<Item = &'static AlgorithmInfo> {
    AlgorithmId::ALL.into_iter().map(info_for)
}

/// Best and worst comparison counts for an input of length `n`
pub fn estimate_comparisons(id: AlgorithmId, n: usize) -> (usize, usize) {
    let quadratic = n * n.saturating_sub(1) / 2;
    match id {
        AlgorithmId::BubbleSort | AlgorithmId::InsertionSort => (n.saturating_sub(1), quadratic),
        AlgorithmId::SelectionSort => (quadratic, quadratic),
        AlgorithmId::BinarySearch => {
            if n == 0 {
                (0, 0)
            } else {
                (1, n.ilog2() as usize + 1)
            }
        }
        AlgorithmId::MoveZeros => (n, n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_generator_has_one_entry() {
        for id in AlgorithmId::ALL {
            assert_eq!(info_for(id).id, id);
            assert_eq!(lookup(id.as_str()).map(|i| i.id), Some(id));
            assert!(!questions_for(id).is_empty(), "{} has no questions", id);
        }
        assert_eq!(all().count(), AlgorithmId::ALL.len());
    }

    #[test]
    fn test_unknown_lookup() {
        assert!(lookup("heap-sort").is_none());
        assert!(lookup_questions("heap-sort").is_empty());
    }

    #[test]
    fn test_at_most_one_correct_option() {
        for id in AlgorithmId::ALL {
            for q in questions_for(id) {
                let correct = q.options.iter().filter(|o| o.correct).count();
                assert!(correct <= 1, "question {} has {} correct options", q.id, correct);
                assert!(q.correct_option().is_some());
            }
        }
    }

    #[test]
    fn test_estimates() {
        assert_eq!(estimate_comparisons(AlgorithmId::SelectionSort, 3), (3, 3));
        assert_eq!(estimate_comparisons(AlgorithmId::InsertionSort, 5), (4, 10));
        assert_eq!(estimate_comparisons(AlgorithmId::BinarySearch, 5), (1, 3));
        assert_eq!(estimate_comparisons(AlgorithmId::BinarySearch, 0), (0, 0));
    }
}
