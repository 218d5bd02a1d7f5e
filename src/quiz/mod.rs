//! Quizzes derived from comparison frames
//!
//! A quiz asks the learner to predict what the algorithm does next, using
//! only the frame's [`FrameEvent`]. [`QuizSchedule`] decides how often to
//! interrupt playback and remembers which frames already asked.

use crate::registry::Question;
use crate::trace::{fmt_value, CompareKind, Frame, FrameEvent};
use rustc_hash::FxHashSet;
use tracing::debug;

/// Ask on every n-th comparison by default
pub const DEFAULT_QUIZ_EVERY: u64 = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quiz {
    /// Frame index the quiz belongs to
    pub step_index: usize,
    pub prompt: String,
    pub options: Vec<String>,
    pub correct: usize,
    pub explanation: String,
    /// Per-option rationale; when present it replaces `explanation` for the picked option
    pub rationales: Vec<String>,
    pub answered: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizOutcome {
    pub correct: bool,
    pub explanation: String,
}

impl Quiz {
    /// Turn a Learn-mode registry question into a quiz
    pub fn from_question(question: &Question, step_index: usize) -> Option<Quiz> {
        let correct = question.correct_option()?;
        let mut prompt = question.prompt.to_string();
        if let Some(tip) = question.tip {
            prompt.push_str(&format!(" (Tip: {})", tip));
        }
        Some(Quiz {
            step_index,
            prompt,
            options: question.options.iter().map(|o| o.text.to_string()).collect(),
            correct,
            explanation: question.options[correct].why.to_string(),
            rationales: question.options.iter().map(|o| o.why.to_string()).collect(),
            answered: None,
        })
    }

    /// Record an answer; `None` if the option does not exist or the quiz was already answered
    pub fn answer(&mut self, option: usize) -> Option<QuizOutcome> {
        if self.answered.is_some() || option >= self.options.len() {
            return None;
        }
        self.answered = Some(option);
        let explanation = self
            .rationales
            .get(option)
            .unwrap_or(&self.explanation)
            .clone();
        Some(QuizOutcome {
            correct: option == self.correct,
            explanation,
        })
    }

    pub fn is_answered(&self) -> bool {
        self.answered.is_some()
    }
}

fn relation(in_order: bool) -> &'static str {
    if in_order {
        "≤"
    } else {
        ">"
    }
}

/// Build the quiz for a comparison frame, if its event supports one
pub fn derive(frame: &Frame, step_index: usize) -> Option<Quiz> {
    let quiz = match frame.event {
        FrameEvent::Compare {
            compare: CompareKind::Adjacent,
            left,
            right,
            left_value,
            right_value,
        } => {
            let ok = left_value <= right_value;
            Quiz {
                step_index,
                prompt: "Will the algorithm do a swap here?".to_string(),
                options: vec![
                    "In order ✅ (no swap)".to_string(),
                    "Out of order ❌ (swap)".to_string(),
                ],
                correct: if ok { 0 } else { 1 },
                explanation: format!(
                    "We compare a[{}] = {} and a[{}] = {}. Since {} {} {}, it is {}.",
                    left,
                    fmt_value(left_value),
                    right,
                    fmt_value(right_value),
                    fmt_value(left_value),
                    relation(ok),
                    fmt_value(right_value),
                    if ok {
                        "already in order (no swap needed)"
                    } else {
                        "out of order (swap needed)"
                    }
                ),
                rationales: Vec::new(),
                answered: None,
            }
        }

        FrameEvent::Compare {
            compare: CompareKind::Minimum,
            left,
            right,
            left_value,
            right_value,
        } => {
            let smaller = right_value < left_value;
            Quiz {
                step_index,
                prompt: format!("Does a[{}] become the new minimum?", right),
                options: vec![
                    "No (keep the current minimum)".to_string(),
                    "Yes (new minimum)".to_string(),
                ],
                correct: if smaller { 1 } else { 0 },
                explanation: format!(
                    "The current minimum is a[{}] = {}. a[{}] = {} is {}, so {}.",
                    left,
                    fmt_value(left_value),
                    right,
                    fmt_value(right_value),
                    if smaller { "smaller" } else { "not smaller" },
                    if smaller {
                        "the minimum moves to it"
                    } else {
                        "the minimum stays where it is"
                    }
                ),
                rationales: Vec::new(),
                answered: None,
            }
        }

        FrameEvent::KeyCompare { key, index, value } => {
            let ok = value <= key;
            Quiz {
                step_index,
                prompt: "Will insertion sort shift this element to the right?".to_string(),
                options: vec![
                    "No ✅ (stop shifting)".to_string(),
                    "Yes ❌ (shift right)".to_string(),
                ],
                correct: if ok { 0 } else { 1 },
                explanation: format!(
                    "Insertion compares key = {} with a[{}] = {}. Since {} {} {}, we {}.",
                    fmt_value(key),
                    index,
                    fmt_value(value),
                    fmt_value(value),
                    relation(ok),
                    fmt_value(key),
                    if ok {
                        "stop shifting (correct position found)"
                    } else {
                        "shift a[j] right to make space for the key"
                    }
                ),
                rationales: Vec::new(),
                answered: None,
            }
        }

        FrameEvent::Probe {
            mid,
            value,
            target,
            ..
        } => {
            let (correct, outcome) = if value == target {
                (0, "the target is found")
            } else if value > target {
                (1, "the right half is discarded and the search continues on the left")
            } else {
                (2, "the left half is discarded and the search continues on the right")
            };
            Quiz {
                step_index,
                prompt: "What happens after this probe?".to_string(),
                options: vec![
                    "Found the target".to_string(),
                    "Search the left half".to_string(),
                    "Search the right half".to_string(),
                ],
                correct,
                explanation: format!(
                    "a[mid] = a[{}] = {} and target = {}, so {}.",
                    mid,
                    fmt_value(value),
                    fmt_value(target),
                    outcome
                ),
                rationales: Vec::new(),
                answered: None,
            }
        }

        FrameEvent::ZeroCheck { read, write, value } => {
            let moves = value != 0.0 && read != write;
            let reason = if value == 0.0 {
                "it is zero, so it stays behind nz".to_string()
            } else if read == write {
                format!("it is non-zero but already at nz = {}", write)
            } else {
                format!("it is non-zero and nz = {} lags behind, so it swaps forward", write)
            };
            Quiz {
                step_index,
                prompt: format!("Will a[{}] be swapped toward the front?", read),
                options: vec![
                    "No (stays where it is)".to_string(),
                    "Yes (swap into nz)".to_string(),
                ],
                correct: if moves { 1 } else { 0 },
                explanation: format!("a[{}] = {}: {}.", read, fmt_value(value), reason),
                rationales: Vec::new(),
                answered: None,
            }
        }

        _ => return None,
    };
    Some(quiz)
}

/// Cadence and memory for quiz interruptions
#[derive(Debug, Clone)]
pub struct QuizSchedule {
    every: u64,
    asked: FxHashSet<usize>,
}

impl QuizSchedule {
    pub fn new(every: u64) -> Self {
        QuizSchedule {
            every: every.max(1),
            asked: FxHashSet::default(),
        }
    }

    /// True for a not-yet-asked comparison frame whose count hits the cadence
    pub fn should_ask(&self, frame: &Frame, step_index: usize) -> bool {
        let comparisons = frame.counters.comparisons;
        frame.event.is_comparison()
            && comparisons > 0
            && comparisons % self.every == 0
            && !self.asked.contains(&step_index)
    }

    /// Derive and remember a quiz for this frame if one is due
    pub fn offer(&mut self, frame: &Frame, step_index: usize) -> Option<Quiz> {
        if !self.should_ask(frame, step_index) {
            return None;
        }
        let quiz = derive(frame, step_index)?;
        self.asked.insert(step_index);
        debug!(step_index, comparisons = frame.counters.comparisons, "quiz offered");
        Some(quiz)
    }

    /// Forget asked frames, e.g. after loading a new trace
    pub fn reset(&mut self) {
        self.asked.clear();
    }
}

impl Default for QuizSchedule {
    fn default() -> Self {
        Self::new(DEFAULT_QUIZ_EVERY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::{binary_search, bubble, insertion};

    #[test]
    fn test_bubble_compare_quiz() {
        let trace = bubble::generate(&[5.0, 3.0]);
        let quiz = derive(&trace[1], 1).unwrap();

        assert_eq!(quiz.correct, 1);
        assert!(quiz.explanation.contains("5 > 3"));
    }

    #[test]
    fn test_insertion_key_quiz() {
        let trace = insertion::generate(&[1.0, 2.0]);
        let (index, frame) = trace
            .iter()
            .enumerate()
            .find(|(_, f)| matches!(f.event, FrameEvent::KeyCompare { .. }))
            .unwrap();
        let quiz = derive(frame, index).unwrap();

        assert_eq!(quiz.correct, 0);
        assert!(quiz.explanation.contains("stop shifting"));
    }

    #[test]
    fn test_probe_quiz() {
        let trace = binary_search::generate(&[3.0, 8.0, 12.0, 19.0, 25.0], 19.0);
        let probes: Vec<usize> = trace
            .iter()
            .enumerate()
            .filter_map(|(i, f)| derive(f, i).map(|q| q.correct))
            .collect();

        // 12 < 19 then 19 == 19
        assert_eq!(probes, vec![2, 0]);
    }

    #[test]
    fn test_non_comparison_has_no_quiz() {
        let trace = bubble::generate(&[2.0, 1.0]);
        assert!(derive(&trace[0], 0).is_none());
    }

    #[test]
    fn test_answer_once() {
        let trace = bubble::generate(&[1.0, 2.0]);
        let mut quiz = derive(&trace[1], 1).unwrap();

        assert_eq!(quiz.answer(5), None);
        let outcome = quiz.answer(0).unwrap();
        assert!(outcome.correct);
        assert_eq!(quiz.answer(1), None);
    }

    #[test]
    fn test_from_question_uses_option_rationale() {
        let question = &crate::registry::questions_for(crate::algorithms::AlgorithmId::BubbleSort)[0];
        let mut quiz = Quiz::from_question(question, 0).unwrap();

        assert_eq!(quiz.correct, 1);
        assert!(quiz.prompt.contains("Tip:"));
        let outcome = quiz.answer(0).unwrap();
        assert!(!outcome.correct);
        assert_eq!(outcome.explanation, question.options[0].why);
    }

    #[test]
    fn test_schedule_cadence_and_memory() {
        let trace = bubble::generate(&[4.0, 3.0, 2.0, 1.0]);
        let mut schedule = QuizSchedule::new(2);

        let offered: Vec<usize> = trace
            .iter()
            .enumerate()
            .filter_map(|(i, f)| schedule.offer(f, i).map(|q| q.step_index))
            .collect();
        assert!(!offered.is_empty());
        for &i in &offered {
            assert_eq!(trace[i].counters.comparisons % 2, 0);
            assert!(schedule.offer(&trace[i], i).is_none());
        }

        schedule.reset();
        let i = offered[0];
        assert!(schedule.offer(&trace[i], i).is_some());
    }
}
