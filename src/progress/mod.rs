//! Learner progress: XP, level, streak and per-algorithm mastery
//!
//! [`Progress`] is a plain value owned by the caller. Answering a question
//! does not mutate it in place; [`Progress::award_answer`] returns the next
//! state.

use crate::algorithms::AlgorithmId;
use rustc_hash::FxHashMap;
use tracing::debug;

/// XP for any correct answer before the streak bonus
pub const BASE_XP: u32 = 10;
/// Cap on the streak bonus
pub const MAX_STREAK_BONUS: u32 = 10;
pub const XP_PER_LEVEL: u32 = 100;
pub const MASTERY_GAIN: u8 = 5;
pub const MASTERY_PENALTY: u8 = 2;
pub const MAX_MASTERY: u8 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Progress {
    pub challenge_mode: bool,
    pub xp: u32,
    pub level: u32,
    pub streak: u32,
    mastery: FxHashMap<AlgorithmId, u8>,
}

/// 0-99 XP is level 1, 100-199 level 2, and so on
pub fn level_from_xp(xp: u32) -> u32 {
    xp / XP_PER_LEVEL + 1
}

impl Progress {
    pub fn new() -> Self {
        Progress {
            challenge_mode: false,
            xp: 0,
            level: 1,
            streak: 0,
            mastery: FxHashMap::default(),
        }
    }

    /// Mastery percentage for one algorithm
    pub fn mastery(&self, id: AlgorithmId) -> u8 {
        self.mastery.get(&id).copied().unwrap_or(0)
    }

    /// Next state after answering a question about `id`
    pub fn award_answer(&self, id: AlgorithmId, correct: bool) -> Progress {
        let mut next = self.clone();
        let current = self.mastery(id);

        if correct {
            next.streak = self.streak + 1;
            let earned = BASE_XP + next.streak.min(MAX_STREAK_BONUS);
            next.xp = self.xp + earned;
            next.level = level_from_xp(next.xp);
            next.mastery
                .insert(id, current.saturating_add(MASTERY_GAIN).min(MAX_MASTERY));
        } else {
            next.streak = 0;
            next.mastery
                .insert(id, current.saturating_sub(MASTERY_PENALTY));
        }

        debug!(
            algorithm = %id,
            correct,
            xp = next.xp,
            streak = next.streak,
            "answer recorded"
        );
        next
    }

    /// Clear everything except the challenge-mode switch
    pub fn reset(&self) -> Progress {
        Progress {
            challenge_mode: self.challenge_mode,
            ..Progress::new()
        }
    }

    pub fn toggle_challenge_mode(&self) -> Progress {
        Progress {
            challenge_mode: !self.challenge_mode,
            ..self.clone()
        }
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correct_answers_build_streak_bonus() {
        let p = Progress::new()
            .award_answer(AlgorithmId::BubbleSort, true)
            .award_answer(AlgorithmId::BubbleSort, true);

        // 10 + 1, then 10 + 2
        assert_eq!(p.xp, 23);
        assert_eq!(p.streak, 2);
        assert_eq!(p.mastery(AlgorithmId::BubbleSort), 10);
        assert_eq!(p.level, 1);
    }

    #[test]
    fn test_streak_bonus_is_capped() {
        let mut p = Progress::new();
        for _ in 0..15 {
            p = p.award_answer(AlgorithmId::MoveZeros, true);
        }
        let before = p.xp;
        let p = p.award_answer(AlgorithmId::MoveZeros, true);

        assert_eq!(p.xp - before, BASE_XP + MAX_STREAK_BONUS);
        assert_eq!(p.level, level_from_xp(p.xp));
        assert!(p.level > 1);
    }

    #[test]
    fn test_wrong_answer_breaks_streak_and_floors_mastery() {
        let p = Progress::new()
            .award_answer(AlgorithmId::SelectionSort, true)
            .award_answer(AlgorithmId::SelectionSort, false)
            .award_answer(AlgorithmId::SelectionSort, false)
            .award_answer(AlgorithmId::SelectionSort, false);

        assert_eq!(p.streak, 0);
        assert_eq!(p.mastery(AlgorithmId::SelectionSort), 0);
        assert_eq!(p.xp, 11);
    }

    #[test]
    fn test_mastery_caps_at_100() {
        let mut p = Progress::new();
        for _ in 0..30 {
            p = p.award_answer(AlgorithmId::InsertionSort, true);
        }
        assert_eq!(p.mastery(AlgorithmId::InsertionSort), MAX_MASTERY);
    }

    #[test]
    fn test_reset_keeps_challenge_mode() {
        let p = Progress::new()
            .toggle_challenge_mode()
            .award_answer(AlgorithmId::BinarySearch, true)
            .reset();

        assert!(p.challenge_mode);
        assert_eq!(p.xp, 0);
        assert_eq!(p.level, 1);
        assert_eq!(p.mastery(AlgorithmId::BinarySearch), 0);
    }

    #[test]
    fn test_award_does_not_touch_previous_state() {
        let before = Progress::new();
        let _after = before.award_answer(AlgorithmId::BubbleSort, true);
        assert_eq!(before, Progress::new());
    }
}
