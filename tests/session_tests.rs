// End-to-end tests: generate, play back, quiz, solve

use std::time::{Duration, Instant};

use sortscope::algorithms::{self, AlgorithmId};
use sortscope::error::PlaybackError;
use sortscope::playback::{Playback, Tick, COMPARISON_HOLD, MOVEMENT_HOLD};
use sortscope::progress::Progress;
use sortscope::quiz::QuizSchedule;
use sortscope::solver;
use sortscope::trace::FrameEvent;

fn bubble_playback(teaching: bool) -> Playback {
    let trace =
        algorithms::generate(AlgorithmId::BubbleSort, &[5.0, 3.0, 8.0, 4.0, 2.0], None).unwrap();
    Playback::new(trace, Duration::from_millis(10)).with_teaching_mode(teaching)
}

/// Tick far enough apart that every delay has elapsed
fn play_until_stop(playback: &mut Playback, start: Instant) -> (Tick, Instant) {
    let mut now = start;
    loop {
        now += Duration::from_secs(1);
        match playback.tick(now, false) {
            Tick::Advanced => continue,
            other => return (other, now),
        }
    }
}

#[test]
fn test_scrub_forward_and_back() {
    let mut playback = bubble_playback(false);
    let len = playback.len();

    assert_eq!(playback.step_backward(), Err(PlaybackError::AtStart));
    assert_eq!(playback.step_forward_by(3), 3);
    assert_eq!(playback.position(), 3);

    let seen = playback.current().clone();
    playback.step_forward().unwrap();
    playback.step_backward().unwrap();
    assert_eq!(playback.current(), &seen);

    assert_eq!(
        playback.seek(len),
        Err(PlaybackError::OutOfRange { index: len, len })
    );
    playback.jump_to_end();
    assert_eq!(playback.current().event, FrameEvent::Sorted);
    assert_eq!(playback.step_forward(), Err(PlaybackError::AtEnd));
}

#[test]
fn test_autoplay_runs_to_end_without_teaching() {
    let mut playback = bubble_playback(false);
    assert!(playback.toggle_play());

    let (tick, _) = play_until_stop(&mut playback, Instant::now());
    assert_eq!(tick, Tick::Finished);
    assert!(playback.is_at_end());
    assert!(!playback.is_playing());
}

#[test]
fn test_teaching_mode_pauses_on_each_pass() {
    let mut playback = bubble_playback(true);
    let mut pauses = 0;
    let mut now = Instant::now();

    loop {
        playback.toggle_play();
        let (tick, later) = play_until_stop(&mut playback, now);
        now = later;
        match tick {
            Tick::AutoPaused => {
                pauses += 1;
                assert!(playback.current().event.is_milestone());
                if playback.is_at_end() {
                    break;
                }
            }
            Tick::Finished => break,
            Tick::Idle | Tick::Advanced => unreachable!(),
        }
    }

    // Four pass boundaries plus the sorted frame
    assert_eq!(pauses, 5);
    assert!(playback.is_at_end());
}

#[test]
fn test_teaching_holds() {
    let mut playback = bubble_playback(true);

    playback.step_forward().unwrap();
    assert!(playback.current().event.is_comparison());
    assert_eq!(playback.effective_delay(), COMPARISON_HOLD);

    playback.step_forward().unwrap();
    assert!(playback.current().event.is_movement());
    assert_eq!(playback.effective_delay(), MOVEMENT_HOLD);

    playback.toggle_teaching_mode();
    assert_eq!(playback.effective_delay(), Duration::from_millis(10));
}

#[test]
fn test_quiz_blocks_playback() {
    let mut playback = bubble_playback(false);
    playback.toggle_play();

    let now = Instant::now() + Duration::from_secs(1);
    assert_eq!(playback.tick(now, true), Tick::Idle);
    assert_eq!(playback.position(), 0);
    assert_eq!(playback.tick(now, false), Tick::Advanced);
}

#[test]
fn test_quiz_session_updates_progress() {
    let trace =
        algorithms::generate(AlgorithmId::BubbleSort, &[5.0, 3.0, 8.0, 4.0, 2.0], None).unwrap();
    let mut schedule = QuizSchedule::new(2);
    let mut progress = Progress::new();
    let mut asked = 0;

    for (index, frame) in trace.iter().enumerate() {
        if let Some(mut quiz) = schedule.offer(frame, index) {
            asked += 1;
            let outcome = quiz.answer(quiz.correct).unwrap();
            assert!(outcome.correct);
            progress = progress.award_answer(AlgorithmId::BubbleSort, true);
        }
    }

    // Ten comparisons, asked on every second one
    assert_eq!(asked, 5);
    assert_eq!(progress.streak, 5);
    assert_eq!(progress.xp, (11 + 12 + 13 + 14 + 15) as u32);
    assert_eq!(progress.mastery(AlgorithmId::BubbleSort), 25);

    let progress = progress.award_answer(AlgorithmId::BubbleSort, false);
    assert_eq!(progress.streak, 0);
    assert_eq!(progress.mastery(AlgorithmId::BubbleSort), 23);
}

#[test]
fn test_solver_feeds_generator() {
    let solution = solver::solve("Binary search in [25, 3, 19, 8, 12] target 19").unwrap();
    assert_eq!(solution.algorithm, AlgorithmId::BinarySearch);
    assert_eq!(solution.input, vec![3.0, 8.0, 12.0, 19.0, 25.0]);
    assert!(solution.answer.starts_with("Input was not sorted"));
    assert!(solution.answer.contains("Found 19 at index 3"));

    let trace = algorithms::generate(solution.algorithm, &solution.input, solution.target).unwrap();
    assert_eq!(trace.last().unwrap().event, FrameEvent::Found { index: 3 });
}

#[test]
fn test_solver_move_zeros_and_sorts() {
    let zeros = solver::solve("Move zeros [0,5,0,3,12]").unwrap();
    assert_eq!(zeros.answer, "Result: [5, 3, 12, 0, 0]");

    let sorted = solver::solve("Bubble sort [55, 12, 78, 45]").unwrap();
    assert_eq!(sorted.algorithm, AlgorithmId::BubbleSort);
    assert_eq!(sorted.answer, "Sorted array: [12, 45, 55, 78]");
}

#[test]
fn test_solver_failures_carry_hints() {
    let empty = solver::solve("   ").unwrap_err();
    assert_eq!(empty.error, "Paste a problem statement first.");
    assert!(!empty.hints.is_empty());

    let no_target = solver::solve("binary search [1, 2, 3]").unwrap_err();
    assert_eq!(no_target.error, "Binary search needs a target value.");

    let no_array = solver::solve("sort something").unwrap_err();
    assert_eq!(no_array.error, "Could not find an input array.");
}
