//! Main TUI application state and logic

use crate::algorithms::AlgorithmId;
use crate::config::Config;
use crate::playback::{Playback, Tick};
use crate::progress::Progress;
use crate::quiz::{Quiz, QuizOutcome, QuizSchedule};
use crate::registry::{info_for, questions_for};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Array,
    Info,
}

impl FocusedPane {
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Array => FocusedPane::Info,
            FocusedPane::Info => FocusedPane::Array,
        }
    }
}

/// The main application state
pub struct App {
    /// Cursor over the generated trace
    pub playback: Playback,

    pub algorithm: AlgorithmId,

    pub config: Config,

    /// Quiz cadence and already-asked frames
    pub schedule: QuizSchedule,

    /// Open quiz, if any; playback is blocked while it is set
    pub quiz: Option<Quiz>,

    /// Result of answering the open quiz
    pub quiz_outcome: Option<QuizOutcome>,

    pub progress: Progress,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub array_scroll: usize,
    pub info_scroll: usize,

    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Debounce for the space key
    last_space_press: Instant,

    /// Next Learn question to ask with 'l'
    learn_index: usize,
}

impl App {
    pub fn new(playback: Playback, algorithm: AlgorithmId, config: Config) -> Self {
        let playback = playback.with_teaching_mode(config.teaching_mode);
        let schedule = QuizSchedule::new(config.quiz_every);
        App {
            playback,
            algorithm,
            config,
            schedule,
            quiz: None,
            quiz_outcome: None,
            progress: Progress::new(),
            focused_pane: FocusedPane::Array,
            array_scroll: 0,
            info_scroll: 0,
            should_quit: false,
            status_message: "Ready. Press → to step, space to play".to_string(),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or_else(Instant::now),
            learn_index: 0,
        }
    }

    /// Run the main event loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            match self.playback.tick(Instant::now(), self.quiz.is_some()) {
                Tick::Idle => {}
                Tick::Advanced => {
                    self.status_message = "Playing...".to_string();
                    self.maybe_offer_quiz();
                }
                Tick::AutoPaused => {
                    self.status_message = "Paused at a milestone. Space to continue".to_string();
                }
                Tick::Finished => {
                    self.status_message = "Playback complete".to_string();
                }
            }

            // Use poll with timeout to allow auto-play to work
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(pane_area);

        // Left column: Array (top) | Narration (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(columns[0]);

        // Right column: Metrics (top) | Info (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(9), Constraint::Min(0)])
            .split(columns[1]);

        let step = self.playback.current();

        super::panes::render_array_pane(
            frame,
            left_rows[0],
            step,
            self.focused_pane == FocusedPane::Array,
            &mut self.array_scroll,
        );

        super::panes::render_narration_pane(
            frame,
            left_rows[1],
            step,
            info_for(self.algorithm).invariant,
            self.progress.challenge_mode,
            false,
        );

        super::panes::render_metrics_pane(
            frame,
            right_rows[0],
            &super::panes::MetricsRenderData {
                algorithm: self.algorithm,
                input_len: step.array.len(),
                counters: &step.counters,
                progress: &self.progress,
            },
            false,
        );

        super::panes::render_info_pane(
            frame,
            right_rows[1],
            self.algorithm,
            self.focused_pane == FocusedPane::Info,
            &mut self.info_scroll,
        );

        super::panes::render_status_bar(
            frame,
            status_area,
            &super::panes::StatusRenderData {
                message: &self.status_message,
                current_step: self.playback.position(),
                total_steps: self.playback.len(),
                is_playing: self.playback.is_playing(),
                quiz_open: self.quiz.is_some(),
                teaching_mode: self.playback.teaching_mode(),
                challenge_mode: self.progress.challenge_mode,
            },
        );

        if let Some(quiz) = &self.quiz {
            super::panes::render_quiz_popup(frame, pane_area, quiz, self.quiz_outcome.as_ref());
        }
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        if self.quiz.is_some() {
            self.handle_quiz_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.playback.pause();
                let n = c.to_digit(10).unwrap_or(1) as usize;
                // One frame at a time so a quiz due on a skipped frame still opens
                let mut stepped = 0;
                while stepped < n && self.quiz.is_none() && self.playback.step_forward().is_ok() {
                    stepped += 1;
                    self.maybe_offer_quiz();
                }
                if self.quiz.is_none() {
                    self.status_message = format!("Stepped forward {} step(s)", stepped);
                }
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Left => {
                self.playback.pause();
                self.step_backward();
            }
            KeyCode::Right => {
                self.playback.pause();
                self.step_forward();
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Array => self.array_scroll = self.array_scroll.saturating_sub(1),
                FocusedPane::Info => self.info_scroll = self.info_scroll.saturating_sub(1),
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Array => self.array_scroll = self.array_scroll.saturating_add(1),
                FocusedPane::Info => self.info_scroll = self.info_scroll.saturating_add(1),
            },
            KeyCode::Char(' ') => {
                // Toggle auto-play (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.status_message = if self.playback.toggle_play() {
                        "Playing...".to_string()
                    } else {
                        "Paused".to_string()
                    };
                }
            }
            KeyCode::Enter => {
                self.playback.pause();
                self.playback.jump_to_end();
                self.status_message = "Jumped to end".to_string();
            }
            KeyCode::Backspace => {
                self.playback.pause();
                self.playback.rewind_to_start();
                self.status_message = "Jumped to start".to_string();
            }
            KeyCode::Char('t') => {
                let on = self.playback.toggle_teaching_mode();
                self.status_message = format!("Teaching mode {}", on_off(on));
            }
            KeyCode::Char('z') => {
                self.config.quiz_mode = !self.config.quiz_mode;
                self.status_message = format!("Quiz mode {}", on_off(self.config.quiz_mode));
            }
            KeyCode::Char('c') => {
                self.progress = self.progress.toggle_challenge_mode();
                self.status_message =
                    format!("Challenge mode {}", on_off(self.progress.challenge_mode));
            }
            KeyCode::Char('l') => self.open_learn_question(),
            _ => {}
        }
    }

    /// Keys while the quiz popup is open
    fn handle_quiz_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char(c @ '1'..='9') => {
                let option = c.to_digit(10).unwrap_or(1) as usize - 1;
                self.answer_quiz(option);
            }
            KeyCode::Enter | KeyCode::Esc => {
                if self.quiz_outcome.is_none() {
                    self.status_message = "Quiz skipped".to_string();
                }
                self.quiz = None;
                self.quiz_outcome = None;
            }
            _ => {}
        }
    }

    fn answer_quiz(&mut self, option: usize) {
        let Some(quiz) = self.quiz.as_mut() else {
            return;
        };
        let Some(outcome) = quiz.answer(option) else {
            return;
        };

        self.progress = self.progress.award_answer(self.algorithm, outcome.correct);
        self.status_message = if outcome.correct {
            format!("Correct! +XP (streak {})", self.progress.streak)
        } else {
            "Not quite. Streak reset".to_string()
        };
        self.quiz_outcome = Some(outcome);
    }

    /// Offer a quiz on the current frame if one is due
    fn maybe_offer_quiz(&mut self) {
        if !self.config.quiz_mode || !self.playback.teaching_mode() || self.quiz.is_some() {
            return;
        }
        let index = self.playback.position();
        if let Some(quiz) = self.schedule.offer(self.playback.current(), index) {
            self.quiz = Some(quiz);
            self.quiz_outcome = None;
            self.status_message = "Quiz! Predict the next step".to_string();
        }
    }

    /// Open the next Learn-mode question for the current algorithm
    fn open_learn_question(&mut self) {
        let questions = questions_for(self.algorithm);
        if questions.is_empty() {
            self.status_message = "No Learn questions for this algorithm".to_string();
            return;
        }

        let question = &questions[self.learn_index % questions.len()];
        self.learn_index += 1;
        if let Some(quiz) = Quiz::from_question(question, self.playback.position()) {
            self.playback.pause();
            self.quiz = Some(quiz);
            self.quiz_outcome = None;
            self.status_message = "Learn question".to_string();
        }
    }

    /// Step forward in the trace
    fn step_forward(&mut self) {
        match self.playback.step_forward() {
            Ok(()) => {
                self.status_message = "Stepped forward".to_string();
                self.maybe_offer_quiz();
            }
            Err(e) => {
                self.status_message = format!("Cannot step forward: {}", e);
            }
        }
    }

    /// Step backward in the trace
    fn step_backward(&mut self) {
        match self.playback.step_backward() {
            Ok(()) => {
                self.status_message = "Stepped backward".to_string();
            }
            Err(e) => {
                self.status_message = format!("Cannot step backward: {}", e);
            }
        }
    }
}

fn on_off(on: bool) -> &'static str {
    if on {
        "on"
    } else {
        "off"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::bubble;
    use crossterm::event::KeyModifiers;

    fn app(quiz_every: u64) -> App {
        let trace = bubble::generate(&[4.0, 3.0, 2.0, 1.0]);
        let config = Config {
            quiz_every,
            ..Config::default()
        };
        App::new(
            Playback::new(trace, Duration::from_millis(10)),
            AlgorithmId::BubbleSort,
            config,
        )
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_number_key_stops_on_due_quiz() {
        let mut app = app(1);
        press(&mut app, KeyCode::Char('9'));

        // Frame 1 is the first comparison
        assert_eq!(app.playback.position(), 1);
        assert_eq!(app.quiz.as_ref().map(|q| q.step_index), Some(1));
    }

    #[test]
    fn test_number_key_offers_quiz_on_skipped_frame() {
        // Second comparison lands on frame 3 (compare, swap, compare)
        let mut app = app(2);
        press(&mut app, KeyCode::Char('5'));

        assert_eq!(app.playback.position(), 3);
        assert_eq!(app.quiz.as_ref().map(|q| q.step_index), Some(3));
    }

    #[test]
    fn test_number_key_without_quiz_mode() {
        let mut app = app(1);
        press(&mut app, KeyCode::Char('z'));
        press(&mut app, KeyCode::Char('5'));

        assert_eq!(app.playback.position(), 5);
        assert!(app.quiz.is_none());
        assert_eq!(app.status_message, "Stepped forward 5 step(s)");
    }

    #[test]
    fn test_answering_quiz_updates_progress() {
        let mut app = app(1);
        press(&mut app, KeyCode::Char('1'));
        let correct = app.quiz.as_ref().map(|q| q.correct).unwrap();

        let key = char::from_digit(correct as u32 + 1, 10).unwrap();
        press(&mut app, KeyCode::Char(key));
        assert_eq!(app.progress.streak, 1);
        assert!(app.quiz_outcome.as_ref().unwrap().correct);

        press(&mut app, KeyCode::Enter);
        assert!(app.quiz.is_none());
    }
}
