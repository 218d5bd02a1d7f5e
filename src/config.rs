//! Runtime configuration and command-line arguments

use crate::algorithms::AlgorithmId;
use crate::error::InputError;
use crate::quiz::DEFAULT_QUIZ_EVERY;
use crate::trace::Value;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Auto-play delay between frames
pub const DEFAULT_SPEED_MS: u64 = 450;

/// Array shown when no input is given
pub const DEFAULT_INPUT: &str = "5,3,8,4,2";

/// Binary search needs ascending input
pub const DEFAULT_SEARCH_INPUT: &str = "3,8,12,19,25";

pub const DEFAULT_ZEROS_INPUT: &str = "0,1,0,3,12";

/// Target used for binary search when none is given
pub const DEFAULT_TARGET: Value = 19.0;

#[derive(Debug, Parser)]
#[command(
    name = "sortscope",
    about = "Step through classic array algorithms frame by frame",
    version
)]
pub struct Cli {
    /// Algorithm id: bubble-sort, insertion-sort, selection-sort, binary-search, move-zeros
    #[arg(default_value = "bubble-sort")]
    pub algorithm: String,

    /// Input array, e.g. "5,3,8,4,2" or "[5 3 8 4 2]"
    #[arg(short, long)]
    pub input: Option<String>,

    /// Binary search target
    #[arg(short, long, allow_negative_numbers = true)]
    pub target: Option<Value>,

    /// Recognise algorithm, array and target from a problem statement
    #[arg(long, value_name = "TEXT", conflicts_with_all = ["input", "target"])]
    pub solve: Option<String>,

    /// Print the trace as JSON instead of opening the viewer
    #[arg(long)]
    pub json: bool,

    /// List the available algorithms and exit
    #[arg(long)]
    pub list: bool,

    /// Milliseconds between frames during auto-play
    #[arg(long, default_value_t = DEFAULT_SPEED_MS)]
    pub speed_ms: u64,

    /// Disable teaching-mode pacing and auto-pause
    #[arg(long)]
    pub no_teaching: bool,

    /// Disable quiz interruptions
    #[arg(long)]
    pub no_quiz: bool,

    /// Ask a quiz on every n-th comparison
    #[arg(long, default_value_t = DEFAULT_QUIZ_EVERY)]
    pub quiz_every: u64,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// Viewer settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub speed: Duration,
    pub teaching_mode: bool,
    pub quiz_mode: bool,
    pub quiz_every: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            speed: Duration::from_millis(DEFAULT_SPEED_MS),
            teaching_mode: true,
            quiz_mode: true,
            quiz_every: DEFAULT_QUIZ_EVERY,
        }
    }
}

impl Cli {
    pub fn config(&self) -> Config {
        Config {
            speed: Duration::from_millis(self.speed_ms),
            teaching_mode: !self.no_teaching,
            quiz_mode: !self.no_quiz,
            quiz_every: self.quiz_every.max(1),
        }
    }
}

/// Demo array for an algorithm when `--input` is absent
pub fn default_input(algorithm: AlgorithmId) -> &'static str {
    match algorithm {
        AlgorithmId::BinarySearch => DEFAULT_SEARCH_INPUT,
        AlgorithmId::MoveZeros => DEFAULT_ZEROS_INPUT,
        _ => DEFAULT_INPUT,
    }
}

/// Parse `"5,3,8"`, `"5 3 8"` or `"[5, 3, 8]"`; an empty list is allowed
pub fn parse_array(text: &str) -> Result<Vec<Value>, InputError> {
    text.trim()
        .trim_start_matches('[')
        .trim_end_matches(']')
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            let value: Value = token.parse().map_err(|_| InputError::NotANumber {
                token: token.to_string(),
            })?;
            if value.is_finite() {
                Ok(value)
            } else {
                Err(InputError::NotFinite {
                    token: token.to_string(),
                })
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_array_forms() {
        assert_eq!(parse_array("5,3,8"), Ok(vec![5.0, 3.0, 8.0]));
        assert_eq!(parse_array(" [5 3, -8.5] "), Ok(vec![5.0, 3.0, -8.5]));
        assert_eq!(parse_array(""), Ok(vec![]));
    }

    #[test]
    fn test_parse_array_rejects_garbage() {
        assert_eq!(
            parse_array("1,x"),
            Err(InputError::NotANumber {
                token: "x".to_string()
            })
        );
        assert_eq!(
            parse_array("1,inf"),
            Err(InputError::NotFinite {
                token: "inf".to_string()
            })
        );
    }

    #[test]
    fn test_default_inputs_parse() {
        for id in AlgorithmId::ALL {
            let input = parse_array(default_input(id)).unwrap();
            assert!(input.len() >= 2, "{}", id);
        }
        let search = parse_array(default_input(AlgorithmId::BinarySearch)).unwrap();
        assert!(search.windows(2).all(|w| w[0] <= w[1]));
        assert!(search.contains(&DEFAULT_TARGET));
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["sortscope"]);
        assert_eq!(cli.algorithm, "bubble-sort");
        assert_eq!(cli.config(), Config::default());
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::parse_from([
            "sortscope",
            "binary-search",
            "--input",
            "1,2,3",
            "--target",
            "-2",
            "--no-quiz",
            "--quiz-every",
            "0",
        ]);
        assert_eq!(cli.target, Some(-2.0));
        let config = cli.config();
        assert!(!config.quiz_mode);
        assert_eq!(config.quiz_every, 1);
    }
}
