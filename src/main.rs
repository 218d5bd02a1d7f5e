// sortscope: step-by-step array algorithm visualizer

use std::fs::File;
use std::io;
use std::sync::Mutex;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sortscope::algorithms::{self, AlgorithmId};
use sortscope::config::{default_input, parse_array, Cli, DEFAULT_TARGET};
use sortscope::error::{InputError, RegistryError};
use sortscope::playback::Playback;
use sortscope::registry;
use sortscope::solver::{self, SolveFailure};
use sortscope::trace::{fmt_value, Trace, Value};
use sortscope::ui::App;

/// Everything that can stop the binary before or after the TUI
#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("invalid input array: {0}")]
    Input(#[from] InputError),

    #[error("could not solve the problem: {0}")]
    Solve(#[from] SolveFailure),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn init_logging(cli: &Cli) -> Result<(), AppError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    // The TUI owns the terminal, so logs go to a file when one is given
    match &cli.log_file {
        Some(path) => {
            let file = File::create(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => builder.with_writer(io::stderr).init(),
    }
    Ok(())
}

fn print_registry() {
    for info in registry::all() {
        println!(
            "{:<16} {:<16} {:<10} worst {:<8} {}",
            info.id.as_str(),
            info.name,
            info.category.label(),
            info.complexity.worst,
            info.short
        );
    }
}

/// Algorithm, array and target chosen on the command line or by the solver
fn resolve_request(cli: &Cli) -> Result<(AlgorithmId, Vec<Value>, Option<Value>), AppError> {
    if let Some(problem) = &cli.solve {
        let solution = solver::solve(problem)?;
        // Keep stdout clean for --json
        if cli.json {
            eprintln!("{}: {}", solution.name, solution.answer);
        } else {
            println!("{}: {}", solution.name, solution.answer);
        }
        return Ok((solution.algorithm, solution.input, solution.target));
    }

    let algorithm: AlgorithmId = cli.algorithm.parse()?;
    let input = match &cli.input {
        Some(text) => parse_array(text)?,
        None => parse_array(default_input(algorithm))?,
    };
    let target = if algorithm.needs_target() {
        Some(cli.target.unwrap_or(DEFAULT_TARGET))
    } else {
        cli.target
    };
    Ok((algorithm, input, target))
}

fn run_tui(trace: Trace, algorithm: AlgorithmId, cli: &Cli) -> Result<(), AppError> {
    let config = cli.config();
    let playback = Playback::new(trace, config.speed);

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(playback, algorithm, config);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res?;
    Ok(())
}

fn run(cli: Cli) -> Result<(), AppError> {
    if cli.list {
        print_registry();
        return Ok(());
    }

    let (algorithm, input, target) = resolve_request(&cli)?;
    let trace = algorithms::generate(algorithm, &input, target)?;
    info!(
        algorithm = %algorithm,
        frames = trace.len(),
        target = target.map(fmt_value).as_deref().unwrap_or("-"),
        "trace ready"
    );

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&trace)?);
        return Ok(());
    }

    run_tui(trace, algorithm, &cli)
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = init_logging(&cli) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }

    if let Err(err) = run(cli) {
        eprintln!("Error: {}", err);
        if let AppError::Solve(failure) = &err {
            for hint in &failure.hints {
                eprintln!("  {}", hint);
            }
        }
        std::process::exit(1);
    }
}
