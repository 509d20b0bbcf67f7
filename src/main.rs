/*!
# Pigment - A Year-in-Pixels Mood Journal

Pigment is a command-line tool for tracking daily moods and deriving
statistics, streaks, and insights from the accumulated history.

This file contains the main application flow, coordinating the various
components to implement the journal functionality.

## Usage

```text
pigment <COMMAND>

Commands:
  log       Record a mood for a day
  moment    Append a timestamped moment to today's entry
  untag     Remove a tag from a day's entry
  show      Show one day's entry
  moods     List the mood catalog
  stats     Print mood distribution, tag statistics, and streaks
  insights  Print the insight feed
  summary   Generate a narrative summary for a date range
```

## Configuration

The application can be configured with the following environment variables:
- `PIGMENT_DIR`: The directory to store journal data (defaults to "~/Documents/pigment")
- `PIGMENT_API_URL`: The base URL of the summary service (defaults to "http://127.0.0.1:8000")
*/

use chrono::{Local, NaiveDate};
use clap::Parser;
use pigment::cli::{self, Cli, Commands};
use pigment::config::Config;
use pigment::constants::DEFAULT_LOG_FILTER;
use pigment::errors::{AppError, AppResult};
use pigment::ops;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Initializes tracing output on stderr, honoring RUST_LOG with an
/// application default. Stdout is reserved for command output.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "pigment=debug"
    } else {
        DEFAULT_LOG_FILTER
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Parses an optional date argument, falling back to the given date.
fn resolve_date(arg: Option<&str>, fallback: NaiveDate) -> AppResult<NaiveDate> {
    match arg {
        Some(date_str) => cli::parse_date(date_str)
            .map_err(|e| AppError::Journal(format!("Invalid date format: {}", e))),
        None => Ok(fallback),
    }
}

/// The main entry point for the pigment application.
///
/// This function coordinates the overall application flow:
/// 1. Parses command-line arguments
/// 2. Initializes logging
/// 3. Resolves the current calendar day once, so every operation in this
///    invocation agrees on "today"
/// 4. Loads and validates configuration
/// 5. Dispatches to the requested operation
///
/// # Errors
///
/// This function can return various types of errors, including:
/// - Configuration errors (missing or invalid configuration)
/// - Journal errors (invalid date format, unknown mood)
/// - Storage errors (unreadable or corrupt journal file)
/// - Summary service errors (service unreachable)
fn main() -> AppResult<()> {
    let args = Cli::parse();
    init_tracing(args.verbose);
    info!("Starting pigment");

    // Obtain the current calendar day once at the beginning
    let current_date = Local::now().naive_local().date();

    let config = Config::load()?;
    config.validate()?;

    match args.command {
        Commands::Log {
            mood,
            intensity,
            note,
            tags,
            date,
            suggest_tags,
        } => {
            let date = resolve_date(date.as_deref(), current_date)?;
            ops::log::log_mood(
                &config,
                date,
                &mood,
                intensity,
                note.as_deref(),
                &tags,
                suggest_tags,
            )
        }
        Commands::Moment { content } => ops::log::add_moment(&config, current_date, &content),
        Commands::Untag { tag, date } => {
            let date = resolve_date(date.as_deref(), current_date)?;
            ops::log::remove_tag(&config, date, &tag)
        }
        Commands::Show { date } => {
            let date = resolve_date(date.as_deref(), current_date)?;
            ops::show::show_day(&config, date)
        }
        Commands::Moods => ops::show::list_moods(),
        Commands::Stats => ops::stats::run(&config, current_date),
        Commands::Insights => ops::insights::run(&config, current_date),
        Commands::Summary { from, to, focus } => {
            let from = resolve_date(Some(&from), current_date)?;
            let to = resolve_date(to.as_deref(), current_date)?;
            ops::summarize::run(&config, from, to, focus.as_deref())
        }
    }
}
