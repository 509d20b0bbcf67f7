/*!
# Pigment

Pigment is a year-in-pixels mood journal for the command line: assign a mood
(and optional intensity, notes, tags, and timestamped moments) to calendar
days, and let the analytics engine turn the accumulated history into
distribution statistics, streaks, and a ranked insight feed.

## Core Features

- Log a mood for any day, with optional 1–5 intensity, notes, and tags
- Append timestamped moments to a day, independent of its mood
- Mood distribution, tag/mood correlation, and streak statistics
- A ranked, human-readable insight feed
- Narrative summaries for a date range via an external summary service

## Architecture

The codebase follows a modular architecture with clear separation of concerns:

- `cli`: Command-line interface handling using clap
- `config`: Configuration loading and validation
- `errors`: Error handling infrastructure
- `journal`: The date-keyed data model and mood catalog
- `analytics`: The pure, stateless analytics pipeline
- `storage`: Load-all/save-all persistence of the journal blob
- `api`: Client for the remote summary service
- `ops`: One module per user operation, wiring the layers together

The analytics engine is deliberately pure: it borrows a journal snapshot,
touches no I/O, and is recomputed in full after every change instead of
maintaining caches.

## Usage Example

```rust
use pigment::analytics::{generate_insights, mood_distribution};
use pigment::journal::{moods, Journal};
use chrono::NaiveDate;

let mut journal = Journal::new();
let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
journal.entry_mut(today).mood = moods::resolve("Happy");

let stats = mood_distribution(&journal);
assert_eq!(stats[0].label, "Happy");
assert_eq!(stats[0].percentage, 100.0);

let insights = generate_insights(&journal, today);
assert!(!insights.is_empty());
```
*/

/// The pure analytics pipeline: distribution, tags, streaks, insights
pub mod analytics;
/// Client for the remote summary service
pub mod api;
/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Constants used throughout the application
pub mod constants;
/// Error types and utilities for error handling
pub mod errors;
/// The journal data model and mood catalog
pub mod journal;
/// User operations implementing the CLI commands
pub mod ops;
/// Journal persistence as a single JSON blob
pub mod storage;

// Re-export important types for convenience
pub use cli::Cli;
pub use config::Config;
pub use errors::{AppError, AppResult};
pub use journal::{Entry, Journal, Mood};
