//! CLI argument definitions using clap.
//!
//! This module contains the clap structs and enums for parsing CLI arguments.
//! The actual command implementations are in the `ops` module.

use crate::constants::{APP_DESCRIPTION, APP_NAME, DATE_FORMAT_COMPACT, DATE_FORMAT_ISO};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// A year-in-pixels mood journal for the command line
#[derive(Parser, Debug)]
#[command(name = APP_NAME)]
#[command(about = APP_DESCRIPTION, long_about = None)]
#[command(author, version)]
pub struct Cli {
    /// Print verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Record a mood for a day
    Log {
        /// Mood label (see `pigment moods` for the catalog)
        mood: String,

        /// Intensity on a 1-5 scale
        #[arg(short, long)]
        intensity: Option<u8>,

        /// Free-text note for the day
        #[arg(short, long)]
        note: Option<String>,

        /// Tag to attach (repeatable)
        #[arg(short, long = "tag")]
        tags: Vec<String>,

        /// Day to record (format: YYYY-MM-DD or YYYYMMDD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// Ask the summary service to suggest tags from the note text
        #[arg(long)]
        suggest_tags: bool,
    },

    /// Append a timestamped moment to today's entry
    Moment {
        /// What just happened
        content: String,
    },

    /// Remove a tag from a day's entry
    Untag {
        /// Tag to remove
        tag: String,

        /// Day to modify (format: YYYY-MM-DD or YYYYMMDD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Show one day's entry
    Show {
        /// Day to show (format: YYYY-MM-DD or YYYYMMDD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List the mood catalog
    Moods,

    /// Print mood distribution, tag statistics, and streaks
    Stats,

    /// Print the insight feed
    Insights,

    /// Generate a narrative summary for a date range via the summary service
    Summary {
        /// Range start (format: YYYY-MM-DD or YYYYMMDD)
        #[arg(long)]
        from: String,

        /// Range end (format: YYYY-MM-DD or YYYYMMDD, defaults to today)
        #[arg(long)]
        to: Option<String>,

        /// Focus area: activities, mood, social, or all
        #[arg(long)]
        focus: Option<String>,
    },
}

/// Parse a date string in YYYY-MM-DD or YYYYMMDD format.
pub fn parse_date(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date_str, DATE_FORMAT_ISO)
        .or_else(|_| NaiveDate::parse_from_str(date_str, DATE_FORMAT_COMPACT))
}
