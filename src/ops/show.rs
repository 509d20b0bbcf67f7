//! Read-only views: a single day's entry and the mood catalog.

use crate::config::Config;
use crate::errors::AppResult;
use crate::journal::moods;
use crate::storage;
use chrono::NaiveDate;
use tracing::debug;

/// Prints one day's entry.
///
/// Days with no entry are not an error — the journal is sparse by design.
pub fn show_day(config: &Config, date: NaiveDate) -> AppResult<()> {
    let journal = storage::load_journal_or_empty(&config.data_dir);

    let entry = match journal.get(date) {
        Some(entry) => entry,
        None => {
            println!("{}: no entry", date);
            return Ok(());
        }
    };

    debug!("Showing entry for {}", date);
    match &entry.mood {
        Some(mood) => match mood.intensity {
            Some(level) => println!("{}: {} (intensity {})", date, mood.label, level),
            None => println!("{}: {}", date, mood.label),
        },
        None => println!("{}: no mood recorded", date),
    }

    if let Some(notes) = &entry.notes {
        println!("  notes: {}", notes);
    }
    if !entry.tags.is_empty() {
        println!("  tags: {}", entry.tags.join(", "));
    }
    for moment in &entry.timestamps {
        println!("  {} · {}", moment.time.format("%H:%M:%S"), moment.content);
    }

    Ok(())
}

/// Prints the mood catalog with color tokens.
pub fn list_moods() -> AppResult<()> {
    for mood in moods::MOODS {
        println!("{:<10} {}", mood.label, mood.color);
    }
    println!("{:<10} {}", "(unset)", moods::DEFAULT_COLOR);
    Ok(())
}
