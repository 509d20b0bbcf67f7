//! Recording operations: moods, notes, tags, and moments.

use crate::api::SummaryClient;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::journal::{moods, Moment};
use crate::storage;
use chrono::NaiveDate;
use tracing::{info, warn};

/// Records a mood (and optionally a note and tags) for a day.
///
/// # Flow
///
/// 1. Resolve the mood label against the catalog
/// 2. Load the journal (strict — a corrupt file aborts rather than being overwritten)
/// 3. Replace the day's mood, preserving existing notes/tags/moments
/// 4. Apply the note and tags, optionally asking the summary service for
///    tag suggestions from the note text (best effort)
/// 5. Save the journal
///
/// # Errors
///
/// Returns an error if the mood label is not in the catalog, the intensity is
/// out of range, or the journal can't be loaded or saved. Tag-suggestion
/// failures are logged and ignored.
pub fn log_mood(
    config: &Config,
    date: NaiveDate,
    label: &str,
    intensity: Option<u8>,
    note: Option<&str>,
    tags: &[String],
    suggest_tags: bool,
) -> AppResult<()> {
    let mut mood = moods::resolve(label).ok_or_else(|| {
        AppError::Journal(format!(
            "Unknown mood '{}'. Valid moods: {}",
            label,
            moods::label_list()
        ))
    })?;
    if let Some(level) = intensity {
        mood = mood.with_intensity(level)?;
    }
    let logged_label = mood.label.clone();
    let logged_intensity = mood.intensity;

    let mut journal = storage::load_journal(&config.data_dir)?;

    let entry = journal.entry_mut(date);
    entry.mood = Some(mood);
    if let Some(text) = note {
        entry.notes = Some(text.to_string());
    }
    for tag in tags {
        entry.add_tag(tag);
    }

    if suggest_tags {
        if let Some(text) = note {
            let client = SummaryClient::new(&config.api_url);
            let mood_ref = journal.get(date).and_then(|e| e.mood.clone());
            match client.analyze_tags(text, date, mood_ref.as_ref()) {
                Ok(analysis) => {
                    let entry = journal.entry_mut(date);
                    let mut added = Vec::new();
                    for tag in &analysis.tags {
                        if entry.add_tag(tag) {
                            added.push(tag.clone());
                        }
                    }
                    if !added.is_empty() {
                        println!("Suggested tags added: {}", added.join(", "));
                    }
                }
                Err(e) => {
                    warn!("Tag suggestion unavailable, continuing without: {}", e);
                }
            }
        } else {
            warn!("--suggest-tags needs a note to analyze; skipping");
        }
    }

    storage::save_journal(&config.data_dir, &journal)?;

    info!("Logged {} for {}", logged_label, date);
    match logged_intensity {
        Some(level) => println!("{}: {} (intensity {})", date, logged_label, level),
        None => println!("{}: {}", date, logged_label),
    }
    Ok(())
}

/// Removes a tag from a day's entry.
///
/// Removing the last piece of data from an entry drops the entry itself,
/// keeping the journal sparse.
pub fn remove_tag(config: &Config, date: NaiveDate, tag: &str) -> AppResult<()> {
    let mut journal = storage::load_journal(&config.data_dir)?;

    let entry = journal.entry_mut(date);
    let removed = entry.remove_tag(tag);
    if entry.is_blank() {
        journal.remove(date);
    }

    if !removed {
        println!("{}: no such tag '{}'", date, tag.trim().to_lowercase());
        return Ok(());
    }

    storage::save_journal(&config.data_dir, &journal)?;
    info!("Removed tag from {}", date);
    println!("{}: removed '{}'", date, tag.trim().to_lowercase());
    Ok(())
}

/// Appends a timestamped moment to a day's entry.
///
/// Moments are independent of the day's mood; a day can collect moments
/// before (or without) ever getting a mood.
pub fn add_moment(config: &Config, date: NaiveDate, content: &str) -> AppResult<()> {
    if content.trim().is_empty() {
        return Err(AppError::Journal("Moment text is empty".to_string()));
    }

    let mut journal = storage::load_journal(&config.data_dir)?;
    let moment = Moment::new(content.trim());
    let time = moment.time;
    journal.entry_mut(date).timestamps.push(moment);
    storage::save_journal(&config.data_dir, &journal)?;

    info!("Added moment to {}", date);
    println!("{} · {}", time.format("%H:%M:%S"), content.trim());
    Ok(())
}
