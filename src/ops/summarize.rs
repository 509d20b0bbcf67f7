//! Narrative summaries via the remote summary service.

use crate::api::SummaryClient;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::storage;
use chrono::NaiveDate;
use tracing::info;

/// Requests a narrative summary for a date range from the summary service.
///
/// # Flow
///
/// 1. Validate the range
/// 2. Load the journal (degrading to empty on failure) and collect entries
///    in range
/// 3. Send the range and entries to the summary service
/// 4. Print the summary and its highlights
///
/// # Errors
///
/// Returns an error for an inverted range, or an `ApiError` when the service
/// is unreachable or misbehaves — the request can simply be retried; journal
/// data and local analytics are unaffected.
pub fn run(
    config: &Config,
    from: NaiveDate,
    to: NaiveDate,
    focus: Option<&str>,
) -> AppResult<()> {
    if from > to {
        return Err(AppError::Journal(format!(
            "Range start {} is after range end {}",
            from, to
        )));
    }

    let journal = storage::load_journal_or_empty(&config.data_dir);
    let entries: Vec<_> = journal.entries_in_range(from, to).collect();

    if entries.is_empty() {
        println!("No entries between {} and {} — nothing to summarize.", from, to);
        return Ok(());
    }

    info!(
        "Requesting summary for {}..{} ({} entries)",
        from,
        to,
        entries.len()
    );
    let client = SummaryClient::new(&config.api_url);
    let response = client.generate_summary(from, to, &entries, focus)?;

    println!("{}", response.summary);
    if !response.highlights.is_empty() {
        println!();
        for highlight in &response.highlights {
            println!("  • {}", highlight);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn test_config(dir: &std::path::Path) -> Config {
        Config {
            data_dir: dir.to_path_buf(),
            // Nothing listens here; calls fail fast
            api_url: "http://127.0.0.1:1".to_string(),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_inverted_range_is_rejected() {
        let temp_dir = tempdir().unwrap();
        let config = test_config(temp_dir.path());

        let result = run(&config, date(2024, 2, 1), date(2024, 1, 1), None);
        match result {
            Err(AppError::Journal(msg)) => assert!(msg.contains("after")),
            _ => panic!("Expected Journal error for inverted range"),
        }
    }

    #[test]
    fn test_empty_range_skips_service_call() {
        let temp_dir = tempdir().unwrap();
        let config = test_config(temp_dir.path());

        // No entries in range: succeeds without ever reaching the (dead) service
        let result = run(&config, date(2024, 1, 1), date(2024, 1, 31), None);
        assert!(result.is_ok());
    }
}
