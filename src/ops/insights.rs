//! The insight feed.

use crate::analytics::generate_insights;
use crate::config::Config;
use crate::errors::AppResult;
use crate::storage;
use chrono::NaiveDate;
use tracing::info;

/// Prints the ranked insight feed for the journal.
pub fn run(config: &Config, today: NaiveDate) -> AppResult<()> {
    let journal = storage::load_journal_or_empty(&config.data_dir);
    let insights = generate_insights(&journal, today);
    info!("Generated {} insights", insights.len());

    if insights.is_empty() {
        println!("No insights yet — log a few moods first.");
        return Ok(());
    }

    for insight in &insights {
        match insight.icon {
            Some(icon) => println!("{} {}", icon, insight.title),
            None => println!("{}", insight.title),
        }
        println!("   {}", insight.description);
    }

    Ok(())
}
