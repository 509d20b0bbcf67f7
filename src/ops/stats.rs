//! The statistics report: mood distribution, tag correlation, streaks.

use crate::analytics::{current_streak, longest_streak, mood_distribution, tag_stats};
use crate::config::Config;
use crate::errors::AppResult;
use crate::storage;
use chrono::NaiveDate;
use tracing::info;

/// Prints the full statistics report for the journal.
///
/// # Flow
///
/// 1. Load the journal (degrading to empty on failure — a broken file
///    should not take the report down)
/// 2. Run the analytics pipeline over the snapshot
/// 3. Print distribution, tag stats, and streaks
pub fn run(config: &Config, today: NaiveDate) -> AppResult<()> {
    let journal = storage::load_journal_or_empty(&config.data_dir);
    info!("Computing statistics over {} entries", journal.len());

    let distribution = mood_distribution(&journal);
    if distribution.is_empty() {
        println!("No moods recorded yet. Start with: pigment log <mood>");
        return Ok(());
    }

    println!("Mood distribution");
    for stat in &distribution {
        let bar = "█".repeat(stat.count.min(40));
        println!(
            "  {:<10} {:>4} ({:>5.1}%)  {}",
            stat.label, stat.count, stat.percentage, bar
        );
    }

    let tags = tag_stats(&journal);
    if !tags.is_empty() {
        println!();
        println!("Activities");
        for stat in &tags {
            let moods: Vec<String> = stat
                .associated_moods
                .iter()
                .map(|a| format!("{} ×{}", a.label, a.count))
                .collect();
            if moods.is_empty() {
                println!("  {:<12} {:>4}", stat.tag, stat.count);
            } else {
                println!("  {:<12} {:>4}  {}", stat.tag, stat.count, moods.join(", "));
            }
        }
    }

    println!();
    println!("Current streak: {} days", current_streak(&journal, today));
    println!("Longest streak: {} days", longest_streak(&journal));

    Ok(())
}
