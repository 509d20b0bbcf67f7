//! Mood distribution statistics.

use crate::journal::Journal;

/// Frequency statistics for one mood label across the journal.
#[derive(Debug, Clone, PartialEq)]
pub struct MoodStat {
    /// Mood label.
    pub label: String,
    /// Color token, taken from the first entry observed with this label.
    pub color: String,
    /// Number of entries carrying this label.
    pub count: usize,
    /// Share of mood-bearing entries, expressed 0–100.
    pub percentage: f64,
}

/// Computes the mood distribution over a journal snapshot.
///
/// Produces one `MoodStat` per distinct mood label present on at least one
/// mood-bearing entry. Entries without a mood are excluded from both the
/// numerator and the denominator; intensity is ignored. The result is ordered
/// descending by count, with ties keeping the order in which labels were
/// first encountered (ascending date order). An empty or mood-free journal
/// yields an empty vector, never a division by zero.
///
/// # Examples
///
/// ```
/// use pigment::analytics::mood_distribution;
/// use pigment::journal::{moods, Journal};
/// use chrono::NaiveDate;
///
/// let mut journal = Journal::new();
/// for day in 1..=3 {
///     let date = NaiveDate::from_ymd_opt(2024, 5, day).unwrap();
///     journal.entry_mut(date).mood = moods::resolve("Happy");
/// }
///
/// let stats = mood_distribution(&journal);
/// assert_eq!(stats.len(), 1);
/// assert_eq!(stats[0].count, 3);
/// assert_eq!(stats[0].percentage, 100.0);
/// ```
pub fn mood_distribution(journal: &Journal) -> Vec<MoodStat> {
    // Vec accumulator scanned by label: preserves first-encountered order for
    // the stable tie-break, and the catalog is small enough that a map buys
    // nothing.
    let mut stats: Vec<MoodStat> = Vec::new();
    let mut total = 0usize;

    for entry in journal.entries() {
        if let Some(mood) = &entry.mood {
            total += 1;
            match stats.iter_mut().find(|s| s.label == mood.label) {
                Some(stat) => stat.count += 1,
                None => stats.push(MoodStat {
                    label: mood.label.clone(),
                    color: mood.color.clone(),
                    count: 1,
                    percentage: 0.0,
                }),
            }
        }
    }

    if total == 0 {
        return Vec::new();
    }

    for stat in &mut stats {
        stat.percentage = (stat.count as f64 / total as f64) * 100.0;
    }

    // sort_by is stable, so equal counts keep first-encountered order
    stats.sort_by(|a, b| b.count.cmp(&a.count));
    stats
}
