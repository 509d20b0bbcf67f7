//! Streak calculations over mood-bearing entries.
//!
//! Both functions are defined purely in terms of calendar-date contiguity of
//! entries that carry a mood; notes, tags, and moments are irrelevant. The
//! reference "today" is an explicit parameter rather than an ambient clock
//! read, so callers control it and tests are deterministic.

use crate::journal::Journal;
use chrono::NaiveDate;

/// Counts consecutive mood-bearing days ending today, walking backward.
///
/// Starts at `today` (inclusive) and walks back one day at a time, counting
/// days with a mood-bearing entry, stopping at the first day without one.
/// If today itself has no mood, the streak is 0 — a run that ended yesterday
/// does not count as current.
pub fn current_streak(journal: &Journal, today: NaiveDate) -> u32 {
    let mut streak = 0;
    let mut day = today;

    while journal.get(day).is_some_and(|e| e.has_mood()) {
        streak += 1;
        match day.pred_opt() {
            Some(prev) => day = prev,
            None => break,
        }
    }

    streak
}

/// Finds the longest run of consecutive mood-bearing calendar days.
///
/// Scans mood-bearing entry dates in ascending order and tracks the maximum
/// run length where consecutive dates differ by exactly one day. A gap resets
/// the running counter to 1 (the day after a gap starts a new run), not 0.
/// Empty journal → 0; a single mood-bearing day → 1.
pub fn longest_streak(journal: &Journal) -> u32 {
    let mut longest = 0u32;
    let mut run = 0u32;
    let mut prev: Option<NaiveDate> = None;

    for entry in journal.entries() {
        if !entry.has_mood() {
            continue;
        }
        run = match prev {
            Some(p) if entry.date.signed_duration_since(p).num_days() == 1 => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        prev = Some(entry.date);
    }

    longest
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::moods;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn journal_with_mood_days(days: &[NaiveDate]) -> Journal {
        let mut journal = Journal::new();
        for day in days {
            journal.entry_mut(*day).mood = moods::resolve("Content");
        }
        journal
    }

    #[test]
    fn test_current_streak_empty_journal() {
        let today = date(2024, 6, 15);
        assert_eq!(current_streak(&Journal::new(), today), 0);
    }

    #[test]
    fn test_current_streak_counts_back_from_today() {
        let today = date(2024, 6, 15);
        let journal = journal_with_mood_days(&[
            date(2024, 6, 13),
            date(2024, 6, 14),
            date(2024, 6, 15),
        ]);
        assert_eq!(current_streak(&journal, today), 3);
    }

    #[test]
    fn test_current_streak_zero_when_today_has_no_mood() {
        // A long run ending yesterday is not a current streak
        let today = date(2024, 6, 15);
        let journal = journal_with_mood_days(&[
            date(2024, 6, 12),
            date(2024, 6, 13),
            date(2024, 6, 14),
        ]);
        assert_eq!(current_streak(&journal, today), 0);
    }

    #[test]
    fn test_current_streak_zero_when_today_entry_is_moodless() {
        let today = date(2024, 6, 15);
        let mut journal = journal_with_mood_days(&[date(2024, 6, 14)]);
        journal.entry_mut(today).add_tag("work");
        assert_eq!(current_streak(&journal, today), 0);
    }

    #[test]
    fn test_current_streak_stops_at_gap() {
        let today = date(2024, 6, 15);
        let journal = journal_with_mood_days(&[
            date(2024, 6, 11),
            date(2024, 6, 12),
            // 13th missing
            date(2024, 6, 14),
            date(2024, 6, 15),
        ]);
        assert_eq!(current_streak(&journal, today), 2);
    }

    #[test]
    fn test_longest_streak_empty_journal() {
        assert_eq!(longest_streak(&Journal::new()), 0);
    }

    #[test]
    fn test_longest_streak_single_day() {
        let journal = journal_with_mood_days(&[date(2024, 1, 1)]);
        assert_eq!(longest_streak(&journal), 1);
    }

    #[test]
    fn test_longest_streak_with_gap() {
        let journal = journal_with_mood_days(&[
            date(2024, 1, 1),
            date(2024, 1, 2),
            date(2024, 1, 3),
            date(2024, 1, 5),
        ]);
        assert_eq!(longest_streak(&journal), 3);
    }

    #[test]
    fn test_longest_streak_gap_resets_to_one_not_zero() {
        let journal = journal_with_mood_days(&[
            date(2024, 1, 1),
            date(2024, 1, 3),
            date(2024, 1, 4),
            date(2024, 1, 5),
            date(2024, 1, 6),
        ]);
        assert_eq!(longest_streak(&journal), 4);
    }

    #[test]
    fn test_longest_streak_ignores_moodless_entries() {
        let mut journal = journal_with_mood_days(&[date(2024, 1, 1), date(2024, 1, 3)]);
        // A moodless day between two mood days does not bridge the gap
        journal.entry_mut(date(2024, 1, 2)).add_tag("work");
        assert_eq!(longest_streak(&journal), 1);
    }

    #[test]
    fn test_longest_streak_spans_month_boundary() {
        let journal = journal_with_mood_days(&[
            date(2024, 1, 30),
            date(2024, 1, 31),
            date(2024, 2, 1),
        ]);
        assert_eq!(longest_streak(&journal), 3);
    }

    #[test]
    fn test_streaks_idempotent_on_same_snapshot() {
        let today = date(2024, 6, 15);
        let journal = journal_with_mood_days(&[date(2024, 6, 14), date(2024, 6, 15)]);
        assert_eq!(
            current_streak(&journal, today),
            current_streak(&journal, today)
        );
        assert_eq!(longest_streak(&journal), longest_streak(&journal));
    }
}
