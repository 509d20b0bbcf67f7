//! Insight generation.
//!
//! Composes the outputs of the distribution, tag, and streak calculations
//! into an ordered list of human-readable statements. The order is part of
//! the contract — the presentation layer renders the list top to bottom.

use crate::analytics::{current_streak, longest_streak, mood_distribution, tag_stats};
use crate::constants::{MILESTONE_ENTRY_COUNT, RECORD_STREAK_DAYS};
use crate::journal::Journal;
use chrono::NaiveDate;
use tracing::debug;

/// The kind of observation an insight makes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsightCategory {
    /// About the mood distribution.
    Mood,
    /// About tag frequency.
    Tag,
    /// About tracking continuity.
    Streak,
    /// About a correlation or accumulated habit.
    Pattern,
}

/// A single human-presentable statement derived from aggregate statistics.
///
/// Insights are frozen snapshots: regenerating after new entries produces a
/// different list, but an emitted insight never updates retroactively.
#[derive(Debug, Clone, PartialEq)]
pub struct Insight {
    /// What kind of observation this is.
    pub category: InsightCategory,
    /// Short headline.
    pub title: String,
    /// One-sentence elaboration.
    pub description: String,
    /// Optional icon token for rendering.
    pub icon: Option<&'static str>,
}

/// Generates the ranked insight feed for a journal snapshot.
///
/// Rules fire in a fixed priority order; a rule whose precondition is false
/// emits nothing, so the list may be empty for a fresh journal:
///
/// 1. Current streak > 0 → streak insight with the exact day count.
/// 2. Longest streak > 7 → a separate record-streak insight (1 and 2 can
///    both appear).
/// 3. Any mood-bearing entries → the single most frequent mood, with count
///    and percentage to one decimal place.
/// 4. Any tags → the single most frequent tag with its count.
/// 5. Top tag has an associated mood → a pattern insight naming its top
///    correlation.
/// 6. More than 30 mood-bearing entries → a milestone insight.
pub fn generate_insights(journal: &Journal, today: NaiveDate) -> Vec<Insight> {
    let mut insights = Vec::new();
    let mood_stats = mood_distribution(journal);
    let tag_stats = tag_stats(journal);
    let current = current_streak(journal, today);
    let longest = longest_streak(journal);

    debug!(
        current_streak = current,
        longest_streak = longest,
        moods = mood_stats.len(),
        tags = tag_stats.len(),
        "Generating insights"
    );

    if current > 0 {
        insights.push(Insight {
            category: InsightCategory::Streak,
            title: format!("{} Day Streak", current),
            description: format!(
                "You've tracked your mood for {} consecutive days!",
                current
            ),
            icon: Some("🔥"),
        });
    }

    if longest > RECORD_STREAK_DAYS {
        insights.push(Insight {
            category: InsightCategory::Streak,
            title: format!("Longest Streak: {} Days", longest),
            description: "Keep up the great tracking habit!".to_string(),
            icon: Some("🏆"),
        });
    }

    if let Some(top_mood) = mood_stats.first() {
        insights.push(Insight {
            category: InsightCategory::Mood,
            title: format!("Most Common Mood: {}", top_mood.label),
            description: format!(
                "You felt {} {} times ({:.1}%)",
                top_mood.label.to_lowercase(),
                top_mood.count,
                top_mood.percentage
            ),
            icon: Some("😊"),
        });
    }

    if let Some(top_tag) = tag_stats.first() {
        insights.push(Insight {
            category: InsightCategory::Tag,
            title: format!("Top Activity: {}", top_tag.tag),
            description: format!("You mentioned \"{}\" {} times", top_tag.tag, top_tag.count),
            icon: Some("⭐"),
        });

        if let Some(top_mood_for_tag) = top_tag.associated_moods.first() {
            insights.push(Insight {
                category: InsightCategory::Pattern,
                title: format!("{} → {}", top_tag.tag, top_mood_for_tag.label),
                description: format!(
                    "You often feel {} when you {}",
                    top_mood_for_tag.label.to_lowercase(),
                    top_tag.tag
                ),
                icon: Some("💡"),
            });
        }
    }

    let total_tracked: usize = mood_stats.iter().map(|s| s.count).sum();
    if total_tracked > MILESTONE_ENTRY_COUNT {
        insights.push(Insight {
            category: InsightCategory::Pattern,
            title: format!("{} Days Tracked", total_tracked),
            description: "Great job building this habit!".to_string(),
            icon: Some("📊"),
        });
    }

    insights
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::moods;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_empty_journal_yields_no_insights() {
        let insights = generate_insights(&Journal::new(), date(2024, 6, 15));
        assert!(insights.is_empty());
    }

    #[test]
    fn test_current_streak_insight_names_day_count() {
        let mut journal = Journal::new();
        let today = date(2024, 6, 15);
        journal.entry_mut(date(2024, 6, 14)).mood = moods::resolve("Calm");
        journal.entry_mut(today).mood = moods::resolve("Calm");

        let insights = generate_insights(&journal, today);
        assert_eq!(insights[0].category, InsightCategory::Streak);
        assert_eq!(insights[0].title, "2 Day Streak");
        assert!(insights[0].description.contains("2 consecutive days"));
    }

    #[test]
    fn test_no_streak_insight_when_today_untracked() {
        let mut journal = Journal::new();
        journal.entry_mut(date(2024, 6, 14)).mood = moods::resolve("Calm");

        let insights = generate_insights(&journal, date(2024, 6, 15));
        assert!(insights
            .iter()
            .all(|i| !i.title.ends_with("Day Streak")));
    }

    #[test]
    fn test_record_streak_requires_more_than_seven_days() {
        let mut journal = Journal::new();
        let today = date(2024, 6, 15);
        // Exactly 7 consecutive days: current-streak insight only
        for day in 9..=15 {
            journal.entry_mut(date(2024, 6, day)).mood = moods::resolve("Happy");
        }
        let insights = generate_insights(&journal, today);
        assert!(insights.iter().all(|i| !i.title.starts_with("Longest")));

        // An eighth day crosses the record threshold; both streak insights appear
        journal.entry_mut(date(2024, 6, 8)).mood = moods::resolve("Happy");
        let insights = generate_insights(&journal, today);
        assert_eq!(insights[0].title, "8 Day Streak");
        assert_eq!(insights[1].title, "Longest Streak: 8 Days");
    }

    #[test]
    fn test_top_mood_insight_has_count_and_percentage() {
        let mut journal = Journal::new();
        journal.entry_mut(date(2024, 1, 1)).mood = moods::resolve("Happy");
        journal.entry_mut(date(2024, 1, 3)).mood = moods::resolve("Happy");
        journal.entry_mut(date(2024, 1, 5)).mood = moods::resolve("Sad");

        let insights = generate_insights(&journal, date(2024, 6, 15));
        let mood_insight = insights
            .iter()
            .find(|i| i.category == InsightCategory::Mood)
            .unwrap();
        assert_eq!(mood_insight.title, "Most Common Mood: Happy");
        assert!(mood_insight.description.contains("happy 2 times"));
        assert!(mood_insight.description.contains("66.7%"));
    }

    #[test]
    fn test_tag_and_pattern_insights() {
        let mut journal = Journal::new();
        for day in 1..=3 {
            let entry = journal.entry_mut(date(2024, 1, day));
            entry.mood = moods::resolve("Energetic");
            entry.add_tag("gym");
        }

        let insights = generate_insights(&journal, date(2024, 6, 15));
        let tag_insight = insights
            .iter()
            .find(|i| i.category == InsightCategory::Tag)
            .unwrap();
        assert_eq!(tag_insight.title, "Top Activity: gym");
        assert!(tag_insight.description.contains("\"gym\" 3 times"));

        let pattern = insights
            .iter()
            .find(|i| i.category == InsightCategory::Pattern)
            .unwrap();
        assert_eq!(pattern.title, "gym → Energetic");
        assert!(pattern.description.contains("energetic when you gym"));
    }

    #[test]
    fn test_no_pattern_insight_without_associated_mood() {
        let mut journal = Journal::new();
        journal.entry_mut(date(2024, 1, 1)).add_tag("travel");

        let insights = generate_insights(&journal, date(2024, 6, 15));
        assert!(insights
            .iter()
            .any(|i| i.category == InsightCategory::Tag));
        assert!(insights
            .iter()
            .all(|i| i.category != InsightCategory::Pattern));
    }

    #[test]
    fn test_milestone_after_thirty_one_tracked_days() {
        let mut journal = Journal::new();
        let today = date(2024, 1, 31);
        for day in 1..=31 {
            let entry = journal.entry_mut(date(2024, 1, day));
            entry.mood = moods::resolve("Happy");
        }
        journal.entry_mut(date(2024, 1, 10)).add_tag("work");

        let insights = generate_insights(&journal, today);

        // Mood distribution: Happy at 100%
        let mood_insight = insights
            .iter()
            .find(|i| i.category == InsightCategory::Mood)
            .unwrap();
        assert!(mood_insight.description.contains("100.0%"));

        // Top tag: work
        let tag_insight = insights
            .iter()
            .find(|i| i.category == InsightCategory::Tag)
            .unwrap();
        assert!(tag_insight.title.contains("work"));

        // Milestone for 31 tracked days
        let milestone = insights
            .iter()
            .find(|i| i.title == "31 Days Tracked")
            .unwrap();
        assert_eq!(milestone.category, InsightCategory::Pattern);
        assert_eq!(milestone.icon, Some("📊"));
    }

    #[test]
    fn test_exactly_thirty_days_is_not_a_milestone() {
        let mut journal = Journal::new();
        for day in 1..=30 {
            journal.entry_mut(date(2024, 1, day)).mood = moods::resolve("Calm");
        }

        let insights = generate_insights(&journal, date(2024, 3, 1));
        assert!(insights.iter().all(|i| !i.title.ends_with("Days Tracked")));
    }

    #[test]
    fn test_insight_order_is_streak_mood_tag_pattern_milestone() {
        let mut journal = Journal::new();
        let today = date(2024, 2, 10);
        // 41 consecutive tracked days ending today, tagged throughout
        let mut day = date(2024, 1, 1);
        while day <= today {
            let entry = journal.entry_mut(day);
            entry.mood = moods::resolve("Content");
            entry.add_tag("walks");
            day = day.succ_opt().unwrap();
        }

        let insights = generate_insights(&journal, today);
        let categories: Vec<InsightCategory> = insights.iter().map(|i| i.category).collect();
        assert_eq!(
            categories,
            vec![
                InsightCategory::Streak,
                InsightCategory::Streak,
                InsightCategory::Mood,
                InsightCategory::Tag,
                InsightCategory::Pattern,
                InsightCategory::Pattern,
            ]
        );
    }

    #[test]
    fn test_idempotent_on_same_snapshot() {
        let mut journal = Journal::new();
        let today = date(2024, 6, 15);
        journal.entry_mut(today).mood = moods::resolve("Happy");

        assert_eq!(
            generate_insights(&journal, today),
            generate_insights(&journal, today)
        );
    }
}
