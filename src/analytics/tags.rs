//! Tag statistics with mood co-occurrence.

use crate::constants::MAX_ASSOCIATED_MOODS;
use crate::journal::Journal;

/// One mood's co-occurrence count with a tag.
#[derive(Debug, Clone, PartialEq)]
pub struct MoodAssociation {
    /// Mood label.
    pub label: String,
    /// Color token, from whichever entry first paired this mood with the tag.
    pub color: String,
    /// Number of entries carrying both the tag and this mood.
    pub count: usize,
}

/// Statistics for one tag across the journal.
#[derive(Debug, Clone, PartialEq)]
pub struct TagStat {
    /// The tag string.
    pub tag: String,
    /// Number of entries whose tag set contains this tag.
    pub count: usize,
    /// Moods co-occurring with this tag, ranked descending by count and
    /// truncated to the top three.
    pub associated_moods: Vec<MoodAssociation>,
}

/// Computes per-tag statistics with mood correlation.
///
/// For every tag appearing in any entry's tag set, counts total occurrences
/// across the journal, and independently counts co-occurrences with each mood
/// label (an entry contributes one co-occurrence when it has both the tag and
/// a mood). A co-occurrence is counted once per entry. `associated_moods` is
/// sorted descending by count and truncated to the top three; the tag list
/// itself is sorted descending by total count. Both sorts are stable, so ties
/// keep first-encountered (ascending date) order. Entries with no tags
/// contribute nothing.
///
/// This answers "when tag X appears, what moods usually accompany it", which
/// feeds the pattern insight downstream.
pub fn tag_stats(journal: &Journal) -> Vec<TagStat> {
    let mut stats: Vec<TagStat> = Vec::new();

    for entry in journal.entries() {
        for tag in &entry.tags {
            let idx = match stats.iter().position(|s| s.tag == *tag) {
                Some(idx) => idx,
                None => {
                    stats.push(TagStat {
                        tag: tag.clone(),
                        count: 0,
                        associated_moods: Vec::new(),
                    });
                    stats.len() - 1
                }
            };
            let stat = &mut stats[idx];
            stat.count += 1;

            if let Some(mood) = &entry.mood {
                match stat
                    .associated_moods
                    .iter_mut()
                    .find(|a| a.label == mood.label)
                {
                    Some(assoc) => assoc.count += 1,
                    None => stat.associated_moods.push(MoodAssociation {
                        label: mood.label.clone(),
                        color: mood.color.clone(),
                        count: 1,
                    }),
                }
            }
        }
    }

    for stat in &mut stats {
        stat.associated_moods.sort_by(|a, b| b.count.cmp(&a.count));
        stat.associated_moods.truncate(MAX_ASSOCIATED_MOODS);
    }

    stats.sort_by(|a, b| b.count.cmp(&a.count));
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::moods;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_empty_journal_yields_no_tag_stats() {
        assert!(tag_stats(&Journal::new()).is_empty());
    }

    #[test]
    fn test_entries_without_tags_contribute_nothing() {
        let mut journal = Journal::new();
        journal.entry_mut(date(2024, 1, 1)).mood = moods::resolve("Happy");

        assert!(tag_stats(&journal).is_empty());
    }

    #[test]
    fn test_tag_count_equals_entries_containing_tag() {
        let mut journal = Journal::new();
        for day in 1..=4 {
            journal.entry_mut(date(2024, 1, day)).add_tag("work");
        }
        journal.entry_mut(date(2024, 1, 5)).add_tag("gym");

        let stats = tag_stats(&journal);
        assert_eq!(stats[0].tag, "work");
        assert_eq!(stats[0].count, 4);
        assert_eq!(stats[1].tag, "gym");
        assert_eq!(stats[1].count, 1);
    }

    #[test]
    fn test_mood_correlation() {
        // gym twice with Calm, one Angry day with no tags
        let mut journal = Journal::new();
        let e1 = journal.entry_mut(date(2024, 1, 1));
        e1.mood = moods::resolve("Calm");
        e1.add_tag("gym");
        let e2 = journal.entry_mut(date(2024, 1, 2));
        e2.mood = moods::resolve("Calm");
        e2.add_tag("gym");
        journal.entry_mut(date(2024, 1, 3)).mood = moods::resolve("Angry");

        let stats = tag_stats(&journal);
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].tag, "gym");
        assert_eq!(stats[0].count, 2);
        assert_eq!(stats[0].associated_moods.len(), 1);
        assert_eq!(stats[0].associated_moods[0].label, "Calm");
        assert_eq!(stats[0].associated_moods[0].count, 2);
    }

    #[test]
    fn test_tag_without_mood_counts_but_adds_no_association() {
        let mut journal = Journal::new();
        journal.entry_mut(date(2024, 1, 1)).add_tag("travel");

        let stats = tag_stats(&journal);
        assert_eq!(stats[0].count, 1);
        assert!(stats[0].associated_moods.is_empty());
    }

    #[test]
    fn test_associated_moods_truncated_to_top_three() {
        let mut journal = Journal::new();
        // Four distinct moods co-occur with "friends"; "Happy" most often
        let plan = [
            (1, "Happy"),
            (2, "Happy"),
            (3, "Happy"),
            (4, "Calm"),
            (5, "Calm"),
            (6, "Sad"),
            (7, "Sad"),
            (8, "Tired"),
        ];
        for (day, label) in plan {
            let entry = journal.entry_mut(date(2024, 2, day));
            entry.mood = moods::resolve(label);
            entry.add_tag("friends");
        }

        let stats = tag_stats(&journal);
        let assoc = &stats[0].associated_moods;
        assert_eq!(assoc.len(), 3);
        assert_eq!(assoc[0].label, "Happy");
        assert_eq!(assoc[0].count, 3);
        // Calm and Sad tie at 2; Calm was encountered first
        assert_eq!(assoc[1].label, "Calm");
        assert_eq!(assoc[2].label, "Sad");
    }

    #[test]
    fn test_tag_ties_keep_first_encountered_order() {
        let mut journal = Journal::new();
        journal.entry_mut(date(2024, 1, 1)).add_tag("reading");
        journal.entry_mut(date(2024, 1, 2)).add_tag("cooking");

        let stats = tag_stats(&journal);
        assert_eq!(stats[0].tag, "reading");
        assert_eq!(stats[1].tag, "cooking");
    }

    #[test]
    fn test_association_color_from_first_pairing() {
        let mut journal = Journal::new();
        let entry = journal.entry_mut(date(2024, 1, 1));
        entry.mood = moods::resolve("Excited");
        entry.add_tag("music");

        let stats = tag_stats(&journal);
        assert_eq!(stats[0].associated_moods[0].color, "#C8BFE7");
    }

    #[test]
    fn test_idempotent_on_same_snapshot() {
        let mut journal = Journal::new();
        let entry = journal.entry_mut(date(2024, 1, 1));
        entry.mood = moods::resolve("Happy");
        entry.add_tag("work");

        assert_eq!(tag_stats(&journal), tag_stats(&journal));
    }
}
