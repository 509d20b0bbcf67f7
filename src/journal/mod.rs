//! The journal data model.
//!
//! This module defines the in-memory representation of the journal: a sparse
//! mapping from calendar dates to day entries, plus the entry types themselves.
//! The journal is pure data — analytics functions borrow it read-only, and the
//! storage layer serializes it as a single JSON blob.

use crate::constants::{MAX_INTENSITY, MIN_INTENSITY};
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

pub mod moods;

/// A mood recorded on an entry: a catalog label and color, with an optional
/// per-day intensity on a 1–5 scale.
///
/// Absence of `intensity` means "unset", never zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mood {
    /// Catalog label (e.g. "Happy").
    pub label: String,
    /// Hex color token for rendering.
    pub color: String,
    /// Optional intensity on a 1–5 ordinal scale.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub intensity: Option<u8>,
}

impl Mood {
    /// Sets the intensity, validating it against the 1–5 scale.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Journal` if the intensity is outside 1–5.
    pub fn with_intensity(mut self, intensity: u8) -> AppResult<Self> {
        if !(MIN_INTENSITY..=MAX_INTENSITY).contains(&intensity) {
            return Err(AppError::Journal(format!(
                "Intensity must be between {} and {}, got {}",
                MIN_INTENSITY, MAX_INTENSITY, intensity
            )));
        }
        self.intensity = Some(intensity);
        Ok(self)
    }
}

/// A time-stamped sub-entry within a day, independent of the day's mood.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Moment {
    /// Unique identifier.
    pub id: Uuid,
    /// The instant this moment was recorded.
    pub time: DateTime<Utc>,
    /// Free-text content.
    pub content: String,
}

impl Moment {
    /// Creates a moment stamped with the current time.
    pub fn new(content: impl Into<String>) -> Self {
        Self::at(Utc::now(), content)
    }

    /// Creates a moment stamped with an explicit time.
    pub fn at(time: DateTime<Utc>, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            time,
            content: content.into(),
        }
    }
}

/// One calendar day's record: an optional mood, optional free-text notes,
/// a duplicate-free set of lowercase tags, and timestamped moments.
///
/// Notes and moments may coexist; the model does not force a choice between
/// them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// The calendar day this entry belongs to. Immutable once created; also
    /// the journal key.
    pub date: NaiveDate,
    /// The day's mood, if one was recorded.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub mood: Option<Mood>,
    /// Free-text notes for the day.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub notes: Option<String>,
    /// Lowercase, duplicate-free activity/context tags.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub tags: Vec<String>,
    /// Timestamped sub-entries, in recording order.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub timestamps: Vec<Moment>,
}

impl Entry {
    /// Creates an empty entry for the given date.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            mood: None,
            notes: None,
            tags: Vec::new(),
            timestamps: Vec::new(),
        }
    }

    /// Whether this entry carries a mood.
    pub fn has_mood(&self) -> bool {
        self.mood.is_some()
    }

    /// Adds a tag, lowercased and trimmed. Duplicates and empty strings are
    /// ignored. Returns whether the tag was newly added.
    pub fn add_tag(&mut self, tag: &str) -> bool {
        let tag = tag.trim().to_lowercase();
        if tag.is_empty() || self.tags.contains(&tag) {
            return false;
        }
        self.tags.push(tag);
        true
    }

    /// Removes a tag (case-insensitively). Returns whether it was present.
    pub fn remove_tag(&mut self, tag: &str) -> bool {
        let tag = tag.trim().to_lowercase();
        let before = self.tags.len();
        self.tags.retain(|t| *t != tag);
        self.tags.len() != before
    }

    /// Whether this entry holds no data beyond its date.
    pub fn is_blank(&self) -> bool {
        self.mood.is_none()
            && self.notes.is_none()
            && self.tags.is_empty()
            && self.timestamps.is_empty()
    }
}

/// The complete date-keyed collection of entries.
///
/// The map is sparse — only days the user touched have entries — and keyed by
/// calendar date. `BTreeMap` keeps iteration in ascending date order, which
/// the streak calculations rely on and which makes aggregation order
/// deterministic for any given snapshot. The map key always equals the
/// entry's own `date` field; the mutating accessors preserve that invariant.
///
/// # Examples
///
/// ```
/// use pigment::journal::{Journal, moods};
/// use chrono::NaiveDate;
///
/// let mut journal = Journal::new();
/// let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// journal.entry_mut(date).mood = moods::resolve("Happy");
/// assert_eq!(journal.len(), 1);
/// assert!(journal.get(date).unwrap().has_mood());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Journal {
    entries: BTreeMap<NaiveDate, Entry>,
}

impl Journal {
    /// Creates an empty journal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries in the journal.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the journal has no entries at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entry for a date, if present.
    pub fn get(&self, date: NaiveDate) -> Option<&Entry> {
        self.entries.get(&date)
    }

    /// Returns a mutable reference to the entry for a date, creating an empty
    /// entry first if the date has none.
    pub fn entry_mut(&mut self, date: NaiveDate) -> &mut Entry {
        self.entries.entry(date).or_insert_with(|| Entry::new(date))
    }

    /// Inserts an entry, keyed by its own date. Replaces any existing entry
    /// for that date, returning it.
    pub fn insert(&mut self, entry: Entry) -> Option<Entry> {
        self.entries.insert(entry.date, entry)
    }

    /// Removes the entry for a date, returning it if present.
    pub fn remove(&mut self, date: NaiveDate) -> Option<Entry> {
        self.entries.remove(&date)
    }

    /// Iterates entries in ascending date order.
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.entries.values()
    }

    /// Iterates entries within an inclusive date range, in ascending order.
    pub fn entries_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> impl Iterator<Item = &Entry> {
        self.entries.range(start..=end).map(|(_, e)| e)
    }
}
