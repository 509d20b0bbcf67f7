//! The fixed mood catalog.
//!
//! Moods are a small, fixed set of (label, color) pairs. The catalog is not
//! user-extensible; per-entry intensity is an override on top of a catalog
//! mood, not part of the catalog itself.

use super::Mood;

/// A single catalog entry: a mood label and its display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogMood {
    /// Human-readable mood label (e.g. "Happy").
    pub label: &'static str,
    /// Hex color token used when rendering this mood.
    pub color: &'static str,
}

/// The full mood catalog.
pub const MOODS: &[CatalogMood] = &[
    CatalogMood {
        label: "Angry",
        color: "#FF6B6B",
    },
    CatalogMood {
        label: "Calm",
        color: "#4ECDC4",
    },
    CatalogMood {
        label: "Happy",
        color: "#FFE66D",
    },
    CatalogMood {
        label: "Relaxed",
        color: "#95E1D3",
    },
    CatalogMood {
        label: "Peaceful",
        color: "#A8E6CF",
    },
    CatalogMood {
        label: "Stressed",
        color: "#FF8B94",
    },
    CatalogMood {
        label: "Anxious",
        color: "#C7CEEA",
    },
    CatalogMood {
        label: "Tired",
        color: "#FFDAC1",
    },
    CatalogMood {
        label: "Energetic",
        color: "#B5EAD7",
    },
    CatalogMood {
        label: "Content",
        color: "#E2F0CB",
    },
    CatalogMood {
        label: "Sad",
        color: "#FF9AA2",
    },
    CatalogMood {
        label: "Excited",
        color: "#C8BFE7",
    },
];

/// Color token for days with no mood set.
pub const DEFAULT_COLOR: &str = "#E0E0E0";

/// Looks up a catalog mood by label, case-insensitively.
///
/// # Examples
///
/// ```
/// use pigment::journal::moods;
///
/// let mood = moods::find("happy").unwrap();
/// assert_eq!(mood.label, "Happy");
/// assert_eq!(mood.color, "#FFE66D");
/// assert!(moods::find("melancholy").is_none());
/// ```
pub fn find(label: &str) -> Option<&'static CatalogMood> {
    MOODS.iter().find(|m| m.label.eq_ignore_ascii_case(label))
}

/// Resolves a user-typed label into a `Mood` with the catalog color and no intensity.
pub fn resolve(label: &str) -> Option<Mood> {
    find(label).map(|m| Mood {
        label: m.label.to_string(),
        color: m.color.to_string(),
        intensity: None,
    })
}

/// Returns the catalog labels joined for use in error messages and help text.
pub fn label_list() -> String {
    MOODS
        .iter()
        .map(|m| m.label)
        .collect::<Vec<_>>()
        .join(", ")
}
