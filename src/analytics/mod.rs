//! The analytics engine.
//!
//! A single-pass, stateless pipeline over an in-memory [`Journal`](crate::journal::Journal)
//! snapshot. Every function here is pure: it borrows the journal read-only,
//! performs no I/O, keeps no state between calls, and returns a fresh result.
//! Callers re-run the pipeline after every journal change instead of relying
//! on incremental updates — recomputation is bounded by one entry per
//! calendar day, and full recomputation eliminates cache-invalidation bugs.
//!
//! Data flows one way:
//!
//! ```text
//! Journal ─┬─> mood_distribution ─┐
//!          ├─> tag_stats ─────────┼─> generate_insights ─> Vec<Insight>
//!          └─> streaks ───────────┘
//! ```
//!
//! # Module Structure
//!
//! - `distribution`: mood frequency counts and percentages
//! - `tags`: tag counts with mood co-occurrence correlation
//! - `streaks`: current and longest consecutive-day runs
//! - `insights`: ranked human-readable statements composed from the above

pub mod distribution;
pub mod insights;
pub mod streaks;
pub mod tags;

// Re-export commonly used types
pub use distribution::{mood_distribution, MoodStat};
pub use insights::{generate_insights, Insight, InsightCategory};
pub use streaks::{current_streak, longest_streak};
pub use tags::{tag_stats, MoodAssociation, TagStat};
