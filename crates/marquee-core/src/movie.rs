//! The `Movie` entity and its derived rating views.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Lowest accepted rating value (inclusive).
pub const MIN_RATING: u8 = 1;
/// Highest accepted rating value (inclusive).
pub const MAX_RATING: u8 = 5;

/// A movie record in the catalog.
///
/// The `id` is caller-supplied, unique, and immutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    /// Unique movie identifier (equal to the store key).
    pub id: String,
    /// Movie title.
    pub title: String,
    /// Movie director.
    pub director: String,
    /// Release year, bounded by [`validate::MIN_RELEASE_YEAR`] and the
    /// wall-clock upper bound at validation time.
    ///
    /// [`validate::MIN_RELEASE_YEAR`]: crate::validate::MIN_RELEASE_YEAR
    pub release_year: i32,
    /// Genre label, matched case-insensitively by the genre filter.
    pub genre: String,
    /// Submitted ratings in insertion order. Append-only; duplicates are
    /// kept so they accumulate correctly in the average.
    #[serde(default)]
    pub ratings: Vec<u8>,
}

impl Movie {
    /// Arithmetic mean of all ratings, rounded to one decimal place
    /// (half-away-from-zero).
    ///
    /// Returns `None` when no ratings have been submitted. Callers that
    /// need a sort key should treat `None` as `0.0`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn average_rating(&self) -> Option<f64> {
        if self.ratings.is_empty() {
            return None;
        }
        let sum: u32 = self.ratings.iter().map(|rating| u32::from(*rating)).sum();
        let mean = f64::from(sum) / self.ratings.len() as f64;
        Some((mean * 10.0).round() / 10.0)
    }
}

/// Partial update applied to an existing movie.
///
/// Absent fields are left unchanged. `id` and `ratings` are never altered
/// by an update.
#[derive(Debug, Clone, Default)]
pub struct MovieUpdate {
    /// Replacement title, if any.
    pub title: Option<String>,
    /// Replacement director, if any.
    pub director: Option<String>,
    /// Replacement release year, if any.
    pub release_year: Option<i32>,
    /// Replacement genre, if any.
    pub genre: Option<String>,
}
