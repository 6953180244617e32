//! Field validation rules shared by create, update, and rating payloads.
//!
//! Validation collects every failing field into a list of
//! [`ValidationIssue`]s rather than failing fast, so clients see all
//! problems with a payload in a single response.

use chrono::{Datelike, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::movie::{MAX_RATING, MIN_RATING};

/// Earliest accepted release year (the first motion pictures).
pub const MIN_RELEASE_YEAR: i32 = 1888;

/// Years allowed beyond the current year for announced releases.
pub const RELEASE_YEAR_FUTURE_SLACK: i32 = 5;

/// Latest accepted release year, evaluated against the wall clock at
/// validation time rather than frozen at process start.
#[must_use]
pub fn max_release_year() -> i32 {
    Utc::now().year() + RELEASE_YEAR_FUTURE_SLACK
}

/// A single field-level validation failure.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ValidationIssue {
    /// The payload field that failed validation.
    pub field: String,
    /// Human-readable description of the failure.
    pub message: String,
}

impl ValidationIssue {
    /// Creates a new issue for the given field.
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Accumulates field-level issues while extracting normalized values.
///
/// Each `require_*`/`optional_*` call returns the extracted value (or
/// `None` on failure) and records the failure; [`Validator::finish`]
/// reports every issue found.
#[derive(Debug, Default)]
pub struct Validator {
    issues: Vec<ValidationIssue>,
}

impl Validator {
    /// Creates an empty validator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an issue directly.
    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.issues.push(ValidationIssue::new(field, message));
    }

    /// Requires a non-empty string field.
    pub fn require_string(&mut self, field: &str, value: Option<String>) -> Option<String> {
        match value {
            Some(value) if !value.trim().is_empty() => Some(value),
            Some(_) => {
                self.push(field, format!("{field} must be a non-empty string"));
                None
            }
            None => {
                self.push(field, format!("{field} is required"));
                None
            }
        }
    }

    /// Validates an optional string field; absent is fine, empty is not.
    pub fn optional_string(&mut self, field: &str, value: Option<String>) -> Option<String> {
        match value {
            Some(value) if value.trim().is_empty() => {
                self.push(field, format!("{field} must be a non-empty string"));
                None
            }
            other => other,
        }
    }

    /// Requires a release year within the accepted bounds.
    pub fn require_release_year(&mut self, value: Option<i64>) -> Option<i32> {
        match value {
            Some(year) => self.release_year(year),
            None => {
                self.push("releaseYear", "releaseYear is required");
                None
            }
        }
    }

    /// Validates a release year within `[MIN_RELEASE_YEAR, max_release_year()]`.
    pub fn release_year(&mut self, year: i64) -> Option<i32> {
        let max = i64::from(max_release_year());
        if year < i64::from(MIN_RELEASE_YEAR) || year > max {
            self.push(
                "releaseYear",
                format!("releaseYear must be between {MIN_RELEASE_YEAR} and {max}"),
            );
            return None;
        }
        i32::try_from(year).ok()
    }

    /// Requires an integer rating in `[MIN_RATING, MAX_RATING]`.
    pub fn require_rating(&mut self, value: Option<i64>) -> Option<u8> {
        let Some(rating) = value else {
            self.push("rating", "rating is required");
            return None;
        };
        if rating < i64::from(MIN_RATING) || rating > i64::from(MAX_RATING) {
            self.push(
                "rating",
                format!("rating must be an integer between {MIN_RATING} and {MAX_RATING}"),
            );
            return None;
        }
        u8::try_from(rating).ok()
    }

    /// Returns `Ok(())` when no issues were recorded, otherwise every
    /// issue found.
    ///
    /// # Errors
    ///
    /// Returns the collected issues when any field failed validation.
    pub fn finish(self) -> Result<(), Vec<ValidationIssue>> {
        if self.issues.is_empty() {
            Ok(())
        } else {
            Err(self.issues)
        }
    }
}
