//! # Review model and review drafts
//!
//! [`Review`] is what the API returns for a place's reviews; [`ReviewDraft`] is
//! the validated input of the add-review form.
//!
//! The API is loose about reviews: ratings arrive as numbers or numeric
//! strings, timestamps as RFC 3339 or as naive ISO strings, and the list is
//! either bare, wrapped in `data`, or wrapped in `data.reviews`. All of that is
//! absorbed here.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::ValidationError;

/// Maximum review text length, in characters.
pub const MAX_TEXT_CHARS: usize = 1000;
/// Highest rating a review can carry.
pub const MAX_RATING: u8 = 5;

/// The author projection embedded in a review.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReviewAuthor {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// A review of a place.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default, deserialize_with = "lenient_rating")]
    pub rating: i64,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub user: Option<ReviewAuthor>,
    #[serde(default)]
    pub place_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

fn lenient_rating<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64))
            .unwrap_or(0),
        Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    })
}

impl Review {
    /// Rating clamped into the displayable `0..=5` range.
    pub fn clamped_rating(&self) -> u8 {
        self.rating.clamp(0, MAX_RATING as i64) as u8
    }

    /// Filled and empty stars, e.g. `★★★☆☆`.
    pub fn stars(&self) -> String {
        star_string(self.clamped_rating())
    }

    pub fn display_text(&self) -> &str {
        self.text
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or("No comment provided")
    }

    pub fn author_name(&self) -> Option<&str> {
        self.user
            .as_ref()
            .and_then(|u| u.name.as_deref())
            .filter(|n| !n.is_empty())
    }

    /// Creation date as `January 5, 2024`, or `Invalid date`.
    pub fn formatted_date(&self) -> String {
        self.created_at
            .as_deref()
            .and_then(parse_timestamp)
            .map(|date| date.format("%B %-d, %Y").to_string())
            .unwrap_or_else(|| "Invalid date".to_string())
    }
}

pub fn star_string(rating: u8) -> String {
    let filled = rating.min(MAX_RATING) as usize;
    format!(
        "{}{}",
        "★".repeat(filled),
        "☆".repeat(MAX_RATING as usize - filled)
    )
}

fn parse_timestamp(raw: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

#[derive(Clone, Debug, Deserialize)]
pub struct ReviewData {
    #[serde(default)]
    pub reviews: Vec<Review>,
}

/// Body of `GET /places/{id}/reviews`.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum ReviewList {
    Bare(Vec<Review>),
    Nested { data: ReviewData },
    Wrapped { data: Vec<Review> },
    Unknown(Value),
}

impl ReviewList {
    /// The reviews, or nothing if the body had an unknown shape.
    pub fn into_reviews(self) -> Vec<Review> {
        match self {
            Self::Bare(reviews) => reviews,
            Self::Nested { data } => data.reviews,
            Self::Wrapped { data } => data,
            Self::Unknown(_) => Vec::new(),
        }
    }
}

/// Validated body of `POST /places/{id}/reviews`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ReviewDraft {
    pub text: String,
    pub rating: u8,
}

impl ReviewDraft {
    /// Validate raw form input.
    ///
    /// The rating must be an integer in `1..=5`; the text is trimmed and must be
    /// non-empty and at most [`MAX_TEXT_CHARS`] characters.
    pub fn parse(rating: &str, text: &str) -> Result<Self, ValidationError> {
        let rating = validate_rating(rating)?;
        let text = validate_text(text)?;
        Ok(Self { text, rating })
    }
}

pub fn validate_rating(raw: &str) -> Result<u8, ValidationError> {
    match raw.trim().parse::<u8>() {
        Ok(r) if (1..=MAX_RATING).contains(&r) => Ok(r),
        _ => Err(ValidationError::Rating),
    }
}

pub fn validate_text(raw: &str) -> Result<String, ValidationError> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(ValidationError::EmptyText);
    }
    if text.chars().count() > MAX_TEXT_CHARS {
        return Err(ValidationError::TextTooLong);
    }
    Ok(text.to_string())
}
