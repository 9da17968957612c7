//! Canonical catalog item.
//!
//! One schema for the whole crate: the release-status shape with a bounded
//! star rating and a download count. Persisted and exchanged as camelCase
//! JSON, matching the stored data format and the TypeScript consumers.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Upper bound of the star-rating scale.
pub const RATING_MAX: f32 = 5.0;

/// A game in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts", derive(ts_rs::TS))]
#[cfg_attr(feature = "ts", ts(export))]
pub struct Game {
    /// Unique within a catalog; assigned by the store when an item arrives
    /// without one.
    #[serde(default)]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// ISO date (`YYYY-MM-DD`) when known.
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    /// Star rating on the 0-5 scale.
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub downloads: u64,
    /// Not yet released.
    #[serde(default)]
    pub coming_soon: bool,
    #[serde(default)]
    pub platforms: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Game {
    /// Number of filled stars for a 5-star display.
    pub fn star_count(&self) -> u8 {
        self.rating.round().clamp(0.0, RATING_MAX) as u8
    }

    /// Whether the title is out: not flagged coming-soon and its release
    /// date (when parseable) is not in the future.
    pub fn is_released(&self) -> bool {
        if self.coming_soon {
            return false;
        }
        match &self.release_date {
            Some(date) => NaiveDate::parse_from_str(date, "%Y-%m-%d")
                .map(|d| d <= Utc::now().date_naive())
                .unwrap_or(true),
            None => true,
        }
    }

    /// Release date for display: "Mar 03, 2017", the raw string if it does
    /// not parse, or "TBD".
    pub fn formatted_release(&self) -> String {
        match &self.release_date {
            Some(date) => {
                if let Ok(d) = NaiveDate::parse_from_str(date, "%Y-%m-%d") {
                    d.format("%b %d, %Y").to_string()
                } else {
                    date.clone()
                }
            }
            None => "TBD".to_string(),
        }
    }
}
