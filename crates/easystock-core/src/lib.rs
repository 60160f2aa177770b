//! Domain records and reference fixtures for the `EasyStock` catalog.
//!
//! Label constants in this crate are the values stored in existing database
//! files and must not be changed: the reconciler in
//! `easystock-store-sqlite` matches on them byte-for-byte.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use time::{OffsetDateTime, UtcOffset};

pub mod baseline;

/// Category label for introductory terms.
pub const CATEGORY_BASIC: &str = "기본용어";
/// Category label for advanced terminology.
pub const CATEGORY_ADVANCED: &str = "고급용어";
/// Retired label ("financial metrics") that older installations used for
/// what is now [`CATEGORY_ADVANCED`].
pub const CATEGORY_DEPRECATED_METRICS: &str = "재무지표";

pub const RISK_LOW: &str = "낮음";
pub const RISK_MEDIUM: &str = "중간";
pub const RISK_HIGH: &str = "높음";

#[derive(Debug, Clone, thiserror::Error, Eq, PartialEq)]
pub enum CatalogError {
    #[error("validation error: {0}")]
    Validation(String),
    /// The record already exists; surfaced by callers that treat a
    /// [`FavoriteOutcome::AlreadyExists`] as a failure.
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("timestamp error: {0}")]
    Timestamp(String),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    Domestic,
    Overseas,
}

impl Region {
    /// Region assigned to stocks that carry no region tag.
    pub const DEFAULT: Self = Self::Overseas;

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Domestic => "국내",
            Self::Overseas => "해외",
        }
    }

    /// Accepts both the stored label and the English name.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "국내" | "domestic" => Some(Self::Domestic),
            "해외" | "overseas" => Some(Self::Overseas),
            _ => None,
        }
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Term {
    pub id: i64,
    pub term: String,
    pub category: String,
    pub simple_explanation: String,
    pub detailed_explanation: Option<String>,
    pub example: Option<String>,
    pub created_at: Option<String>,
}

impl Term {
    /// Case-insensitive match on the term or its short explanation, plus an
    /// exact category match when one is given.
    #[must_use]
    pub fn matches(&self, search: Option<&str>, category: Option<&str>) -> bool {
        let matches_search = search.map_or(true, |query| {
            let query = query.to_lowercase();
            self.term.to_lowercase().contains(&query)
                || self.simple_explanation.to_lowercase().contains(&query)
        });
        matches_search && category.map_or(true, |category| self.category == category)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Stock {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub sector: Option<String>,
    pub description: Option<String>,
    pub recommendation_reason: Option<String>,
    pub risk_level: Option<String>,
    /// Stored label; see [`Region::parse`]. Never empty once reconciled.
    pub region: Option<String>,
    pub created_at: Option<String>,
}

impl Stock {
    #[must_use]
    pub fn region_tag(&self) -> Option<Region> {
        self.region.as_deref().and_then(Region::parse)
    }

    /// Case-insensitive match on the name, or a substring of the code.
    #[must_use]
    pub fn matches_search(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase()) || self.code.contains(query)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FavoriteStock {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Feedback {
    pub id: i64,
    #[serde(rename = "type")]
    pub feedback_type: String,
    pub title: String,
    pub content: String,
    pub email: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Faq {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FavoriteInput {
    pub code: String,
    pub name: String,
}

impl FavoriteInput {
    /// Checks that both the code and the display name are present.
    ///
    /// # Errors
    /// Returns [`CatalogError::Validation`] when either field is empty.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.code.is_empty() || self.name.is_empty() {
            return Err(CatalogError::Validation(
                "missing required fields: code and name".to_string(),
            ));
        }
        Ok(())
    }
}

/// Outcome of an explicit favorite add.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FavoriteOutcome {
    Added(FavoriteStock),
    AlreadyExists,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeedbackInput {
    #[serde(rename = "type")]
    pub feedback_type: String,
    pub title: String,
    pub content: String,
    pub email: Option<String>,
}

impl FeedbackInput {
    /// # Errors
    /// Returns [`CatalogError::Validation`] when type, title or content is
    /// empty.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let missing: Vec<&str> = [
            ("type", &self.feedback_type),
            ("title", &self.title),
            ("content", &self.content),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
        .collect();

        if !missing.is_empty() {
            return Err(CatalogError::Validation(format!(
                "missing required fields: {}",
                missing.join(", ")
            )));
        }
        Ok(())
    }

    /// Email as it should be persisted: an empty string is stored as NULL,
    /// anything else verbatim.
    #[must_use]
    pub fn stored_email(&self) -> Option<&str> {
        self.email.as_deref().filter(|value| !value.is_empty())
    }
}

#[must_use]
pub fn now_utc() -> OffsetDateTime {
    OffsetDateTime::now_utc().to_offset(UtcOffset::UTC)
}

/// Formats a timestamp as whole-second RFC3339 in UTC.
///
/// Fixed width keeps `ORDER BY created_at` consistent with chronological
/// order.
///
/// # Errors
/// Returns [`CatalogError::Timestamp`] if formatting fails.
pub fn format_timestamp(value: OffsetDateTime) -> Result<String, CatalogError> {
    value
        .to_offset(UtcOffset::UTC)
        .replace_nanosecond(0)
        .map_err(|err| CatalogError::Timestamp(err.to_string()))?
        .format(&time::format_description::well_known::Rfc3339)
        .map_err(|err| CatalogError::Timestamp(format!("failed to format timestamp: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feedback(feedback_type: &str, title: &str, content: &str, email: Option<&str>) -> FeedbackInput {
        FeedbackInput {
            feedback_type: feedback_type.to_string(),
            title: title.to_string(),
            content: content.to_string(),
            email: email.map(ToString::to_string),
        }
    }

    #[test]
    fn region_labels_round_trip_through_parse() {
        for region in [Region::Domestic, Region::Overseas] {
            assert_eq!(Region::parse(region.as_str()), Some(region));
        }
        assert_eq!(Region::parse("overseas"), Some(Region::Overseas));
        assert_eq!(Region::parse(""), None);
        assert_eq!(Region::DEFAULT.as_str(), "해외");
    }

    #[test]
    fn feedback_validation_lists_missing_fields() {
        let err = match feedback("bug", "", "", None).validate() {
            Ok(()) => panic!("empty title and content must be rejected"),
            Err(err) => err,
        };
        assert_eq!(
            err,
            CatalogError::Validation("missing required fields: title, content".to_string())
        );
        assert!(feedback("bug", "T", "C", None).validate().is_ok());
        assert!(feedback("bug", " ", "C", None).validate().is_ok());
    }

    #[test]
    fn empty_email_is_stored_as_null() {
        assert_eq!(feedback("bug", "T", "C", None).stored_email(), None);
        assert_eq!(feedback("bug", "T", "C", Some("")).stored_email(), None);
        assert_eq!(
            feedback("bug", "T", "C", Some(" a@b.io ")).stored_email(),
            Some(" a@b.io ")
        );
    }

    #[test]
    fn favorite_validation_requires_code_and_name() {
        let missing_name = FavoriteInput {
            code: "AAPL".to_string(),
            name: String::new(),
        };
        assert!(missing_name.validate().is_err());

        let whitespace_name = FavoriteInput {
            code: "AAPL".to_string(),
            name: " ".to_string(),
        };
        assert!(whitespace_name.validate().is_ok());

        let complete = FavoriteInput {
            code: "AAPL".to_string(),
            name: "Apple Inc.".to_string(),
        };
        assert!(complete.validate().is_ok());
    }

    #[test]
    fn timestamps_are_whole_second_utc() {
        let value = match OffsetDateTime::from_unix_timestamp_nanos(1_760_000_000_123_456_789) {
            Ok(value) => value,
            Err(err) => panic!("invalid fixture timestamp: {err}"),
        };
        let formatted = match format_timestamp(value) {
            Ok(value) => value,
            Err(err) => panic!("format failed: {err}"),
        };
        assert_eq!(formatted, "2025-10-09T08:53:20Z");
    }

    #[test]
    fn term_filter_combines_search_and_category() {
        let term = Term {
            id: 1,
            term: "PER".to_string(),
            category: CATEGORY_ADVANCED.to_string(),
            simple_explanation: "주가수익비율".to_string(),
            detailed_explanation: None,
            example: None,
            created_at: None,
        };
        assert!(term.matches(None, None));
        assert!(term.matches(Some("per"), None));
        assert!(term.matches(Some("수익"), Some(CATEGORY_ADVANCED)));
        assert!(!term.matches(Some("per"), Some(CATEGORY_BASIC)));
        assert!(!term.matches(Some("roe"), None));
    }

    #[test]
    fn stock_search_matches_name_or_code() {
        let stock = Stock {
            id: 1,
            code: "AAPL".to_string(),
            name: "Apple Inc.".to_string(),
            sector: None,
            description: None,
            recommendation_reason: None,
            risk_level: None,
            region: None,
            created_at: None,
        };
        assert!(stock.matches_search("apple"));
        assert!(stock.matches_search("AAP"));
        assert!(!stock.matches_search("aapl x"));
        assert!(!stock.matches_search("msft"));
    }

    #[test]
    fn feedback_serializes_type_field_name() {
        let json = match serde_json::to_value(feedback("bug", "T", "C", None)) {
            Ok(value) => value,
            Err(err) => panic!("serialize failed: {err}"),
        };
        assert_eq!(json["type"], serde_json::json!("bug"));
        assert_eq!(json["email"], serde_json::Value::Null);
    }
}
