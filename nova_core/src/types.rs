//! Content records served by the data service.
//!
//! All records are plain values: cloned out of the catalog on every fetch,
//! never mutated afterwards. Field names serialize in camelCase so the JSON
//! shape matches what a real content backend would send.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Brand strings shown in the chrome and hero.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    /// Full brand name
    pub name: String,
    /// One-line tagline
    pub tagline: String,
    /// Label of the primary call to action
    pub primary_cta: String,
    /// Label of the secondary call to action
    pub secondary_cta: String,
}

/// A headline figure. `value` is display text ("1,200+"), not a number.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    /// Caption under the figure
    pub label: String,
    /// Display value
    pub value: String,
}

/// Office location, display only.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Office {
    /// City name
    pub city: String,
    /// Region or country label
    pub region: String,
}

/// Site-wide metadata bundle.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaData {
    /// Brand strings
    pub brand: Brand,
    /// Headline figures, in display order
    pub stats: Vec<Stat>,
    /// Offices, in display order
    pub offices: Vec<Office>,
}

impl MetaData {
    /// Stats worth rendering. `None` when there are none, so callers never
    /// emit an empty grid.
    pub fn visible_stats(&self) -> Option<&[Stat]> {
        if self.stats.is_empty() {
            None
        } else {
            Some(&self.stats)
        }
    }
}

/// A program pitch.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    /// Program name
    pub title: String,
    /// Short pitch
    pub description: String,
    /// Bullet features
    pub features: Vec<String>,
}

/// An insights article teaser.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Stable id, used as the list key
    pub id: String,
    /// Headline
    pub title: String,
    /// Teaser text
    pub excerpt: String,
    /// Byline
    pub author: String,
    /// Category badge
    pub category: String,
    /// ISO-8601 date (`YYYY-MM-DD`)
    pub published_at: String,
}

impl Article {
    /// Parsed publication date, if `published_at` is a valid ISO date.
    pub fn published_on(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.published_at, "%Y-%m-%d").ok()
    }

    /// Human date for the card footer, e.g. "May 15, 2024".
    ///
    /// Falls back to the raw string when it does not parse.
    pub fn display_date(&self) -> String {
        match self.published_on() {
            Some(date) => date.format("%B %-d, %Y").to_string(),
            None => self.published_at.clone(),
        }
    }
}

/// A navigation entry. `href` is a fragment-routed link (`#/contact`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    /// Link text
    pub label: String,
    /// Link target
    pub href: String,
}

/// Free-form contact form payload.
///
/// Keys are field names, values are whatever the visitor typed. Nothing is
/// validated here; see [`crate::service::DataService::submit_contact_form`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactSubmission {
    fields: BTreeMap<String, String>,
}

impl ContactSubmission {
    /// Empty submission.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style field setter.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Set a field, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), value.into());
    }

    /// Look up a field.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when no field was set.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// JSON form used for logging.
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.fields).unwrap_or_default()
    }
}

/// Acknowledgement state of a submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    /// The submission was accepted
    Received,
}

impl SubmissionStatus {
    /// Wire string (`"received"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Received => "received",
        }
    }
}

/// What the visitor gets back after submitting the contact form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    /// Always `received` on success
    pub status: SubmissionStatus,
    /// Opaque display-only reference
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn article(published_at: &str) -> Article {
        Article {
            id: "9".into(),
            published_at: published_at.into(),
            ..Default::default()
        }
    }

    #[test]
    fn article_serializes_in_camel_case() {
        let json = serde_json::to_value(article("2024-05-15")).expect("serialize");
        assert_eq!(json["publishedAt"], "2024-05-15");
        assert!(json.get("published_at").is_none());
    }

    #[test]
    fn brand_round_trips_camel_case_keys() {
        let json = r#"{"name":"N","tagline":"T","primaryCta":"Apply","secondaryCta":"View"}"#;
        let brand: Brand = serde_json::from_str(json).expect("deserialize");
        assert_eq!(brand.primary_cta, "Apply");
        assert_eq!(brand.secondary_cta, "View");
    }

    #[test]
    fn display_date_formats_iso_dates() {
        assert_eq!(article("2024-05-15").display_date(), "May 15, 2024");
        assert_eq!(article("2024-03-01").display_date(), "March 1, 2024");
    }

    #[test]
    fn display_date_keeps_unparseable_input() {
        assert_eq!(article("spring 2024").display_date(), "spring 2024");
        assert!(article("spring 2024").published_on().is_none());
    }

    #[test]
    fn visible_stats_hides_empty_collections() {
        let mut meta = MetaData::default();
        assert!(meta.visible_stats().is_none());

        meta.stats.push(Stat {
            label: "Courses".into(),
            value: "45+".into(),
        });
        assert_eq!(meta.visible_stats().map(<[Stat]>::len), Some(1));
    }

    #[test]
    fn contact_submission_is_a_flat_record() {
        let submission = ContactSubmission::new()
            .with("name", "A")
            .with("email", "a@b.com");

        assert_eq!(submission.get("name"), Some("A"));
        assert_eq!(submission.len(), 2);
        assert_eq!(submission.to_json(), r#"{"email":"a@b.com","name":"A"}"#);
    }

    #[test]
    fn receipt_status_serializes_lowercase() {
        let receipt = SubmissionReceipt {
            status: SubmissionStatus::Received,
            id: "abc".into(),
        };
        let json = serde_json::to_value(&receipt).expect("serialize");
        assert_eq!(json["status"], "received");
        assert_eq!(SubmissionStatus::Received.as_str(), "received");
    }
}
