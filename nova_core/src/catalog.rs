//! The fixed reference payloads served by [`crate::DataService`].
//!
//! Every function builds a fresh value, so callers own what they get and
//! can never alias catalog state.

use crate::types::{Article, Brand, MetaData, Office, Program, Stat};

fn stat(label: &str, value: &str) -> Stat {
    Stat {
        label: label.into(),
        value: value.into(),
    }
}

fn office(city: &str, region: &str) -> Office {
    Office {
        city: city.into(),
        region: region.into(),
    }
}

/// Brand, stats and offices.
pub fn meta() -> MetaData {
    MetaData {
        brand: Brand {
            name: "NOVA VISTA EDUCATION".into(),
            tagline: "Empowering Growth. Elevating Futures.".into(),
            primary_cta: "Apply Now".into(),
            secondary_cta: "View Programs".into(),
        },
        stats: vec![
            stat("Students Enrolled", "1,200+"),
            stat("Global Recognition", "Top Tier"),
            stat("Courses Offered", "45+"),
        ],
        offices: vec![
            office("London", "UK"),
            office("New York", "USA"),
            office("Singapore", "APAC"),
        ],
    }
}

/// The two program pitches, Academic Recognition first.
pub fn programs() -> Vec<Program> {
    vec![
        Program {
            title: "Academic Recognition".into(),
            description: "A pathway for individuals whose work, achievements, and contributions deserve formal acknowledgment through postgraduate honorary titles.".into(),
            features: vec![
                "Honorary Doctorate Titles".into(),
                "Postgraduate Recognition".into(),
                "Global Accreditation Standards".into(),
            ],
        },
        Program {
            title: "Skill & Personality Development".into(),
            description: "Structured training designed to strengthen communication, presence, grooming, and overall confidence for professional environments.".into(),
            features: vec![
                "Public Speaking Mastery".into(),
                "Corporate Grooming".into(),
                "Executive Presence".into(),
            ],
        },
    ]
}

/// Insights articles, newest first.
pub fn articles() -> Vec<Article> {
    vec![
        Article {
            id: "1".into(),
            title: "The Future of Academic Recognition".into(),
            excerpt: "How honorary titles are reshaping the landscape of professional acknowledgment.".into(),
            author: "Dr. Sarah Jensen".into(),
            category: "Education".into(),
            published_at: "2024-05-15".into(),
        },
        Article {
            id: "2".into(),
            title: "Mastering Executive Presence".into(),
            excerpt: "Key strategies to enhance your influence in high-stakes corporate environments.".into(),
            author: "Mark Rutherford".into(),
            category: "Skill Development".into(),
            published_at: "2024-04-22".into(),
        },
        Article {
            id: "3".into(),
            title: "Global Accreditation Trends".into(),
            excerpt: "Understanding the shift towards skills-based validation in the modern economy.".into(),
            author: "Elena Rossi".into(),
            category: "Insights".into(),
            published_at: "2024-03-10".into(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn article_ids_are_unique() {
        let articles = articles();
        let ids: HashSet<_> = articles.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids.len(), articles.len());
    }

    #[test]
    fn every_article_has_a_parseable_date() {
        for article in articles() {
            assert!(
                article.published_on().is_some(),
                "bad date on article {}",
                article.id
            );
        }
    }

    #[test]
    fn programs_carry_three_features_each() {
        for program in programs() {
            assert_eq!(program.features.len(), 3, "{}", program.title);
        }
    }
}
