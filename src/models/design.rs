use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::DESIGNS_FILE;
use crate::store::Document;

/// Design pulled from the design source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Design {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Preview image URL
    pub thumbnail: String,
    /// Link to the design in the editor
    pub design_url: String,
    pub created_at: DateTime<Utc>,
    pub status: DesignStatus,
    /// Target format (instagram, email, pdf, ...)
    pub format: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DesignStatus {
    Ready,
}

/// Persisted designs collection: `{ designs: [...], lastUpdated }`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignsDocument {
    pub designs: Vec<Design>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
}

impl Document for DesignsDocument {
    const FILE_NAME: &'static str = DESIGNS_FILE;

    fn empty() -> Self {
        Self {
            designs: Vec::new(),
            last_updated: Some(Utc::now()),
        }
    }
}

impl DesignsDocument {
    /// Linear scan for a design by id
    pub fn find(&self, id: &str) -> Option<&Design> {
        self.designs.iter().find(|d| d.id == id)
    }
}

/// Build the set of designs returned by the source pull
///
/// The source integration is not wired up yet, so the pull yields a fixed
/// catalogue with fresh ids, created 7, 5 and 3 days before `now`.
pub fn placeholder_designs(now: DateTime<Utc>) -> DesignsDocument {
    let entries = [
        (
            "Baby Sleep Schedule Template",
            "Downloadable sleep schedule for parents",
            "Sleep+Schedule",
            "example1",
            7,
            "instagram",
        ),
        (
            "Bedtime Routine Tips",
            "Instagram carousel post about bedtime routines",
            "Bedtime+Tips",
            "example2",
            5,
            "instagram",
        ),
        (
            "Weekly Newsletter",
            "Email newsletter template for parents",
            "Newsletter",
            "example3",
            3,
            "email",
        ),
    ];

    let designs = entries
        .into_iter()
        .map(|(title, description, label, slug, days_ago, format)| Design {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            description: description.to_string(),
            thumbnail: format!("https://via.placeholder.com/600x400?text={}", label),
            design_url: format!("https://www.canva.com/design/{}", slug),
            created_at: now - Duration::days(days_ago),
            status: DesignStatus::Ready,
            format: format.to_string(),
        })
        .collect();

    DesignsDocument {
        designs,
        last_updated: Some(now),
    }
}
