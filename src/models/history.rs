use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{DEFAULT_CAPTION, HISTORY_FILE, INSTAGRAM_NOT_CONFIGURED};
use crate::models::Platform;
use crate::store::Document;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryStatus {
    Pending,
    Published,
    Failed,
}

/// One publish attempt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRecord {
    pub id: String,
    pub design_id: String,
    pub platform: Platform,
    pub caption: String,
    pub status: HistoryStatus,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl HistoryRecord {
    /// Record an Instagram publish request
    ///
    /// Publishing credentials are never configured, so the entry is always
    /// pending and carries the configuration error.
    pub fn pending_instagram(
        design_id: String,
        caption: Option<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            design_id,
            platform: Platform::Instagram,
            caption: caption
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| DEFAULT_CAPTION.to_string()),
            status: HistoryStatus::Pending,
            published_at: None,
            created_at: now,
            error: Some(INSTAGRAM_NOT_CONFIGURED.to_string()),
        }
    }
}

/// Persisted history collection: `{ history: [...] }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryDocument {
    pub history: Vec<HistoryRecord>,
}

impl Document for HistoryDocument {
    const FILE_NAME: &'static str = HISTORY_FILE;

    fn empty() -> Self {
        Self {
            history: Vec::new(),
        }
    }
}

impl HistoryDocument {
    pub fn count_with_status(&self, status: HistoryStatus) -> usize {
        self.history.iter().filter(|h| h.status == status).count()
    }

    /// Keep only records matching the given platform and status (None matches all)
    pub fn filtered(self, platform: Option<Platform>, status: Option<HistoryStatus>) -> Self {
        let history = self
            .history
            .into_iter()
            .filter(|h| platform.map_or(true, |p| h.platform == p))
            .filter(|h| status.map_or(true, |s| h.status == s))
            .collect();
        Self { history }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_instagram_defaults() {
        let now = Utc::now();
        let record = HistoryRecord::pending_instagram("d1".to_string(), None, now);

        assert_eq!(record.platform, Platform::Instagram);
        assert_eq!(record.status, HistoryStatus::Pending);
        assert_eq!(record.caption, DEFAULT_CAPTION);
        assert_eq!(record.error.as_deref(), Some(INSTAGRAM_NOT_CONFIGURED));
        assert!(record.published_at.is_none());
    }

    #[test]
    fn test_published_at_serialized_as_null() {
        let record =
            HistoryRecord::pending_instagram("d1".to_string(), Some("Hi".to_string()), Utc::now());
        let value = serde_json::to_value(&record).unwrap();

        assert!(value["publishedAt"].is_null());
        assert!(value.as_object().unwrap().contains_key("publishedAt"));
        assert_eq!(value["caption"], "Hi");
    }

    #[test]
    fn test_filtered() {
        let now = Utc::now();
        let mut published = HistoryRecord::pending_instagram("d2".to_string(), None, now);
        published.status = HistoryStatus::Published;
        let doc = HistoryDocument {
            history: vec![
                HistoryRecord::pending_instagram("d1".to_string(), None, now),
                published,
            ],
        };

        assert_eq!(doc.count_with_status(HistoryStatus::Published), 1);
        assert_eq!(doc.clone().filtered(None, None).history.len(), 2);
        assert_eq!(
            doc.clone()
                .filtered(Some(Platform::Instagram), Some(HistoryStatus::Pending))
                .history
                .len(),
            1
        );
        assert!(doc
            .filtered(Some(Platform::Email), None)
            .history
            .is_empty());
    }
}
