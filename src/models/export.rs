use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::constants::{EXPORT_BASE_URL, EXPORT_NOTE};

/// Formats a design can be exported to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Png,
    Pdf,
}

impl ExportFormat {
    pub const SUPPORTED: [ExportFormat; 2] = [ExportFormat::Png, ExportFormat::Pdf];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Pdf => "pdf",
        }
    }

    /// Comma separated list of supported formats, e.g. "png, pdf"
    pub fn supported_list() -> String {
        Self::SUPPORTED
            .iter()
            .map(ExportFormat::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::SUPPORTED
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| format!("Unsupported format. Supported: {}", Self::supported_list()))
    }
}

/// Ready-to-download export, not persisted
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDescriptor {
    pub id: String,
    pub design_id: String,
    pub format: ExportFormat,
    pub status: &'static str,
    pub download_url: String,
    pub created_at: DateTime<Utc>,
    pub note: &'static str,
}

impl ExportDescriptor {
    pub fn new(design_id: String, format: ExportFormat, now: DateTime<Utc>) -> Self {
        let download_url = format!("{}/{}.{}", EXPORT_BASE_URL, design_id, format);
        Self {
            id: Uuid::new_v4().to_string(),
            design_id,
            format,
            status: "ready",
            download_url,
            created_at: now,
            note: EXPORT_NOTE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_format() {
        assert_eq!("png".parse::<ExportFormat>(), Ok(ExportFormat::Png));
        assert_eq!("pdf".parse::<ExportFormat>(), Ok(ExportFormat::Pdf));

        let err = "svg".parse::<ExportFormat>().unwrap_err();
        assert_eq!(err, "Unsupported format. Supported: png, pdf");
    }

    #[test]
    fn test_descriptor_download_url() {
        let descriptor = ExportDescriptor::new("abc".to_string(), ExportFormat::Pdf, Utc::now());

        assert_eq!(descriptor.download_url, "https://example.com/export/abc.pdf");
        assert_eq!(descriptor.status, "ready");

        let value = serde_json::to_value(&descriptor).unwrap();
        assert_eq!(value["format"], "pdf");
        assert_eq!(value["designId"], "abc");
    }
}
