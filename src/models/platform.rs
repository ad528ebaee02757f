use serde::{Deserialize, Serialize};
use std::fmt;

/// Publishing channel a schedule or history entry targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Instagram,
    Email,
    Facebook,
    Twitter,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Instagram => "instagram",
            Platform::Email => "email",
            Platform::Facebook => "facebook",
            Platform::Twitter => "twitter",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_wire_names() {
        let json = serde_json::to_string(&Platform::Instagram).unwrap();
        assert_eq!(json, "\"instagram\"");

        let parsed: Platform = serde_json::from_str("\"twitter\"").unwrap();
        assert_eq!(parsed, Platform::Twitter);

        assert!(serde_json::from_str::<Platform>("\"myspace\"").is_err());
    }
}
