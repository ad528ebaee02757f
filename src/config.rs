use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub data_dir: String,
    /// Empty means any origin is accepted
    pub allowed_origins: Vec<String>,
    pub environment: String,
    pub log_requests: bool,
    pub canva_client_id: Option<String>,
    pub canva_client_secret: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if it exists (development)
        dotenvy::dotenv().ok();

        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let server_port = env::var("PORT")
            .unwrap_or_else(|_| "5000".to_string())
            .parse()
            .map_err(|_| "Invalid PORT")?;

        let data_dir = env::var("DATA_DIR").unwrap_or_else(|_| "./data".to_string());

        let allowed_origins = env::var("ALLOWED_ORIGINS")
            .map(|origins| parse_origins(&origins))
            .unwrap_or_default();

        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        let log_requests = env::var("LOG_REQUESTS")
            .unwrap_or_else(|_| "true".to_string())
            .parse()
            .map_err(|_| "Invalid LOG_REQUESTS (expected true or false)")?;

        let canva_client_id = env::var("CANVA_CLIENT_ID").ok().filter(|s| !s.is_empty());
        let canva_client_secret = env::var("CANVA_CLIENT_SECRET")
            .ok()
            .filter(|s| !s.is_empty());

        Ok(Config {
            server_host,
            server_port,
            data_dir,
            allowed_origins,
            environment,
            log_requests,
            canva_client_id,
            canva_client_secret,
        })
    }

    /// Get server address as string
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Whether both design-source credentials are present
    pub fn canva_configured(&self) -> bool {
        self.canva_client_id.is_some() && self.canva_client_secret.is_some()
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins_trims_and_skips_empty() {
        let origins = parse_origins(" http://localhost:3000, ,http://example.com ");
        assert_eq!(
            origins,
            vec![
                "http://localhost:3000".to_string(),
                "http://example.com".to_string()
            ]
        );
    }

    #[test]
    fn test_server_address() {
        let config = Config {
            server_host: "127.0.0.1".to_string(),
            server_port: 5000,
            data_dir: "./data".to_string(),
            allowed_origins: vec![],
            environment: "test".to_string(),
            log_requests: false,
            canva_client_id: Some("id".to_string()),
            canva_client_secret: None,
        };

        assert_eq!(config.server_address(), "127.0.0.1:5000");
        assert!(!config.canva_configured());
    }
}
