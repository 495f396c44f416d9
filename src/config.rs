//! Application configuration.
//!
//! Built once at startup and handed to the pages that talk to the API.
//! Nothing here reads ambient state after construction.

use reqwest::Url;
use tracing::warn;

use crate::error::ApiError;

/// Used when no override is compiled in or stored.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8001";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl AppConfig {
    /// Compile-time `DI2D_API_URL`, else the default.
    pub fn from_env() -> Self {
        Self::from_override(option_env!("DI2D_API_URL"))
    }

    fn from_override(url: Option<&str>) -> Self {
        match url.map(str::trim).filter(|u| !u.is_empty()) {
            Some(url) => match normalize_base_url(url) {
                Ok(api_base_url) => Self { api_base_url },
                Err(e) => {
                    warn!("Ignoring DI2D_API_URL: {}", e);
                    Self::default()
                }
            },
            None => Self::default(),
        }
    }

    /// Replace the base URL with a user-supplied one.
    pub fn with_base_url(&self, url: &str) -> Result<Self, ApiError> {
        Ok(Self {
            api_base_url: normalize_base_url(url)?,
        })
    }

    /// Absolute URL for an API path such as `/api/analysis/analyze`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }
}

/// Parse an absolute `http`/`https` URL and return its serialized form
/// without trailing slashes. Query strings and fragments are rejected since
/// endpoint paths are appended to the result.
pub fn normalize_base_url(url: &str) -> Result<String, ApiError> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return Err(ApiError::Config("API adresi boş olamaz".to_string()));
    }
    let parsed = Url::parse(trimmed)
        .map_err(|e| ApiError::Config(format!("Geçersiz API adresi ({}): {}", e, trimmed)))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ApiError::Config(format!(
            "API adresi http:// veya https:// ile başlamalı: {}",
            trimmed
        )));
    }
    if parsed.query().is_some() || parsed.fragment().is_some() {
        return Err(ApiError::Config(format!(
            "API adresi sorgu veya parça içeremez: {}",
            trimmed
        )));
    }
    Ok(parsed.as_str().trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        assert_eq!(AppConfig::from_override(None).api_base_url, "http://localhost:8001");
        assert_eq!(AppConfig::from_override(Some("  ")).api_base_url, "http://localhost:8001");
    }

    #[test]
    fn test_override_trims_trailing_slash() {
        let config = AppConfig::from_override(Some("https://api.example.com/"));
        assert_eq!(config.api_base_url, "https://api.example.com");
    }

    #[test]
    fn test_endpoint_join() {
        let config = AppConfig::default();
        assert_eq!(
            config.endpoint("/api/analysis/analyze"),
            "http://localhost:8001/api/analysis/analyze"
        );
        assert_eq!(
            config.endpoint("api/analysis/compare"),
            "http://localhost:8001/api/analysis/compare"
        );
    }

    #[test]
    fn test_with_base_url_validates() {
        let config = AppConfig::default();
        assert_eq!(
            config.with_base_url(" http://10.0.0.5:8001// ").unwrap().api_base_url,
            "http://10.0.0.5:8001"
        );
        assert!(config.with_base_url("").is_err());
        assert!(config.with_base_url("ftp://host").is_err());
    }

    #[test]
    fn test_with_base_url_rejects_malformed() {
        let config = AppConfig::default();
        for bad in [
            "http://exa mple:port",
            "http://host:99999",
            "localhost:8001",
            "http://",
            "https://api.example.com/?v=1",
        ] {
            assert!(
                matches!(config.with_base_url(bad), Err(ApiError::Config(_))),
                "{} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_with_base_url_stores_normalized_form() {
        let config = AppConfig::default();
        assert_eq!(
            config.with_base_url("HTTPS://API.Example.com:443/").unwrap().api_base_url,
            "https://api.example.com"
        );
        assert_eq!(
            config.with_base_url("http://host:8001/di2d/").unwrap().api_base_url,
            "http://host:8001/di2d"
        );
    }

    #[test]
    fn test_invalid_override_falls_back_to_default() {
        let config = AppConfig::from_override(Some("not a url"));
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    }
}
