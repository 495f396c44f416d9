//! HTTP client for the DI-2D analysis API.
//!
//! One typed helper per endpoint. Errors are flattened to `String` at this
//! boundary since the pages only ever display them.

use reqwest::multipart::Form;
use serde::de::DeserializeOwned;
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::error::ApiError;
use crate::options::{AnalyzeOptions, CompareOptions};
use crate::types::{ComparisonResult, DrawingAnalysisResult, HealthReport, ModelCatalog};
use crate::upload::{build_form, SelectedFile};

pub const ANALYZE_PATH: &str = "/api/analysis/analyze";
pub const COMPARE_PATH: &str = "/api/analysis/compare";
pub const HEALTH_PATH: &str = "/api/analysis/health";
pub const MODELS_PATH: &str = "/api/analysis/models";

/// Client bound to one API base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiClient {
    config: AppConfig,
}

impl ApiClient {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Analyze one drawing with one model.
    pub async fn analyze(
        &self,
        file: &SelectedFile,
        options: &AnalyzeOptions,
    ) -> Result<DrawingAnalysisResult, String> {
        let form = build_form(file, options.form_fields())?;
        info!(
            "Analyzing {} ({} bytes) with {}",
            file.name,
            file.size(),
            options.model.id()
        );
        let result: DrawingAnalysisResult = self.post_multipart(ANALYZE_PATH, form).await?;
        for anomaly in result.range_anomalies() {
            warn!("Analysis result out of range: {}", anomaly);
        }
        Ok(result)
    }

    /// Run two models on the same drawing server-side.
    pub async fn compare(
        &self,
        file: &SelectedFile,
        options: &CompareOptions,
    ) -> Result<ComparisonResult, String> {
        let form = build_form(file, options.form_fields())?;
        info!(
            "Comparing {} vs {} on {}",
            options.model1.id(),
            options.model2.id(),
            file.name
        );
        Ok(self.post_multipart(COMPARE_PATH, form).await?)
    }

    pub async fn health(&self) -> Result<HealthReport, String> {
        Ok(self.get_json(HEALTH_PATH).await?)
    }

    pub async fn list_models(&self) -> Result<ModelCatalog, String> {
        Ok(self.get_json(MODELS_PATH).await?)
    }

    async fn post_multipart<T: DeserializeOwned>(&self, path: &str, form: Form) -> Result<T, ApiError> {
        let url = self.config.endpoint(path);
        let response = reqwest::Client::new()
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                warn!("POST {} failed: {}", url, e);
                ApiError::from(e)
            })?;
        read_body(&url, response).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.config.endpoint(path);
        let response = reqwest::Client::new().get(&url).send().await.map_err(|e| {
            warn!("GET {} failed: {}", url, e);
            ApiError::from(e)
        })?;
        read_body(&url, response).await
    }
}

async fn read_body<T: DeserializeOwned>(url: &str, response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();
    let response = response.error_for_status().map_err(|e| {
        warn!("{} returned {}", url, status);
        ApiError::from(e)
    })?;
    let body = response.text().await?;
    info!("{} returned {} ({} bytes)", url, status, body.len());
    decode(&body)
}

/// Decode a response body into the expected shape.
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_comparison() {
        let body = r#"{
            "timestamp": "2025-12-14T10:00:00",
            "model1": {"name": "werk24-professional", "provider": "Werk24", "processing_time": 20.0, "confidence": 0.9, "raw_response": "ok"},
            "model2": {"name": "gpt-5.2", "provider": "OpenAI", "processing_time": 23.5, "confidence": 0.8, "raw_response": "ok"},
            "comparison_notes": {"time_difference": 3.5, "confidence_difference": 0.1, "faster_model": "werk24-professional", "higher_confidence": "werk24-professional"}
        }"#;
        let result: ComparisonResult = decode(body).unwrap();
        assert_eq!(result.model1.provider, "Werk24");
        assert!(result.file_info.is_none());
    }

    #[test]
    fn test_decode_error_is_decode_variant() {
        let err = decode::<HealthReport>("{\"status\": 1}").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_client_uses_injected_base_url() {
        let config = AppConfig::default().with_base_url("https://drawings.example.com").unwrap();
        let client = ApiClient::new(config);
        assert_eq!(
            client.config().endpoint(COMPARE_PATH),
            "https://drawings.example.com/api/analysis/compare"
        );
    }
}
