//! Client for the content-optimization backend (`{BACKEND_URL}/api`).
//!
//! Pages depend on [`ContentApi`] rather than on the HTTP client directly, so
//! loaders and state machines can be exercised against any backend.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::export::{ExportFormat, ExportedFile};
use crate::model::{AnalyticsSummary, ContentRecord, CreateContent, CreatedContent, Query};
use crate::paths;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {endpoint}: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("not found: {endpoint}")]
    NotFound { endpoint: String },

    #[error("backend rejected {endpoint} ({status}){}", detail_suffix(.detail))]
    Rejected {
        endpoint: String,
        status: u16,
        detail: Option<String>,
    },

    #[error("decode response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail
        .as_deref()
        .map(|d| format!(": {d}"))
        .unwrap_or_default()
}

impl ApiError {
    /// The backend-provided `detail` message, when the backend sent one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Rejected {
                detail: Some(detail),
                ..
            } => Some(detail),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[async_trait]
pub trait ContentApi: Send + Sync {
    async fn list_content(&self) -> Result<Vec<ContentRecord>, ApiError>;
    async fn get_content(&self, id: &str) -> Result<ContentRecord, ApiError>;
    async fn get_shared_content(&self, share_id: &str) -> Result<ContentRecord, ApiError>;
    async fn create_content(&self, request: &CreateContent) -> Result<CreatedContent, ApiError>;
    async fn delete_content(&self, id: &str) -> Result<(), ApiError>;
    async fn refresh_content(&self, id: &str) -> Result<(), ApiError>;
    async fn list_queries(&self, content_id: &str) -> Result<Vec<Query>, ApiError>;
    async fn analytics(&self) -> Result<AnalyticsSummary, ApiError>;
    async fn export_content(
        &self,
        id: &str,
        format: ExportFormat,
    ) -> Result<ExportedFile, ApiError>;
    /// Generated text files such as `sitemap.xml` and `robots.txt`.
    async fn site_file(&self, name: &str) -> Result<String, ApiError>;
}

#[derive(Debug, Clone)]
pub struct HttpContentApi {
    client: reqwest::Client,
    config: Config,
}

impl HttpContentApi {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .user_agent(concat!("traffic-wizard/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|err| anyhow::anyhow!("build backend http client: {err}"))?;
        Ok(Self { client, config })
    }

    async fn send(
        &self,
        endpoint: String,
        request: reqwest::RequestBuilder,
    ) -> Result<(String, reqwest::Response), ApiError> {
        tracing::debug!(%endpoint, "backend request");
        let response = match request.send().await {
            Ok(response) => response,
            Err(source) => return Err(ApiError::Transport { endpoint, source }),
        };

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound { endpoint });
        }
        if !status.is_success() {
            let raw = response.text().await.unwrap_or_default();
            return Err(ApiError::Rejected {
                endpoint,
                status: status.as_u16(),
                detail: parse_detail(&raw),
            });
        }
        Ok((endpoint, response))
    }

    async fn read_json<T: DeserializeOwned>(
        endpoint: String,
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let bytes = match response.bytes().await {
            Ok(bytes) => bytes,
            Err(source) => return Err(ApiError::Transport { endpoint, source }),
        };
        serde_json::from_slice(&bytes).map_err(|source| ApiError::Decode { endpoint, source })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let endpoint = self.config.api_endpoint(path);
        let request = self.client.get(&endpoint);
        let (endpoint, response) = self.send(endpoint, request).await?;
        Self::read_json(endpoint, response).await
    }
}

#[async_trait]
impl ContentApi for HttpContentApi {
    async fn list_content(&self) -> Result<Vec<ContentRecord>, ApiError> {
        self.get_json("/content").await
    }

    async fn get_content(&self, id: &str) -> Result<ContentRecord, ApiError> {
        self.get_json(&paths::content(id)).await
    }

    async fn get_shared_content(&self, share_id: &str) -> Result<ContentRecord, ApiError> {
        self.get_json(&paths::share(share_id)).await
    }

    async fn create_content(&self, request: &CreateContent) -> Result<CreatedContent, ApiError> {
        let endpoint = self.config.api_endpoint("/content");
        let builder = self.client.post(&endpoint).json(request);
        let (endpoint, response) = self.send(endpoint, builder).await?;
        Self::read_json(endpoint, response).await
    }

    async fn delete_content(&self, id: &str) -> Result<(), ApiError> {
        let endpoint = self.config.api_endpoint(&paths::content(id));
        let builder = self.client.delete(&endpoint);
        self.send(endpoint, builder).await?;
        Ok(())
    }

    async fn refresh_content(&self, id: &str) -> Result<(), ApiError> {
        let endpoint = self.config.api_endpoint(&paths::refresh(id));
        let builder = self.client.post(&endpoint);
        self.send(endpoint, builder).await?;
        Ok(())
    }

    async fn list_queries(&self, content_id: &str) -> Result<Vec<Query>, ApiError> {
        let path = format!("/queries/{}", paths::segment(content_id));
        self.get_json(&path).await
    }

    async fn analytics(&self) -> Result<AnalyticsSummary, ApiError> {
        self.get_json("/analytics").await
    }

    async fn export_content(
        &self,
        id: &str,
        format: ExportFormat,
    ) -> Result<ExportedFile, ApiError> {
        let endpoint = self.config.api_endpoint(&paths::export(id, format));
        let builder = self.client.get(&endpoint);
        let (endpoint, response) = self.send(endpoint, builder).await?;
        match response.bytes().await {
            Ok(bytes) => Ok(ExportedFile::new(id, format, bytes.to_vec())),
            Err(source) => Err(ApiError::Transport { endpoint, source }),
        }
    }

    async fn site_file(&self, name: &str) -> Result<String, ApiError> {
        let endpoint = self.config.api_endpoint(name);
        let builder = self.client.get(&endpoint);
        let (endpoint, response) = self.send(endpoint, builder).await?;
        response
            .text()
            .await
            .map_err(|source| ApiError::Transport { endpoint, source })
    }
}

/// FastAPI-style `{"detail": "..."}`. List-shaped validation details are ignored.
fn parse_detail(raw_json: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(raw_json).ok()?;
    let detail = value.get("detail")?.as_str()?.trim();
    if detail.is_empty() {
        return None;
    }
    Some(detail.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_is_read_from_string_field_only() {
        assert_eq!(
            parse_detail(r#"{"detail":"Failed to crawl URL"}"#).as_deref(),
            Some("Failed to crawl URL")
        );
        assert_eq!(parse_detail(r#"{"detail":[{"loc":["body"]}]}"#), None);
        assert_eq!(parse_detail("Internal Server Error"), None);
        assert_eq!(parse_detail(r#"{"detail":"  "}"#), None);
    }

    #[test]
    fn rejected_error_mentions_detail() {
        let err = ApiError::Rejected {
            endpoint: "http://b/api/content".to_owned(),
            status: 400,
            detail: Some("URL is required".to_owned()),
        };
        assert_eq!(err.detail(), Some("URL is required"));
        assert!(err.to_string().ends_with(": URL is required"));
        assert!(!err.is_not_found());
    }
}
