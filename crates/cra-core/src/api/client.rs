//! reqwest implementation of the backend API

use super::ResumeApi;
use crate::config::ClientConfig;
use crate::models::{AnalysisResult, HistoryEntry, LoginResponse, ResumeFile, UploadResponse, User, UserId};
use crate::{ClientError, ClientResult};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

const CONNECT_FAILED: &str = "Backend unreachable";
const LOGIN_FAILED: &str = "Login failed";
const UPLOAD_FAILED: &str = "Upload failed";
const ANALYSIS_FAILED: &str = "Failed to get analysis";
const HISTORY_FAILED: &str = "Failed to get history";

/// HTTP client for the analysis backend
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

#[async_trait(?Send)]
impl ResumeApi for ApiClient {
    async fn test_connection(&self) -> ClientResult<Value> {
        let url = self.config.endpoint(&[])?;
        tracing::debug!("GET {}", url);

        let result: ClientResult<Value> = async {
            let response = self.http.get(url).send().await?;
            read_json(response, CONNECT_FAILED).await
        }
        .await;

        if let Err(e) = &result {
            tracing::error!("Error connecting to backend: {}", e);
        }
        result
    }

    async fn login(&self, name: &str) -> ClientResult<User> {
        let url = self.config.endpoint(&["login"])?;
        tracing::debug!("Logging in as {}", name);

        let result: ClientResult<User> = async {
            let response = self.http.post(url).json(&json!({ "name": name })).send().await?;
            let login: LoginResponse = read_json(response, LOGIN_FAILED).await?;
            Ok(login.into_user(name))
        }
        .await;

        match &result {
            Ok(user) => tracing::info!("Logged in as {} ({})", user.name, user.user_id),
            Err(e) => tracing::error!("Error logging in: {}", e),
        }
        result
    }

    async fn upload_resume(&self, file: &ResumeFile, user_id: &UserId) -> ClientResult<UploadResponse> {
        let url = self.config.endpoint(&["upload"])?;
        tracing::debug!("Uploading file: {} for user: {}", file.name, user_id);

        let result: ClientResult<UploadResponse> = async {
            let part = Part::bytes(file.bytes.clone())
                .file_name(file.name.clone())
                .mime_str(&file.mime_type)?;
            let form = Form::new()
                .part("file", part)
                .text("userId", user_id.to_string());

            tracing::debug!("Sending request to: {}", url);
            let response = self.http.post(url).multipart(form).send().await?;
            read_json::<UploadResponse>(response, UPLOAD_FAILED).await
        }
        .await;

        match &result {
            Ok(upload) => tracing::debug!("Upload response: {:?}", upload),
            Err(e) => tracing::error!("Error uploading resume: {}", e),
        }
        result
    }

    async fn get_analysis(&self, resume_id: &str) -> ClientResult<AnalysisResult> {
        let url = self.config.endpoint(&["analyze", resume_id])?;
        tracing::debug!("Getting analysis for resume: {}", resume_id);

        let result: ClientResult<AnalysisResult> = async {
            let response = self.http.get(url).send().await?;
            read_json::<AnalysisResult>(response, ANALYSIS_FAILED).await
        }
        .await;

        match &result {
            Ok(analysis) => tracing::debug!("Analysis response: {:?}", analysis),
            Err(e) => tracing::error!("Error getting analysis: {}", e),
        }
        result
    }

    async fn get_history(&self, user_id: &UserId) -> ClientResult<Vec<HistoryEntry>> {
        let url = self.config.endpoint(&["history", user_id.as_str()])?;
        tracing::debug!("Getting history for user: {}", user_id);

        let result: ClientResult<Vec<HistoryEntry>> = async {
            let response = self.http.get(url).send().await?;
            read_json::<Vec<HistoryEntry>>(response, HISTORY_FAILED).await
        }
        .await;

        match &result {
            Ok(history) => tracing::debug!("History response: {} entries", history.len()),
            Err(e) => tracing::error!("Error getting history: {}", e),
        }
        result
    }
}

/// Decode a JSON body, turning a non-success status into `ClientError::Status`
async fn read_json<T: DeserializeOwned>(response: reqwest::Response, fallback: &str) -> ClientResult<T> {
    let status = response.status();
    let body = response.bytes().await?;

    if !status.is_success() {
        return Err(ClientError::Status {
            status: status.as_u16(),
            message: backend_message(&body).unwrap_or_else(|| fallback.to_string()),
        });
    }

    Ok(serde_json::from_slice(&body)?)
}

/// Error text from a backend error body (`error`, or FastAPI's `detail`)
pub fn backend_message(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;

    ["error", "detail"]
        .iter()
        .filter_map(|key| value.get(*key).and_then(Value::as_str))
        .find(|message| !message.trim().is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_message_prefers_error_field() {
        let body = br#"{"error": "No file uploaded or missing user ID", "detail": "x"}"#;
        assert_eq!(
            backend_message(body).as_deref(),
            Some("No file uploaded or missing user ID")
        );
    }

    #[test]
    fn test_backend_message_detail() {
        let body = br#"{"detail": "Only PDF files are allowed"}"#;
        assert_eq!(backend_message(body).as_deref(), Some("Only PDF files are allowed"));
    }

    #[test]
    fn test_backend_message_absent() {
        assert_eq!(backend_message(b""), None);
        assert_eq!(backend_message(b"<html>502</html>"), None);
        assert_eq!(backend_message(br#"{"error": ""}"#), None);
        assert_eq!(backend_message(br#"{"detail": [{"msg": "field required"}]}"#), None);
    }
}
