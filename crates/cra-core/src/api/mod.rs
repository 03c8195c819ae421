//! Backend API
//!
//! `ResumeApi` is the seam the page view-models are written against;
//! `ApiClient` is the HTTP implementation used by the app.

mod client;

pub use client::{backend_message, ApiClient};

use crate::models::{AnalysisResult, HistoryEntry, ResumeFile, UploadResponse, User, UserId};
use crate::ClientResult;
use async_trait::async_trait;

/// Operations offered by the analysis backend
///
/// Every call issues one request and is never retried. Futures are not
/// required to be `Send`, since in the browser they run on the page's event
/// loop.
#[async_trait(?Send)]
pub trait ResumeApi {
    /// `GET /`
    async fn test_connection(&self) -> ClientResult<serde_json::Value>;

    /// `POST /login`
    async fn login(&self, name: &str) -> ClientResult<User>;

    /// `POST /upload` as multipart form data with `file` and `userId`
    async fn upload_resume(&self, file: &ResumeFile, user_id: &UserId) -> ClientResult<UploadResponse>;

    /// `GET /analyze/:resume_id`
    async fn get_analysis(&self, resume_id: &str) -> ClientResult<AnalysisResult>;

    /// `GET /history/:user_id`, most recent first as ordered by the backend
    async fn get_history(&self, user_id: &UserId) -> ClientResult<Vec<HistoryEntry>>;
}
