//! Campus Resume Analyzer client core
//!
//! This crate holds everything the web app needs that is not markup: the
//! backend data model, the HTTP client, session handling and the page
//! view-models that decide what each page renders.

pub mod api;
pub mod config;
pub mod models;
pub mod session;
pub mod view;

use thiserror::Error;

pub use api::{ApiClient, ResumeApi};
pub use config::ClientConfig;
pub use models::{AnalysisResult, HistoryEntry, LoginResponse, ResumeFile, UploadResponse, User, UserId};
pub use session::{MemoryStore, Session, SessionStore};

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status from the backend, carrying its message or a fallback
    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("Unexpected response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("{0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Session storage error: {0}")]
    Storage(String),
}

pub type ClientResult<T> = Result<T, ClientError>;

impl ClientError {
    /// Text shown in a page banner. Empty messages fall back to `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            fallback.to_string()
        } else {
            message
        }
    }

    /// HTTP status of a backend rejection, if that is what this is
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            ClientError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
