//! Backend data model
//!
//! The backends this client talks to are loose about types: user ids come
//! back as strings or integers and scores as integers or floats. Decoding is
//! lenient about those two fields and strict about everything else.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Opaque user identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for UserId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(i64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(s) => UserId(s),
            Raw::Number(n) => UserId(n.to_string()),
        })
    }
}

/// The logged-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub user_id: UserId,
    #[serde(default)]
    pub name: String,
}

/// Response of `POST /login`
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub user_id: UserId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl LoginResponse {
    /// Build the session user, keeping the submitted name when the backend omits it
    pub fn into_user(self, submitted_name: &str) -> User {
        User {
            user_id: self.user_id,
            name: self
                .name
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| submitted_name.to_string()),
        }
    }
}

/// Score and improvement suggestions for one resume
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default, deserialize_with = "deserialize_score")]
    pub score: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_nullable_list")]
    pub improvements: Vec<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "deserialize_resume_id")]
    pub resume_id: Option<String>,
}

/// One past analysis for a user; same shape as a full analysis
pub type HistoryEntry = AnalysisResult;

/// Response of `POST /upload`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default, deserialize_with = "deserialize_resume_id")]
    pub resume_id: Option<String>,
}

/// A resume ready to be sent as multipart form data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeFile {
    pub name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ResumeFile {
    pub fn pdf(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: crate::view::upload::PDF_MIME.to_string(),
            bytes,
        }
    }
}

fn deserialize_score<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<f64>::deserialize(deserializer)?;
    Ok(raw.filter(|s| s.is_finite()).map(|s| s.round().max(0.0) as u32))
}

fn deserialize_nullable_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_resume_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|id| !id.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_id_from_string_or_number() {
        let a: User = serde_json::from_value(json!({"user_id": "user_jane", "name": "jane"})).unwrap();
        assert_eq!(a.user_id.as_str(), "user_jane");

        let b: LoginResponse = serde_json::from_value(json!({"user_id": 7, "message": "Welcome back!"})).unwrap();
        assert_eq!(b.user_id, UserId::new("7"));
        assert_eq!(b.into_user("jane").name, "jane");
    }

    #[test]
    fn test_user_round_trips_through_storage_format() {
        let user = User {
            user_id: UserId::new("42"),
            name: "sam".into(),
        };
        let raw = serde_json::to_string(&user).unwrap();
        assert_eq!(raw, r#"{"user_id":"42","name":"sam"}"#);
        assert_eq!(serde_json::from_str::<User>(&raw).unwrap(), user);
    }

    #[test]
    fn test_analysis_lenient_fields() {
        let analysis: AnalysisResult = serde_json::from_value(json!({
            "score": 72.6,
            "improvements": null,
            "created_at": "2024-03-05T10:00:00Z",
            "resume_id": ""
        }))
        .unwrap();
        assert_eq!(analysis.score, Some(73));
        assert!(analysis.improvements.is_empty());
        assert_eq!(analysis.resume_id, None);
    }

    #[test]
    fn test_analysis_missing_fields_default() {
        let analysis: AnalysisResult = serde_json::from_value(json!({"id": 3, "filename": "cv.pdf"})).unwrap();
        assert_eq!(analysis, AnalysisResult::default());
    }

    #[test]
    fn test_upload_response_ignores_extra_fields() {
        let response: UploadResponse = serde_json::from_value(json!({
            "message": "File uploaded and analyzed successfully",
            "filename": "cv.pdf",
            "resume_id": "resume_1700000000000",
            "analysis": {"overall_score": 80}
        }))
        .unwrap();
        assert_eq!(response.resume_id.as_deref(), Some("resume_1700000000000"));
    }
}
