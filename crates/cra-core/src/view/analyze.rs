//! Latest-analysis page

use super::format::format_optional_date;
use super::Loadable;
use crate::api::ResumeApi;
use crate::models::{AnalysisResult, UserId};
use crate::ClientResult;

pub const ANALYSIS_ERROR: &str = "Failed to fetch analysis. Please try again later.";

/// Find the user's most recent analysis.
///
/// The newest history entry is re-fetched by `resume_id` when it has one;
/// otherwise the entry itself is the analysis. `None` means no history.
pub async fn load_latest_analysis(api: &impl ResumeApi, user_id: &UserId) -> ClientResult<Option<AnalysisResult>> {
    let history = api.get_history(user_id).await?;

    let Some(latest) = history.into_iter().next() else {
        return Ok(None);
    };

    match latest.resume_id.clone() {
        Some(resume_id) => {
            tracing::debug!("Fetching analysis for resume: {}", resume_id);
            api.get_analysis(&resume_id).await.map(Some)
        }
        None => Ok(Some(latest)),
    }
}

/// What the analysis card renders
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisView {
    pub score_label: String,
    pub improvements: Vec<String>,
    pub last_updated: String,
}

impl From<&AnalysisResult> for AnalysisView {
    fn from(analysis: &AnalysisResult) -> Self {
        Self {
            score_label: format!("{}/100", analysis.score.unwrap_or(0)),
            improvements: analysis.improvements.clone(),
            last_updated: format_optional_date(analysis.created_at.as_deref()),
        }
    }
}

pub async fn load(api: &impl ResumeApi, user_id: &UserId) -> Loadable<AnalysisView> {
    match load_latest_analysis(api, user_id).await {
        Ok(Some(analysis)) => Loadable::Loaded(AnalysisView::from(&analysis)),
        Ok(None) => Loadable::Empty,
        Err(e) => {
            tracing::error!("Error fetching analysis: {}", e);
            Loadable::Failed(ANALYSIS_ERROR.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HistoryEntry;
    use crate::view::testing::StubApi;

    fn user() -> UserId {
        UserId::new("user_jane")
    }

    #[tokio::test]
    async fn test_empty_history_is_empty_state() {
        let api = StubApi::default();
        assert_eq!(load_latest_analysis(&api, &user()).await.unwrap(), None);
        assert_eq!(load(&api, &user()).await, Loadable::Empty);
        assert_eq!(api.calls.borrow().len(), 2);
    }

    #[tokio::test]
    async fn test_latest_entry_is_refetched_by_resume_id() {
        let mut api = StubApi::with_history(vec![
            HistoryEntry {
                score: Some(40),
                resume_id: Some("resume_2".into()),
                ..Default::default()
            },
            HistoryEntry {
                score: Some(90),
                resume_id: Some("resume_1".into()),
                ..Default::default()
            },
        ]);
        api.analyses.insert(
            "resume_2".into(),
            AnalysisResult {
                score: Some(42),
                improvements: vec!["Add a projects section".into()],
                created_at: Some("2024-06-30T09:00:00Z".into()),
                resume_id: Some("resume_2".into()),
            },
        );

        let state = load(&api, &user()).await;
        assert_eq!(
            state,
            Loadable::Loaded(AnalysisView {
                score_label: "42/100".into(),
                improvements: vec!["Add a projects section".into()],
                last_updated: "6/30/2024".into(),
            })
        );
        assert_eq!(
            api.calls.borrow().as_slice(),
            ["GET /history/user_jane", "GET /analyze/resume_2"]
        );
    }

    #[tokio::test]
    async fn test_entry_without_resume_id_is_used_directly() {
        let api = StubApi::with_history(vec![HistoryEntry {
            score: Some(77),
            improvements: vec!["Fix typos".into()],
            created_at: Some("2024-01-01T12:00:00".into()),
            resume_id: None,
        }]);

        let view = load(&api, &user()).await;
        assert_eq!(view.loaded().map(|v| v.score_label.as_str()), Some("77/100"));
        assert_eq!(api.calls.borrow().len(), 1);
    }

    #[test]
    fn test_defaults_for_missing_fields() {
        let view = AnalysisView::from(&AnalysisResult::default());
        assert_eq!(view.score_label, "0/100");
        assert!(view.improvements.is_empty());
        assert_eq!(view.last_updated, "N/A");
    }

    #[tokio::test]
    async fn test_failure_sets_banner() {
        let api = StubApi::failing(503);
        assert!(load_latest_analysis(&api, &user()).await.is_err());
        assert_eq!(load(&api, &user()).await, Loadable::Failed(ANALYSIS_ERROR.to_string()));
    }
}
