//! History table rows

use super::format::format_date;
use super::Loadable;
use crate::api::ResumeApi;
use crate::models::{HistoryEntry, UserId};

pub const HISTORY_ERROR: &str = "Failed to fetch history. Please try again later.";

/// How many improvements a table row shows before summarizing the rest
pub const VISIBLE_IMPROVEMENTS: usize = 2;

/// Score classification used to color the badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Good,
    Fair,
    Poor,
}

impl ScoreBand {
    pub fn for_score(score: u32) -> Self {
        match score {
            80.. => ScoreBand::Good,
            60..=79 => ScoreBand::Fair,
            _ => ScoreBand::Poor,
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            ScoreBand::Good => "green",
            ScoreBand::Fair => "yellow",
            ScoreBand::Poor => "red",
        }
    }

    pub fn badge_classes(self) -> &'static str {
        match self {
            ScoreBand::Good => "bg-green-100 text-green-800",
            ScoreBand::Fair => "bg-yellow-100 text-yellow-800",
            ScoreBand::Poor => "bg-red-100 text-red-800",
        }
    }
}

/// The first few improvements plus a count of the hidden ones
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImprovementSummary {
    pub shown: Vec<String>,
    pub hidden: usize,
}

impl ImprovementSummary {
    pub fn new(improvements: &[String]) -> Self {
        let shown: Vec<String> = improvements.iter().take(VISIBLE_IMPROVEMENTS).cloned().collect();
        Self {
            hidden: improvements.len() - shown.len(),
            shown,
        }
    }

    /// `+N more`, when anything is hidden
    pub fn more_label(&self) -> Option<String> {
        (self.hidden > 0).then(|| format!("+{} more", self.hidden))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRow {
    pub band: ScoreBand,
    pub score_label: String,
    pub date_label: String,
    pub improvements: ImprovementSummary,
}

impl From<&HistoryEntry> for HistoryRow {
    fn from(entry: &HistoryEntry) -> Self {
        let score = entry.score.unwrap_or(0);
        Self {
            band: ScoreBand::for_score(score),
            score_label: format!("{}/100", score),
            date_label: entry.created_at.as_deref().map(format_date).unwrap_or_default(),
            improvements: ImprovementSummary::new(&entry.improvements),
        }
    }
}

/// Fetch the history table for a user
pub async fn load_history(api: &impl ResumeApi, user_id: &UserId) -> Loadable<Vec<HistoryRow>> {
    tracing::debug!("Fetching history for user: {}", user_id);
    match api.get_history(user_id).await {
        Ok(entries) if entries.is_empty() => Loadable::Empty,
        Ok(entries) => Loadable::Loaded(entries.iter().map(HistoryRow::from).collect()),
        Err(e) => {
            tracing::error!("Error fetching history: {}", e);
            Loadable::Failed(HISTORY_ERROR.to_string())
        }
    }
}
