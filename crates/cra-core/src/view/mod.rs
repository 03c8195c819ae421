//! Page view-models
//!
//! Each page keeps one of these in a signal and renders from it, so the
//! decisions about what to show live here rather than in markup.

pub mod analyze;
pub mod format;
pub mod history;
pub mod login;
pub mod upload;

pub use analyze::{load_latest_analysis, AnalysisView};
pub use format::format_date;
pub use history::{HistoryRow, ImprovementSummary, ScoreBand};
pub use login::validate_name;
pub use upload::{CandidateFile, UploadForm};

/// Render state of a page that loads data on mount
#[derive(Debug, Clone, PartialEq)]
pub enum Loadable<T> {
    Loading,
    Failed(String),
    Empty,
    Loaded(T),
}

impl<T> Default for Loadable<T> {
    fn default() -> Self {
        Loadable::Loading
    }
}

impl<T> Loadable<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Loadable::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            Loadable::Loaded(value) => Some(value),
            _ => None,
        }
    }
}
