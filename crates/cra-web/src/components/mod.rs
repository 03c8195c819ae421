//! Reusable components

mod feedback;
mod nav;
mod score_badge;

pub use feedback::{EmptyState, ErrorBanner, Spinner, SuccessBanner};
pub use nav::TabNav;
pub use score_badge::ScoreBadge;
