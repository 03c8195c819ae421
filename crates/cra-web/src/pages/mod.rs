//! Application pages

mod about;
mod analyze;
mod history;
mod login;
mod upload;

pub use about::AboutPage;
pub use analyze::AnalyzePage;
pub use history::HistoryPage;
pub use login::LoginPage;
pub use upload::UploadPage;
