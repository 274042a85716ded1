//! UI Components
//!
//! Leptos components for the login and dashboard pages.

mod dashboard_page;
mod idea_table;
mod login_page;
mod logout_button;
mod status_badge;

pub use dashboard_page::DashboardPage;
pub use idea_table::IdeaTable;
pub use login_page::LoginPage;
pub use logout_button::LogoutButton;
pub use status_badge::StatusBadge;
