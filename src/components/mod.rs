//! UI Components
//!
//! Leptos components for the dashboard.

mod badge;
mod complaint_list;
mod hero;
mod notice_banner;
mod quick_report;
mod stat_card;

pub use complaint_list::ComplaintList;
pub use hero::Hero;
pub use notice_banner::NoticeBanner;
pub use quick_report::QuickReportForm;
pub use stat_card::StatTiles;
