//! Custom Yew hooks for the frontend application.
//!
//! These hooks encapsulate reusable state logic to keep components clean and focused.

mod use_dashboard;

pub use use_dashboard::use_dashboard;
