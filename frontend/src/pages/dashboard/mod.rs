//! Dashboard page components
//!
//! This module contains the main dashboard page and its sub-components:
//! - `DashboardPage`: Main orchestrating component
//! - `FilterForm`: Platform, date range and source filters
//! - `MentionsTable`: One row per mention
//! - `Pagination`: Previous/next buttons

mod filter_form;
mod mentions_table;
mod page;
mod pagination;
mod source_select;

pub use page::DashboardPage;
