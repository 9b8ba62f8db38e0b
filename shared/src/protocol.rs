/// Query endpoint consumed by the dashboard.
pub const DASHBOARD_DATA_PATH: &str = "/api/dashboard_data";

/// Ingest endpoint used by collectors to record a mention.
pub const MENTIONS_PATH: &str = "/api/mentions";

/// Liveness endpoint.
pub const HEALTH_PATH: &str = "/api/health";

/// Rows per dashboard page.
pub const DEFAULT_PAGE_SIZE: i64 = 100;

/// Upper bound the backend applies to `limit`.
pub const MAX_PAGE_SIZE: i64 = 1000;

/// Days before today preselected as the start of the date range.
pub const DEFAULT_RANGE_DAYS: i64 = 7;
