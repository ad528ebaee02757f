/// Service name reported by the health endpoint
pub const SERVICE_NAME: &str = "HLS Canva Automation API";

/// Timezone stored on a schedule when the caller omits one
pub const DEFAULT_TIMEZONE: &str = "UTC";

/// Caption used for a publish request without one
pub const DEFAULT_CAPTION: &str = "New design from Hello Little Sleepers";

/// Error attached to every Instagram publish attempt until credentials exist
pub const INSTAGRAM_NOT_CONFIGURED: &str =
    "Instagram credentials not configured. Please provide INSTAGRAM_ACCESS_TOKEN";

/// Note attached to export descriptors
pub const EXPORT_NOTE: &str = "In production, this would generate actual export from Canva";

/// Base URL for synthetic export download links
pub const EXPORT_BASE_URL: &str = "https://example.com/export";

/// Error message for publish/export requests without a design
pub const ERR_DESIGN_ID_REQUIRED: &str = "designId is required";

// =============================================================================
// Dashboard
// =============================================================================

/// Number of designs shown on the dashboard
pub const DASHBOARD_RECENT_DESIGNS: usize = 5;

/// Number of history entries shown on the dashboard
pub const DASHBOARD_RECENT_HISTORY: usize = 10;

// =============================================================================
// Collection files
// =============================================================================

pub const DESIGNS_FILE: &str = "designs.json";
pub const SCHEDULES_FILE: &str = "schedules.json";
pub const HISTORY_FILE: &str = "history.json";
