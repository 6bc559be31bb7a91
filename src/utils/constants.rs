//! Shared constants: REST paths, storage keys and contract limits.

/// Versioned prefix every backend endpoint lives under.
pub const API_PREFIX: &str = "/api/v1";

// REST paths
pub const SEGMENTS_PATH: &str = "/api/v1/audience/segments";
pub const CAMPAIGNS_PATH: &str = "/api/v1/campaigns";
pub const TEMPLATES_PATH: &str = "/api/v1/templates";
pub const RICH_MENUS_PATH: &str = "/api/v1/richmenus";
pub const AUTO_REPLY_RULES_PATH: &str = "/api/v1/autoreply/rules";
pub const DASHBOARD_STATS_PATH: &str = "/api/v1/dashboard/stats";
pub const HISTORY_PATH: &str = "/api/v1/history";

/// Cookie whose presence gates protected routes. Its contents are opaque
/// to the client; the backend is the authority for actual validity.
pub const ACCESS_TOKEN_COOKIE: &str = "access_token";

/// Path unauthenticated navigation is redirected to.
pub const LOGIN_PATH: &str = "/login";

// localStorage keys
pub const STORAGE_KEY_SESSION: &str = "oaConsole_session";

// Entity field limits, mirrored from the backend contract
pub const NAME_MAX_LEN: usize = 100;
pub const BODY_MAX_LEN: usize = 1000;
pub const RULE_NAME_MAX_LEN: usize = 50;
pub const MAX_KEYWORDS: usize = 10;
pub const PRIORITY_MIN: u8 = 1;
pub const PRIORITY_MAX: u8 = 5;
pub const ACTION_LABEL_MAX_LEN: usize = 20;
pub const ACTION_TEXT_MAX_LEN: usize = 300;

/// The messaging platform accepts at most this many recipients per push.
pub const MAX_BATCH_SIZE: usize = 500;
/// Bulk rule toggles are capped server-side.
pub const MAX_BULK_RULE_UPDATES: usize = 5;

// Rich menu canvas dimensions (platform-defined, in pixels)
pub const RICH_MENU_FULL_WIDTH: u32 = 2500;
pub const RICH_MENU_FULL_HEIGHT: u32 = 1686;
pub const RICH_MENU_HALF_HEIGHT: u32 = 843;
