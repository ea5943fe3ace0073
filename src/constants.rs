//! Application-wide constants

// =============================================================================
// Event loop
// =============================================================================

/// Event poll timeout in milliseconds
pub const EVENT_POLL_TIMEOUT_MS: u64 = 100;

/// Shortest accepted redraw interval in milliseconds
pub const MIN_TICK_MS: u64 = 10;

/// Spinner animation interval in milliseconds
pub const SPINNER_TICK_MS: u128 = 100;

/// Channel buffer size for command messages
pub const COMMAND_CHANNEL_SIZE: usize = 32;

// =============================================================================
// Input limits
// =============================================================================

/// Maximum length for user text input (prevents memory exhaustion)
pub const MAX_INPUT_LENGTH: usize = 100;

pub const MAX_EMAIL_LENGTH: usize = 100;

pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MAX_PASSWORD_LENGTH: usize = 64;

pub const MIN_NICKNAME_LENGTH: usize = 2;
pub const MAX_NICKNAME_LENGTH: usize = 20;

// =============================================================================
// API
// =============================================================================

/// Default service address
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Timeout for HTTP client requests (seconds)
pub const HTTP_CLIENT_TIMEOUT_SECS: u64 = 10;

/// Longest server error body shown to the user
pub const MAX_ERROR_BODY_CHARS: usize = 200;

/// Default page size for answer listings
pub const DEFAULT_ANSWER_PAGE_SIZE: u32 = 10;

// =============================================================================
// Notifications
// =============================================================================

/// How long a toast stays on screen (milliseconds)
pub const TOAST_TIMEOUT_MS: u64 = 3000;

/// Duration for desktop notification display (milliseconds)
pub const DESKTOP_NOTIFICATION_TIMEOUT_MS: i32 = 5000;
