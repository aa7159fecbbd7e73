//! Application-wide constants.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Obscura Studio";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "obscura";

/// Poll timeout of the main loop in milliseconds (roughly 30 frames/sec).
pub const TICK_INTERVAL_MS: u64 = 33;
