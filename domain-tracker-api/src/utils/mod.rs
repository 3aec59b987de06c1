//! Utility modules.

/// Serde helpers for the backend's `renew` date field.
pub mod datetime;

/// Credential masking and truncation for logged bodies.
pub mod log_sanitizer;
