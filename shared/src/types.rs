//! Common type aliases

/// Table identifier, fixed at roster construction
pub type TableId = i64;

/// Unix timestamp in milliseconds
pub type Millis = i64;
