//! Small shared utilities

use crate::types::Millis;

/// Current Unix time in milliseconds
pub fn now_millis() -> Millis {
    chrono::Utc::now().timestamp_millis()
}
