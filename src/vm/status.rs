//! Migration status codes
//!
//! Statuses are phase numbers written as text. `100` marks a finished
//! migration; anything else, including garbage, is shown as-is.

/// Status code of a completed migration
pub const COMPLETED: &str = "100";

pub fn is_completed(status: &str) -> bool {
    status == COMPLETED
}

/// Pad single digit phases so the column lines up: `"5"` becomes `"05"`.
///
/// Only a status that is exactly one digit from 1 to 9 is padded.
pub fn format_status(status: &str) -> String {
    match status.as_bytes() {
        [b @ b'1'..=b'9'] => format!("0{}", *b as char),
        _ => status.to_string(),
    }
}
