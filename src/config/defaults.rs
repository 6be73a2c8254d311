//! Default values for option fields.
//!
//! These functions are used by serde for default deserialization.

use super::Mode;

pub fn mode() -> Mode {
    Mode::Html
}

pub fn empty_patterns() -> Vec<String> {
    Vec::new()
}
