//! Metadata-only module generator.
//!
//! Reachable two ways: as the dedicated `metadata` mode, and via the
//! `?metadata` query on any mode. Both paths call [`generate`], so their
//! output is byte-identical for the same parse result. Markup, toc and CSS
//! are ignored entirely.

use super::json;
use crate::types::ParseResult;
use std::path::Path;

/// Emit the metadata module for one parse result.
pub fn generate(result: &ParseResult) -> String {
    [
        format!("export const metadata = {};", json(&result.metadata)),
        "export default { metadata };".to_string(),
    ]
    .join("\n")
}

/// Adapter matching the [`Generator`](super::Generator) signature.
pub(super) fn generate_for_mode(result: &ParseResult, _css: &str, _source: &Path) -> String {
    generate(result)
}
