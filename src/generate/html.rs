//! Plain-HTML module generator.
//!
//! No component runtime exists in this mode, so each inline component's raw
//! code is spliced verbatim into its gap between html fragments.

use super::{css_import_lines, json};
use crate::types::{InlineComponent, ParseResult};
use std::path::Path;

pub(super) fn generate(result: &ParseResult, css: &str, source: &Path) -> String {
    let html = splice_inline_code(&result.html_parts, &result.inline_components);

    let mut lines = css_import_lines(result, css, source, "");
    lines.push(format!("export const metadata = {};", json(&result.metadata)));
    lines.push(format!("export const html = {};", json(&html)));
    lines.push(format!("export const toc = {};", json(&result.toc)));
    lines.push("export default { metadata, html, toc };".to_string());
    lines.join("\n")
}

/// Concatenate fragments with each component's code in its gap position.
fn splice_inline_code(parts: &[String], components: &[InlineComponent]) -> String {
    let mut out = String::new();
    for (i, part) in parts.iter().enumerate() {
        out.push_str(part);
        if let Some(component) = components.get(i) {
            out.push_str(&component.code);
        }
    }
    out
}
