//! React component generator.
//!
//! Pre-rendered markup goes through `dangerouslySetInnerHTML`. Documents
//! without inline components render a single wrapper div; documents with
//! them render a fragment interleaving html chunks with the imported inline
//! component modules.

use super::{css_import_lines, inline_import_lines, json};
use crate::types::ParseResult;
use std::path::Path;

pub(super) fn generate(result: &ParseResult, css: &str, source: &Path) -> String {
    let mut lines = vec!["import React from \"react\";".to_string()];
    lines.extend(css_import_lines(result, css, source, ""));
    lines.extend(inline_import_lines(result, source, ""));

    lines.push(String::new());
    lines.push(format!("export const metadata = {};", json(&result.metadata)));
    lines.push(format!("export const toc = {};", json(&result.toc)));
    lines.push(String::new());

    if result.inline_components.is_empty() {
        let html = result.html_parts.concat();
        lines.push(format!("const htmlContent = {};", json(&html)));
        lines.push(String::new());
        lines.push(
            "export const Component = () => React.createElement(\"div\", { dangerouslySetInnerHTML: { __html: htmlContent } });"
                .to_string(),
        );
    } else {
        lines.push(format!("const htmlParts = {};", json(&result.html_parts)));
        lines.push(String::new());
        lines.push("export const Component = () =>".to_string());
        lines.push("  React.createElement(".to_string());
        lines.push("    React.Fragment,".to_string());
        lines.push("    null,".to_string());

        let mut children = Vec::new();
        for (i, part) in result.html_parts.iter().enumerate() {
            if !part.is_empty() {
                children.push(format!(
                    "    React.createElement(\"div\", {{ dangerouslySetInnerHTML: {{ __html: htmlParts[{i}] }} }})"
                ));
            }
            if i < result.inline_components.len() {
                children.push(format!("    React.createElement(Inline{i}, null)"));
            }
        }
        lines.push(children.join(",\n"));
        lines.push("  );".to_string());
    }

    lines.push("export default Component;".to_string());
    lines.join("\n")
}
