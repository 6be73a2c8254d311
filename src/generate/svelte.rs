//! Svelte component generator.
//!
//! Markup interleaves `{@html ...}` fragments with `<Inline{i} />`
//! references to separately-loadable inline component modules. The instance
//! script (imports) comes before the module script (exports); the Svelte
//! compiler accepts both orders.

use super::{css_import_lines, inline_import_lines, json};
use crate::types::ParseResult;
use std::path::Path;

pub(super) fn generate(result: &ParseResult, css: &str, source: &Path) -> String {
    let mut lines = Vec::new();

    let mut script = css_import_lines(result, css, source, "  ");
    script.extend(inline_import_lines(result, source, "  "));
    if !script.is_empty() {
        lines.push("<script lang=\"ts\">".to_string());
        lines.extend(script);
        lines.push("</script>".to_string());
    }

    lines.push("<script lang=\"ts\" module>".to_string());
    lines.push(format!(
        "  export const metadata = {};",
        json(&result.metadata)
    ));
    lines.push(format!("  export const toc = {};", json(&result.toc)));
    lines.push("</script>".to_string());

    for (i, part) in result.html_parts.iter().enumerate() {
        if !part.is_empty() {
            lines.push(format!("{{@html {}}}", json(part)));
        }
        if i < result.inline_components.len() {
            lines.push(format!("<Inline{i} />"));
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::super::testutil::{inline_result, plain_result};
    use super::*;
    use crate::types::Framework;

    #[test]
    fn test_plain_document_has_no_instance_script() {
        let output = generate(&plain_result(), "", Path::new("/docs/post.norg"));

        assert!(output.starts_with("<script lang=\"ts\" module>"));
        assert!(output.contains("  export const metadata = "));
        assert!(output.contains("{@html \"<h1 id=\\\"intro\\\">Intro</h1><p>body</p>\"}"));
    }

    #[test]
    fn test_inline_component_referenced_by_module() {
        let output = generate(
            &inline_result(Framework::Svelte),
            ".norg {}",
            Path::new("/docs/post.norg"),
        );

        assert!(output.contains("  import \"virtual:norg-arborium.css\";"));
        assert!(output.contains("  import 'virtual:norg-css:/docs/post.norg';"));
        assert!(output.contains("  import Inline0 from '/docs/post.norg?inline=0';"));
        assert!(output.contains("<Inline0 />"));

        // Fragment order: heading, component, trailing fragment
        let heading = output.find("{@html \"<h1").unwrap();
        let inline = output.find("<Inline0 />").unwrap();
        let after = output.find("{@html \"<p>after</p>\"}").unwrap();
        assert!(heading < inline && inline < after);
    }

    #[test]
    fn test_empty_fragments_skipped_in_markup() {
        let mut result = inline_result(Framework::Svelte);
        result.html_parts[1].clear();
        let output = generate(&result, "", Path::new("/docs/post.norg"));

        assert!(!output.contains("{@html \"\"}"));
        assert!(output.contains("<Inline0 />"));
    }
}
