//! Vue single-file-component generator.
//!
//! The setup script carries imports and template state; a separate plain
//! script block carries the module exports, since `<script setup>` bindings
//! are not module exports. Block order does not matter to the Vue compiler,
//! so imports are emitted first.

use super::{css_import_lines, inline_import_lines, json};
use crate::types::ParseResult;
use std::path::Path;

pub(super) fn generate(result: &ParseResult, css: &str, source: &Path) -> String {
    let mut lines = vec!["<script setup lang=\"ts\">".to_string()];
    lines.extend(css_import_lines(result, css, source, ""));
    lines.extend(inline_import_lines(result, source, ""));

    let has_inlines = !result.inline_components.is_empty();
    if has_inlines {
        lines.push(format!("const htmlParts = {};", json(&result.html_parts)));
    } else {
        let html = result.html_parts.concat();
        lines.push(format!("const htmlContent = {};", json(&html)));
    }
    lines.push(String::new());
    lines.push("defineExpose({ metadata, toc });".to_string());
    lines.push("</script>".to_string());

    lines.push("<script lang=\"ts\">".to_string());
    lines.push(format!("export const metadata = {};", json(&result.metadata)));
    lines.push(format!("export const toc = {};", json(&result.toc)));
    lines.push("</script>".to_string());

    lines.push(String::new());
    lines.push("<template>".to_string());
    if has_inlines {
        lines.push("  <div>".to_string());
        for (i, part) in result.html_parts.iter().enumerate() {
            if !part.is_empty() {
                lines.push(format!("    <div v-html=\"htmlParts[{i}]\"></div>"));
            }
            if i < result.inline_components.len() {
                lines.push(format!("    <Inline{i} />"));
            }
        }
        lines.push("  </div>".to_string());
    } else {
        lines.push("  <div v-html=\"htmlContent\"></div>".to_string());
    }
    lines.push("</template>".to_string());

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::super::testutil::{inline_result, plain_result};
    use super::*;
    use crate::types::Framework;

    #[test]
    fn test_plain_document_single_v_html() {
        let output = generate(&plain_result(), "", Path::new("/docs/post.norg"));

        assert!(output.contains("const htmlContent = \"<h1 id=\\\"intro\\\">Intro</h1><p>body</p>\";"));
        assert!(output.contains("  <div v-html=\"htmlContent\"></div>"));
        assert!(output.contains("defineExpose({ metadata, toc });"));
        assert!(output.contains("export const metadata = "));
    }

    #[test]
    fn test_inline_components_interleaved() {
        let output = generate(
            &inline_result(Framework::Vue),
            "body {}",
            Path::new("/docs/post.norg"),
        );

        assert!(output.contains("import \"virtual:norg-arborium.css\";"));
        assert!(output.contains("import Inline0 from '/docs/post.norg?inline=0';"));
        assert!(output.contains("const htmlParts = "));

        let first = output.find("<div v-html=\"htmlParts[0]\"></div>").unwrap();
        let inline = output.find("<Inline0 />").unwrap();
        let second = output.find("<div v-html=\"htmlParts[1]\"></div>").unwrap();
        assert!(first < inline && inline < second);
    }

    #[test]
    fn test_setup_script_precedes_exports() {
        let output = generate(&plain_result(), "body {}", Path::new("/docs/post.norg"));
        let setup = output.find("<script setup lang=\"ts\">").unwrap();
        let exports = output.find("export const metadata").unwrap();
        assert!(setup < exports);
    }
}
