//! Inline component extraction and import injection.
//!
//! Exposes each embedded component block as its own loadable module, and
//! post-processes the code with imports for registered components it uses.
//!
//! Usage detection is textual (`<Name` followed by a non-identifier
//! character), not a template parse. A component name inside a string
//! literal produces a spurious import; that is the accepted cost of keeping
//! this a convenience feature rather than a per-framework parser.

use crate::cache::ParseCache;
use crate::error::LoadError;
use std::collections::BTreeMap;
use std::path::Path;

/// Component name -> import path registry, explicit entries merged with
/// auto-discovered ones.
#[derive(Debug, Clone, Default)]
pub struct ComponentRegistry {
    entries: BTreeMap<String, String>,
}

impl ComponentRegistry {
    pub fn new(entries: BTreeMap<String, String>) -> Self {
        Self { entries }
    }

    /// Insert import statements for every registered component the code
    /// uses but does not already import. Unregistered tag names are left
    /// untouched.
    pub fn inject_imports(&self, code: &str) -> String {
        let needed: Vec<String> = self
            .entries
            .iter()
            .filter(|(name, _)| uses_component(code, name) && !already_imported(code, name))
            .map(|(name, path)| format!("import {name} from '{path}';"))
            .collect();

        if needed.is_empty() {
            return code.to_string();
        }

        let imports = needed.join("\n");
        match script_open_end(code) {
            // Right after the opening script tag, whatever its attributes
            Some(end) => format!("{}\n{}{}", &code[..end], imports, &code[end..]),
            None => format!("<script>\n{imports}\n</script>\n{code}"),
        }
    }
}

/// Fetch one inline component's code, injecting registry imports.
///
/// Populates the parse cache if the source was never loaded. An index past
/// the parse result's components is a hard error: it means the resolver and
/// the cache disagree about the document.
pub fn get_inline(
    cache: &ParseCache,
    source: &Path,
    index: usize,
    registry: &ComponentRegistry,
) -> Result<String, LoadError> {
    let parsed = cache.get_or_parse(source)?;
    let component =
        parsed
            .inline_components
            .get(index)
            .ok_or_else(|| LoadError::InlineNotFound {
                path: source.to_path_buf(),
                index,
                available: parsed.inline_components.len(),
            })?;
    Ok(registry.inject_imports(&component.code))
}

/// Whether `<name` appears as an opening tag (next char ends the name).
fn uses_component(code: &str, name: &str) -> bool {
    let tag = format!("<{name}");
    code.match_indices(&tag).any(|(start, matched)| {
        match code[start + matched.len()..].chars().next() {
            Some(c) => !c.is_alphanumeric() && c != '_',
            None => true,
        }
    })
}

/// Whether an import statement already mentions `name`.
fn already_imported(code: &str, name: &str) -> bool {
    code.lines().any(|line| {
        let line = line.trim_start();
        line.starts_with("import") && line.contains(name)
    })
}

/// Byte offset just past the first `<script ...>` opening tag, if any.
fn script_open_end(code: &str) -> Option<usize> {
    let start = code.find("<script")?;
    let close = code[start..].find('>')?;
    Some(start + close + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{NorgParser, ParseError};
    use crate::types::{Framework, InlineComponent, ParseResult};
    use std::fs;
    use std::sync::Arc;

    fn registry(pairs: &[(&str, &str)]) -> ComponentRegistry {
        ComponentRegistry::new(
            pairs
                .iter()
                .map(|(n, p)| (n.to_string(), p.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_unused_components_not_imported() {
        let registry = registry(&[("Chart", "$lib/Chart.svelte")]);
        let code = "<p>No components here</p>";
        assert_eq!(registry.inject_imports(code), code);
    }

    #[test]
    fn test_import_prepended_in_new_script_block() {
        let registry = registry(&[("Chart", "$lib/Chart.svelte")]);
        let out = registry.inject_imports("<Chart data={d} />");

        assert!(out.starts_with("<script>\nimport Chart from '$lib/Chart.svelte';\n</script>\n"));
        assert!(out.ends_with("<Chart data={d} />"));
    }

    #[test]
    fn test_import_inserted_after_existing_script_tag() {
        let registry = registry(&[("Chart", "$lib/Chart.svelte")]);
        let code = "<script lang=\"ts\">\n  let d = [];\n</script>\n<Chart data={d} />";
        let out = registry.inject_imports(code);

        assert!(out.starts_with(
            "<script lang=\"ts\">\nimport Chart from '$lib/Chart.svelte';\n  let d = [];"
        ));
        // Only one script block
        assert_eq!(out.matches("<script").count(), 1);
    }

    #[test]
    fn test_existing_import_never_duplicated() {
        let registry = registry(&[("Chart", "$lib/Chart.svelte")]);
        let code = "<script>\nimport Chart from './my/Chart.svelte';\n</script>\n<Chart />";
        assert_eq!(registry.inject_imports(code), code);
    }

    #[test]
    fn test_prefix_names_not_confused() {
        // <ChartLegend must not count as a use of Chart
        let registry = registry(&[("Chart", "$lib/Chart.svelte")]);
        let code = "<ChartLegend />";
        assert_eq!(registry.inject_imports(code), code);
    }

    #[test]
    fn test_multiple_needed_imports_sorted_by_name() {
        let registry = registry(&[("Video", "$lib/Video.vue"), ("Chart", "$lib/Chart.vue")]);
        let out = registry.inject_imports("<div><Chart /><Video /></div>");

        let chart = out.find("import Chart").unwrap();
        let video = out.find("import Video").unwrap();
        assert!(chart < video);
    }

    struct OneInlineParser;

    impl NorgParser for OneInlineParser {
        fn parse(
            &self,
            _content: &str,
            _framework: Option<Framework>,
        ) -> Result<ParseResult, ParseError> {
            Ok(ParseResult {
                html_parts: vec!["<h1>a</h1>".into(), "<p>b</p>".into()],
                inline_components: vec![InlineComponent {
                    index: 0,
                    framework: Framework::Svelte,
                    code: "<b>inline</b>".into(),
                }],
                ..ParseResult::default()
            })
        }
    }

    #[test]
    fn test_get_inline_returns_component_code() {
        let dir = tempfile::tempdir().unwrap();
        let doc = dir.path().join("a.norg");
        fs::write(&doc, "irrelevant").unwrap();
        let cache = ParseCache::new(Arc::new(OneInlineParser), Some(Framework::Svelte));

        let code = get_inline(&cache, &doc, 0, &ComponentRegistry::default()).unwrap();
        assert_eq!(code, "<b>inline</b>");
    }

    #[test]
    fn test_get_inline_out_of_bounds_is_hard_error() {
        let dir = tempfile::tempdir().unwrap();
        let doc = dir.path().join("a.norg");
        fs::write(&doc, "irrelevant").unwrap();
        let cache = ParseCache::new(Arc::new(OneInlineParser), Some(Framework::Svelte));

        let err = get_inline(&cache, &doc, 5, &ComponentRegistry::default()).unwrap_err();
        match err {
            LoadError::InlineNotFound {
                index, available, ..
            } => {
                assert_eq!(index, 5);
                assert_eq!(available, 1);
            }
            other => panic!("expected InlineNotFound, got {other}"),
        }
    }
}
