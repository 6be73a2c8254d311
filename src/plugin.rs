//! Plugin orchestration: the three host-facing hooks.
//!
//! # Control flow
//!
//! ```text
//! host                         norg-plugin
//! ─────────────────────────    ─────────────────────────────────────────
//! resolve(id, importer)  ───►  resolve::resolve_id (canonicalize or pass)
//! load(id)               ───►  VirtualId::parse
//!                              ├─ GlobalCss  → theme css (built once)
//!                              ├─ DocCss     → parse cache → inline_css
//!                              ├─ Inline     → parse cache → extractor
//!                              ├─ Metadata   → parse cache → metadata gen
//!                              └─ Main       → parse cache → mode gen
//! file changed (path)    ───►  evict cache, invalidate tracked modules
//! ```
//!
//! All cross-request state (parse cache, invalidation tracker) lives on the
//! plugin instance. Two plugins for different modes never share anything.

use crate::cache::ParseCache;
use crate::config::{ConfigError, Mode, PluginConfig, PluginOptions, ThemeSpec};
use crate::discovery::discover_components;
use crate::error::LoadError;
use crate::generate;
use crate::hmr::{InvalidationTracker, ModuleGraph};
use crate::inline::{self, ComponentRegistry};
use crate::log;
use crate::parser::{NorgParser, ThemeProvider};
use crate::resolve::{self, VirtualId};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

/// The transform pipeline for one target mode.
pub struct NorgPlugin {
    config: PluginConfig,
    /// Theme CSS text, built once at construction.
    css: String,
    registry: ComponentRegistry,
    cache: ParseCache,
    tracker: InvalidationTracker,
}

impl NorgPlugin {
    /// Validate options and assemble the pipeline.
    ///
    /// Fails fast on any configuration violation; no source file is touched
    /// before validation passes. Theme CSS is generated here, once, and
    /// component discovery runs here, once.
    pub fn new(
        options: PluginOptions,
        parser: Arc<dyn NorgParser>,
        themes: Arc<dyn ThemeProvider>,
    ) -> Result<Self, ConfigError> {
        let config = options.validate()?;
        let css = build_css(&config.theme, themes.as_ref());

        let mut components = match (&config.components_dir, config.mode.inline_extension()) {
            (Some(dir), Some(extension)) => discover_components(dir, extension),
            _ => BTreeMap::new(),
        };
        // Explicit entries win over discovered ones
        components.extend(config.components.clone());

        let cache = ParseCache::new(parser, config.mode.framework());

        Ok(Self {
            config,
            css,
            registry: ComponentRegistry::new(components),
            cache,
            tracker: InvalidationTracker::new(),
        })
    }

    pub fn mode(&self) -> Mode {
        self.config.mode
    }

    /// Theme CSS served for the global stylesheet module.
    pub fn css(&self) -> &str {
        &self.css
    }

    /// Host resolution hook: canonicalize an id or pass it through.
    pub fn resolve_id(&self, id: &str, importer: Option<&Path>) -> Option<String> {
        resolve::resolve_id(id, importer, self.config.mode)
    }

    /// Host load hook: produce module text for a canonical id.
    ///
    /// `Ok(None)` is the deliberate pass-through for ids outside this
    /// pipeline's purview; every real failure carries the source path.
    pub fn load(&self, id: &str) -> Result<Option<String>, LoadError> {
        let Some(virtual_id) = VirtualId::parse(id) else {
            return Ok(None);
        };

        match virtual_id {
            VirtualId::GlobalCss => Ok(Some(self.css.clone())),

            VirtualId::DocCss(source) => {
                if !self.handles(&source) {
                    return Ok(None);
                }
                self.tracker
                    .track(&source, resolve::resolved_doc_css_id(&source));
                let parsed = self.cache.get_or_parse(&source)?;
                Ok(Some(parsed.inline_css.clone().unwrap_or_default()))
            }

            VirtualId::Inline { source, index } => {
                // Inline modules do not exist in modes without a framework
                let Some(extension) = self.config.mode.inline_extension() else {
                    return Ok(None);
                };
                if !self.handles(&source) {
                    return Ok(None);
                }
                // Track the canonical id, not the request: host params like
                // `&t=<ts>` must not leak into the invalidation set.
                self.tracker
                    .track(&source, resolve::inline_id(&source, index, extension));
                inline::get_inline(&self.cache, &source, index, &self.registry).map(Some)
            }

            VirtualId::Metadata(source) => {
                if !self.handles(&source) {
                    return Ok(None);
                }
                let parsed = self.cache.get_or_parse(&source)?;
                Ok(Some(generate::generate_metadata(&parsed)))
            }

            VirtualId::Main(source) => {
                if !self.handles(&source) {
                    return Ok(None);
                }
                let parsed = self.cache.get_or_parse(&source)?;
                Ok(Some(generate::generate(
                    self.config.mode,
                    &parsed,
                    &self.css,
                    &source,
                )))
            }
        }
    }

    /// Host file-change hook.
    ///
    /// Evicts the parse cache entry and marks every tracked derived module
    /// of `path` invalid in the module graph. Returns the host's default
    /// invalidation set extended with the derived modules that were live.
    /// For untracked paths the default set comes back unchanged.
    pub fn handle_file_change(
        &self,
        path: &Path,
        graph: &dyn ModuleGraph,
        default_ids: Vec<String>,
    ) -> Vec<String> {
        if !self.handles(path) {
            return default_ids;
        }

        self.cache.invalidate(path);

        let mut ids = default_ids;
        let mut stale = 0usize;
        for id in self.tracker.drain(path) {
            if graph.invalidate(&id) {
                stale += 1;
                if !ids.contains(&id) {
                    ids.push(id);
                }
            }
        }
        if stale > 0 {
            log!("hmr"; "invalidated {stale} derived modules for {}", path.display());
        }
        ids
    }

    /// Whether a source path belongs to this pipeline: norg extension plus
    /// the configured include/exclude filter.
    fn handles(&self, source: &Path) -> bool {
        source.extension().and_then(|e| e.to_str()) == Some("norg")
            && self.config.filter.matches(source)
    }
}

/// Build the theme CSS text once. A light/dark pair is wrapped in
/// `prefers-color-scheme` media queries.
fn build_css(theme: &ThemeSpec, themes: &dyn ThemeProvider) -> String {
    match theme {
        ThemeSpec::Single(name) => themes.theme_css(name),
        ThemeSpec::LightDark { light, dark } => format!(
            "@media (prefers-color-scheme: light) {{\n{}\n}}\n@media (prefers-color-scheme: dark) {{\n{}\n}}",
            themes.theme_css(light),
            themes.theme_css(dark)
        ),
    }
}
