//! Component auto-discovery.
//!
//! Scans a directory recursively for files with the active framework
//! extension and registers each by file stem. Runs once at plugin
//! construction; explicit registry entries always win over discovered ones.

use std::collections::BTreeMap;
use std::path::Path;
use walkdir::WalkDir;

use crate::log;

/// Map every `*.{extension}` file under `dir` to `stem -> absolute path`.
///
/// A missing directory yields an empty map (validation catches configured
/// but nonexistent directories earlier). Unreadable entries are logged and
/// skipped rather than failing the whole scan.
pub fn discover_components(dir: &Path, extension: &str) -> BTreeMap<String, String> {
    let mut components = BTreeMap::new();
    if !dir.is_dir() {
        return components;
    }

    for entry in WalkDir::new(dir).follow_links(true) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                log!("discover"; "skipping unreadable entry: {err}");
                continue;
            }
        };

        let path = entry.path();
        if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some(extension) {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };

        components.insert(stem.to_string(), path.to_string_lossy().into_owned());
    }

    components
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_discovers_matching_extension_recursively() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("Chart.svelte"), "<b/>").unwrap();
        fs::write(dir.path().join("nested/Video.svelte"), "<b/>").unwrap();
        fs::write(dir.path().join("NotAComponent.vue"), "<b/>").unwrap();
        fs::write(dir.path().join("readme.md"), "docs").unwrap();

        let components = discover_components(dir.path(), "svelte");

        assert_eq!(components.len(), 2);
        assert!(components["Chart"].ends_with("Chart.svelte"));
        assert!(components["Video"].ends_with("nested/Video.svelte"));
    }

    #[test]
    fn test_missing_directory_yields_empty() {
        assert!(discover_components(Path::new("/no/such/dir"), "vue").is_empty());
    }
}
