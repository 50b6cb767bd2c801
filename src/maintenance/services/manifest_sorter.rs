use crate::maintenance::domain::{DependencyKind, Manifest};
use serde_json::{Map, Value};

/// Sorts the dependency maps of a manifest by package name
pub struct ManifestSorter;

impl ManifestSorter {
    /// Returns the manifest with `dependencies` and `devDependencies`
    /// sorted ascending. Values and every other field stay as they were.
    pub fn sort(mut manifest: Manifest) -> Manifest {
        for kind in DependencyKind::ALL {
            if let Some(dependencies) = manifest.dependencies(kind) {
                let sorted = Self::sort_map(dependencies);
                manifest.set_dependencies(kind, sorted);
            }
        }
        manifest
    }

    fn sort_map(map: &Map<String, Value>) -> Map<String, Value> {
        let mut entries: Vec<(&String, &Value)> = map.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
            .into_iter()
            .map(|(name, range)| (name.clone(), range.clone()))
            .collect()
    }
}
