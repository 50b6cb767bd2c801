use crate::maintenance::domain::{DependencyKind, Manifest};
use serde_json::Value;

/// Pins caret ranges by dropping their leading `^`
///
/// Only a single leading caret is removed. Tilde ranges, comparators,
/// wildcards and carets further inside a range are left alone.
pub struct VersionLocker;

impl VersionLocker {
    pub fn lock(mut manifest: Manifest) -> Manifest {
        for kind in DependencyKind::ALL {
            if let Some(dependencies) = manifest.dependencies_mut(kind) {
                for range in dependencies.values_mut() {
                    if let Value::String(text) = range {
                        *text = Self::lock_range(text).to_string();
                    }
                }
            }
        }
        manifest
    }

    /// The locked form of a single range
    pub fn lock_range(range: &str) -> &str {
        range.strip_prefix('^').unwrap_or(range)
    }
}
