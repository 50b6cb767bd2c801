use crate::maintenance::domain::LicenseRecord;
use crate::shared::Result;
use std::path::Path;

/// LicenseScanner port for collecting license metadata of a dependency tree
pub trait LicenseScanner {
    /// Scans the project at `start` and every installed package below it
    ///
    /// # Returns
    /// One record per package in the scanner's own key order. The project
    /// itself is included with `path` equal to `start`.
    ///
    /// # Errors
    /// Returns `PatrolError::PackageInfoNotFound` if `start` holds no package metadata
    fn scan(&self, start: &Path) -> Result<Vec<LicenseRecord>>;
}
