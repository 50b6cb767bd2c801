use crate::maintenance::domain::{Manifest, UnusedReport};
use crate::shared::Result;
use std::path::Path;

/// UsageScanner port for detecting dependencies the project never references
pub trait UsageScanner {
    /// Scans the project rooted at `project_root`
    ///
    /// # Arguments
    /// * `project_root` - Directory containing the manifest and the sources
    /// * `manifest` - The manifest as currently on disk
    ///
    /// # Returns
    /// The unused production and development dependency names, in manifest order
    fn scan(&self, project_root: &Path, manifest: &Manifest) -> Result<UnusedReport>;
}
