use crate::maintenance::domain::Manifest;
use crate::shared::Result;
use std::path::Path;

/// ManifestStore port for loading and persisting `package.json`
///
/// Every action loads a fresh copy and saves immediately after mutating it;
/// implementations hold no cached state between calls.
pub trait ManifestStore {
    /// Whether a manifest exists at the project root
    fn exists(&self, project_root: &Path) -> bool;

    /// Reads and parses the manifest at the project root
    ///
    /// # Errors
    /// Returns an error if:
    /// - The manifest does not exist (`PatrolError::ManifestNotFound`)
    /// - The manifest is a symbolic link (`PatrolError::ManifestSymlink`)
    /// - The file cannot be read or is not a JSON object (`PatrolError::ManifestParse`)
    fn load(&self, project_root: &Path) -> Result<Manifest>;

    /// Rewrites the manifest in place
    ///
    /// # Errors
    /// Returns `PatrolError::ManifestWrite` if the file cannot be written
    fn save(&self, project_root: &Path, manifest: &Manifest) -> Result<()>;
}
