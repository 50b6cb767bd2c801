use crate::maintenance::domain::{Manifest, MANIFEST_FILENAME};
use crate::ports::outbound::ManifestStore;
use crate::shared::error::PatrolError;
use crate::shared::security::{read_bounded_file, validate_not_symlink};
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemManifestStore adapter reading and rewriting `package.json`
pub struct FileSystemManifestStore;

impl FileSystemManifestStore {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemManifestStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestStore for FileSystemManifestStore {
    fn exists(&self, project_root: &Path) -> bool {
        fs::symlink_metadata(project_root.join(MANIFEST_FILENAME))
            .map(|metadata| metadata.is_file() || metadata.is_symlink())
            .unwrap_or(false)
    }

    fn load(&self, project_root: &Path) -> Result<Manifest> {
        let manifest_path = project_root.join(MANIFEST_FILENAME);

        let metadata = match fs::symlink_metadata(&manifest_path) {
            Ok(metadata) => metadata,
            Err(_) => {
                return Err(PatrolError::ManifestNotFound {
                    path: manifest_path,
                }
                .into())
            }
        };
        if metadata.is_symlink() {
            return Err(PatrolError::ManifestSymlink {
                path: manifest_path,
            }
            .into());
        }

        let content = read_bounded_file(&manifest_path, MANIFEST_FILENAME).map_err(|e| {
            PatrolError::ManifestParse {
                path: manifest_path.clone(),
                details: e.to_string(),
            }
        })?;

        Manifest::from_json(&content).map_err(|e| {
            PatrolError::ManifestParse {
                path: manifest_path.clone(),
                details: e.to_string(),
            }
            .into()
        })
    }

    fn save(&self, project_root: &Path, manifest: &Manifest) -> Result<()> {
        let manifest_path = project_root.join(MANIFEST_FILENAME);
        let write_error = |details: String| PatrolError::ManifestWrite {
            path: manifest_path.clone(),
            details,
        };

        if manifest_path.exists() {
            validate_not_symlink(&manifest_path, "write").map_err(|e| write_error(e.to_string()))?;
        }

        let content = manifest
            .to_pretty_json()
            .map_err(|e| write_error(e.to_string()))?;
        fs::write(&manifest_path, content).map_err(|e| write_error(e.to_string()))?;

        tracing::debug!(path = %manifest_path.display(), "manifest written");
        Ok(())
    }
}
