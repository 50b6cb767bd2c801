use patroller::prelude::*;
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Mock ManifestStore keeping package.json in memory
#[derive(Clone, Default)]
pub struct MockManifestStore {
    manifest: Arc<Mutex<Option<Manifest>>>,
    saves: Arc<Mutex<usize>>,
}

#[allow(dead_code)]
impl MockManifestStore {
    /// A store holding the given package.json text
    pub fn with_json(json: &str) -> Self {
        let manifest = Manifest::from_json(json).unwrap();
        Self {
            manifest: Arc::new(Mutex::new(Some(manifest))),
            saves: Arc::new(Mutex::new(0)),
        }
    }

    /// A store for a project without package.json
    pub fn missing() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Manifest {
        self.manifest.lock().unwrap().clone().unwrap()
    }

    pub fn save_count(&self) -> usize {
        *self.saves.lock().unwrap()
    }
}

impl ManifestStore for MockManifestStore {
    fn exists(&self, _project_root: &Path) -> bool {
        self.manifest.lock().unwrap().is_some()
    }

    fn load(&self, project_root: &Path) -> Result<Manifest> {
        self.manifest.lock().unwrap().clone().ok_or_else(|| {
            PatrolError::ManifestNotFound {
                path: project_root.join(MANIFEST_FILENAME),
            }
            .into()
        })
    }

    fn save(&self, _project_root: &Path, manifest: &Manifest) -> Result<()> {
        *self.manifest.lock().unwrap() = Some(manifest.clone());
        *self.saves.lock().unwrap() += 1;
        Ok(())
    }
}
