use crate::maintenance::domain::{LicenseRecord, Manifest, MANIFEST_FILENAME};
use crate::maintenance::policies::LicenseResolution;
use crate::ports::outbound::LicenseScanner;
use crate::shared::error::PatrolError;
use crate::shared::security::read_bounded_file;
use crate::shared::Result;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Nesting limit for `node_modules` inside `node_modules`
const MAX_NESTING_DEPTH: usize = 32;

/// File name prefixes searched for license text, in priority order
const LICENSE_FILE_PREFIXES: &[&str] = &["LICENSE", "LICENCE", "COPYING", "README"];

/// Version used when a manifest does not declare one
const UNVERSIONED: &str = "0.0.0";

/// NodeModulesLicenseScanner adapter reading license metadata from disk
///
/// The project manifest becomes the record at `start`; every package found
/// under `node_modules` (scoped and nested ones included) contributes one
/// record keyed `name@version`. The first occurrence of a key wins and the
/// result is ordered by key.
pub struct NodeModulesLicenseScanner;

impl NodeModulesLicenseScanner {
    pub fn new() -> Self {
        Self
    }

    fn read_record(&self, package_dir: &Path, fallback_name: &str) -> Result<LicenseRecord> {
        let content = read_bounded_file(&package_dir.join(MANIFEST_FILENAME), MANIFEST_FILENAME)?;
        let manifest = Manifest::from_json(&content)?;

        let name = manifest.name().unwrap_or(fallback_name);
        let version = manifest.version().unwrap_or(UNVERSIONED);
        let declared = LicenseResolution::declared(manifest.document());
        let license = match declared {
            Some(license) => license,
            None => LicenseResolution::resolve(None, &license_texts(package_dir)),
        };

        Ok(LicenseRecord::new(
            name,
            version,
            &license,
            package_dir.to_path_buf(),
        ))
    }

    fn collect_installed(
        &self,
        node_modules: &Path,
        depth: usize,
        records: &mut BTreeMap<String, LicenseRecord>,
    ) {
        if depth > MAX_NESTING_DEPTH {
            tracing::warn!(path = %node_modules.display(), "node_modules nested too deeply, not descending");
            return;
        }

        for entry in sorted_entries(node_modules) {
            let name = entry.file_name().map(|n| n.to_string_lossy().into_owned());
            let Some(name) = name else { continue };
            if name.starts_with('.') {
                continue;
            }

            if name.starts_with('@') {
                for scoped in sorted_entries(&entry) {
                    self.visit_package(&scoped, depth, records);
                }
            } else {
                self.visit_package(&entry, depth, records);
            }
        }
    }

    fn visit_package(
        &self,
        package_dir: &Path,
        depth: usize,
        records: &mut BTreeMap<String, LicenseRecord>,
    ) {
        if !package_dir.join(MANIFEST_FILENAME).is_file() {
            return;
        }

        let fallback_name = package_dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        match self.read_record(package_dir, &fallback_name) {
            Ok(record) => {
                records.entry(record.key.clone()).or_insert(record);
            }
            Err(e) => {
                tracing::warn!(path = %package_dir.display(), error = %e, "skipping unreadable package");
            }
        }

        let is_link = fs::symlink_metadata(package_dir)
            .map(|m| m.file_type().is_symlink())
            .unwrap_or(false);
        if !is_link {
            self.collect_installed(&package_dir.join("node_modules"), depth + 1, records);
        }
    }
}

impl Default for NodeModulesLicenseScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl LicenseScanner for NodeModulesLicenseScanner {
    fn scan(&self, start: &Path) -> Result<Vec<LicenseRecord>> {
        let not_found = || PatrolError::PackageInfoNotFound {
            path: start.to_path_buf(),
        };

        if !start.join(MANIFEST_FILENAME).is_file() {
            return Err(not_found().into());
        }

        let fallback_name = start
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "root".to_string());
        let root = self.read_record(start, &fallback_name).map_err(|e| {
            tracing::debug!(error = %e, "project manifest unreadable");
            not_found()
        })?;

        let mut records = BTreeMap::new();
        records.insert(root.key.clone(), root);
        self.collect_installed(&start.join("node_modules"), 0, &mut records);

        tracing::debug!(packages = records.len(), "license scan finished");
        Ok(records.into_values().collect())
    }
}

/// Directory entries sorted by name; unreadable directories yield nothing
fn sorted_entries(dir: &Path) -> Vec<PathBuf> {
    let mut entries: Vec<PathBuf> = match fs::read_dir(dir) {
        Ok(read_dir) => read_dir
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_dir())
            .collect(),
        Err(_) => return Vec::new(),
    };
    entries.sort();
    entries
}

/// Texts of the package's license and readme files, in priority order
fn license_texts(package_dir: &Path) -> Vec<String> {
    let files: Vec<PathBuf> = match fs::read_dir(package_dir) {
        Ok(read_dir) => read_dir
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .collect(),
        Err(_) => return Vec::new(),
    };

    let mut texts = Vec::new();
    for prefix in LICENSE_FILE_PREFIXES {
        let mut matching: Vec<&PathBuf> = files
            .iter()
            .filter(|path| {
                path.file_name()
                    .map(|n| n.to_string_lossy().to_uppercase().starts_with(prefix))
                    .unwrap_or(false)
            })
            .collect();
        matching.sort();
        texts.extend(
            matching
                .into_iter()
                .filter_map(|path| read_bounded_file(path, "license file").ok()),
        );
    }
    texts
}
