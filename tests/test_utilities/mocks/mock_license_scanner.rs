use patroller::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock LicenseScanner returning configured records in insertion order
#[derive(Clone, Default)]
pub struct MockLicenseScanner {
    records: Vec<LicenseRecord>,
    missing_package_info: bool,
    calls: Arc<Mutex<usize>>,
}

#[allow(dead_code)]
impl MockLicenseScanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(mut self, name: &str, license: &str, path: impl Into<PathBuf>) -> Self {
        self.records
            .push(LicenseRecord::new(name, "1.0.0", license, path.into()));
        self
    }

    /// Behaves as if the root package.json could not be read
    pub fn without_package_info() -> Self {
        Self {
            missing_package_info: true,
            ..Self::default()
        }
    }

    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

impl LicenseScanner for MockLicenseScanner {
    fn scan(&self, start: &Path) -> Result<Vec<LicenseRecord>> {
        *self.calls.lock().unwrap() += 1;
        if self.missing_package_info {
            return Err(PatrolError::PackageInfoNotFound {
                path: start.to_path_buf(),
            }
            .into());
        }
        Ok(self.records.clone())
    }
}
