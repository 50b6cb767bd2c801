use crate::maintenance::domain::{LicenseRecord, LicenseReport, LicenseRow};
use crate::shared::error::PatrolError;
use crate::shared::Result;
use std::path::Path;

/// Compares installed package licenses with the project's own license
pub struct LicenseComparator;

impl LicenseComparator {
    /// Builds the license report for `records` scanned from `project_root`.
    ///
    /// The record whose path equals the project root is the reference; every
    /// other record becomes a row, in scan order, matching when its license
    /// string is exactly equal to the reference.
    ///
    /// # Errors
    /// `PatrolError::LicenseRootNotFound` when no record sits at the root.
    pub fn compare(records: &[LicenseRecord], project_root: &Path) -> Result<LicenseReport> {
        let reference = records
            .iter()
            .find(|record| record.path == project_root)
            .ok_or_else(|| PatrolError::LicenseRootNotFound {
                path: project_root.to_path_buf(),
            })?;

        let rows = records
            .iter()
            .filter(|record| !std::ptr::eq(*record, reference))
            .map(|record| LicenseRow {
                package: record.key.clone(),
                license: record.license.clone(),
                matches: record.license == reference.license,
            })
            .collect();

        Ok(LicenseReport {
            reference: reference.license.clone(),
            rows,
        })
    }
}
