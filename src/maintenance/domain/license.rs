use std::path::PathBuf;

/// License metadata of one installed package (or of the project itself)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseRecord {
    /// `name@version`, unique within a scan
    pub key: String,
    pub name: String,
    pub version: String,
    pub license: String,
    /// Directory the package was read from
    pub path: PathBuf,
}

impl LicenseRecord {
    pub fn new(name: &str, version: &str, license: &str, path: PathBuf) -> Self {
        Self {
            key: format!("{}@{}", name, version),
            name: name.to_string(),
            version: version.to_string(),
            license: license.to_string(),
            path,
        }
    }
}

/// One table row of the license check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseRow {
    pub package: String,
    pub license: String,
    pub matches: bool,
}

/// Outcome of comparing every installed package against the project license
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseReport {
    pub reference: String,
    pub rows: Vec<LicenseRow>,
}

impl LicenseReport {
    pub fn conflicts(&self) -> impl Iterator<Item = &LicenseRow> {
        self.rows.iter().filter(|row| !row.matches)
    }

    pub fn conflict_count(&self) -> usize {
        self.conflicts().count()
    }

    pub fn has_conflicts(&self) -> bool {
        self.rows.iter().any(|row| !row.matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_key() {
        let record = LicenseRecord::new("left-pad", "1.3.0", "WTFPL", PathBuf::from("/p"));
        assert_eq!(record.key, "left-pad@1.3.0");
    }

    #[test]
    fn test_report_conflicts() {
        let report = LicenseReport {
            reference: "MIT".to_string(),
            rows: vec![
                LicenseRow {
                    package: "a@1.0.0".to_string(),
                    license: "MIT".to_string(),
                    matches: true,
                },
                LicenseRow {
                    package: "b@1.0.0".to_string(),
                    license: "ISC".to_string(),
                    matches: false,
                },
            ],
        };
        assert!(report.has_conflicts());
        assert_eq!(report.conflict_count(), 1);
        assert_eq!(report.conflicts().next().unwrap().package, "b@1.0.0");
    }
}
