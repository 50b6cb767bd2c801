pub mod license;
pub mod manifest;
pub mod package_name;
pub mod unused_report;

pub use license::{LicenseRecord, LicenseReport, LicenseRow};
pub use manifest::{DependencyKind, Manifest, MANIFEST_FILENAME};
pub use package_name::PackageName;
pub use unused_report::UnusedReport;
