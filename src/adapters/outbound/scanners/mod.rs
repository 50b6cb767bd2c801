/// Native scanners for dependency usage and installed-package licenses
mod node_modules_license_scanner;
mod source_usage_scanner;
mod tool_config;

pub use node_modules_license_scanner::NodeModulesLicenseScanner;
pub use source_usage_scanner::{ScanOptions, SourceUsageScanner};
