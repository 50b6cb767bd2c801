/// Mock implementations for testing
mod mock_license_scanner;
mod mock_manifest_store;
mod mock_package_manager;
mod mock_presenter;
mod mock_progress_reporter;
mod mock_prompter;
mod mock_usage_scanner;

#[allow(unused_imports)]
pub use mock_license_scanner::MockLicenseScanner;
#[allow(unused_imports)]
pub use mock_manifest_store::MockManifestStore;
#[allow(unused_imports)]
pub use mock_package_manager::{MockPackageManager, PackageManagerCall};
#[allow(unused_imports)]
pub use mock_presenter::MockPresenter;
#[allow(unused_imports)]
pub use mock_progress_reporter::MockProgressReporter;
#[allow(unused_imports)]
pub use mock_prompter::MockPrompter;
#[allow(unused_imports)]
pub use mock_usage_scanner::MockUsageScanner;
