/// Outbound ports (Driven ports) - Infrastructure interfaces
pub mod license_formatter;
pub mod license_scanner;
pub mod manifest_store;
pub mod output_presenter;
pub mod package_manager;
pub mod progress_reporter;
pub mod prompter;
pub mod usage_scanner;

pub use license_formatter::LicenseFormatter;
pub use license_scanner::LicenseScanner;
pub use manifest_store::ManifestStore;
pub use output_presenter::OutputPresenter;
pub use package_manager::PackageManager;
pub use progress_reporter::ProgressReporter;
pub use prompter::Prompter;
pub use usage_scanner::UsageScanner;
