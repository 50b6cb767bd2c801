pub mod license_comparator;
pub mod manifest_sorter;
pub mod module_specifier;
pub mod version_locker;

pub use license_comparator::LicenseComparator;
pub use manifest_sorter::ManifestSorter;
pub use module_specifier::ModuleSpecifier;
pub use version_locker::VersionLocker;
