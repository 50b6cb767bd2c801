/// Use cases module containing application business logic orchestration
mod check_licenses;
mod lock_versions;
mod patrol;
mod remove_unused;
mod sort_manifest;

pub use check_licenses::CheckLicensesUseCase;
pub use lock_versions::LockVersionsUseCase;
pub use patrol::PatrolUseCase;
pub use remove_unused::RemoveUnusedUseCase;
pub use sort_manifest::SortManifestUseCase;
