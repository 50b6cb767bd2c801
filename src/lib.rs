//! patroller - dependency housekeeping for Node projects
//!
//! This library sorts, locks, prunes and license-checks the dependencies
//! declared in a project's `package.json`, following hexagonal architecture
//! and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`maintenance`): Manifest model and pure transformations
//! - **Application Layer** (`application`): Use cases and the action dispatcher
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use patroller::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let root = PathBuf::from(".").canonicalize()?;
//!
//! let use_case = PatrolUseCase::new(
//!     FileSystemManifestStore::new(),
//!     SourceUsageScanner::new(ScanOptions::default())?,
//!     NodeModulesLicenseScanner::new(),
//!     StdinPrompter::new(),
//!     NodePackageManager::new(PackageManagerKind::Npm, root.clone()),
//!     ConsoleReporter::new(),
//!     Box::new(LicenseTableFormatter::new()),
//!     Box::new(StdoutPresenter::new()),
//! );
//!
//! let request = PatrolRequest::new(root, vec![Action::Sort, Action::License], false);
//! let response = use_case.execute(&request)?;
//! println!("{} actions ran", response.outcomes.len());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod maintenance;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{ConsoleReporter, StdinPrompter, StdoutPresenter};
    pub use crate::adapters::outbound::filesystem::FileSystemManifestStore;
    pub use crate::adapters::outbound::formatters::LicenseTableFormatter;
    pub use crate::adapters::outbound::process::{NodePackageManager, PackageManagerKind};
    pub use crate::adapters::outbound::scanners::{
        NodeModulesLicenseScanner, ScanOptions, SourceUsageScanner,
    };
    pub use crate::application::dto::{
        Action, ActionOutcome, PatrolFlags, PatrolRequest, PatrolResponse,
    };
    pub use crate::application::use_cases::{
        CheckLicensesUseCase, LockVersionsUseCase, PatrolUseCase, RemoveUnusedUseCase,
        SortManifestUseCase,
    };
    pub use crate::maintenance::domain::{
        DependencyKind, LicenseRecord, LicenseReport, LicenseRow, Manifest, PackageName,
        UnusedReport, MANIFEST_FILENAME,
    };
    pub use crate::maintenance::policies::LicenseResolution;
    pub use crate::maintenance::services::{
        LicenseComparator, ManifestSorter, ModuleSpecifier, VersionLocker,
    };
    pub use crate::ports::outbound::{
        LicenseFormatter, LicenseScanner, ManifestStore, OutputPresenter, PackageManager,
        ProgressReporter, Prompter, UsageScanner,
    };
    pub use crate::shared::error::{ExitCode, PatrolError};
    pub use crate::shared::Result;
}
