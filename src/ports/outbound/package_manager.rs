use crate::maintenance::domain::{DependencyKind, PackageName};
use crate::shared::Result;

/// PackageManager port for the install/uninstall side effects
///
/// Implementations are bound to a project root when constructed.
pub trait PackageManager {
    /// Installs the dependency tree, refreshing the lockfile
    fn install(&self) -> Result<()>;

    /// Uninstalls `packages` of the given class in a single invocation,
    /// letting the package manager update the manifest
    fn uninstall(&self, packages: &[PackageName], kind: DependencyKind) -> Result<()>;
}
