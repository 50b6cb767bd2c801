/// Child-process adapters
mod node_package_manager;

pub use node_package_manager::{NodePackageManager, PackageManagerKind};
