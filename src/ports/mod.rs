/// Ports module defining interfaces for hexagonal architecture
///
/// Only driven (outbound) ports exist: the application core reaches the
/// filesystem, the analysis scanners, the terminal and the package manager
/// exclusively through these traits.
pub mod outbound;
