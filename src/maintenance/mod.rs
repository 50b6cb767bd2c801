/// Manifest maintenance core - domain model, policies and pure services
///
/// Nothing in this module touches the filesystem, the terminal or child
/// processes; adapters feed it data and persist its results.
pub mod domain;
pub mod policies;
pub mod services;
