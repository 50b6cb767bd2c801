/// Filesystem adapters for manifest I/O
mod manifest_file;

pub use manifest_file::FileSystemManifestStore;
