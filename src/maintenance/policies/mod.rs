pub mod license_resolution;

pub use license_resolution::LicenseResolution;
