use crate::maintenance::domain::LicenseReport;

/// LicenseFormatter port for rendering a license report
pub trait LicenseFormatter {
    /// Renders the rows of `report` for display
    fn format(&self, report: &LicenseReport) -> String;
}
