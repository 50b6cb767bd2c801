use crate::maintenance::domain::LicenseReport;
use crate::ports::outbound::LicenseFormatter;
use owo_colors::{OwoColorize, Stream};

const PACKAGE_HEADER: &str = "Package";
const LICENSE_HEADER: &str = "Licenses";

/// Renders a license report as a two-column box table
///
/// Licenses matching the project license are dimmed, conflicting ones are
/// highlighted in yellow. Rows keep the report order.
pub struct LicenseTableFormatter;

impl LicenseTableFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LicenseTableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl LicenseFormatter for LicenseTableFormatter {
    fn format(&self, report: &LicenseReport) -> String {
        let package_width = report
            .rows
            .iter()
            .map(|row| display_width(&row.package))
            .chain(std::iter::once(display_width(PACKAGE_HEADER)))
            .max()
            .unwrap_or(0);
        let license_width = report
            .rows
            .iter()
            .map(|row| display_width(&row.license))
            .chain(std::iter::once(display_width(LICENSE_HEADER)))
            .max()
            .unwrap_or(0);

        let mut output = String::new();
        output.push_str(&border('┌', '┬', '┐', package_width, license_width));

        let package_head = pad(PACKAGE_HEADER, package_width);
        let license_head = pad(LICENSE_HEADER, license_width);
        output.push_str(&format!(
            "│ {} │ {} │\n",
            package_head.if_supports_color(Stream::Stdout, |t| t.red()),
            license_head.if_supports_color(Stream::Stdout, |t| t.red())
        ));
        output.push_str(&border('├', '┼', '┤', package_width, license_width));

        for row in &report.rows {
            let license = pad(&row.license, license_width);
            let styled = if row.matches {
                license
                    .if_supports_color(Stream::Stdout, |t| t.dimmed())
                    .to_string()
            } else {
                license
                    .if_supports_color(Stream::Stdout, |t| t.yellow())
                    .to_string()
            };
            output.push_str(&format!(
                "│ {} │ {} │\n",
                pad(&row.package, package_width),
                styled
            ));
        }

        output.push_str(&border('└', '┴', '┘', package_width, license_width));
        output
    }
}

fn display_width(text: &str) -> usize {
    text.chars().count()
}

fn pad(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(display_width(text));
    format!("{}{}", text, " ".repeat(padding))
}

fn border(left: char, middle: char, right: char, first: usize, second: usize) -> String {
    format!(
        "{}{}{}{}{}\n",
        left,
        "─".repeat(first + 2),
        middle,
        "─".repeat(second + 2),
        right
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maintenance::domain::LicenseRow;

    fn report() -> LicenseReport {
        LicenseReport {
            reference: "MIT".to_string(),
            rows: vec![
                LicenseRow {
                    package: "a@1.0.0".to_string(),
                    license: "MIT".to_string(),
                    matches: true,
                },
                LicenseRow {
                    package: "some-long-package@2.10.3".to_string(),
                    license: "ISC".to_string(),
                    matches: false,
                },
            ],
        }
    }

    #[test]
    fn test_table_lists_rows_in_order() {
        let table = LicenseTableFormatter::new().format(&report());

        let first = table.find("a@1.0.0").unwrap();
        let second = table.find("some-long-package@2.10.3").unwrap();
        assert!(first < second);
        assert!(table.contains("Package"));
        assert!(table.contains("Licenses"));
        assert!(table.contains("ISC"));
    }

    #[test]
    fn test_table_borders_fit_widest_cell() {
        let table = LicenseTableFormatter::new().format(&report());
        let lines: Vec<&str> = table.lines().collect();

        // 24 chars of package name + 2 padding, 8 chars of header + 2 padding
        assert_eq!(lines[0], format!("┌{}┬{}┐", "─".repeat(26), "─".repeat(10)));
        assert_eq!(lines.last().unwrap().chars().next(), Some('└'));
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn test_empty_report_renders_header_only() {
        let table = LicenseTableFormatter::new().format(&LicenseReport {
            reference: "MIT".to_string(),
            rows: vec![],
        });
        assert_eq!(table.lines().count(), 4);
    }

    #[test]
    fn test_pad() {
        assert_eq!(pad("MIT", 5), "MIT  ");
        assert_eq!(pad("Apache-2.0", 3), "Apache-2.0");
    }
}
