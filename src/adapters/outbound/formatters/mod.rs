/// Formatters rendering reports for the terminal
mod license_table_formatter;

pub use license_table_formatter::LicenseTableFormatter;
