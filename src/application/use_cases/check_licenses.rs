use crate::application::dto::ActionOutcome;
use crate::maintenance::services::LicenseComparator;
use crate::ports::outbound::{LicenseFormatter, LicenseScanner, OutputPresenter, ProgressReporter};
use crate::shared::Result;
use std::path::Path;

/// CheckLicensesUseCase - compares installed licenses with the project's own
///
/// The table is only shown when at least one package differs.
pub struct CheckLicensesUseCase<'a, LS, PR> {
    license_scanner: &'a LS,
    progress_reporter: &'a PR,
    formatter: &'a dyn LicenseFormatter,
    presenter: &'a dyn OutputPresenter,
}

impl<'a, LS, PR> CheckLicensesUseCase<'a, LS, PR>
where
    LS: LicenseScanner,
    PR: ProgressReporter,
{
    pub fn new(
        license_scanner: &'a LS,
        progress_reporter: &'a PR,
        formatter: &'a dyn LicenseFormatter,
        presenter: &'a dyn OutputPresenter,
    ) -> Self {
        Self {
            license_scanner,
            progress_reporter,
            formatter,
            presenter,
        }
    }

    pub fn execute(&self, project_root: &Path) -> Result<ActionOutcome> {
        self.progress_reporter
            .start_activity("collecting license information");
        let scanned = self.license_scanner.scan(project_root);
        self.progress_reporter.finish_activity();
        let records = scanned?;

        let report = LicenseComparator::compare(&records, project_root)?;
        let conflicts = report.conflict_count();

        if report.has_conflicts() {
            self.progress_reporter.report_warning(&format!(
                "there are some license conflicts ({} of {} packages differ from {})",
                conflicts,
                report.rows.len(),
                report.reference
            ));
            self.presenter.present(&self.formatter.format(&report))?;
        } else {
            self.progress_reporter.report_success("no license conflicts");
        }

        Ok(ActionOutcome::LicensesChecked { conflicts })
    }
}
