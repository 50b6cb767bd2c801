use super::{CheckLicensesUseCase, LockVersionsUseCase, RemoveUnusedUseCase, SortManifestUseCase};
use crate::application::dto::{Action, ActionOutcome, PatrolRequest, PatrolResponse};
use crate::maintenance::domain::MANIFEST_FILENAME;
use crate::ports::outbound::{
    LicenseFormatter, LicenseScanner, ManifestStore, OutputPresenter, PackageManager,
    ProgressReporter, Prompter, UsageScanner,
};
use crate::shared::error::PatrolError;
use crate::shared::Result;

/// PatrolUseCase - the dispatcher running the requested actions in order
///
/// The manifest must exist before anything runs. Actions then run one after
/// another; the first failing action ends the run and its error is returned,
/// so later actions never start.
///
/// # Type Parameters
/// * `MS` - ManifestStore implementation
/// * `US` - UsageScanner implementation
/// * `LS` - LicenseScanner implementation
/// * `P` - Prompter implementation
/// * `PM` - PackageManager implementation
/// * `PR` - ProgressReporter implementation
pub struct PatrolUseCase<MS, US, LS, P, PM, PR> {
    manifest_store: MS,
    usage_scanner: US,
    license_scanner: LS,
    prompter: P,
    package_manager: PM,
    progress_reporter: PR,
    license_formatter: Box<dyn LicenseFormatter>,
    presenter: Box<dyn OutputPresenter>,
}

impl<MS, US, LS, P, PM, PR> PatrolUseCase<MS, US, LS, P, PM, PR>
where
    MS: ManifestStore,
    US: UsageScanner,
    LS: LicenseScanner,
    P: Prompter,
    PM: PackageManager,
    PR: ProgressReporter,
{
    /// Creates a new PatrolUseCase with injected dependencies
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        manifest_store: MS,
        usage_scanner: US,
        license_scanner: LS,
        prompter: P,
        package_manager: PM,
        progress_reporter: PR,
        license_formatter: Box<dyn LicenseFormatter>,
        presenter: Box<dyn OutputPresenter>,
    ) -> Self {
        Self {
            manifest_store,
            usage_scanner,
            license_scanner,
            prompter,
            package_manager,
            progress_reporter,
            license_formatter,
            presenter,
        }
    }

    /// Runs every action of `request`
    ///
    /// # Errors
    /// - `PatrolError::ManifestNotFound` before any action when the manifest is missing
    /// - the error of the first action that fails
    pub fn execute(&self, request: &PatrolRequest) -> Result<PatrolResponse> {
        let root = &request.project_root;
        if !self.manifest_store.exists(root) {
            return Err(PatrolError::ManifestNotFound {
                path: root.join(MANIFEST_FILENAME),
            }
            .into());
        }

        let mut response = PatrolResponse::default();
        for &action in &request.actions {
            tracing::debug!(%action, "running action");
            let outcome = self.run_action(action, request)?;
            response.outcomes.push((action, outcome));
        }
        Ok(response)
    }

    fn run_action(&self, action: Action, request: &PatrolRequest) -> Result<ActionOutcome> {
        let root = request.project_root.as_path();
        match action {
            Action::Sort => {
                SortManifestUseCase::new(&self.manifest_store, &self.progress_reporter).execute(root)
            }
            Action::Lock => LockVersionsUseCase::new(
                &self.manifest_store,
                &self.package_manager,
                &self.progress_reporter,
            )
            .execute(root),
            Action::Unused => RemoveUnusedUseCase::new(
                &self.manifest_store,
                &self.usage_scanner,
                &self.prompter,
                &self.package_manager,
                &self.progress_reporter,
            )
            .execute(root, request.force),
            Action::License => CheckLicensesUseCase::new(
                &self.license_scanner,
                &self.progress_reporter,
                self.license_formatter.as_ref(),
                self.presenter.as_ref(),
            )
            .execute(root),
        }
    }
}
