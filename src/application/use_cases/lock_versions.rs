use crate::application::dto::ActionOutcome;
use crate::maintenance::services::VersionLocker;
use crate::ports::outbound::{ManifestStore, PackageManager, ProgressReporter};
use crate::shared::Result;
use std::path::Path;

/// LockVersionsUseCase - strips caret ranges, then reinstalls so the
/// lockfile matches the pinned manifest
pub struct LockVersionsUseCase<'a, MS, PM, PR> {
    manifest_store: &'a MS,
    package_manager: &'a PM,
    progress_reporter: &'a PR,
}

impl<'a, MS, PM, PR> LockVersionsUseCase<'a, MS, PM, PR>
where
    MS: ManifestStore,
    PM: PackageManager,
    PR: ProgressReporter,
{
    pub fn new(manifest_store: &'a MS, package_manager: &'a PM, progress_reporter: &'a PR) -> Self {
        Self {
            manifest_store,
            package_manager,
            progress_reporter,
        }
    }

    pub fn execute(&self, project_root: &Path) -> Result<ActionOutcome> {
        let manifest = self.manifest_store.load(project_root)?;
        let locked = VersionLocker::lock(manifest);
        self.manifest_store.save(project_root, &locked)?;

        self.progress_reporter.start_activity("installing locked versions");
        let installed = self.package_manager.install();
        self.progress_reporter.finish_activity();
        installed?;

        self.progress_reporter
            .report_success("locked the dependency versions");
        Ok(ActionOutcome::Locked)
    }
}
