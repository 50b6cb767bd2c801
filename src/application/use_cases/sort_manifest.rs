use crate::application::dto::ActionOutcome;
use crate::maintenance::services::ManifestSorter;
use crate::ports::outbound::{ManifestStore, ProgressReporter};
use crate::shared::Result;
use std::path::Path;

/// SortManifestUseCase - sorts the dependency maps of `package.json` in place
pub struct SortManifestUseCase<'a, MS, PR> {
    manifest_store: &'a MS,
    progress_reporter: &'a PR,
}

impl<'a, MS, PR> SortManifestUseCase<'a, MS, PR>
where
    MS: ManifestStore,
    PR: ProgressReporter,
{
    pub fn new(manifest_store: &'a MS, progress_reporter: &'a PR) -> Self {
        Self {
            manifest_store,
            progress_reporter,
        }
    }

    pub fn execute(&self, project_root: &Path) -> Result<ActionOutcome> {
        let manifest = self.manifest_store.load(project_root)?;
        let sorted = ManifestSorter::sort(manifest);
        self.manifest_store.save(project_root, &sorted)?;

        self.progress_reporter.report_success("package.json sorted");
        Ok(ActionOutcome::Sorted)
    }
}
