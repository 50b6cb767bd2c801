use crate::application::dto::ActionOutcome;
use crate::maintenance::domain::{DependencyKind, PackageName, UnusedReport};
use crate::ports::outbound::{ManifestStore, PackageManager, ProgressReporter, Prompter, UsageScanner};
use crate::shared::Result;
use std::path::Path;

/// RemoveUnusedUseCase - uninstalls dependencies the usage scanner flags
///
/// Without `force` the user picks which of the flagged packages go, one
/// prompt per dependency class. The manifest is left to the package
/// manager, which rewrites it while uninstalling.
pub struct RemoveUnusedUseCase<'a, MS, US, P, PM, PR> {
    manifest_store: &'a MS,
    usage_scanner: &'a US,
    prompter: &'a P,
    package_manager: &'a PM,
    progress_reporter: &'a PR,
}

impl<'a, MS, US, P, PM, PR> RemoveUnusedUseCase<'a, MS, US, P, PM, PR>
where
    MS: ManifestStore,
    US: UsageScanner,
    P: Prompter,
    PM: PackageManager,
    PR: ProgressReporter,
{
    pub fn new(
        manifest_store: &'a MS,
        usage_scanner: &'a US,
        prompter: &'a P,
        package_manager: &'a PM,
        progress_reporter: &'a PR,
    ) -> Self {
        Self {
            manifest_store,
            usage_scanner,
            prompter,
            package_manager,
            progress_reporter,
        }
    }

    pub fn execute(&self, project_root: &Path, force: bool) -> Result<ActionOutcome> {
        let manifest = self.manifest_store.load(project_root)?;

        self.progress_reporter
            .start_activity("looking for unused dependencies");
        let scanned = self.usage_scanner.scan(project_root, &manifest);
        self.progress_reporter.finish_activity();
        let report = scanned?;

        if report.is_empty() {
            self.progress_reporter
                .report_success("no unused dependencies");
            return Ok(ActionOutcome::UnusedRemoved {
                dependencies: Vec::new(),
                dev_dependencies: Vec::new(),
            });
        }

        let (dependencies, dev_dependencies) = if force {
            (report.dependencies.clone(), report.dev_dependencies.clone())
        } else {
            self.progress_reporter
                .report_warning(&format!("{} unused dependencies", report.total()));
            (
                self.select(&report, DependencyKind::Production)?,
                self.select(&report, DependencyKind::Development)?,
            )
        };

        // both selections are validated before anything is uninstalled
        let production = package_names(&dependencies)?;
        let development = package_names(&dev_dependencies)?;
        self.uninstall(&production, DependencyKind::Production)?;
        self.uninstall(&development, DependencyKind::Development)?;

        Ok(ActionOutcome::UnusedRemoved {
            dependencies,
            dev_dependencies,
        })
    }

    fn select(&self, report: &UnusedReport, kind: DependencyKind) -> Result<Vec<String>> {
        let choices = report.for_kind(kind);
        if choices.is_empty() {
            return Ok(Vec::new());
        }
        self.prompter.multi_select(
            &format!("select the unused {} you want to remove", kind),
            choices,
        )
    }

    fn uninstall(&self, packages: &[PackageName], kind: DependencyKind) -> Result<()> {
        if packages.is_empty() {
            return Ok(());
        }

        tracing::debug!(?kind, count = packages.len(), "uninstalling");
        self.progress_reporter
            .start_activity(&format!("uninstalling unused {}", kind));
        let removed = self.package_manager.uninstall(packages, kind);
        self.progress_reporter.finish_activity();
        removed?;

        self.progress_reporter
            .report_success(&format!("uninstalled unused {}", kind));
        Ok(())
    }
}

fn package_names(selection: &[String]) -> Result<Vec<PackageName>> {
    selection
        .iter()
        .map(|name| PackageName::new(name.as_str()))
        .collect()
}
