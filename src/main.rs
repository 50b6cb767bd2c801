use patroller::cli::Args;
use patroller::config::{self, ConfigFile, Settings};
use patroller::prelude::*;
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the tracing filter
const LOG_ENV: &str = "PATROLLER_LOG";

fn main() {
    init_tracing();

    if let Err(e) = run() {
        ConsoleReporter::new().report_error(&e.to_string());

        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn run() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();
    let flags = args.flags();

    // Validate project directory once; everything below receives the canonical root
    let project_dir = args.path.as_deref().unwrap_or(".");
    let project_root = validate_project_path(Path::new(project_dir))?;
    tracing::debug!(root = %project_root.display(), "resolved project root");

    let config_file = load_config(args.config.as_deref(), &project_root)?;
    let settings = Settings::resolve(config_file.as_ref(), &flags)?;
    tracing::debug!(package_manager = %settings.package_manager, "resolved settings");

    // Create adapters (Dependency Injection)
    let manifest_store = FileSystemManifestStore::new();
    let usage_scanner = SourceUsageScanner::new(settings.scan_options)?;
    let license_scanner = NodeModulesLicenseScanner::new();
    let prompter = StdinPrompter::new();
    let package_manager = NodePackageManager::new(settings.package_manager, project_root.clone());
    let progress_reporter = ConsoleReporter::new();

    let use_case = PatrolUseCase::new(
        manifest_store,
        usage_scanner,
        license_scanner,
        prompter,
        package_manager,
        progress_reporter,
        Box::new(LicenseTableFormatter::new()),
        Box::new(StdoutPresenter::new()),
    );

    let request = PatrolRequest::from_flags(project_root, &flags);
    let response = use_case.execute(&request)?;
    tracing::debug!(actions = response.outcomes.len(), "patrol finished");

    Ok(())
}

fn load_config(explicit: Option<&str>, project_root: &Path) -> Result<Option<ConfigFile>> {
    match explicit {
        Some(path) => config::load_config_from_path(Path::new(path)).map(Some),
        None => config::discover_config(project_root),
    }
}

fn validate_project_path(path: &Path) -> Result<PathBuf> {
    if !path.exists() {
        return Err(PatrolError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    // Security check: Reject symbolic links for project paths
    let metadata = std::fs::symlink_metadata(path).map_err(|e| PatrolError::InvalidProjectPath {
        path: path.to_path_buf(),
        reason: format!("Failed to read path metadata: {}", e),
    })?;

    if metadata.is_symlink() {
        return Err(PatrolError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Security: Project path is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
        }
        .into());
    }

    if !path.is_dir() {
        return Err(PatrolError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    let canonical_path = path
        .canonicalize()
        .map_err(|e| PatrolError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: format!("Failed to canonicalize path: {}", e),
        })?;

    if !canonical_path.is_dir() {
        return Err(PatrolError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Resolved path is not a directory".to_string(),
        }
        .into());
    }

    Ok(canonical_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_validate_project_path_valid_directory() {
        let temp_dir = TempDir::new().unwrap();
        let resolved = validate_project_path(temp_dir.path()).unwrap();
        assert!(resolved.is_absolute());
        assert_eq!(resolved, temp_dir.path().canonicalize().unwrap());
    }

    #[test]
    fn test_validate_project_path_nonexistent() {
        let nonexistent_path = PathBuf::from("/nonexistent/path/that/does/not/exist");
        let err = validate_project_path(&nonexistent_path).unwrap_err();
        assert!(err.to_string().contains("Directory does not exist"));
    }

    #[test]
    fn test_validate_project_path_file_not_directory() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("package.json");
        fs::write(&file_path, "{}").unwrap();

        let err = validate_project_path(&file_path).unwrap_err();
        assert!(err.to_string().contains("Not a directory"));
    }

    #[cfg(unix)]
    #[test]
    fn test_validate_project_path_rejects_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("real");
        fs::create_dir(&target).unwrap();
        let link = temp_dir.path().join("link");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let err = validate_project_path(&link).unwrap_err();
        assert!(err.to_string().contains("symbolic link"));
    }

    #[test]
    fn test_load_config_discovers_in_root() {
        let temp_dir = TempDir::new().unwrap();
        assert!(load_config(None, temp_dir.path()).unwrap().is_none());

        fs::write(
            temp_dir.path().join(config::CONFIG_FILENAME),
            "package_manager: yarn\n",
        )
        .unwrap();
        let config = load_config(None, temp_dir.path()).unwrap().unwrap();
        assert_eq!(config.package_manager.as_deref(), Some("yarn"));
    }

    #[test]
    fn test_load_config_explicit_missing_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.yml");
        let result = load_config(missing.to_str(), temp_dir.path());
        assert!(result.is_err());
    }
}
