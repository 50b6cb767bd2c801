use crate::maintenance::domain::{DependencyKind, PackageName};
use crate::ports::outbound::PackageManager;
use crate::shared::error::PatrolError;
use crate::shared::Result;
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Number of trailing stderr lines kept in a `CommandFailed` error
const STDERR_TAIL_LINES: usize = 20;

/// Which package manager binary drives install/uninstall
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PackageManagerKind {
    #[default]
    Npm,
    Yarn,
}

impl PackageManagerKind {
    pub fn program(self) -> &'static str {
        match self {
            PackageManagerKind::Npm => "npm",
            PackageManagerKind::Yarn => "yarn",
        }
    }

    /// Arguments of the install invocation
    pub fn install_args(self) -> Vec<String> {
        vec!["install".to_string()]
    }

    /// Arguments of a single uninstall invocation for `packages`
    pub fn uninstall_args(self, packages: &[PackageName], kind: DependencyKind) -> Vec<String> {
        let mut args: Vec<String> = match (self, kind) {
            (PackageManagerKind::Npm, DependencyKind::Production) => {
                vec!["uninstall".into(), "--save".into()]
            }
            (PackageManagerKind::Npm, DependencyKind::Development) => {
                vec!["uninstall".into(), "--save-dev".into()]
            }
            (PackageManagerKind::Yarn, _) => vec!["remove".into()],
        };
        args.extend(packages.iter().map(|p| p.as_str().to_string()));
        args
    }
}

impl std::str::FromStr for PackageManagerKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "npm" => Ok(PackageManagerKind::Npm),
            "yarn" => Ok(PackageManagerKind::Yarn),
            _ => Err(format!(
                "Invalid package manager: {}. Please specify 'npm' or 'yarn'",
                s
            )),
        }
    }
}

impl std::fmt::Display for PackageManagerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.program())
    }
}

/// NodePackageManager adapter running `npm`/`yarn` in the project root
///
/// Output is captured rather than streamed; it is logged at debug level and
/// the stderr tail is attached to the error when the command fails.
pub struct NodePackageManager {
    kind: PackageManagerKind,
    project_root: PathBuf,
}

impl NodePackageManager {
    pub fn new(kind: PackageManagerKind, project_root: PathBuf) -> Self {
        Self { kind, project_root }
    }

    fn run(&self, args: &[String]) -> Result<()> {
        let program = self.kind.program();
        let command_line = format!("{} {}", program, args.join(" "));
        tracing::debug!(command = %command_line, cwd = %self.project_root.display(), "running package manager");

        let output = Command::new(executable(program))
            .args(args)
            .current_dir(&self.project_root)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| PatrolError::CommandSpawn {
                command: command_line.clone(),
                program: program.to_string(),
                details: e.to_string(),
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        tracing::debug!(status = %output.status, %stdout, %stderr, "package manager finished");

        if !output.status.success() {
            return Err(PatrolError::CommandFailed {
                command: command_line,
                status: output.status.to_string(),
                stderr: tail(&stderr, STDERR_TAIL_LINES),
            }
            .into());
        }
        Ok(())
    }
}

impl PackageManager for NodePackageManager {
    fn install(&self) -> Result<()> {
        self.run(&self.kind.install_args())
    }

    fn uninstall(&self, packages: &[PackageName], kind: DependencyKind) -> Result<()> {
        if packages.is_empty() {
            return Ok(());
        }
        self.run(&self.kind.uninstall_args(packages, kind))
    }
}

/// npm and yarn ship as `.cmd` shims on Windows
fn executable(program: &str) -> String {
    if cfg!(windows) {
        format!("{}.cmd", program)
    } else {
        program.to_string()
    }
}

fn tail(text: &str, lines: usize) -> String {
    let all: Vec<&str> = text.trim_end().lines().collect();
    let start = all.len().saturating_sub(lines);
    all[start..].join("\n")
}
