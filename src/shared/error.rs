use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Every requested action finished (or none was requested)
    Success = 0,
    /// A fatal condition or a failed action halted the run
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Application-specific errors raised while patrolling a project.
///
/// The two conditions a user is expected to hit in normal use
/// (`ManifestNotFound`, `PackageInfoNotFound`) carry the short messages
/// printed next to the 😞 marker; the rest carry enough detail to act on.
#[derive(Debug, Error)]
pub enum PatrolError {
    #[error("cannot find package.json in this folder ({path})")]
    ManifestNotFound { path: PathBuf },

    #[error("package.json is a symbolic link: {path}\n\n💡 Hint: Symbolic links are not followed; replace it with a regular file")]
    ManifestSymlink { path: PathBuf },

    #[error("Failed to parse package.json: {path}\nDetails: {details}\n\n💡 Hint: Please verify that package.json contains a valid JSON object")]
    ManifestParse { path: PathBuf, details: String },

    #[error("Failed to write package.json: {path}\nDetails: {details}\n\n💡 Hint: Please verify that you have write permissions")]
    ManifestWrite { path: PathBuf, details: String },

    #[error("cannot find package information in this folder ({path})")]
    PackageInfoNotFound { path: PathBuf },

    #[error("no scanned package resolves to the project root: {path}\n\n💡 Hint: Make sure package.json at the project root has a readable name and license")]
    LicenseRootNotFound { path: PathBuf },

    #[error("`{command}` exited with {status}\n{stderr}")]
    CommandFailed {
        command: String,
        status: String,
        stderr: String,
    },

    #[error("Failed to run `{command}`: {details}\n\n💡 Hint: Make sure {program} is installed and on your PATH")]
    CommandSpawn {
        command: String,
        program: String,
        details: String,
    },

    #[error("Invalid package name '{name}': {reason}")]
    InvalidPackageName { name: String, reason: String },

    #[error("Invalid project path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a valid project directory with --path")]
    InvalidProjectPath { path: PathBuf, reason: String },

    #[error("Invalid config: {message}")]
    Config { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 1);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (1)"
        );
        assert_eq!(
            format!("{}", ExitCode::InvalidArguments),
            "Invalid Arguments (2)"
        );
    }

    #[test]
    fn test_manifest_not_found_display() {
        let error = PatrolError::ManifestNotFound {
            path: PathBuf::from("/p/package.json"),
        };
        let display = format!("{}", error);
        assert!(display.contains("cannot find package.json in this folder"));
        assert!(display.contains("/p/package.json"));
    }

    #[test]
    fn test_manifest_symlink_display() {
        let error = PatrolError::ManifestSymlink {
            path: PathBuf::from("/p/package.json"),
        };
        let display = format!("{}", error);
        assert!(display.contains("package.json is a symbolic link"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_manifest_parse_display() {
        let error = PatrolError::ManifestParse {
            path: PathBuf::from("/p/package.json"),
            details: "expected value at line 1".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to parse package.json"));
        assert!(display.contains("expected value at line 1"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_command_failed_display() {
        let error = PatrolError::CommandFailed {
            command: "npm install".to_string(),
            status: "exit status: 1".to_string(),
            stderr: "npm ERR! code E404".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("`npm install` exited with exit status: 1"));
        assert!(display.contains("E404"));
    }

    #[test]
    fn test_command_spawn_display() {
        let error = PatrolError::CommandSpawn {
            command: "yarn install".to_string(),
            program: "yarn".to_string(),
            details: "No such file or directory".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to run `yarn install`"));
        assert!(display.contains("Make sure yarn is installed"));
    }

    #[test]
    fn test_license_root_not_found_display() {
        let error = PatrolError::LicenseRootNotFound {
            path: PathBuf::from("/p"),
        };
        assert!(format!("{}", error).contains("project root: /p"));
    }
}
