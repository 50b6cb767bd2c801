use patroller::prelude::*;
use std::sync::{Arc, Mutex};

/// A recorded package manager invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackageManagerCall {
    Install,
    Uninstall(DependencyKind, Vec<String>),
}

/// Mock PackageManager recording invocations instead of running npm/yarn
#[derive(Clone, Default)]
pub struct MockPackageManager {
    pub calls: Arc<Mutex<Vec<PackageManagerCall>>>,
    fail_install: bool,
}

#[allow(dead_code)]
impl MockPackageManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// `install` exits non-zero
    pub fn failing_install() -> Self {
        Self {
            fail_install: true,
            ..Self::default()
        }
    }

    pub fn get_calls(&self) -> Vec<PackageManagerCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl PackageManager for MockPackageManager {
    fn install(&self) -> Result<()> {
        self.calls.lock().unwrap().push(PackageManagerCall::Install);
        if self.fail_install {
            return Err(PatrolError::CommandFailed {
                command: "npm install".to_string(),
                status: "exit status: 1".to_string(),
                stderr: "npm ERR! network".to_string(),
            }
            .into());
        }
        Ok(())
    }

    fn uninstall(&self, packages: &[PackageName], kind: DependencyKind) -> Result<()> {
        self.calls.lock().unwrap().push(PackageManagerCall::Uninstall(
            kind,
            packages.iter().map(|p| p.as_str().to_string()).collect(),
        ));
        Ok(())
    }
}
