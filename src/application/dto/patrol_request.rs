use super::Action;
use std::path::PathBuf;

/// Immutable flag set produced by argument parsing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PatrolFlags {
    pub all: bool,
    pub force: bool,
    pub license: bool,
    pub lock: bool,
    pub sort: bool,
    pub unused: bool,
    pub yarn: bool,
}

impl PatrolFlags {
    /// Actions the flags ask for, in execution order
    ///
    /// `force` and `yarn` only modify actions and never select one.
    pub fn selected_actions(&self) -> Vec<Action> {
        Action::ORDER
            .into_iter()
            .filter(|action| {
                self.all
                    || match action {
                        Action::Sort => self.sort,
                        Action::Lock => self.lock,
                        Action::Unused => self.unused,
                        Action::License => self.license,
                    }
            })
            .collect()
    }
}

/// PatrolRequest - everything the dispatcher needs for one run
#[derive(Debug, Clone)]
pub struct PatrolRequest {
    /// Canonical project root, resolved once at startup
    pub project_root: PathBuf,
    /// Actions to run, already in execution order
    pub actions: Vec<Action>,
    /// Remove unused dependencies without asking
    pub force: bool,
}

impl PatrolRequest {
    pub fn new(project_root: PathBuf, actions: Vec<Action>, force: bool) -> Self {
        Self {
            project_root,
            actions,
            force,
        }
    }

    pub fn from_flags(project_root: PathBuf, flags: &PatrolFlags) -> Self {
        Self::new(project_root, flags.selected_actions(), flags.force)
    }
}
