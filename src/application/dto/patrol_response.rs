use super::Action;

/// What a single action did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Sorted,
    Locked,
    /// Packages handed to the package manager for removal, per class.
    /// Both empty when nothing was unused or nothing was selected.
    UnusedRemoved {
        dependencies: Vec<String>,
        dev_dependencies: Vec<String>,
    },
    LicensesChecked {
        conflicts: usize,
    },
}

/// PatrolResponse - the outcome of every action that ran, in order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatrolResponse {
    pub outcomes: Vec<(Action, ActionOutcome)>,
}

impl PatrolResponse {
    pub fn outcome(&self, action: Action) -> Option<&ActionOutcome> {
        self.outcomes
            .iter()
            .find(|(ran, _)| *ran == action)
            .map(|(_, outcome)| outcome)
    }
}
