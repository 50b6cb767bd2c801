use std::fmt;

/// The maintenance actions, declared in the order they always run
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Action {
    Sort,
    Lock,
    Unused,
    License,
}

impl Action {
    /// Every action in execution order
    pub const ORDER: [Action; 4] = [Action::Sort, Action::Lock, Action::Unused, Action::License];
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::Sort => "sort",
            Action::Lock => "lock",
            Action::Unused => "unused",
            Action::License => "license",
        };
        f.write_str(name)
    }
}
