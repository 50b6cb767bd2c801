use super::manifest::DependencyKind;

/// Dependencies the usage scanner found no reference to
///
/// Both lists keep the order in which the manifest declares the packages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnusedReport {
    pub dependencies: Vec<String>,
    pub dev_dependencies: Vec<String>,
}

impl UnusedReport {
    pub fn new(dependencies: Vec<String>, dev_dependencies: Vec<String>) -> Self {
        Self {
            dependencies,
            dev_dependencies,
        }
    }

    pub fn for_kind(&self, kind: DependencyKind) -> &[String] {
        match kind {
            DependencyKind::Production => &self.dependencies,
            DependencyKind::Development => &self.dev_dependencies,
        }
    }

    pub fn total(&self) -> usize {
        self.dependencies.len() + self.dev_dependencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}
