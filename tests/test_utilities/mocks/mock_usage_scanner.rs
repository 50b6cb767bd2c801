use patroller::prelude::*;
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Mock UsageScanner returning a fixed report
#[derive(Clone, Default)]
pub struct MockUsageScanner {
    report: UnusedReport,
    should_fail: bool,
    calls: Arc<Mutex<usize>>,
}

#[allow(dead_code)]
impl MockUsageScanner {
    pub fn new(dependencies: &[&str], dev_dependencies: &[&str]) -> Self {
        Self {
            report: UnusedReport::new(
                dependencies.iter().map(|s| s.to_string()).collect(),
                dev_dependencies.iter().map(|s| s.to_string()).collect(),
            ),
            should_fail: false,
            calls: Arc::new(Mutex::new(0)),
        }
    }

    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

impl UsageScanner for MockUsageScanner {
    fn scan(&self, _project_root: &Path, _manifest: &Manifest) -> Result<UnusedReport> {
        *self.calls.lock().unwrap() += 1;
        if self.should_fail {
            anyhow::bail!("Mock usage scan failure");
        }
        Ok(self.report.clone())
    }
}
