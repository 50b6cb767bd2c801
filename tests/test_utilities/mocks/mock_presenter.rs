use patroller::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock OutputPresenter capturing presented content
#[derive(Clone, Default)]
pub struct MockPresenter {
    pub outputs: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl MockPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_outputs(&self) -> Vec<String> {
        self.outputs.lock().unwrap().clone()
    }
}

impl OutputPresenter for MockPresenter {
    fn present(&self, content: &str) -> Result<()> {
        self.outputs.lock().unwrap().push(content.to_string());
        Ok(())
    }
}
