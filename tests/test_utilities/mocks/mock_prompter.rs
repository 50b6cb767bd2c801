use patroller::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock Prompter answering from a fixed plan and recording every question
///
/// Without a planned answer for a message the prompt selects every choice.
#[derive(Clone, Default)]
pub struct MockPrompter {
    answers: HashMap<String, Vec<String>>,
    pub prompts: Arc<Mutex<Vec<(String, Vec<String>)>>>,
}

#[allow(dead_code)]
impl MockPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answering(mut self, message: &str, selection: &[&str]) -> Self {
        self.answers.insert(
            message.to_string(),
            selection.iter().map(|s| s.to_string()).collect(),
        );
        self
    }

    pub fn get_prompts(&self) -> Vec<(String, Vec<String>)> {
        self.prompts.lock().unwrap().clone()
    }
}

impl Prompter for MockPrompter {
    fn multi_select(&self, message: &str, choices: &[String]) -> Result<Vec<String>> {
        self.prompts
            .lock()
            .unwrap()
            .push((message.to_string(), choices.to_vec()));
        Ok(self
            .answers
            .get(message)
            .cloned()
            .unwrap_or_else(|| choices.to_vec()))
    }
}
