use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::{OwoColorize, Stream};
use std::cell::RefCell;
use std::time::Duration;

/// ConsoleReporter adapter printing colored status lines
///
/// Status lines go to stdout; errors and the activity spinner go to stderr
/// so a redirected stdout only carries results.
pub struct ConsoleReporter {
    spinner: RefCell<Option<ProgressBar>>,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self {
            spinner: RefCell::new(None),
        }
    }

    fn clear_spinner(&self) {
        if let Some(spinner) = self.spinner.borrow_mut().take() {
            spinner.finish_and_clear();
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for ConsoleReporter {
    fn report_success(&self, message: &str) {
        self.clear_spinner();
        let line = format!("👍 {}", message);
        println!("{}", line.if_supports_color(Stream::Stdout, |t| t.green()));
    }

    fn report_warning(&self, message: &str) {
        self.clear_spinner();
        let line = format!("⚠️  {}", message);
        println!("{}", line.if_supports_color(Stream::Stdout, |t| t.yellow()));
    }

    fn report_error(&self, message: &str) {
        self.clear_spinner();
        let line = format!("😞 {}", message);
        eprintln!("{}", line.if_supports_color(Stream::Stderr, |t| t.red()));
    }

    fn start_activity(&self, message: &str) {
        self.clear_spinner();
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner:.green} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(100));
        *self.spinner.borrow_mut() = Some(spinner);
    }

    fn finish_activity(&self) {
        self.clear_spinner();
    }
}
