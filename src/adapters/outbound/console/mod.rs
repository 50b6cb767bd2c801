/// Console adapters: status output, interactive prompts, report output
mod console_reporter;
mod stdin_prompter;
mod stdout_presenter;

pub use console_reporter::ConsoleReporter;
pub use stdin_prompter::StdinPrompter;
pub use stdout_presenter::StdoutPresenter;
