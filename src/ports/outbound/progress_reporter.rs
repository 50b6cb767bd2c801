/// ProgressReporter port for user-facing status output
pub trait ProgressReporter {
    /// Reports that an action finished successfully
    fn report_success(&self, message: &str);

    /// Reports a warning the user should look at
    fn report_warning(&self, message: &str);

    /// Reports an error that ends the run
    fn report_error(&self, message: &str);

    /// Starts an activity indicator for a long-running step
    fn start_activity(&self, message: &str);

    /// Clears the activity indicator started by `start_activity`
    fn finish_activity(&self);
}
