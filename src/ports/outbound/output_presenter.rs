use crate::shared::Result;

/// OutputPresenter port for presenting rendered reports
///
/// Status lines go through `ProgressReporter`; multi-line reports such as
/// the license table are handed to a presenter as a whole.
pub trait OutputPresenter {
    /// Presents the rendered content
    ///
    /// # Errors
    /// Returns an error if writing to the output destination fails
    fn present(&self, content: &str) -> Result<()>;
}
