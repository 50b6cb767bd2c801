use crate::shared::Result;

/// Prompter port for interactive selections
pub trait Prompter {
    /// Shows `choices` as a checkbox list and returns the ones the user picked
    ///
    /// Returning an empty list is a valid answer.
    fn multi_select(&self, message: &str, choices: &[String]) -> Result<Vec<String>>;
}
