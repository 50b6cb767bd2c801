use crate::ports::outbound::Prompter;
use crate::shared::Result;
use owo_colors::{OwoColorize, Stream};
use std::io::{self, BufRead, Write};

/// StdinPrompter adapter rendering a numbered checkbox list on the terminal
///
/// The answer is a list of numbers or ranges (`1 3 5-7`, commas allowed),
/// `a` for everything, or an empty line for nothing. Invalid answers are
/// rejected and asked again; end of input counts as an empty answer.
pub struct StdinPrompter;

impl StdinPrompter {
    pub fn new() -> Self {
        Self
    }

    /// Runs the prompt against arbitrary input and output streams
    pub fn prompt_with<R: BufRead, W: Write>(
        &self,
        reader: &mut R,
        writer: &mut W,
        message: &str,
        choices: &[String],
    ) -> Result<Vec<String>> {
        writeln!(
            writer,
            "{} {}",
            "?".if_supports_color(Stream::Stdout, |t| t.green()),
            message.if_supports_color(Stream::Stdout, |t| t.bold())
        )?;
        for (index, choice) in choices.iter().enumerate() {
            writeln!(writer, "  [{}] {}", index + 1, choice)?;
        }

        loop {
            write!(writer, "  (numbers or ranges, 'a' for all, enter for none): ")?;
            writer.flush()?;

            let mut line = String::new();
            if reader.read_line(&mut line)? == 0 {
                writeln!(writer)?;
                return Ok(Vec::new());
            }

            match parse_selection(&line, choices.len()) {
                Ok(indices) => {
                    return Ok(indices.into_iter().map(|i| choices[i].clone()).collect());
                }
                Err(reason) => writeln!(
                    writer,
                    "  {}",
                    reason.if_supports_color(Stream::Stdout, |t| t.red())
                )?,
            }
        }
    }
}

impl Default for StdinPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for StdinPrompter {
    fn multi_select(&self, message: &str, choices: &[String]) -> Result<Vec<String>> {
        let stdin = io::stdin();
        let mut reader = stdin.lock();
        let mut writer = io::stdout().lock();
        self.prompt_with(&mut reader, &mut writer, message, choices)
    }
}

/// Parses a selection answer into sorted, distinct zero-based indices.
fn parse_selection(input: &str, count: usize) -> std::result::Result<Vec<usize>, String> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(Vec::new());
    }
    if matches!(input.to_lowercase().as_str(), "a" | "all" | "*") {
        return Ok((0..count).collect());
    }

    let mut selected = Vec::new();
    for token in input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
    {
        let (start, end) = match token.split_once('-') {
            Some((start, end)) => (parse_position(start, count)?, parse_position(end, count)?),
            None => {
                let position = parse_position(token, count)?;
                (position, position)
            }
        };
        if start > end {
            return Err(format!("'{}' is not an ascending range", token));
        }
        selected.extend(start..=end);
    }

    selected.sort_unstable();
    selected.dedup();
    Ok(selected)
}

fn parse_position(token: &str, count: usize) -> std::result::Result<usize, String> {
    let number: usize = token
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", token))?;
    if number == 0 || number > count {
        return Err(format!("{} is out of range (1-{})", number, count));
    }
    Ok(number - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn choices() -> Vec<String> {
        vec!["left-pad".into(), "moment".into(), "request".into()]
    }

    #[test]
    fn test_parse_selection_numbers_and_ranges() {
        assert_eq!(parse_selection("1 3", 3), Ok(vec![0, 2]));
        assert_eq!(parse_selection("2-3, 1", 3), Ok(vec![0, 1, 2]));
        assert_eq!(parse_selection("2,2", 3), Ok(vec![1]));
    }

    #[test]
    fn test_parse_selection_all_and_none() {
        assert_eq!(parse_selection("a\n", 3), Ok(vec![0, 1, 2]));
        assert_eq!(parse_selection("ALL", 2), Ok(vec![0, 1]));
        assert_eq!(parse_selection("  \n", 3), Ok(vec![]));
    }

    #[test]
    fn test_parse_selection_errors() {
        assert!(parse_selection("0", 3).is_err());
        assert!(parse_selection("4", 3).is_err());
        assert!(parse_selection("x", 3).unwrap_err().contains("not a number"));
        assert!(parse_selection("3-1", 3).unwrap_err().contains("ascending"));
    }

    #[test]
    fn test_prompt_returns_selected_choices() {
        let mut input = Cursor::new("1 3\n");
        let mut output = Vec::new();

        let selected = StdinPrompter::new()
            .prompt_with(&mut input, &mut output, "select", &choices())
            .unwrap();

        assert_eq!(selected, vec!["left-pad", "request"]);
        let rendered = String::from_utf8(output).unwrap();
        assert!(rendered.contains("[2] moment"));
    }

    #[test]
    fn test_prompt_retries_after_invalid_answer() {
        let mut input = Cursor::new("9\n2\n");
        let mut output = Vec::new();

        let selected = StdinPrompter::new()
            .prompt_with(&mut input, &mut output, "select", &choices())
            .unwrap();

        assert_eq!(selected, vec!["moment"]);
        assert!(String::from_utf8(output).unwrap().contains("out of range"));
    }

    #[test]
    fn test_prompt_end_of_input_selects_nothing() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();

        let selected = StdinPrompter::new()
            .prompt_with(&mut input, &mut output, "select", &choices())
            .unwrap();

        assert!(selected.is_empty());
    }
}
