pub mod command;
pub mod run;
pub mod session;

use crate::domain::Record;
use crate::errors::AppError;
use std::io::{BufRead, Write};

pub use run::run_app;

pub fn display_record(record: &Record) -> String {
    format!("{:>5} - ({})", record.id, record.name)
}

pub fn prompt<W: Write>(output: &mut W, message: &str) -> Result<(), AppError> {
    write!(output, "{}", message)?;
    output.flush()?;
    Ok(())
}

// INPUT FUNCTIONS

/// Next trimmed line, or `None` once the input is exhausted.
pub fn get_input<R: BufRead>(input: &mut R) -> Result<Option<String>, AppError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

pub fn get_input_to_lower<R: BufRead>(input: &mut R) -> Result<Option<String>, AppError> {
    Ok(get_input(input)?.map(|line| line.to_lowercase()))
}

pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_trimmed_lines_until_eof() -> Result<(), AppError> {
        let mut input = Cursor::new("  1 \nYes\n");

        assert_eq!(get_input(&mut input)?, Some("1".to_string()));
        assert_eq!(get_input_to_lower(&mut input)?, Some("yes".to_string()));
        assert_eq!(get_input(&mut input)?, None);
        Ok(())
    }

    #[test]
    fn confirms_only_yes() {
        assert!(is_yes("y"));
        assert!(is_yes(" YES "));
        assert!(!is_yes("n"));
        assert!(!is_yes(""));
        assert!(!is_yes("yep"));
    }

    #[test]
    fn formats_record_line() {
        assert_eq!(display_record(&Record::new(12, "Ann")), "   12 - (Ann)");
    }
}
