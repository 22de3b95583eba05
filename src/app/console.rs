use crate::core::{Interaction, NoticeLevel};
use crate::utils::error::Result;
use std::io::{self, BufRead, Write};

/// Line-oriented terminal front end.
///
/// Prompts and informational notices go to `output`, error notices to
/// `errors`. End of input is reported as a dismissed prompt.
pub struct Console<R, W, E> {
    input: R,
    output: W,
    errors: E,
}

impl<R: BufRead, W: Write, E: Write> Console<R, W, E> {
    pub fn new(input: R, output: W, errors: E) -> Self {
        Self {
            input,
            output,
            errors,
        }
    }

    pub fn into_parts(self) -> (R, W, E) {
        (self.input, self.output, self.errors)
    }
}

impl Console<io::StdinLock<'static>, io::Stdout, io::Stderr> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout(), io::stderr())
    }
}

impl<R: BufRead, W: Write, E: Write> Interaction for Console<R, W, E> {
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{} ", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            // 輸入結束視同取消對話框
            writeln!(self.output)?;
            return Ok(None);
        }

        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    fn notify(&mut self, level: NoticeLevel, message: &str) -> Result<()> {
        match level {
            NoticeLevel::Info => writeln!(self.output, "{}", message)?,
            NoticeLevel::Error => writeln!(self.errors, "{}", message)?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_strips_line_ending_only() {
        let mut console = Console::new(" 12.5 \r\n".as_bytes(), Vec::new(), Vec::new());
        let answer = console.prompt("Value:").unwrap();
        assert_eq!(answer.as_deref(), Some(" 12.5 "));

        let (_, output, _) = console.into_parts();
        assert_eq!(String::from_utf8(output).unwrap(), "Value: ");
    }

    #[test]
    fn test_prompt_end_of_input_is_dismissal() {
        let mut console = Console::new("".as_bytes(), Vec::new(), Vec::new());
        assert_eq!(console.prompt("Value:").unwrap(), None);
    }

    #[test]
    fn test_notices_split_by_level() {
        let mut console = Console::new("".as_bytes(), Vec::new(), Vec::new());
        console.notify(NoticeLevel::Info, "ok").unwrap();
        console.notify(NoticeLevel::Error, "bad").unwrap();

        let (_, output, errors) = console.into_parts();
        assert_eq!(String::from_utf8(output).unwrap(), "ok\n");
        assert_eq!(String::from_utf8(errors).unwrap(), "bad\n");
    }
}
