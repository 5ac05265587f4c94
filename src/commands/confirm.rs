use crate::areas::session::Session;
use anyhow::Context;
use std::io::{BufRead, Write};

pub const PROMPT: &str = "Press y to continue or press n to abort. [y\\n]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Proceed,
    Abort,
}

impl Confirmation {
    /// Decide from the first character of an answer line; `None` means ask again
    pub fn from_answer(line: &str) -> Option<Self> {
        match line.chars().next() {
            Some(c) if c.eq_ignore_ascii_case(&'y') => Some(Confirmation::Proceed),
            Some(c) if c.eq_ignore_ascii_case(&'n') => Some(Confirmation::Abort),
            _ => None,
        }
    }
}

impl Session {
    /// Warn about the volume being erased and ask until the answer is y or n
    ///
    /// Blank lines and other answers repeat the prompt. Running out of input
    /// before an answer is an error, and nothing gets formatted.
    pub fn confirm(&self) -> anyhow::Result<Confirmation> {
        writeln!(self.writer(), "{} will get formated!", self.volume().id())?;

        loop {
            {
                let mut writer = self.writer();
                writeln!(writer, "{PROMPT}")?;
                writer.flush()?;
            }

            let mut line = String::new();
            let read = self
                .reader()
                .read_line(&mut line)
                .context("Failed to read confirmation from standard input")?;
            if read == 0 {
                anyhow::bail!(
                    "standard input closed before {} was confirmed",
                    self.volume().id()
                );
            }

            if let Some(confirmation) = Confirmation::from_answer(&line) {
                debug_log!("confirmation: {confirmation:?}");
                return Ok(confirmation);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::lower_y("y\n", Some(Confirmation::Proceed))]
    #[case::upper_y("Y\n", Some(Confirmation::Proceed))]
    #[case::yes("yes please\n", Some(Confirmation::Proceed))]
    #[case::lower_n("n\n", Some(Confirmation::Abort))]
    #[case::upper_n("No\n", Some(Confirmation::Abort))]
    #[case::empty_line("\n", None)]
    #[case::empty("", None)]
    #[case::leading_space(" y\n", None)]
    #[case::other("maybe\n", None)]
    #[case::multibyte("ÿ\n", None)]
    fn answers_are_decided_by_first_character(
        #[case] line: &str,
        #[case] expected: Option<Confirmation>,
    ) {
        assert_eq!(Confirmation::from_answer(line), expected);
    }
}
