use crate::areas::session::{Session, Stage};
use crate::artifacts::catalog::CATALOG;
use crate::commands::confirm::Confirmation;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The user answered n; nothing was touched
    Declined,
    Populated {
        formatted: bool,
        files: Vec<PathBuf>,
        header: PathBuf,
    },
}

impl Session {
    /// Confirm, format, write the catalog files, then `files.h`
    ///
    /// Files and header are both produced from [`CATALOG`] in one pass, so
    /// the header always lists exactly the files that were created, in the
    /// order they were created.
    pub fn run(&self) -> anyhow::Result<Outcome> {
        if self.confirm()? == Confirmation::Abort {
            self.advance(Stage::Done);
            return Ok(Outcome::Declined);
        }

        self.advance(Stage::Formatting);
        let formatted = self.format();

        self.advance(Stage::WritingFiles);
        let files = self.write_entries(CATALOG)?;

        self.advance(Stage::WritingHeader);
        let header = self.write_header(CATALOG)?;

        self.advance(Stage::Done);
        Ok(Outcome::Populated {
            formatted,
            files,
            header,
        })
    }
}
