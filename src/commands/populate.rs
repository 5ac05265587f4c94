use crate::areas::session::Session;
use crate::artifacts::header::{self, HEADER_FILE_NAME};
use std::io::Write;
use std::path::PathBuf;

impl Session {
    /// Create one file per entry, in order, named and filled with the entry
    ///
    /// The first entry the volume refuses ends the run; files already
    /// written stay where they are.
    pub fn write_entries(&self, entries: &[&str]) -> anyhow::Result<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(entries.len());

        for entry in entries {
            let path = self.volume().write_entry(entry)?;
            debug_log!("wrote {} bytes to {:?}", entry.len(), path);
            writeln!(self.writer(), "Created {}", path.display())?;
            written.push(path);
        }

        Ok(written)
    }

    /// Write `files.h` for `entries` into the volume root, replacing any old one
    pub fn write_header(&self, entries: &[&str]) -> anyhow::Result<PathBuf> {
        let contents = header::render(entries);
        let path = self.volume().write_synced(HEADER_FILE_NAME, &contents)?;

        let mut writer = self.writer();
        writeln!(writer, "Created {}", path.display())?;
        writer.flush()?;

        Ok(path)
    }
}
