use crate::areas::session::Session;
use colored::Colorize;

impl Session {
    /// Hand the volume to the formatter
    ///
    /// A failing formatter does not stop the run: the outcome is reported on
    /// stderr and population goes ahead on whatever the volume now holds.
    /// Returns whether the formatter reported success.
    pub fn format(&self) -> bool {
        match self.formatter().format_volume(self.volume()) {
            Ok(status) if status.success() => true,
            Ok(status) => {
                warn(&format!(
                    "formatting {} exited with {status}; continuing",
                    self.volume().id()
                ));
                false
            }
            Err(err) => {
                warn(&format!(
                    "formatting {} failed: {err:#}; continuing",
                    self.volume().id()
                ));
                false
            }
        }
    }
}

fn warn(message: &str) {
    eprintln!("{} {message}", "warning:".yellow().bold());
}
