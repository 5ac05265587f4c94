//! Volume formatting
//!
//! Formatting is delegated to the host's own tool. Everything about it, from
//! whether the result is really FAT to what happens to the old contents, is
//! owned by that tool; this module only builds the command line, answers its
//! prompts with defaults and waits for it to exit.
//!
//! ## Host commands
//!
//! Only Windows addresses a volume by the same path it is written through:
//! `cmd /C format <DRIVE> /FS:FAT /Q`, with standard input a pipe carrying
//! blank lines so "press ENTER when ready" and volume label prompts take their
//! defaults.
//!
//! Elsewhere `VOLUME` is a mount point, and `mkfs.fat` neither takes a
//! directory nor formats a mounted device. Planning the command fails there;
//! the caller reports it and the volume is expected to be FAT already.

use crate::areas::volume::Volume;
use anyhow::Context;
use derive_new::new;
use std::ffi::OsString;
use std::io::{ErrorKind, Write};
use std::process::{Command, ExitStatus, Stdio};

#[cfg(windows)]
const DEFAULT_ANSWER: &str = "\r\n";

/// How many blank answers are queued on the tool's standard input
#[cfg(windows)]
const DEFAULT_ANSWER_COUNT: usize = 4;

/// Something that can put a fresh FAT file system on a volume
pub trait Formatter {
    /// Format `volume`, blocking until done, and report how the tool exited
    fn format_volume(&self, volume: &Volume) -> anyhow::Result<ExitStatus>;
}

/// A fully planned external command
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct CommandSpec {
    pub program: OsString,
    pub args: Vec<OsString>,
    /// Bytes written to the child's standard input before it is closed
    pub stdin_script: String,
}

impl CommandSpec {
    /// The host's FAT formatting command for `volume`
    #[cfg(windows)]
    pub fn fat_format(volume: &Volume) -> anyhow::Result<Self> {
        Ok(CommandSpec::new(
            OsString::from("cmd"),
            vec![
                OsString::from("/C"),
                OsString::from("format"),
                OsString::from(volume.designator()),
                OsString::from("/FS:FAT"),
                OsString::from("/Q"),
            ],
            DEFAULT_ANSWER.repeat(DEFAULT_ANSWER_COUNT),
        ))
    }

    /// The host's FAT formatting command for `volume`
    #[cfg(not(windows))]
    pub fn fat_format(volume: &Volume) -> anyhow::Result<Self> {
        anyhow::bail!(
            "formatting is only supported on Windows; format the device behind {} as FAT before running",
            volume.id()
        )
    }

    /// Human-readable command line, for diagnostics only
    pub fn display(&self) -> String {
        std::iter::once(&self.program)
            .chain(self.args.iter())
            .map(|part| part.to_string_lossy())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Spawn the command, feed its standard input and wait for it to exit
    pub fn run(&self) -> anyhow::Result<ExitStatus> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .with_context(|| format!("Failed to execute {}", self.display()))?;

        if let Some(mut stdin) = child.stdin.take() {
            // A tool that never prompts may exit before reading its input
            match stdin.write_all(self.stdin_script.as_bytes()) {
                Err(err) if err.kind() == ErrorKind::BrokenPipe => {}
                other => other
                    .with_context(|| format!("Failed to answer prompts of {}", self.display()))?,
            }
        }

        child
            .wait()
            .with_context(|| format!("Failed to wait for {}", self.display()))
    }
}

/// Formats through the host's shell-level formatting tool
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellFormatter;

impl Formatter for ShellFormatter {
    fn format_volume(&self, volume: &Volume) -> anyhow::Result<ExitStatus> {
        let spec = CommandSpec::fat_format(volume)?;
        debug_log!("format: {}", spec.display());

        spec.run()
    }
}
