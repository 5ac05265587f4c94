#![allow(dead_code)]

use assert_cmd::Command;
use assert_fs::TempDir;
use derive_new::new;
use fatnames::areas::formatter::Formatter;
use fatnames::areas::session::Session;
use fatnames::areas::volume::Volume;
use rstest::fixture;
use std::cell::RefCell;
use std::collections::BTreeSet;
use std::io::{Cursor, Write};
use std::path::Path;
use std::process::ExitStatus;
use std::rc::Rc;
use walkdir::WalkDir;

#[fixture]
pub fn volume_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

pub fn run_fatnames(args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("fatnames").expect("Failed to find fatnames binary");
    cmd.env("NO_COLOR", "1");
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

/// Names of the entries directly inside `dir`
pub fn list_volume(dir: &Path) -> BTreeSet<String> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .map(|entry| {
            entry
                .expect("Failed to read volume entry")
                .file_name()
                .to_string_lossy()
                .into_owned()
        })
        .collect()
}

/// Output sink that stays readable after the session has taken ownership
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.borrow().clone()).expect("session output is not UTF-8")
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatBehavior {
    Exit(i32),
    SpawnFailure,
}

/// Formatter stand-in that records the volumes it was asked to format
#[derive(Debug, Clone, new)]
pub struct RecordingFormatter {
    behavior: FormatBehavior,
    #[new(default)]
    calls: Rc<RefCell<Vec<String>>>,
}

impl RecordingFormatter {
    pub fn succeeding() -> Self {
        Self::new(FormatBehavior::Exit(0))
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl Formatter for RecordingFormatter {
    fn format_volume(&self, volume: &Volume) -> anyhow::Result<ExitStatus> {
        self.calls.borrow_mut().push(volume.id().to_string());

        match self.behavior {
            FormatBehavior::Exit(code) => Ok(exit_status(code)),
            FormatBehavior::SpawnFailure => anyhow::bail!("Failed to execute cmd /C format"),
        }
    }
}

#[cfg(unix)]
pub fn exit_status(code: i32) -> ExitStatus {
    use std::os::unix::process::ExitStatusExt;
    ExitStatus::from_raw(code << 8)
}

#[cfg(windows)]
pub fn exit_status(code: i32) -> ExitStatus {
    use std::os::windows::process::ExitStatusExt;
    ExitStatus::from_raw(code as u32)
}

/// A session on `dir` answering the prompt with `answers`
pub fn scripted_session(
    dir: &Path,
    answers: &str,
    formatter: RecordingFormatter,
) -> (Session, SharedBuffer) {
    let output = SharedBuffer::default();
    let session = Session::new(
        Volume::new(dir.to_string_lossy().into_owned()),
        Box::new(formatter),
        Box::new(Cursor::new(answers.as_bytes().to_vec())),
        Box::new(output.clone()),
    );

    (session, output)
}
