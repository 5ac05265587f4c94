use crate::areas::formatter::Formatter;
use crate::areas::volume::Volume;
use std::cell::{Cell, RefCell, RefMut};
use std::fmt;
use std::io::{BufRead, Write};

/// Where a session is in its run
///
/// Sessions only move forward: `AwaitConfirmation`, then either `Done`
/// (declined) or `Formatting`, `WritingFiles`, `WritingHeader`, `Done`.
/// Arguments are classified before a session exists, by
/// [`Invocation`](crate::commands::usage::Invocation), so a session starts
/// out awaiting confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    AwaitConfirmation,
    Formatting,
    WritingFiles,
    WritingHeader,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::AwaitConfirmation => "await-confirmation",
            Stage::Formatting => "formatting",
            Stage::WritingFiles => "writing-files",
            Stage::WritingHeader => "writing-header",
            Stage::Done => "done",
        };
        write!(f, "{name}")
    }
}

/// One destructive run against one volume
///
/// Console input and output are injected so the whole run can be driven
/// from tests with scripted answers and a formatter that never touches a
/// real device.
pub struct Session {
    volume: Volume,
    formatter: Box<dyn Formatter>,
    reader: RefCell<Box<dyn BufRead>>,
    writer: RefCell<Box<dyn Write>>,
    stage: Cell<Stage>,
}

impl Session {
    pub fn new(
        volume: Volume,
        formatter: Box<dyn Formatter>,
        reader: Box<dyn BufRead>,
        writer: Box<dyn Write>,
    ) -> Self {
        Session {
            volume,
            formatter,
            reader: RefCell::new(reader),
            writer: RefCell::new(writer),
            stage: Cell::new(Stage::AwaitConfirmation),
        }
    }

    pub fn volume(&self) -> &Volume {
        &self.volume
    }

    pub fn formatter(&self) -> &dyn Formatter {
        self.formatter.as_ref()
    }

    pub fn reader(&'_ self) -> RefMut<'_, Box<dyn BufRead>> {
        self.reader.borrow_mut()
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn Write>> {
        self.writer.borrow_mut()
    }

    pub fn stage(&self) -> Stage {
        self.stage.get()
    }

    pub(crate) fn advance(&self, next: Stage) {
        debug_log!("stage: {} -> {}", self.stage.get(), next);
        debug_assert!(next > self.stage.get(), "stages only move forward");
        self.stage.set(next);
    }
}
