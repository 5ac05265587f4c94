//! Stages of a run
//!
//! Each stage is implemented on [`Session`](crate::areas::session::Session)
//! in its own file:
//!
//! - `usage`: argument classification and the usage text (before a session)
//! - `confirm`: the destructive-action prompt
//! - `format`: handing the volume to the formatter
//! - `populate`: catalog files and `files.h`
//! - `run`: the stages in order

pub mod confirm;
pub mod format;
pub mod populate;
pub mod run;
pub mod usage;
