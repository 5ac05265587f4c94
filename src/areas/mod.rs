//! Session building blocks
//!
//! - `volume`: the target volume root and the files written into it
//! - `formatter`: the external formatting tool behind a trait
//! - `session`: ties a volume, a formatter and the console together and
//!   tracks which stage of the run it is in

pub mod formatter;
pub mod session;
pub mod volume;
