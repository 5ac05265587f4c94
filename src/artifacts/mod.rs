//! Generated data
//!
//! - `catalog`: the fixed, ordered list of multibyte test names
//! - `header`: rendering and reading back the `files.h` C header

pub mod catalog;
pub mod header;
