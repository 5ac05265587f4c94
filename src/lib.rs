//! Multibyte file name volume generator
//!
//! Formats a removable volume as FAT and fills it with files whose names
//! exercise multibyte/UTF-8 encodings, then writes `files.h`, a C header
//! listing the same names for a downstream filesystem test.
//!
//! - `areas`: the pieces a session works with (volume, formatter, session)
//! - `artifacts`: the name catalog and the generated header
//! - `commands`: the confirmation and populate stages run by a session

/// Macro for debug logging that is enabled with the debug_volume feature flag
///
/// # Usage
/// ```rust,ignore
/// debug_log!("Writing {}", path.display());
/// ```
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "debug_volume")]
        {
            eprintln!($($arg)*);
        }
    };
}

pub mod areas;
pub mod artifacts;
pub mod commands;
