use std::io::Write;

/// Help spellings, matched after lowercasing
pub const HELP_FLAGS: phf::Set<&'static str> = phf::phf_set! {
    "-h",
    "-help",
};

pub const USAGE: &str = "\
Usage: fatnames <VOLUME>
Formats VOLUME (e.g. E:\\) as FAT and fills it with multibyte test file names and files.h.
";

/// What the first command-line argument asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Usage,
    Format { volume: String },
}

impl Invocation {
    /// Classify the first argument; anything that is not a help flag is a volume
    pub fn from_first_arg(arg: Option<&str>) -> Self {
        match arg {
            None => Invocation::Usage,
            Some(arg) if is_help_flag(arg) => Invocation::Usage,
            Some(volume) => Invocation::Format {
                volume: volume.to_string(),
            },
        }
    }
}

pub fn is_help_flag(arg: &str) -> bool {
    HELP_FLAGS.contains(arg.to_lowercase().as_str())
}

pub fn write_usage(writer: &mut dyn Write) -> anyhow::Result<()> {
    writer.write_all(USAGE.as_bytes())?;
    writer.flush()?;

    Ok(())
}
