use anyhow::Result;
use clap::Parser;
use fatnames::areas::formatter::ShellFormatter;
use fatnames::areas::session::Session;
use fatnames::areas::volume::Volume;
use fatnames::commands::usage::{Invocation, write_usage};
use is_terminal::IsTerminal;
use std::ffi::OsString;
use std::iter;

/// clap's own help and version flags are disabled: `-h`/`-help` in any case
/// print the two-line usage, and every other first argument, hyphen or not,
/// names the volume. That includes `--`, see [`Cli::parse_verbatim`].
#[derive(Parser)]
#[command(
    name = "fatnames",
    author = "Sami Barbut-Dica",
    about = "Formats a volume as FAT and fills it with multibyte file names",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    #[arg(
        index = 1,
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true,
        help = "The volume root to format, e.g. E:\\ (only the first argument is used)"
    )]
    args: Vec<String>,
}

impl Cli {
    /// Parse the command line with every argument taken as a value
    ///
    /// A leading `--` is inserted so clap stops interpreting right away and
    /// the user's own `--` reaches `args` instead of being consumed.
    fn parse_verbatim() -> Self {
        let mut raw = std::env::args_os();
        let program = raw.next().unwrap_or_else(|| OsString::from("fatnames"));

        Cli::parse_from(
            iter::once(program)
                .chain(iter::once(OsString::from("--")))
                .chain(raw),
        )
    }
}

fn main() -> Result<()> {
    if !std::io::stderr().is_terminal() {
        colored::control::set_override(false);
    }

    let cli = Cli::parse_verbatim();

    match Invocation::from_first_arg(cli.args.first().map(String::as_str)) {
        Invocation::Usage => write_usage(&mut std::io::stdout())?,
        Invocation::Format { volume } => {
            let session = Session::new(
                Volume::new(volume),
                Box::new(ShellFormatter),
                Box::new(std::io::stdin().lock()),
                Box::new(std::io::stdout()),
            );

            session.run()?;
        }
    }

    Ok(())
}
