// CLI module
// Command-line interface, argument parsing and command dispatch

mod args;

pub use args::{CliArgs, Command, Direction, OptionArgs};

use crate::core::MoneyCodec;
use crate::io::convert_file;
use crate::types::MoneyError;
use clap::Parser;
use std::io::Write;

/// Parse command-line arguments using clap
///
/// If parsing fails (invalid arguments, missing required arguments, or
/// --help), clap displays an error or help text and exits the process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}

/// Run a parsed command, writing its result to `output`
///
/// An absent parse result is printed as `nil`.
///
/// # Errors
///
/// Returns an error if the option flags do not resolve, the batch input
/// cannot be read, or writing to `output` fails.
pub fn run(args: &CliArgs, output: &mut dyn Write) -> Result<(), MoneyError> {
    let codec = MoneyCodec::from_overrides(&args.command.options().to_overrides())?;

    match &args.command {
        Command::Format { value, .. } => writeln!(output, "{}", codec.format(*value))?,
        Command::Parse { text, .. } => match codec.parse(text) {
            Some(cents) => writeln!(output, "{}", cents)?,
            None => writeln!(output, "nil")?,
        },
        Command::Pattern { value, pattern, .. } => {
            writeln!(output, "{}", codec.format_value(*value, pattern))?
        }
        Command::Batch {
            input_file,
            direction,
            ..
        } => {
            convert_file(input_file, direction, &codec, output)?;
        }
    }

    Ok(())
}
