//! Command-line argument parsing.
//!
//! This module handles parsing command-line arguments and determining
//! which command to execute.

use std::path::PathBuf;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Print the flattened folder paths to stdout and exit
    List { root: Option<PathBuf> },
    /// Run the TUI application (default)
    RunTui { root: Option<PathBuf> },
}

/// Parse command-line arguments and return the appropriate command.
///
/// `--root <PATH>` overrides the scan root for both the TUI and `--list`.
///
/// # Examples
///
/// ```
/// use sheetnav::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["sheetnav".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut root: Option<PathBuf> = None;
    let mut list = false;

    let mut args = args.skip(1); // Skip the program name
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--list" => list = true,
            "--root" => root = args.next().map(PathBuf::from),
            _ => {}
        }
    }

    if list {
        CliCommand::List { root }
    } else {
        CliCommand::RunTui { root }
    }
}
