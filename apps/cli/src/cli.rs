//! Command line surface

use std::ffi::OsString;
use std::io::{self, Write};

use clap::{ArgAction, CommandFactory, Parser};

use crate::commands::Status;

/// Name shown in usage and hint messages
pub const PROGRAM: &str = "switch_audio";

const EXAMPLES: &str = "\
Examples:
  switch_audio -l                          # List available devices
  switch_audio \"External Headphones\"      # Switch to headphones";

/// Switch macOS default audio output device
#[derive(Parser, Debug)]
#[command(name = PROGRAM, version)]
#[command(about = "Switch macOS default audio output device")]
#[command(after_help = EXAMPLES)]
pub struct Args {
    /// List available audio output devices
    #[arg(short, long, conflicts_with_all = ["next", "device"])]
    pub list: bool,

    /// Switch to next available device
    #[arg(short, long, conflicts_with = "device")]
    pub next: bool,

    /// Print the device list as JSON (requires --list)
    #[arg(long, requires = "list")]
    pub json: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Exact, case-sensitive name of the device to make the default output
    #[arg(value_name = "DEVICE_NAME")]
    pub device: Option<String>,
}

/// What a parsed invocation asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    List { json: bool },
    Next,
    Switch(String),
}

impl Args {
    /// `None` when only modifiers such as `-v` were given
    pub fn action(&self) -> Option<Action> {
        if self.list {
            return Some(Action::List { json: self.json });
        }
        if self.next {
            return Some(Action::Next);
        }
        self.device.clone().map(Action::Switch)
    }
}

/// Outcome of reading the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Run { action: Action, verbose: u8 },
    /// Nothing to run, exit right away
    Exit(Status),
}

/// Turn raw arguments (program name first) into an action or an early exit.
///
/// A bare invocation or one with only `-v` prints usage to `out` and fails.
/// `--help` and `--version` go to `out` and succeed. Parse errors go to `err`
/// and fail with status 1 rather than clap's usual 2.
pub fn resolve<I, T, W, E>(args: I, out: &mut W, err: &mut E) -> io::Result<Invocation>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
    E: Write,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    if args.len() < 2 {
        write_usage(out)?;
        return Ok(Invocation::Exit(Status::Failure));
    }

    let parsed = match Args::try_parse_from(args) {
        Ok(parsed) => parsed,
        Err(e) => {
            let text = e.render().to_string();
            return if e.use_stderr() {
                write!(err, "{text}")?;
                Ok(Invocation::Exit(Status::Failure))
            } else {
                write!(out, "{text}")?;
                Ok(Invocation::Exit(Status::Success))
            };
        }
    };

    match parsed.action() {
        Some(action) => Ok(Invocation::Run {
            action,
            verbose: parsed.verbose,
        }),
        None => {
            write_usage(out)?;
            Ok(Invocation::Exit(Status::Failure))
        }
    }
}

fn write_usage<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "{}", Args::command().render_help())
}
