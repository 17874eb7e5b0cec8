//! switch_audio
//!
//! Lists the audio output devices macOS knows about and changes which one is
//! the system default.
//!
//! # Usage
//!
//! ```bash
//! # List output devices, the default is marked with '*'
//! switch_audio -l
//!
//! # Cycle to the next output device
//! switch_audio -n
//!
//! # Switch to a device by its exact name
//! switch_audio "External Headphones"
//! ```
//!
//! # Platform Support
//!
//! - **macOS**: CoreAudio
//! - **Other hosts**: builds, but every command reports the platform as unsupported

mod cli;
// Only reachable through the CoreAudio service outside of tests
#[cfg_attr(not(target_os = "macos"), allow(dead_code))]
mod commands;
#[cfg_attr(not(target_os = "macos"), allow(dead_code))]
mod output;

use std::io;
use std::process::ExitCode;

use anyhow::Context;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::{Action, Invocation};
use commands::Status;

fn main() -> ExitCode {
    let invocation = match cli::resolve(
        std::env::args_os(),
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    ) {
        Ok(invocation) => invocation,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let (action, verbose) = match invocation {
        Invocation::Run { action, verbose } => (action, verbose),
        Invocation::Exit(status) => return status.into(),
    };

    if let Err(e) = init_logging(verbose) {
        eprintln!("{e:#}");
    }

    tracing::debug!(?action, "Dispatching");
    match run(&action) {
        Ok(status) => status.into(),
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so stdout stays parseable. `RUST_LOG` overrides `-v`.
fn init_logging(verbose: u8) -> anyhow::Result<()> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).compact())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| level.into()))
        .try_init()
        .context("Failed to initialize logging")
}

#[cfg(target_os = "macos")]
fn run(action: &Action) -> anyhow::Result<Status> {
    let service = switch_audio_macos::CoreAudioService::new();
    commands::execute(
        &service,
        action,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )
}

#[cfg(not(target_os = "macos"))]
fn run(_action: &Action) -> anyhow::Result<Status> {
    let os = std::env::consts::OS.to_string();
    eprintln!("{}", switch_audio_core::AudioError::PlatformNotSupported(os));
    Ok(Status::Failure)
}
