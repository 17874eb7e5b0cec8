//! Runs one parsed action against an audio service
//!
//! Results go to `out`, diagnostics go to `err`. The returned [`Status`] is
//! the process exit status. `Err` is reserved for failures to write output.
//!
//! A device list that cannot be read aborts `--list` and `--next` with a
//! diagnostic but still exits successfully. Only a rejected switch fails them.

use std::io::Write;
use std::process::ExitCode;

use switch_audio_core::{
    list_output_devices, switch_to_name, switch_to_next, AudioError, AudioService,
};

use crate::cli::{Action, PROGRAM};
use crate::output;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Failure,
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        match status {
            Status::Success => ExitCode::SUCCESS,
            Status::Failure => ExitCode::FAILURE,
        }
    }
}

pub fn execute<S, W, E>(
    service: &S,
    action: &Action,
    out: &mut W,
    err: &mut E,
) -> anyhow::Result<Status>
where
    S: AudioService + ?Sized,
    W: Write,
    E: Write,
{
    match action {
        Action::List { json } => {
            let devices = match list_output_devices(service) {
                Ok(devices) => devices,
                Err(e) => return report(err, &e, Status::Success),
            };

            if *json {
                output::write_device_json(out, &devices)?;
            } else {
                output::write_device_list(out, &devices)?;
            }
            Ok(Status::Success)
        }

        Action::Next => match switch_to_next(service) {
            Ok(outcome) => {
                output::write_next_outcome(out, &outcome)?;
                Ok(Status::Success)
            }
            Err(e @ AudioError::ServiceQueryFailed { .. }) => report(err, &e, Status::Success),
            Err(e) => report(err, &e, Status::Failure),
        },

        Action::Switch(name) => match switch_to_name(service, name) {
            Ok(_) => {
                writeln!(out, "Switched default output to \"{name}\".")?;
                Ok(Status::Success)
            }
            Err(e @ AudioError::DeviceNotFound(_)) => {
                writeln!(err, "{e}")?;
                writeln!(err, "Use '{PROGRAM} -l' to list available devices.")?;
                Ok(Status::Failure)
            }
            Err(e) => report(err, &e, Status::Failure),
        },
    }
}

fn report<E: Write>(err: &mut E, error: &AudioError, status: Status) -> anyhow::Result<Status> {
    tracing::debug!(?error, ?status, "Command failed");
    writeln!(err, "{error}")?;
    Ok(status)
}
