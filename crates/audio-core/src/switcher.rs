//! List and switch operations behind the command line
//!
//! Each operation queries the directory once, works on that snapshot and
//! returns a report instead of printing, so callers decide how to render it.

use crate::device::{DeviceId, OutputDevice};
use crate::error::AudioError;
use crate::selection::{current_index, find_by_name, next_index, output_devices};
use crate::traits::AudioService;

/// Result of a next-in-cycle switch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextOutcome {
    /// The default moved. Names are `None` when the service has none.
    Switched {
        from: Option<String>,
        to: Option<String>,
        device: DeviceId,
    },
    /// Fewer than two output devices, nothing was changed
    NotEnoughDevices { count: usize },
}

/// Every named output device, with the current default marked.
///
/// Devices whose name cannot be read are left out.
pub fn list_output_devices<S: AudioService + ?Sized>(
    service: &S,
) -> Result<Vec<OutputDevice>, AudioError> {
    let directory = service.list_all_devices()?;
    let current = service.current_default_output();
    tracing::debug!(total = directory.len(), ?current, "Queried device directory");

    let devices = output_devices(service, &directory)
        .into_iter()
        .filter_map(|device| match service.device_name(device) {
            Some(name) => Some(OutputDevice::new(device, name, Some(device) == current)),
            None => {
                tracing::debug!(%device, "Skipping output device without a name");
                None
            }
        })
        .collect();

    Ok(devices)
}

/// Move the default output to the next output device in enumeration order
pub fn switch_to_next<S: AudioService + ?Sized>(service: &S) -> Result<NextOutcome, AudioError> {
    let directory = service.list_all_devices()?;
    let current = service.current_default_output();
    let outputs = output_devices(service, &directory);

    if outputs.len() <= 1 {
        tracing::info!(count = outputs.len(), "Not enough output devices to cycle");
        return Ok(NextOutcome::NotEnoughDevices {
            count: outputs.len(),
        });
    }

    let index = current_index(&outputs, current);
    if index.is_none() {
        tracing::debug!(?current, "Current default is not an output device, starting at the first");
    }

    // Non-empty, so there is always a next index
    let next = next_index(index, outputs.len()).unwrap_or(0);
    let target = outputs[next];

    let from = current.and_then(|device| service.device_name(device));
    let to = service.device_name(target);

    service.set_default_output(target)?;
    tracing::info!(?from, ?to, %target, "Switched default output device");

    Ok(NextOutcome::Switched {
        from,
        to,
        device: target,
    })
}

/// Make the output device called exactly `name` the default
pub fn switch_to_name<S: AudioService + ?Sized>(
    service: &S,
    name: &str,
) -> Result<DeviceId, AudioError> {
    let directory = service.list_all_devices()?;
    let outputs = output_devices(service, &directory);

    let device = find_by_name(service, &outputs, name)
        .ok_or_else(|| AudioError::DeviceNotFound(name.to_string()))?;

    service.set_default_output(device)?;
    tracing::info!(name, %device, "Switched default output device");

    Ok(device)
}
