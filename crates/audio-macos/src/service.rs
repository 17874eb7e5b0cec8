//! CoreAudio implementation of [`AudioService`]
//!
//! Every query goes through the HAL system object or a device object.
//! CoreFoundation strings and buffer lists come back as owned values, so they
//! are released on every path when they go out of scope.

use cidre::{arc, cat, cf, core_audio as ca};
use switch_audio_core::{AudioError, AudioService, DeviceId};

/// The system's CoreAudio hardware abstraction layer
#[derive(Debug, Default, Clone, Copy)]
pub struct CoreAudioService;

impl CoreAudioService {
    pub fn new() -> Self {
        Self
    }
}

fn hal_device(device: DeviceId) -> ca::Device {
    ca::Device(ca::Obj(device.0))
}

fn device_id(device: &ca::Device) -> DeviceId {
    DeviceId(device.0 .0)
}

impl AudioService for CoreAudioService {
    fn list_all_devices(&self) -> Result<Vec<DeviceId>, AudioError> {
        let devices = ca::System::devices()
            .map_err(|e| AudioError::query_failed("device list", format!("{e:?}")))?;

        tracing::debug!(count = devices.len(), "Fetched device list");
        Ok(devices.iter().map(device_id).collect())
    }

    fn current_default_output(&self) -> Option<DeviceId> {
        match ca::System::default_output_device() {
            Ok(device) if device.0 != ca::Obj::UNKNOWN => Some(device_id(&device)),
            Ok(_) => None,
            Err(e) => {
                tracing::warn!(error = ?e, "Failed to read default output device");
                None
            }
        }
    }

    fn device_name(&self, device: DeviceId) -> Option<String> {
        let name: arc::R<cf::String> =
            match ca::Obj(device.0).cf_prop(&ca::PropSelector::NAME.global_addr()) {
                Ok(name) => name,
                Err(e) => {
                    tracing::debug!(%device, error = ?e, "Device has no name");
                    return None;
                }
            };

        decoded_name(&name).or_else(|| {
            tracing::debug!(%device, "Device name is not valid UTF-8");
            None
        })
    }

    fn output_channel_counts(&self, device: DeviceId) -> Option<Vec<u32>> {
        match hal_device(device).output_stream_cfg() {
            Ok(cfg) => Some(channel_counts(&cfg)),
            Err(e) => {
                tracing::debug!(%device, error = ?e, "No readable output stream configuration");
                None
            }
        }
    }

    fn set_default_output(&self, device: DeviceId) -> Result<(), AudioError> {
        ca::System::OBJ
            .set_prop(
                &ca::PropSelector::HW_DEFAULT_OUTPUT_DEVICE.global_addr(),
                &hal_device(device),
            )
            .map_err(|e| AudioError::set_failed(format!("{e:?}")))
    }
}

/// UTF-8 text of a CFString.
///
/// The conversion yields an empty string when it fails, so an empty result
/// for a non-empty CFString means the name could not be decoded.
fn decoded_name(name: &cf::String) -> Option<String> {
    let text = name.to_string();
    if text.is_empty() && name.len() > 0 {
        return None;
    }
    Some(text)
}

fn channel_counts(cfg: &cat::AudioBufListN) -> Vec<u32> {
    cfg.buffers()
        .iter()
        .take(cfg.number_buffers() as usize)
        .map(|buffer| buffer.number_channels)
        .collect()
}
