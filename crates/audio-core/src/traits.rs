use crate::device::{is_output_capable, DeviceId};
use crate::error::AudioError;

/// Narrow view of the platform audio service.
///
/// Every read and write of the system default output device goes through
/// this trait, so selection logic can run against an in-memory fake.
pub trait AudioService {
    /// Every device handle the service knows about, in its enumeration order
    fn list_all_devices(&self) -> Result<Vec<DeviceId>, AudioError>;

    /// The configured default output device.
    ///
    /// `None` when the service cannot answer; callers treat it as "no match".
    fn current_default_output(&self) -> Option<DeviceId>;

    /// Human-readable device name, `None` if absent or not decodable
    fn device_name(&self, device: DeviceId) -> Option<String>;

    /// Channel count of each buffer in the device's output stream configuration
    fn output_channel_counts(&self, device: DeviceId) -> Option<Vec<u32>>;

    /// Change the system-wide default output device
    fn set_default_output(&self, device: DeviceId) -> Result<(), AudioError>;

    /// Whether the device can render audio
    fn supports_output(&self, device: DeviceId) -> bool {
        self.output_channel_counts(device)
            .is_some_and(|channels| is_output_capable(&channels))
    }
}
