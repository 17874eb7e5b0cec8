//! In-memory audio service for tests

use std::cell::{Cell, RefCell};

use crate::device::DeviceId;
use crate::error::AudioError;
use crate::traits::AudioService;

#[derive(Debug, Clone)]
struct FakeDevice {
    id: DeviceId,
    name: Option<String>,
    output_channels: Option<Vec<u32>>,
}

/// Scriptable stand-in for the platform audio service.
///
/// Devices are reported in the order they were added. Every successful
/// `set_default_output` is recorded.
#[derive(Debug, Default)]
pub struct FakeAudioService {
    devices: Vec<FakeDevice>,
    default_output: Cell<Option<DeviceId>>,
    list_error: Option<String>,
    set_error: Option<String>,
    set_calls: RefCell<Vec<DeviceId>>,
}

impl FakeAudioService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a device with an explicit name and output buffer layout
    pub fn with_device(mut self, id: u32, name: Option<&str>, output_channels: Vec<u32>) -> Self {
        self.devices.push(FakeDevice {
            id: DeviceId(id),
            name: name.map(str::to_string),
            output_channels: Some(output_channels),
        });
        self
    }

    /// Add a stereo output device
    pub fn with_output(self, id: u32, name: &str) -> Self {
        self.with_device(id, Some(name), vec![2])
    }

    /// Add a device with no output streams
    pub fn with_input(self, id: u32, name: &str) -> Self {
        self.with_device(id, Some(name), Vec::new())
    }

    /// Add a device whose stream configuration cannot be read
    pub fn with_unreadable_config(mut self, id: u32, name: &str) -> Self {
        self.devices.push(FakeDevice {
            id: DeviceId(id),
            name: Some(name.to_string()),
            output_channels: None,
        });
        self
    }

    pub fn with_default(self, id: u32) -> Self {
        self.default_output.set(Some(DeviceId(id)));
        self
    }

    /// Make `list_all_devices` fail with the given status
    pub fn with_list_error(mut self, status: &str) -> Self {
        self.list_error = Some(status.to_string());
        self
    }

    /// Make `set_default_output` fail with the given status
    pub fn with_set_error(mut self, status: &str) -> Self {
        self.set_error = Some(status.to_string());
        self
    }

    pub fn default_output(&self) -> Option<DeviceId> {
        self.default_output.get()
    }

    /// Devices passed to successful `set_default_output` calls, oldest first
    pub fn set_calls(&self) -> Vec<DeviceId> {
        self.set_calls.borrow().clone()
    }

    fn find(&self, id: DeviceId) -> Option<&FakeDevice> {
        self.devices.iter().find(|device| device.id == id)
    }
}

impl AudioService for FakeAudioService {
    fn list_all_devices(&self) -> Result<Vec<DeviceId>, AudioError> {
        if let Some(status) = &self.list_error {
            return Err(AudioError::query_failed("device list", status));
        }
        Ok(self.devices.iter().map(|device| device.id).collect())
    }

    fn current_default_output(&self) -> Option<DeviceId> {
        self.default_output.get()
    }

    fn device_name(&self, device: DeviceId) -> Option<String> {
        self.find(device)?.name.clone()
    }

    fn output_channel_counts(&self, device: DeviceId) -> Option<Vec<u32>> {
        self.find(device)?.output_channels.clone()
    }

    fn set_default_output(&self, device: DeviceId) -> Result<(), AudioError> {
        if let Some(status) = &self.set_error {
            return Err(AudioError::set_failed(status));
        }
        self.default_output.set(Some(device));
        self.set_calls.borrow_mut().push(device);
        Ok(())
    }
}
