use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque handle the audio service assigns to a device.
///
/// Only meaningful for the invocation that queried it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceId(pub u32);

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named, output-capable device as shown by the list command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputDevice {
    pub id: DeviceId,
    pub name: String,
    pub is_default: bool,
}

impl OutputDevice {
    pub fn new(id: DeviceId, name: String, is_default: bool) -> Self {
        Self {
            id,
            name,
            is_default,
        }
    }
}

/// Whether an output stream configuration can render audio.
///
/// Takes the channel count of every reported buffer. At least one buffer is
/// required and none of them may be empty.
pub fn is_output_capable(channel_counts: &[u32]) -> bool {
    !channel_counts.is_empty() && channel_counts.iter().all(|&channels| channels > 0)
}
