use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AudioError {
    /// The audio service could not report the device list or a property value.
    #[error("Error getting {what}: {status}")]
    ServiceQueryFailed { what: &'static str, status: String },

    #[error("Device \"{0}\" not found.")]
    DeviceNotFound(String),

    #[error("Failed to set default output device: {status}")]
    SetFailed { status: String },

    #[error("Platform not supported: {0}")]
    PlatformNotSupported(String),
}

impl AudioError {
    pub fn query_failed(what: &'static str, status: impl ToString) -> Self {
        Self::ServiceQueryFailed {
            what,
            status: status.to_string(),
        }
    }

    pub fn set_failed(status: impl ToString) -> Self {
        Self::SetFailed {
            status: status.to_string(),
        }
    }
}
