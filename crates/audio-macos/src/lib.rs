//! CoreAudio backend
//!
//! Only built on macOS. Other hosts get an empty crate and the binary
//! reports the platform as unsupported.

#[cfg(target_os = "macos")]
mod service;

#[cfg(target_os = "macos")]
pub use service::CoreAudioService;
