mod device;
mod error;
mod selection;
mod switcher;
mod traits;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use device::{is_output_capable, DeviceId, OutputDevice};
pub use error::AudioError;
pub use selection::{current_index, find_by_name, next_index, output_devices};
pub use switcher::{list_output_devices, switch_to_name, switch_to_next, NextOutcome};
pub use traits::AudioService;
