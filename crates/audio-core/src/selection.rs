//! Device selection over one snapshot of the device directory
//!
//! Everything here is a linear scan that keeps the service's enumeration
//! order. Nothing is sorted and nothing is cached between invocations.

use crate::device::DeviceId;
use crate::traits::AudioService;

/// Keep only the devices that support output, in directory order
pub fn output_devices<S: AudioService + ?Sized>(
    service: &S,
    directory: &[DeviceId],
) -> Vec<DeviceId> {
    directory
        .iter()
        .copied()
        .filter(|&device| {
            let supported = service.supports_output(device);
            tracing::trace!(%device, supported, "Checked output capability");
            supported
        })
        .collect()
}

/// First device whose name is exactly `wanted`.
///
/// Comparison is byte-for-byte with no case folding or normalization.
/// Devices without a name never match. Later duplicates are never considered.
pub fn find_by_name<S: AudioService + ?Sized>(
    service: &S,
    devices: &[DeviceId],
    wanted: &str,
) -> Option<DeviceId> {
    devices
        .iter()
        .copied()
        .find(|&device| service.device_name(device).as_deref() == Some(wanted))
}

/// Position of the current default within `devices`, if it is there at all
pub fn current_index(devices: &[DeviceId], current: Option<DeviceId>) -> Option<usize> {
    let current = current?;
    devices.iter().position(|&device| device == current)
}

/// Index of the device after `current`, wrapping at the end.
///
/// When the current default is not among the output devices the cycle
/// restarts at the first one. Returns `None` only for an empty list.
pub fn next_index(current: Option<usize>, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }

    match current {
        Some(index) => Some((index + 1) % count),
        None => Some(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeAudioService;

    fn ids(raw: &[u32]) -> Vec<DeviceId> {
        raw.iter().copied().map(DeviceId).collect()
    }

    #[test]
    fn test_output_devices_keeps_directory_order() {
        let service = FakeAudioService::new()
            .with_output(30, "C")
            .with_input(10, "B")
            .with_output(20, "A");

        let directory = service.list_all_devices().unwrap();
        assert_eq!(output_devices(&service, &directory), ids(&[30, 20]));
    }

    #[test]
    fn test_output_devices_skips_zero_channel_buffers() {
        let service = FakeAudioService::new()
            .with_device(1, Some("Broken"), vec![2, 0])
            .with_device(2, Some("Empty"), vec![])
            .with_output(3, "Speakers");

        let directory = service.list_all_devices().unwrap();
        assert_eq!(output_devices(&service, &directory), ids(&[3]));
    }

    #[test]
    fn test_output_devices_skips_unreadable_config() {
        let service = FakeAudioService::new()
            .with_output(1, "Speakers")
            .with_unreadable_config(2, "Ghost");

        let directory = service.list_all_devices().unwrap();
        assert_eq!(output_devices(&service, &directory), ids(&[1]));
    }

    #[test]
    fn test_find_by_name_first_duplicate_wins() {
        let service = FakeAudioService::new()
            .with_output(5, "USB Audio")
            .with_output(6, "USB Audio");

        let devices = ids(&[5, 6]);
        assert_eq!(find_by_name(&service, &devices, "USB Audio"), Some(DeviceId(5)));
    }

    #[test]
    fn test_find_by_name_is_exact() {
        let service = FakeAudioService::new().with_output(1, "External Headphones");
        let devices = ids(&[1]);

        assert_eq!(find_by_name(&service, &devices, "external headphones"), None);
        assert_eq!(find_by_name(&service, &devices, "External Headphones "), None);
        assert_eq!(find_by_name(&service, &devices, "External"), None);
        assert_eq!(
            find_by_name(&service, &devices, "External Headphones"),
            Some(DeviceId(1))
        );
    }

    #[test]
    fn test_find_by_name_ignores_unnamed_devices() {
        let service = FakeAudioService::new()
            .with_device(1, None, vec![2])
            .with_output(2, "");

        let devices = ids(&[1, 2]);
        assert_eq!(find_by_name(&service, &devices, ""), Some(DeviceId(2)));
    }

    #[test]
    fn test_find_by_name_empty_list() {
        let service = FakeAudioService::new();
        assert_eq!(find_by_name(&service, &[], "Speakers"), None);
    }

    #[test]
    fn test_current_index() {
        let devices = ids(&[4, 8, 15]);
        assert_eq!(current_index(&devices, Some(DeviceId(8))), Some(1));
        assert_eq!(current_index(&devices, Some(DeviceId(16))), None);
        assert_eq!(current_index(&devices, None), None);
    }

    #[test]
    fn test_next_index_wraps() {
        assert_eq!(next_index(Some(0), 3), Some(1));
        assert_eq!(next_index(Some(1), 3), Some(2));
        assert_eq!(next_index(Some(2), 3), Some(0));
    }

    #[test]
    fn test_next_index_single_device_is_itself() {
        assert_eq!(next_index(Some(0), 1), Some(0));
    }

    #[test]
    fn test_next_index_without_current_starts_at_first() {
        assert_eq!(next_index(None, 3), Some(0));
    }

    #[test]
    fn test_next_index_empty() {
        assert_eq!(next_index(None, 0), None);
        assert_eq!(next_index(Some(0), 0), None);
    }
}
