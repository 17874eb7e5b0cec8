//! Text and JSON rendering of operation results

use std::io::{self, Write};

use switch_audio_core::{NextOutcome, OutputDevice};

/// Shown in place of a device name the service could not provide
const UNKNOWN_NAME: &str = "Unknown";

pub fn write_device_list<W: Write>(out: &mut W, devices: &[OutputDevice]) -> io::Result<()> {
    writeln!(out, "Available Audio Output Devices:")?;
    writeln!(out, "================================")?;

    for device in devices {
        if device.is_default {
            writeln!(out, "* {} (current default)", device.name)?;
        } else {
            writeln!(out, "  {}", device.name)?;
        }
    }

    if devices.is_empty() {
        writeln!(out, "No output devices found.")?;
    } else {
        writeln!(out)?;
        writeln!(out, "Found {} output device(s).", devices.len())?;
        writeln!(out, "* indicates current default device")?;
    }

    Ok(())
}

pub fn write_device_json<W: Write>(out: &mut W, devices: &[OutputDevice]) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, devices)?;
    writeln!(out)?;
    Ok(())
}

pub fn write_next_outcome<W: Write>(out: &mut W, outcome: &NextOutcome) -> io::Result<()> {
    match outcome {
        NextOutcome::Switched { from, to, .. } => writeln!(
            out,
            "Switched from \"{}\" to \"{}\"",
            from.as_deref().unwrap_or(UNKNOWN_NAME),
            to.as_deref().unwrap_or(UNKNOWN_NAME)
        ),
        NextOutcome::NotEnoughDevices { .. } => {
            writeln!(out, "Only one or no output devices available. Cannot switch.")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use switch_audio_core::DeviceId;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_device_list_marks_default() {
        let devices = vec![
            OutputDevice::new(DeviceId(1), "MacBook Pro Speakers".into(), true),
            OutputDevice::new(DeviceId(2), "External Headphones".into(), false),
        ];

        let text = render(|out| write_device_list(out, &devices));
        assert_eq!(
            text,
            "Available Audio Output Devices:\n\
             ================================\n\
             * MacBook Pro Speakers (current default)\n\
             \x20 External Headphones\n\
             \n\
             Found 2 output device(s).\n\
             * indicates current default device\n"
        );
    }

    #[test]
    fn test_empty_device_list() {
        let text = render(|out| write_device_list(out, &[]));
        assert!(text.ends_with("No output devices found.\n"));
        assert!(!text.contains("Found"));
    }

    #[test]
    fn test_device_json() {
        let devices = vec![OutputDevice::new(DeviceId(73), "Speakers".into(), true)];
        let mut buf = Vec::new();
        write_device_json(&mut buf, &devices).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{ "id": 73, "name": "Speakers", "is_default": true }])
        );
    }

    #[test]
    fn test_switched_with_unknown_names() {
        let outcome = NextOutcome::Switched {
            from: None,
            to: Some("Speakers".into()),
            device: DeviceId(2),
        };
        let text = render(|out| write_next_outcome(out, &outcome));
        assert_eq!(text, "Switched from \"Unknown\" to \"Speakers\"\n");
    }

    #[test]
    fn test_not_enough_devices() {
        let text = render(|out| write_next_outcome(out, &NextOutcome::NotEnoughDevices { count: 1 }));
        assert_eq!(text, "Only one or no output devices available. Cannot switch.\n");
    }
}
