//! Linux evdev beeper device: one `write(2)` of an input event per tone.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::mem;
use std::path::{Path, PathBuf};
use std::slice;

use anyhow::{Context, Result};
use rtttl::ToneSink;

const EV_SND: u16 = 0x12;
const SND_TONE: u16 = 0x02;

/// `struct input_event` from `<linux/input.h>`.
#[repr(C)]
struct InputEvent {
    time: libc::timeval,
    type_: u16,
    code: u16,
    value: i32,
}

impl InputEvent {
    fn tone(frequency_hz: u32) -> Self {
        InputEvent {
            // The kernel stamps the event itself; a zero time is fine.
            time: libc::timeval {
                tv_sec: 0,
                tv_usec: 0,
            },
            type_: EV_SND,
            code: SND_TONE,
            value: frequency_hz as i32,
        }
    }

    fn as_bytes(&self) -> &[u8] {
        // repr(C) matches the kernel struct; the event is written as-is.
        unsafe {
            slice::from_raw_parts(
                (self as *const InputEvent).cast::<u8>(),
                mem::size_of::<InputEvent>(),
            )
        }
    }
}

/// Path for input event number N.
pub fn event_device(event_num: u32) -> PathBuf {
    PathBuf::from(format!("/dev/input/event{event_num}"))
}

/// A write-only handle on a tone-capable input device.
pub struct Beeper {
    file: File,
}

impl Beeper {
    pub fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .write(true)
            .open(path)
            .with_context(|| format!("failed to open event device {}", path.display()))?;
        Ok(Beeper { file })
    }
}

impl ToneSink for Beeper {
    fn emit_tone(&mut self, frequency_hz: u32) -> io::Result<()> {
        self.file.write_all(InputEvent::tone(frequency_hz).as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_device_path() {
        assert_eq!(event_device(0), PathBuf::from("/dev/input/event0"));
        assert_eq!(event_device(17), PathBuf::from("/dev/input/event17"));
    }

    #[test]
    fn test_input_event_layout() {
        // Must match the kernel's struct exactly or the write is rejected.
        assert_eq!(
            mem::size_of::<InputEvent>(),
            mem::size_of::<libc::timeval>() + 8
        );

        let ev = InputEvent::tone(440);
        assert_eq!(ev.type_, EV_SND);
        assert_eq!(ev.code, SND_TONE);
        assert_eq!(ev.value, 440);
        assert_eq!(ev.as_bytes().len(), mem::size_of::<InputEvent>());
    }

    #[test]
    fn test_tone_off_is_value_zero() {
        assert_eq!(InputEvent::tone(0).value, 0);
    }
}
