//! RP-5C01 real-time clock, grounded on `original_source/RP_5C01.py`.
//!
//! Port 0xB4 latches a register index; port 0xB5 reads/writes it. Indices
//! 0..=0x0C read decimal digits of the current wall-clock time directly from
//! the host clock (BCD split across adjacent register pairs); indices 0x0D
//! and up are plain backing storage.

use chrono::{Datelike, Local, Timelike};

use super::Device;

pub struct Rtc {
    register_index: u8,
    storage: [u8; 16],
}

impl Rtc {
    pub fn new() -> Self {
        Self {
            register_index: 0,
            storage: [0; 16],
        }
    }

    fn clock_digit(index: u8) -> u8 {
        let now = Local::now();
        match index {
            0x00 => (now.second() % 10) as u8,
            0x01 => (now.second() / 10) as u8,
            0x02 => (now.minute() % 10) as u8,
            0x03 => (now.minute() / 10) as u8,
            0x04 => (now.hour() % 10) as u8,
            0x05 => (now.hour() / 10) as u8,
            0x06 => now.weekday().num_days_from_sunday() as u8,
            0x07 => (now.day() % 10) as u8,
            0x08 => (now.day() / 10) as u8,
            0x09 => (now.month() % 10) as u8,
            0x0A => (now.month() / 10) as u8,
            0x0B => (now.year() % 10) as u8,
            0x0C => ((now.year() / 10) % 10) as u8,
            _ => unreachable!(),
        }
    }
}

impl Default for Rtc {
    fn default() -> Self {
        Self::new()
    }
}

impl Device for Rtc {
    fn name(&self) -> &'static str {
        "RP-5C01 RTC"
    }

    fn io_read(&mut self, port: u8) -> u8 {
        if port != 0xB5 {
            return 0xFF;
        }
        if self.register_index <= 0x0C {
            Self::clock_digit(self.register_index)
        } else {
            self.storage[self.register_index as usize]
        }
    }

    fn io_write(&mut self, port: u8, val: u8) {
        match port {
            0xB4 => self.register_index = val & 0x0F,
            0xB5 => {
                self.storage[self.register_index as usize] = val;
                if self.register_index >= 0x0D {
                    tracing::debug!(reg = self.register_index, val, "RTC general-purpose write");
                }
            }
            _ => {}
        }
    }

    fn io_ports(&self) -> &[u8] {
        &[0xB4, 0xB5]
    }
}
