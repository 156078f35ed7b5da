//! Sunrise-style IDE interface: a BIOS extension ROM plus an eight-register
//! ATA task file wired onto I/O ports, backed by a plain LBA-addressed disk
//! image file. Grounded on the same file-backed sector-buffer idiom as
//! [`super::fdc::Fdc`], generalized to the ATA task-file register layout
//! instead of the WD2793's, and to I/O ports instead of a memory-mapped
//! register window for the task file itself.

use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};

use crate::error::CoreError;

use super::Device;

const REG_DATA: u8 = 0;
const REG_ERROR_FEATURES: u8 = 1;
const REG_SECTOR_COUNT: u8 = 2;
const REG_LBA_LOW: u8 = 3;
const REG_LBA_MID: u8 = 4;
const REG_LBA_HIGH: u8 = 5;
const REG_DRIVE_HEAD: u8 = 6;
const REG_STATUS_COMMAND: u8 = 7;

const STATUS_DRQ: u8 = 0x08;
const STATUS_DRDY: u8 = 0x40;
const STATUS_BSY: u8 = 0x80;

const CMD_READ_SECTORS: u8 = 0x20;
const CMD_WRITE_SECTORS: u8 = 0x30;
const CMD_IDENTIFY: u8 = 0xEC;

pub struct IdeController {
    rom: Vec<u8>,
    pages: Vec<u8>,
    image: Option<File>,
    base_port: u8,
    ports: [u8; 8],
    sector_count: u8,
    lba_low: u8,
    lba_mid: u8,
    lba_high: u8,
    drive_head: u8,
    error: u8,
    status: u8,
    buffer: [u8; 512],
    bufp: usize,
    pending_write: bool,
}

impl IdeController {
    pub fn new(
        rom: Vec<u8>,
        base_port: u8,
        image_path: Option<&std::path::Path>,
    ) -> Result<Self, CoreError> {
        let image = match image_path {
            Some(path) => Some(
                OpenOptions::new()
                    .read(true)
                    .write(true)
                    .create(true)
                    .open(path)?,
            ),
            None => None,
        };
        let mut ports = [0u8; 8];
        for (i, p) in ports.iter_mut().enumerate() {
            *p = base_port.wrapping_add(i as u8);
        }
        let page_count = (rom.len() as u32).div_ceil(0x4000).max(1).min(3) as u8;
        let pages = (1..=page_count).collect();
        Ok(Self {
            rom,
            pages,
            image,
            base_port,
            ports,
            sector_count: 1,
            lba_low: 0,
            lba_mid: 0,
            lba_high: 0,
            drive_head: 0,
            error: 0,
            status: STATUS_DRDY,
            buffer: [0; 512],
            bufp: 0,
            pending_write: false,
        })
    }

    fn lba(&self) -> u64 {
        (self.lba_low as u64)
            | ((self.lba_mid as u64) << 8)
            | ((self.lba_high as u64) << 16)
            | (((self.drive_head & 0x0F) as u64) << 24)
    }

    fn run_command(&mut self, cmd: u8) {
        match cmd {
            CMD_READ_SECTORS => {
                self.buffer = [0; 512];
                if let Some(fh) = self.image.as_mut() {
                    let offset = self.lba() * 512;
                    if fh.seek(SeekFrom::Start(offset)).is_ok() {
                        let _ = fh.read(&mut self.buffer);
                    }
                }
                self.bufp = 0;
                self.pending_write = false;
                self.status = STATUS_DRDY | STATUS_DRQ;
            }
            CMD_WRITE_SECTORS => {
                self.bufp = 0;
                self.pending_write = true;
                self.status = STATUS_DRDY | STATUS_DRQ;
            }
            CMD_IDENTIFY => {
                self.buffer = [0; 512];
                let model = b"msx-core virtual disk          ";
                for (i, b) in model.iter().enumerate() {
                    self.buffer[54 + i] = *b;
                }
                self.bufp = 0;
                self.pending_write = false;
                self.status = STATUS_DRDY | STATUS_DRQ;
            }
            _ => {
                self.error = 0x04; // ABRT
                self.status = STATUS_DRDY;
                tracing::debug!(cmd, "unknown IDE command");
            }
        }
    }

    fn flush_sector(&mut self) {
        if let Some(fh) = self.image.as_mut() {
            let offset = self.lba() * 512;
            if fh.seek(SeekFrom::Start(offset)).is_ok() {
                let _ = fh.write_all(&self.buffer);
                let _ = fh.flush();
            }
        }
    }
}

impl Device for IdeController {
    fn name(&self) -> &'static str {
        "Sunrise IDE interface"
    }

    fn memory_read(&mut self, addr: u16) -> u8 {
        let offset = addr.wrapping_sub(0x4000) as usize;
        self.rom.get(offset).copied().unwrap_or(0xFF)
    }

    fn memory_write(&mut self, addr: u16, val: u8) {
        tracing::debug!(addr, val, "write to IDE BIOS extension ROM dropped");
    }

    fn pages(&self) -> &[u8] {
        &self.pages
    }

    fn io_read(&mut self, port: u8) -> u8 {
        match port.wrapping_sub(self.base_port) {
            REG_DATA => {
                if self.bufp < 512 {
                    let v = self.buffer[self.bufp];
                    self.bufp += 1;
                    if self.bufp == 512 {
                        self.status &= !STATUS_DRQ;
                    }
                    v
                } else {
                    0xFF
                }
            }
            REG_ERROR_FEATURES => self.error,
            REG_SECTOR_COUNT => self.sector_count,
            REG_LBA_LOW => self.lba_low,
            REG_LBA_MID => self.lba_mid,
            REG_LBA_HIGH => self.lba_high,
            REG_DRIVE_HEAD => self.drive_head,
            REG_STATUS_COMMAND => self.status,
            _ => 0xFF,
        }
    }

    fn io_write(&mut self, port: u8, val: u8) {
        match port.wrapping_sub(self.base_port) {
            REG_DATA => {
                if self.pending_write && self.bufp < 512 {
                    self.buffer[self.bufp] = val;
                    self.bufp += 1;
                    if self.bufp == 512 {
                        self.flush_sector();
                        self.status &= !STATUS_DRQ;
                        self.pending_write = false;
                    }
                }
            }
            REG_ERROR_FEATURES => {}
            REG_SECTOR_COUNT => self.sector_count = val,
            REG_LBA_LOW => self.lba_low = val,
            REG_LBA_MID => self.lba_mid = val,
            REG_LBA_HIGH => self.lba_high = val,
            REG_DRIVE_HEAD => self.drive_head = val,
            REG_STATUS_COMMAND => self.run_command(val),
            _ => {}
        }
    }

    fn io_ports(&self) -> &[u8] {
        &self.ports
    }
}
