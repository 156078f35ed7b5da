//! ROM-backed devices: the BIOS/BASIC ROM and generic cartridge ROMs.

use super::Device;

/// BIOS/BASIC ROM, installed flat across all four pages of a slot (typically
/// primary slot 0), matching `original_source/msx.py`'s `b.add_dev(rom(...), 0, 0)`.
pub struct BiosRom {
    data: Vec<u8>,
}

impl BiosRom {
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    fn read(&self, addr: u16) -> u8 {
        self.data.get(addr as usize).copied().unwrap_or(0xFF)
    }
}

impl Device for BiosRom {
    fn name(&self) -> &'static str {
        "BIOS ROM"
    }

    fn memory_read(&mut self, addr: u16) -> u8 {
        self.read(addr)
    }

    fn memory_write(&mut self, addr: u16, val: u8) {
        tracing::debug!(addr, val, "write to BIOS ROM dropped");
    }

    fn pages(&self) -> &[u8] {
        &[0, 1, 2, 3]
    }
}

/// Generic cartridge ROM, mapped starting at a configurable byte offset
/// within the cartridge's primary pages (pages 1 and 2 — 0x4000..0xC000 —
/// per spec.md's `-R SLOT:FILE[:OFFSET]` option, default offset 0x4000).
pub struct CartridgeRom {
    data: Vec<u8>,
    offset: u16,
    pages: Vec<u8>,
}

impl CartridgeRom {
    /// `offset` is where page 1 (address 0x4000) starts reading from `data`.
    pub fn new(data: Vec<u8>, offset: u16) -> Self {
        let page_count = (data.len() as u32).div_ceil(0x4000).max(1).min(3) as u8;
        let pages = (1..=page_count).collect();
        Self {
            data,
            offset,
            pages,
        }
    }

    fn index_for(&self, addr: u16) -> usize {
        let page_base = (addr & 0xC000).wrapping_sub(0x4000);
        (self.offset as u32 + page_base as u32 + (addr & 0x3FFF) as u32) as usize
    }
}

impl Device for CartridgeRom {
    fn name(&self) -> &'static str {
        "cartridge ROM"
    }

    fn memory_read(&mut self, addr: u16) -> u8 {
        self.data
            .get(self.index_for(addr))
            .copied()
            .unwrap_or(0xFF)
    }

    fn memory_write(&mut self, addr: u16, val: u8) {
        tracing::debug!(addr, val, "write to cartridge ROM dropped");
    }

    fn pages(&self) -> &[u8] {
        &self.pages
    }
}
