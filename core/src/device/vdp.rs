//! TMS9918/V9938-class video display processor.
//!
//! The register-address latch, data-port read-ahead pipeline, and palette
//! latch all follow the two-byte port protocols of the real chip. The
//! graphics command engine is stepped one pixel (or, for HMMV, one byte) at
//! a time via [`Vdp::do_command_cycle`], the same incremental-progress idiom
//! [`super::fdc::Fdc`] uses for its sector buffer, rather than completing a
//! command in a single call.

use std::time::Instant;

use crate::core::Component;

use super::Device;

const REGISTER_COUNT: usize = 64;
const DEFAULT_VRAM_SIZE: usize = 128 * 1024;

const CMD_LMMC: u8 = 0x0;
const CMD_LINE: u8 = 0x7;
const CMD_LMMM: u8 = 0xB;
const CMD_HMMV: u8 = 0xC;
const CMD_PSET: u8 = 0xF;

const REG_SX_LO: usize = 0x20;
const REG_SX_HI: usize = 0x21;
const REG_SY_LO: usize = 0x22;
const REG_SY_HI: usize = 0x23;
const REG_DX_LO: usize = 0x24;
const REG_DX_HI: usize = 0x25;
const REG_DY_LO: usize = 0x26;
const REG_DY_HI: usize = 0x27;
const REG_NX_LO: usize = 0x28;
const REG_NX_HI: usize = 0x29;
const REG_NY_LO: usize = 0x2A;
const REG_NY_HI: usize = 0x2B;
const REG_COLOR: usize = 0x2C;
const REG_ARG: usize = 0x2D;
const REG_CMD: usize = 0x2E;

#[derive(Default)]
struct CommandEngine {
    opcode: u8,
    sx: u16,
    sy: u16,
    dx: u16,
    dy: u16,
    nx: u16,
    ny: u16,
    arg: u8,
    active: bool,
    cursor_x: i32,
    cursor_y: i32,
    err: i32,
    pixels_left: u32,
}

pub struct Vdp {
    vram: Vec<u8>,
    registers: [u8; REGISTER_COUNT],
    status_registers: [u8; 10],

    rw_pointer: u16,
    read_ahead: u8,
    addr_latch: Option<u8>,

    palette: [(u8, u8, u8); 16],
    palette_latch: Option<u8>,

    cmd: CommandEngine,
    start_time: Instant,
}

impl Vdp {
    pub fn new() -> Self {
        Self {
            vram: vec![0; DEFAULT_VRAM_SIZE],
            registers: [0; REGISTER_COUNT],
            status_registers: [0; 10],
            rw_pointer: 0,
            read_ahead: 0,
            addr_latch: None,
            palette: [(0, 0, 0); 16],
            palette_latch: None,
            cmd: CommandEngine::default(),
            start_time: Instant::now(),
        }
    }

    pub fn with_vram_size(size: usize) -> Self {
        let mut vdp = Self::new();
        vdp.vram = vec![0; size];
        vdp
    }

    pub fn vram(&self) -> &[u8] {
        &self.vram
    }

    /// Mode code assembled from registers 0 and 1, matching the screen
    /// numbers named in the VDP register write protocol table.
    pub fn mode_code(&self) -> u8 {
        let r0 = self.registers[0];
        let r1 = self.registers[1];
        let m1 = r1 & 0x10 != 0;
        let m2 = r1 & 0x08 != 0;
        let m3 = r0 & 0x02 != 0;
        let m4 = r0 & 0x04 != 0;
        let m5 = r0 & 0x08 != 0;
        match (m1, m2, m3, m4, m5) {
            (false, false, false, false, false) => 0,  // Screen 1
            (false, false, true, false, false) => 4,   // Screen 2
            (true, false, false, false, false) => 16,  // Screen 0, 40-col
            (true, true, false, false, false) => 18,   // Screen 0, 80-col
            (false, false, false, false, true) => 6,   // Screen 5
            (false, false, false, true, false) => 1,   // Screen 6
            (false, false, false, true, true) => 5,    // Screen 7
            (false, true, false, true, true) => 7,     // Screen 8
            _ => 0,
        }
    }

    fn vram_addr(&self) -> usize {
        let bank = (self.registers[0x0E] as usize & 0x07) << 14;
        (bank | self.rw_pointer as usize) % self.vram.len().max(1)
    }

    fn advance_pointer(&mut self) {
        self.rw_pointer = self.rw_pointer.wrapping_add(1) & 0x3FFF;
        if self.rw_pointer == 0 {
            self.registers[0x0E] = (self.registers[0x0E].wrapping_add(1)) & 0x07;
        }
    }

    /// Call once per vsync interval (~50 Hz) from the owning machine's frame loop.
    pub fn vsync(&mut self) {
        self.status_registers[0] |= 0x80;
    }

    fn write_register_port(&mut self, v: u8) {
        match self.addr_latch.take() {
            None => self.addr_latch = Some(v),
            Some(latch) => {
                if v & 0x80 != 0 {
                    let reg = (v & 0x3F) as usize;
                    self.registers[reg] = latch;
                    if reg == REG_COLOR {
                        self.feed_lmmc_pixel(latch);
                    } else if reg == REG_CMD {
                        self.start_command(latch >> 4);
                    }
                } else {
                    self.rw_pointer = ((v as u16 & 0x3F) << 8) | latch as u16;
                    let read_mode = v & 0x40 == 0;
                    if read_mode {
                        let addr = self.vram_addr();
                        self.read_ahead = self.vram[addr];
                    }
                }
            }
        }
    }

    fn write_palette_port(&mut self, v: u8) {
        match self.palette_latch.take() {
            None => self.palette_latch = Some(v),
            Some(first) => {
                let idx = (self.registers[0x10] & 0x0F) as usize;
                let scale = |chan: u8| -> u8 { ((chan as u16 * 255 + 3) / 7) as u8 };
                let r = scale((first >> 4) & 0x07);
                let b = scale(first & 0x07);
                let g = scale(v & 0x07);
                self.palette[idx] = (r, g, b);
                self.registers[0x10] = (self.registers[0x10] & 0xF0) | ((idx as u8 + 1) & 0x0F);
            }
        }
    }

    fn write_indirect_register_port(&mut self, v: u8) {
        let idx = self.registers[0x11] & 0x3F;
        self.registers[idx as usize] = v;
        if self.registers[0x11] & 0x80 == 0 {
            let next = (idx + 1) & 0x3F;
            self.registers[0x11] = (self.registers[0x11] & 0x80) | next;
        }
    }

    fn read_status(&mut self) -> u8 {
        self.addr_latch = None;
        let idx = (self.registers[15] & 0x0F) as usize;
        let v = self.status_registers[idx];
        match idx {
            0 => self.status_registers[0] &= !0xA0,
            2 => {
                let elapsed = self.start_time.elapsed().as_secs_f64();
                let vsync_period = 1.0 / 50.0;
                let hsync_period = 1.0 / (228.0 * 50.0);
                let mut s = self.status_registers[2] & !0x60;
                if (elapsed % vsync_period) < vsync_period / 2.0 {
                    s |= 0x40;
                }
                if (elapsed % hsync_period) < hsync_period / 2.0 {
                    s |= 0x20;
                }
                self.status_registers[2] = s;
                return s;
            }
            _ => {}
        }
        v
    }

    fn read_data(&mut self) -> u8 {
        self.addr_latch = None;
        let v = self.read_ahead;
        self.advance_pointer();
        let addr = self.vram_addr();
        self.read_ahead = self.vram[addr];
        v
    }

    fn write_data(&mut self, v: u8) {
        self.addr_latch = None;
        let addr = self.vram_addr();
        self.vram[addr] = v;
        self.read_ahead = v;
        self.advance_pointer();
    }

    fn start_command(&mut self, opcode: u8) {
        let reg16 = |lo: usize, hi: usize, regs: &[u8; REGISTER_COUNT]| -> u16 {
            regs[lo] as u16 | ((regs[hi] as u16) << 8)
        };
        self.cmd.opcode = opcode;
        self.cmd.sx = reg16(REG_SX_LO, REG_SX_HI, &self.registers);
        self.cmd.sy = reg16(REG_SY_LO, REG_SY_HI, &self.registers);
        self.cmd.dx = reg16(REG_DX_LO, REG_DX_HI, &self.registers);
        self.cmd.dy = reg16(REG_DY_LO, REG_DY_HI, &self.registers);
        // Not clamped here: LINE's minor axis (e.g. numberY for a horizontal,
        // X-major line) is legitimately 0, and must stay 0 so the minor axis
        // never steps. Rectangle commands clamp their own dimensions to 1
        // where they turn nx/ny into a pixel count.
        self.cmd.nx = reg16(REG_NX_LO, REG_NX_HI, &self.registers);
        self.cmd.ny = reg16(REG_NY_LO, REG_NY_HI, &self.registers);
        self.cmd.arg = self.registers[REG_ARG];
        self.cmd.cursor_x = 0;
        self.cmd.cursor_y = 0;

        match opcode {
            CMD_LMMC => {
                self.cmd.active = true;
                self.cmd.pixels_left = self.cmd.nx.max(1) as u32 * self.cmd.ny.max(1) as u32;
            }
            CMD_LINE => {
                self.cmd.active = true;
                // Error term starts at major_axis_length / 2; major axis is
                // numberY when MAJ (arg bit 0) is set, else numberX.
                self.cmd.err = if self.cmd.arg & 1 != 0 {
                    self.cmd.ny as i32
                } else {
                    self.cmd.nx as i32
                } / 2;
                self.cmd.pixels_left = if self.cmd.arg & 1 != 0 {
                    self.cmd.ny as u32
                } else {
                    self.cmd.nx as u32
                };
            }
            CMD_LMMM => {
                self.cmd.active = true;
                self.cmd.pixels_left = self.cmd.nx.max(1) as u32 * self.cmd.ny.max(1) as u32;
            }
            CMD_HMMV => {
                self.cmd.active = true;
                self.cmd.pixels_left = self.cmd.nx.max(1) as u32 * self.cmd.ny.max(1) as u32;
            }
            CMD_PSET => {
                self.cmd.active = true;
                self.cmd.pixels_left = 1;
            }
            _ => {
                self.cmd.active = false;
                self.cmd.pixels_left = 0;
            }
        }

        if self.cmd.active {
            self.status_registers[2] |= 0x01;
        }
    }

    fn finish_command(&mut self) {
        self.cmd.active = false;
        self.status_registers[2] &= !0x01;
    }

    /// Advance the active graphics command by one pixel (or one byte for
    /// HMMV). No-op when no command is in progress.
    pub fn do_command_cycle(&mut self) {
        if !self.cmd.active {
            return;
        }

        match self.cmd.opcode {
            CMD_PSET => {
                let color = self.registers[REG_COLOR];
                self.plot_pixel(self.cmd.dx, self.cmd.dy, color, false);
                self.cmd.pixels_left = 0;
            }
            CMD_LMMC => {
                // Driven externally by writes to REG_COLOR; see `feed_lmmc_pixel`.
            }
            CMD_LINE => {
                let color = self.registers[REG_COLOR];
                let x = (self.cmd.dx as i32 + self.cmd.cursor_x) as u16;
                let y = (self.cmd.dy as i32 + self.cmd.cursor_y) as u16;
                self.plot_pixel(x, y, color, false);

                let dir_x: i32 = if self.cmd.arg & 0x04 != 0 { -1 } else { 1 };
                let dir_y: i32 = if self.cmd.arg & 0x08 != 0 { 1 } else { -1 };
                let maj = self.cmd.arg & 1 != 0;
                let nx = self.cmd.nx as i32;
                let ny = self.cmd.ny as i32;

                if maj {
                    self.cmd.cursor_y += dir_y;
                    self.cmd.err -= nx;
                    if self.cmd.err < 0 {
                        self.cmd.cursor_x += dir_x;
                        self.cmd.err += ny;
                    }
                } else {
                    self.cmd.cursor_x += dir_x;
                    self.cmd.err -= ny;
                    if self.cmd.err < 0 {
                        self.cmd.cursor_y += dir_y;
                        self.cmd.err += nx;
                    }
                }
                self.cmd.pixels_left = self.cmd.pixels_left.saturating_sub(1);
            }
            CMD_LMMM => {
                let sx = (self.cmd.sx as i32 + self.cmd.cursor_x) as u16;
                let sy = (self.cmd.sy as i32 + self.cmd.cursor_y) as u16;
                let dx = (self.cmd.dx as i32 + self.cmd.cursor_x) as u16;
                let dy = (self.cmd.dy as i32 + self.cmd.cursor_y) as u16;
                let color = self.read_pixel(sx, sy);
                self.plot_pixel(dx, dy, color, false);
                self.advance_rect_cursor();
                self.cmd.pixels_left = self.cmd.pixels_left.saturating_sub(1);
            }
            CMD_HMMV => {
                let color = self.registers[REG_COLOR];
                let dx = (self.cmd.dx as i32 + self.cmd.cursor_x) as u16;
                let dy = (self.cmd.dy as i32 + self.cmd.cursor_y) as u16;
                self.plot_pixel(dx, dy, color, true);
                self.advance_rect_cursor();
                self.cmd.pixels_left = self.cmd.pixels_left.saturating_sub(1);
            }
            _ => self.cmd.pixels_left = 0,
        }

        if self.cmd.pixels_left == 0 {
            self.finish_command();
        }
    }

    fn advance_rect_cursor(&mut self) {
        self.cmd.cursor_x += 1;
        if self.cmd.cursor_x as u16 >= self.cmd.nx.max(1) {
            self.cmd.cursor_x = 0;
            self.cmd.cursor_y += 1;
        }
    }

    /// Feed one LMMC pixel, called when the host writes the CLR register
    /// (0x2C) directly or through the indirect port while an LMMC command
    /// is in progress.
    fn feed_lmmc_pixel(&mut self, color: u8) {
        if !self.cmd.active || self.cmd.opcode != CMD_LMMC {
            return;
        }
        let x = (self.cmd.dx as i32 + self.cmd.cursor_x) as u16;
        let y = (self.cmd.dy as i32 + self.cmd.cursor_y) as u16;
        self.plot_pixel(x, y, color, false);
        self.advance_rect_cursor();
        self.cmd.pixels_left = self.cmd.pixels_left.saturating_sub(1);
        if self.cmd.pixels_left == 0 {
            self.finish_command();
        }
    }

    fn pixel_offset(mode: u8, x: u16, y: u16) -> Option<(usize, u8, u8)> {
        match mode {
            6 => {
                let off = y as usize * 128 + (x / 2) as usize;
                let shift = if x % 2 == 0 { 4 } else { 0 };
                Some((off, shift, 0x0F))
            }
            1 => {
                let off = y as usize * 128 + (x / 4) as usize;
                let shift = (3 - (x % 4)) as u8 * 2;
                Some((off, shift, 0x03))
            }
            5 => {
                let off = y as usize * 256 + (x / 2) as usize;
                let shift = if x % 2 == 0 { 4 } else { 0 };
                Some((off, shift, 0x0F))
            }
            7 => {
                let off = y as usize * 256 + x as usize;
                Some((off, 0, 0xFF))
            }
            _ => None,
        }
    }

    fn plot_pixel(&mut self, x: u16, y: u16, color: u8, highspeed: bool) {
        let mode = self.mode_code();
        let Some((offset, shift, mask)) = Self::pixel_offset(mode, x, y) else {
            return;
        };
        if offset >= self.vram.len() {
            return;
        }
        if highspeed || mask == 0xFF {
            self.vram[offset] = color;
        } else {
            let cur = self.vram[offset];
            self.vram[offset] = (cur & !(mask << shift)) | ((color & mask) << shift);
        }
    }

    fn read_pixel(&self, x: u16, y: u16) -> u8 {
        let mode = self.mode_code();
        let Some((offset, shift, mask)) = Self::pixel_offset(mode, x, y) else {
            return 0;
        };
        if offset >= self.vram.len() {
            return 0;
        }
        (self.vram[offset] >> shift) & mask
    }

    pub fn palette(&self) -> &[(u8, u8, u8); 16] {
        &self.palette
    }

    /// Pixel resolution of the currently selected video mode.
    pub fn display_size(&self) -> (u32, u32) {
        match self.mode_code() {
            1 | 5 => (512, 212),
            6 | 7 => (256, 212),
            18 => (512, 192),
            _ => (256, 192),
        }
    }

    /// Render the current frame as packed RGB24 into `buf`
    /// (`width * height * 3` bytes, row-major).
    pub fn render_frame(&self, buf: &mut [u8]) {
        let (width, height) = self.display_size();
        match self.mode_code() {
            6 | 1 | 5 => self.render_bitmap(buf, width, height),
            7 => self.render_screen8(buf, width, height),
            4 => self.render_graphics2(buf),
            16 | 18 => self.render_text(buf, width),
            _ => self.render_graphics1(buf),
        }
        if matches!(self.mode_code(), 0 | 4) {
            self.render_sprites(buf, width);
        }
    }

    fn render_bitmap(&self, buf: &mut [u8], width: u32, height: u32) {
        for y in 0..height {
            for x in 0..width {
                let idx = self.read_pixel(x as u16, y as u16);
                let (r, g, b) = self.palette[(idx & 0x0F) as usize];
                let o = ((y * width + x) * 3) as usize;
                if o + 2 < buf.len() {
                    buf[o] = r;
                    buf[o + 1] = g;
                    buf[o + 2] = b;
                }
            }
        }
    }

    fn render_screen8(&self, buf: &mut [u8], width: u32, height: u32) {
        for y in 0..height {
            for x in 0..width {
                let val = self.read_pixel(x as u16, y as u16);
                let r = (val >> 5) & 0x07;
                let g = (val >> 2) & 0x07;
                let b = val & 0x03;
                let o = ((y * width + x) * 3) as usize;
                if o + 2 < buf.len() {
                    buf[o] = ((r as u16 * 255 + 3) / 7) as u8;
                    buf[o + 1] = ((g as u16 * 255 + 3) / 7) as u8;
                    buf[o + 2] = ((b as u16 * 255 + 1) / 3) as u8;
                }
            }
        }
    }

    /// Screen 1 (Graphics 1): 32x24 tiles, colors shared per 8-character band.
    fn render_graphics1(&self, buf: &mut [u8]) {
        let name_base = ((self.registers[2] as usize) & 0x0F) << 10;
        let pattern_base = ((self.registers[4] as usize) & 0x07) << 11;
        let color_base = (self.registers[3] as usize) << 6;
        for ty in 0..24usize {
            for tx in 0..32usize {
                let name = self.vram[name_base + ty * 32 + tx] as usize;
                let color_byte = self.vram[(color_base + name / 8) % self.vram.len()];
                let fg = (color_byte >> 4) & 0x0F;
                let bg = color_byte & 0x0F;
                for row in 0..8usize {
                    let pat = self.vram[(pattern_base + name * 8 + row) % self.vram.len()];
                    for col in 0..8usize {
                        let bit = (pat >> (7 - col)) & 1;
                        let idx = if bit != 0 { fg } else { bg };
                        let (r, g, b) = self.palette[idx as usize];
                        let px = tx * 8 + col;
                        let py = ty * 8 + row;
                        let o = (py * 256 + px) * 3;
                        if o + 2 < buf.len() {
                            buf[o] = r;
                            buf[o + 1] = g;
                            buf[o + 2] = b;
                        }
                    }
                }
            }
        }
    }

    /// Screen 2 (Graphics 2): as Graphics 1, but pattern/color tables are
    /// banked per third of the screen (one 2KiB bank per 8 tile rows).
    fn render_graphics2(&self, buf: &mut [u8]) {
        let name_base = ((self.registers[2] as usize) & 0x0F) << 10;
        let pattern_base = ((self.registers[4] as usize) & 0x04) << 11;
        let color_base = ((self.registers[3] as usize) & 0x80) << 6;
        for ty in 0..24usize {
            let third = (ty / 8) * 2048;
            for tx in 0..32usize {
                let name = self.vram[name_base + ty * 32 + tx] as usize;
                for row in 0..8usize {
                    let pat = self.vram[(pattern_base + third + name * 8 + row) % self.vram.len()];
                    let color_byte =
                        self.vram[(color_base + third + name * 8 + row) % self.vram.len()];
                    let fg = (color_byte >> 4) & 0x0F;
                    let bg = color_byte & 0x0F;
                    for col in 0..8usize {
                        let bit = (pat >> (7 - col)) & 1;
                        let idx = if bit != 0 { fg } else { bg };
                        let (r, g, b) = self.palette[idx as usize];
                        let px = tx * 8 + col;
                        let py = ty * 8 + row;
                        let o = (py * 256 + px) * 3;
                        if o + 2 < buf.len() {
                            buf[o] = r;
                            buf[o + 1] = g;
                            buf[o + 2] = b;
                        }
                    }
                }
            }
        }
    }

    /// Screen 0 (Text 1/Text 2): pattern table only, fixed fg/bg from register 7.
    fn render_text(&self, buf: &mut [u8], width: u32) {
        let cols = (width / 6) as usize;
        let name_base = ((self.registers[2] as usize) & 0x0F) << 10;
        let pattern_base = ((self.registers[4] as usize) & 0x07) << 11;
        let fg = (self.registers[7] >> 4) & 0x0F;
        let bg = self.registers[7] & 0x0F;
        for ty in 0..24usize {
            for tx in 0..cols {
                let name = self.vram[name_base + ty * cols + tx] as usize;
                for row in 0..8usize {
                    let pat = self.vram[(pattern_base + name * 8 + row) % self.vram.len()];
                    for col in 0..6usize {
                        let bit = (pat >> (7 - col)) & 1;
                        let idx = if bit != 0 { fg } else { bg };
                        let (r, g, b) = self.palette[idx as usize];
                        let px = tx * 6 + col;
                        let py = ty * 8 + row;
                        let o = (py as u32 * width + px as u32) as usize * 3;
                        if o + 2 < buf.len() {
                            buf[o] = r;
                            buf[o + 1] = g;
                            buf[o + 2] = b;
                        }
                    }
                }
            }
        }
    }

    /// Up to 32 sprites, 8x8 or 16x16, composited over the tile renderers.
    fn render_sprites(&self, buf: &mut [u8], width: u32) {
        let attr_base = ((self.registers[5] as usize) & 0x7F) << 7;
        let pattern_base = (self.registers[6] as usize) << 11;
        let size16 = self.registers[1] & 0x02 != 0;
        let size = if size16 { 16 } else { 8 };

        for i in 0..32 {
            let a = attr_base + i * 4;
            if a + 3 >= self.vram.len() {
                break;
            }
            let y = self.vram[a];
            if y == 0xD0 {
                break;
            }
            let x = self.vram[a + 1] as i32;
            let pattern = self.vram[a + 2] as usize;
            let color_byte = self.vram[a + 3];
            let early_clock = color_byte & 0x80 != 0;
            let color = color_byte & 0x0F;
            if color == 0 {
                continue;
            }
            let x = if early_clock { x - 32 } else { x };
            let py_base = y as i32 + 1;

            for ry in 0..size {
                for rx in 0..size {
                    let (pat_index, row, col) = if size16 {
                        let quad = (pattern & 0xFC) + (rx / 8) * 2 + (ry / 8);
                        (quad, ry % 8, rx % 8)
                    } else {
                        (pattern, ry, rx)
                    };
                    let addr = pattern_base + pat_index * 8 + row;
                    if addr >= self.vram.len() {
                        continue;
                    }
                    let bit = (self.vram[addr] >> (7 - col)) & 1;
                    if bit == 0 {
                        continue;
                    }
                    let px = x + rx as i32;
                    let py = py_base + ry as i32;
                    if px < 0 || py < 0 {
                        continue;
                    }
                    let (r, g, b) = self.palette[color as usize];
                    let o = (py as u32 * width + px as u32) as usize * 3;
                    if o + 2 < buf.len() {
                        buf[o] = r;
                        buf[o + 1] = g;
                        buf[o + 2] = b;
                    }
                }
            }
        }
    }
}

impl Default for Vdp {
    fn default() -> Self {
        Self::new()
    }
}

impl Device for Vdp {
    fn name(&self) -> &'static str {
        "TMS9918/V9938 VDP"
    }

    fn io_read(&mut self, port: u8) -> u8 {
        match port {
            0x98 => self.read_data(),
            0x99 => self.read_status(),
            _ => 0xFF,
        }
    }

    fn io_write(&mut self, port: u8, val: u8) {
        match port {
            0x98 => self.write_data(val),
            0x99 => self.write_register_port(val),
            0x9A => self.write_palette_port(val),
            0x9B => {
                let idx = self.registers[0x11] & 0x3F;
                self.write_indirect_register_port(val);
                if idx as usize == REG_COLOR {
                    self.feed_lmmc_pixel(val);
                } else if idx as usize == REG_CMD {
                    self.start_command(val >> 4);
                }
            }
            _ => {}
        }
    }

    fn io_ports(&self) -> &[u8] {
        &[0x98, 0x99, 0x9A, 0x9B]
    }

    fn wants_irq(&self) -> bool {
        self.status_registers[0] & 0x80 != 0 && self.registers[1] & 0x20 != 0
    }
}

impl Component for Vdp {
    fn tick(&mut self) -> bool {
        if self.cmd.active {
            self.do_command_cycle();
        }
        false
    }
}
