//! MSX slot/subslot memory bus and system, wiring the Z80 CPU, VDP, and
//! configurable peripheral devices together behind four 16KiB pages, each
//! independently backed by one of four slots (themselves optionally
//! subslotted into four more), instead of a single flat address map.

use msx_core::core::bus::InterruptState;
use msx_core::core::machine::{InputButton, Machine};
use msx_core::core::{Bus, BusMaster, BusMasterComponent, Component};
use msx_core::cpu::state::Z80State;
use msx_core::cpu::{Cpu, CpuStateTrait, z80::Z80};
use msx_core::device::Device;
use msx_core::device::Vdp;

/// Z80 clock rate of a PAL MSX, in Hz.
pub const CPU_CLOCK_HZ: u64 = 3_579_545;
/// VDP vsync rate (PAL), in Hz.
const FRAME_RATE_HZ: u64 = 50;
const CYCLES_PER_FRAME: u64 = CPU_CLOCK_HZ / FRAME_RATE_HZ;

const INPUT_KEY_BASE: u8 = 0;

/// Keyboard-matrix rows. Button IDs passed to `set_input` are `row * 8 + col`;
/// only the commonly used key positions are named in `input_map`, but any
/// row/column pair in range can be driven directly.
const KEYBOARD_ROWS: usize = 16;

const MSX_INPUT_MAP: &[InputButton] = &[
    InputButton {
        id: key_input_const(7, 0),
        name: "Space",
    },
    InputButton {
        id: key_input_const(7, 1),
        name: "Home",
    },
    InputButton {
        id: key_input_const(7, 6),
        name: "Up",
    },
    InputButton {
        id: key_input_const(7, 7),
        name: "Down",
    },
    InputButton {
        id: key_input_const(6, 7),
        name: "Left",
    },
    InputButton {
        id: key_input_const(6, 6),
        name: "Right",
    },
    InputButton {
        id: key_input_const(4, 7),
        name: "Enter",
    },
    InputButton {
        id: key_input_const(6, 5),
        name: "Escape",
    },
];

const fn key_input_const(row: u8, col: u8) -> u8 {
    INPUT_KEY_BASE + row * 8 + col
}

/// A device installed at a specific primary slot / subslot.
struct InstalledDevice {
    slot: u8,
    subslot: u8,
    device: Box<dyn Device>,
}

/// The slot/subslot-switched memory bus plus I/O-mapped peripherals.
pub struct MsxBus {
    devices: Vec<InstalledDevice>,
    vdp: Vdp,

    /// Primary slot currently paged into each of the four 16 KiB pages.
    primary_slot_select: [u8; 4],
    /// One subslot-select byte per primary slot (2 bits per page), exposed
    /// at address 0xFFFF (complemented on read) when that slot has subslots.
    subslot_select: [u8; 4],
    slot_has_subslots: [bool; 4],

    keyboard_row: u8,
    keyboard_matrix: [u8; KEYBOARD_ROWS],
}

impl MsxBus {
    pub fn new() -> Self {
        Self {
            devices: Vec::new(),
            vdp: Vdp::new(),
            primary_slot_select: [0; 4],
            subslot_select: [0; 4],
            slot_has_subslots: [false; 4],
            keyboard_row: 0,
            keyboard_matrix: [0xFF; KEYBOARD_ROWS],
        }
    }

    pub fn vdp(&self) -> &Vdp {
        &self.vdp
    }

    pub fn vdp_mut(&mut self) -> &mut Vdp {
        &mut self.vdp
    }

    /// Install a device into a primary slot / subslot. Marks the primary
    /// slot as subslotted if `subslot != 0`.
    pub fn install(&mut self, slot: u8, subslot: u8, device: Box<dyn Device>) {
        if subslot != 0 {
            self.slot_has_subslots[slot as usize] = true;
        }
        self.devices.push(InstalledDevice {
            slot,
            subslot,
            device,
        });
    }

    pub fn set_keyboard_key(&mut self, row: usize, col: u8, pressed: bool) {
        if row >= KEYBOARD_ROWS {
            return;
        }
        if pressed {
            self.keyboard_matrix[row] &= !(1 << col);
        } else {
            self.keyboard_matrix[row] |= 1 << col;
        }
    }

    fn active_subslot(&self, primary: u8, page: u8) -> u8 {
        if self.slot_has_subslots[primary as usize] {
            (self.subslot_select[primary as usize] >> (page * 2)) & 0x03
        } else {
            0
        }
    }

    fn device_for_page(&mut self, page: u8) -> Option<&mut Box<dyn Device>> {
        let primary = self.primary_slot_select[page as usize];
        let sub = self.active_subslot(primary, page);
        self.devices
            .iter_mut()
            .find(|d| d.slot == primary && d.subslot == sub && d.device.pages().contains(&page))
            .map(|d| &mut d.device)
    }

    /// Advance the VDP command engine and every device's audio-producing
    /// state by one CPU clock cycle.
    fn tick_peripherals(&mut self) {
        self.vdp.tick();
        for d in self.devices.iter_mut() {
            d.device.tick();
        }
    }

    /// Mix each installed device's resampled audio output into `out`.
    pub fn fill_audio(&mut self, out: &mut [i16]) {
        out.fill(0);
        let mut scratch = vec![0i16; out.len()];
        for d in self.devices.iter_mut() {
            scratch.fill(0);
            let n = d.device.fill_audio(&mut scratch);
            for i in 0..n {
                out[i] = out[i].saturating_add(scratch[i]);
            }
        }
    }
}

impl Default for MsxBus {
    fn default() -> Self {
        Self::new()
    }
}

impl Bus for MsxBus {
    type Address = u16;
    type Data = u8;

    fn read(&mut self, _master: BusMaster, addr: u16) -> u8 {
        let page = (addr >> 14) as u8;
        let primary = self.primary_slot_select[page as usize];

        if addr == 0xFFFF && self.slot_has_subslots[primary as usize] {
            return !self.subslot_select[primary as usize];
        }

        match self.device_for_page(page) {
            Some(device) => device.memory_read(addr),
            None => 0xEE,
        }
    }

    fn write(&mut self, _master: BusMaster, addr: u16, data: u8) {
        let page = (addr >> 14) as u8;
        let primary = self.primary_slot_select[page as usize];

        if addr == 0xFFFF && self.slot_has_subslots[primary as usize] {
            self.subslot_select[primary as usize] = data;
            return;
        }

        if let Some(device) = self.device_for_page(page) {
            device.memory_write(addr, data);
        }
    }

    fn io_read(&mut self, _master: BusMaster, addr: u16) -> u8 {
        let port = addr as u8;
        match port {
            0x98..=0x9B => self.vdp.io_read(port),
            0xA8 => {
                self.primary_slot_select[0]
                    | (self.primary_slot_select[1] << 2)
                    | (self.primary_slot_select[2] << 4)
                    | (self.primary_slot_select[3] << 6)
            }
            0xA9 => self.keyboard_matrix[self.keyboard_row as usize],
            _ => {
                for d in self.devices.iter_mut() {
                    if d.device.io_ports().contains(&port) {
                        return d.device.io_read(port);
                    }
                }
                0xFF
            }
        }
    }

    fn io_write(&mut self, _master: BusMaster, addr: u16, data: u8) {
        let port = addr as u8;
        match port {
            0x98..=0x9B => self.vdp.io_write(port, data),
            0xA8 => {
                self.primary_slot_select = [
                    data & 0x03,
                    (data >> 2) & 0x03,
                    (data >> 4) & 0x03,
                    (data >> 6) & 0x03,
                ];
            }
            0xAA => self.keyboard_row = data & 0x0F,
            _ => {
                for d in self.devices.iter_mut() {
                    if d.device.io_ports().contains(&port) {
                        d.device.io_write(port, data);
                        return;
                    }
                }
            }
        }
    }

    fn is_halted_for(&self, _master: BusMaster) -> bool {
        false
    }

    fn check_interrupts(&self, _target: BusMaster) -> InterruptState {
        let mut irq = self.vdp.wants_irq();
        let mut vector = self.vdp.irq_vector();
        let mut nmi = false;
        for d in &self.devices {
            if d.device.wants_nmi() {
                nmi = true;
            }
            if d.device.wants_irq() && !irq {
                irq = true;
                vector = d.device.irq_vector();
            }
        }
        InterruptState { nmi, irq, irq_vector: vector }
    }
}

/// A complete MSX machine: the slot/subslot bus plus a running Z80.
pub struct MsxSystem {
    cpu: Z80,
    bus: MsxBus,
    clock: u64,
}

impl MsxSystem {
    pub fn new(bus: MsxBus) -> Self {
        Self {
            cpu: Z80::new(),
            bus,
            clock: 0,
        }
    }

    pub fn bus(&self) -> &MsxBus {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut MsxBus {
        &mut self.bus
    }

    pub fn get_cpu_state(&self) -> Z80State {
        self.cpu.snapshot()
    }

    /// Stream a cassette image's bytes into RAM starting at `load_addr` and
    /// point the program counter at them, matching the "loading writes bytes
    /// into RAM and sets PC" cassette semantics.
    pub fn load_cassette(&mut self, data: &[u8], load_addr: u16) {
        for (i, byte) in data.iter().enumerate() {
            let addr = load_addr.wrapping_add(i as u16);
            self.bus.write(BusMaster::Cpu(0), addr, *byte);
        }
        self.cpu.pc = load_addr;
    }

    pub fn tick(&mut self) {
        self.cpu.tick_with_bus(&mut self.bus, BusMaster::Cpu(0));
        self.bus.tick_peripherals();
        self.clock += 1;
    }

    /// Mix the current frame's audio output into `out` (44.1 kHz, mono, i16).
    pub fn fill_audio(&mut self, out: &mut [i16]) {
        self.bus.fill_audio(out);
    }
}

impl Machine for MsxSystem {
    fn display_size(&self) -> (u32, u32) {
        self.bus.vdp.display_size()
    }

    fn run_frame(&mut self) {
        for _ in 0..CYCLES_PER_FRAME {
            self.tick();
        }
        self.bus.vdp_mut().vsync();
    }

    fn render_frame(&self, buffer: &mut [u8]) {
        self.bus.vdp.render_frame(buffer);
    }

    fn set_input(&mut self, button: u8, pressed: bool) {
        let row = (button / 8) as usize;
        let col = button % 8;
        self.bus.set_keyboard_key(row, col, pressed);
    }

    fn input_map(&self) -> &[InputButton] {
        MSX_INPUT_MAP
    }

    fn reset(&mut self) {
        self.cpu.reset();
        self.clock = 0;
    }
}
