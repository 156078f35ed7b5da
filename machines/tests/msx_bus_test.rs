//! Bus-level invariants: RAM read/write round trips, the 0xA8 primary slot
//! register, and the 0xFFFF subslot-complement register.

use msx_core::core::{Bus, BusMaster};
use msx_core::device::MemoryMapper;
use msx_machines::msx::MsxBus;

const CPU: BusMaster = BusMaster::Cpu(0);

fn mapper_bus() -> MsxBus {
    let mut bus = MsxBus::new();
    bus.install(3, 0, Box::new(MemoryMapper::new(4)));
    bus.io_write(CPU, 0xA8, 0b11_11_11_11); // page all four pages into slot 3
    bus
}

#[test]
fn ram_backed_pages_round_trip_every_byte_value() {
    let mut bus = mapper_bus();
    for addr in [0x0000u16, 0x4000, 0x8000, 0xC000, 0xFFFE] {
        for val in [0x00u8, 0x55, 0xAA, 0xFF] {
            bus.write(CPU, addr, val);
            assert_eq!(bus.read(CPU, addr), val, "addr {addr:#06x} val {val:#04x}");
        }
    }
}

#[test]
fn port_0xa8_round_trips_the_slot_select_byte() {
    let mut bus = MsxBus::new();
    for byte in [0x00u8, 0x1B, 0xE4, 0xFF] {
        bus.io_write(CPU, 0xA8, byte);
        assert_eq!(bus.io_read(CPU, 0xA8), byte);
    }
}

#[test]
fn port_0xffff_reads_back_the_bitwise_complement_of_the_subslot_register() {
    let mut bus = MsxBus::new();
    // Installing a device at a non-zero subslot marks primary slot 3 as subslotted.
    bus.install(3, 1, Box::new(MemoryMapper::new(4)));
    bus.io_write(CPU, 0xA8, 0b11_00_00_00); // page 3 (top page) = primary slot 3

    bus.write(CPU, 0xFFFF, 0x5A);
    assert_eq!(bus.read(CPU, 0xFFFF), !0x5Au8);
}

#[test]
fn uninstalled_page_reads_the_floating_bus_value() {
    let mut bus = MsxBus::new();
    assert_eq!(bus.read(CPU, 0x0000), 0xEE);
}
