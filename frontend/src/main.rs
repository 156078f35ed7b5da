use std::path::PathBuf;
use std::sync::Mutex;

use clap::Parser;

use msx_core::device::{BiosRom, CartridgeRom, Fdc, IdeController, MemoryMapper, Nms1205, Rtc, Scc};
use msx_core::prelude::Machine;
use msx_machines::msx::{CPU_CLOCK_HZ, MsxBus, MsxSystem};

mod audio;
mod cli;
mod emulator;
mod error;
mod input;
mod video;

use cli::{Cli, parse_offset, parse_slot_spec};
use error::FrontendError;

/// Conventional SCC wavetable register window base address.
const SCC_BASE: u16 = 0x9800;
/// Conventional Sunrise IDE task-file base port.
const IDE_BASE_PORT: u8 = 0x10;
/// Primary slot the RAM mapper is installed into when none is specified.
const MAPPER_SLOT: u8 = 3;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log.as_deref());

    let mut system = match build_system(&cli) {
        Ok(system) => system,
        Err(e) => {
            eprintln!("msx-emu: {e}");
            std::process::exit(1);
        }
    };

    if let Some(cassette) = &cli.cassette {
        match std::fs::read(cassette) {
            Ok(data) => system.load_cassette(&data, 0x8000),
            Err(e) => {
                eprintln!("msx-emu: failed to read cassette image: {e}");
                std::process::exit(1);
            }
        }
    }

    let key_map = input::default_key_map(system.input_map());
    system.reset();
    emulator::run(&mut system, &key_map, cli.scale);
}

fn init_logging(log_path: Option<&std::path::Path>) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    match log_path {
        Some(path) => match std::fs::File::create(path) {
            Ok(file) => tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .init(),
            Err(e) => {
                eprintln!("msx-emu: failed to open log file {}: {e}", path.display());
                tracing_subscriber::fmt().with_env_filter(filter).init();
            }
        },
        None => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
}

fn build_system(cli: &Cli) -> Result<MsxSystem, FrontendError> {
    let mut bus = MsxBus::new();

    let bios_data = std::fs::read(&cli.bios)
        .map_err(|e| FrontendError::Io(format!("BIOS {}: {e}", cli.bios.display())))?;
    bus.install(0, 0, Box::new(BiosRom::new(bios_data)));

    for spec in &cli.roms {
        let slot = parse_slot_spec(spec)?;
        let offset = parse_offset(slot.extra.as_deref())?;
        let data = read_file(&slot.file)?;
        bus.install(slot.slot, 0, Box::new(CartridgeRom::new(data, offset)));
    }

    for spec in &cli.sccs {
        let slot = parse_slot_spec(spec)?;
        let rom = read_file(&slot.file)?;
        bus.install(slot.slot, 0, Box::new(Scc::new(rom, SCC_BASE, CPU_CLOCK_HZ)));
    }

    for spec in &cli.disks {
        let slot = parse_slot_spec(spec)?;
        let rom = read_file(&slot.file)?;
        let image = slot.extra.as_ref().map(PathBuf::from);
        let fdc = Fdc::new(rom, image.as_deref())
            .map_err(|e| FrontendError::Io(format!("disk image: {e}")))?;
        bus.install(slot.slot, 0, Box::new(fdc));
    }

    for spec in &cli.ides {
        let slot = parse_slot_spec(spec)?;
        let rom = read_file(&slot.file)?;
        let image = slot.extra.as_ref().map(PathBuf::from);
        let ide = IdeController::new(rom, IDE_BASE_PORT, image.as_deref())
            .map_err(|e| FrontendError::Io(format!("IDE image: {e}")))?;
        bus.install(slot.slot, 0, Box::new(ide));
    }

    bus.install(MAPPER_SLOT, 0, Box::new(MemoryMapper::new(cli.mapper_segments)));
    bus.install(0, 0, Box::new(Rtc::new()));
    bus.install(0, 0, Box::new(Nms1205::new(CPU_CLOCK_HZ)));

    Ok(MsxSystem::new(bus))
}

fn read_file(path: &std::path::Path) -> Result<Vec<u8>, FrontendError> {
    std::fs::read(path).map_err(|e| FrontendError::Io(format!("{}: {e}", path.display())))
}
