//! Command-line configuration: one `clap::Parser` derive mirroring the
//! options a real MSX front panel would expose (which BIOS to boot, which
//! cartridges/disks/peripherals to install in which slot).

use std::path::PathBuf;

use clap::Parser;

use crate::error::FrontendError;

#[derive(Parser, Debug)]
#[command(name = "msx-emu", about = "MSX-compatible home computer emulator")]
pub struct Cli {
    /// BIOS/BASIC ROM image, mapped flat across all four pages of primary slot 0.
    #[arg(short = 'b', long = "bios")]
    pub bios: PathBuf,

    /// Install a generic ROM: SLOT:FILE[:OFFSET] (OFFSET is hex, default 0x4000).
    #[arg(short = 'R', long = "rom", value_name = "SLOT:FILE[:OFFSET]")]
    pub roms: Vec<String>,

    /// Install an SCC-ROM cartridge: SLOT:FILE.
    #[arg(short = 'S', long = "scc", value_name = "SLOT:FILE")]
    pub sccs: Vec<String>,

    /// Install a disk-controller ROM backed by a disk image: SLOT:FILE:IMAGE.
    #[arg(short = 'D', long = "disk", value_name = "SLOT:FILE:IMAGE")]
    pub disks: Vec<String>,

    /// Install an IDE-controller ROM backed by a disk image: SLOT:FILE:IMAGE.
    #[arg(short = 'I', long = "ide", value_name = "SLOT:FILE:IMAGE")]
    pub ides: Vec<String>,

    /// Cassette image to stream-load on demand.
    #[arg(short = 'C', long = "cassette")]
    pub cassette: Option<PathBuf>,

    /// Debug log file path, in addition to stderr.
    #[arg(short = 'l', long = "log")]
    pub log: Option<PathBuf>,

    /// Window scale factor.
    #[arg(long, default_value_t = 3)]
    pub scale: u32,

    /// RAM mapper segment count (16 KiB each).
    #[arg(long = "mapper-segments", default_value_t = 64)]
    pub mapper_segments: usize,
}

/// A parsed `SLOT:FILE[:EXTRA]` specification.
pub struct SlotSpec {
    pub slot: u8,
    pub file: PathBuf,
    pub extra: Option<String>,
}

/// Parse a `-R`/`-S`/`-D`/`-I`-style slot specification.
pub fn parse_slot_spec(spec: &str) -> Result<SlotSpec, FrontendError> {
    let mut parts = spec.splitn(3, ':');
    let slot = parts
        .next()
        .ok_or_else(|| FrontendError::BadSlotSpec(spec.to_string()))?;
    let file = parts
        .next()
        .ok_or_else(|| FrontendError::BadSlotSpec(spec.to_string()))?;
    let extra = parts.next().map(str::to_string);

    let slot: u8 = slot
        .parse()
        .map_err(|_| FrontendError::BadSlotSpec(spec.to_string()))?;
    if slot > 3 {
        return Err(FrontendError::BadSlotSpec(spec.to_string()));
    }

    Ok(SlotSpec {
        slot,
        file: PathBuf::from(file),
        extra,
    })
}

/// Parse the `OFFSET` suffix of a `-R SLOT:FILE[:OFFSET]` spec (hex, no `0x` prefix required).
pub fn parse_offset(extra: Option<&str>) -> Result<u16, FrontendError> {
    match extra {
        None => Ok(0x4000),
        Some(s) => u16::from_str_radix(s.trim_start_matches("0x"), 16)
            .map_err(|_| FrontendError::BadSlotSpec(s.to_string())),
    }
}
