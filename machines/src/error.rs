//! Error types for MSX machine construction and configuration.

use msx_core::error::CoreError;

/// Errors that can occur assembling an MSX system from its configured slots.
#[derive(Debug)]
pub enum MachineError {
    /// Underlying device construction error (ROM size, disk image I/O, ...).
    Device(CoreError),

    /// A `-S`/`-R`/`-D`-style slot specification could not be parsed.
    InvalidSlotSpec(String),

    /// A primary slot/subslot index named in a specification is out of range.
    SlotOutOfRange { slot: u8, subslot: u8 },
}

impl std::fmt::Display for MachineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Device(e) => write!(f, "device error: {e}"),
            Self::InvalidSlotSpec(s) => write!(f, "invalid slot specification: {s}"),
            Self::SlotOutOfRange { slot, subslot } => {
                write!(f, "slot {slot}/{subslot} out of range (0-3/0-3)")
            }
        }
    }
}

impl std::error::Error for MachineError {}

impl From<CoreError> for MachineError {
    fn from(e: CoreError) -> Self {
        Self::Device(e)
    }
}
