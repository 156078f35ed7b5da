//! Errors surfaced from CLI parsing and machine assembly up to `main`.

use msx_machines::error::MachineError;

#[derive(Debug)]
pub enum FrontendError {
    /// A `-R`/`-S`/`-D`/`-I` slot specification could not be parsed.
    BadSlotSpec(String),

    /// A ROM, disk, or cassette image could not be read.
    Io(String),

    /// Underlying machine/device construction error.
    Machine(MachineError),

    /// SDL2 failed to initialize the window, audio, or event subsystem.
    Sdl(String),
}

impl std::fmt::Display for FrontendError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BadSlotSpec(s) => write!(f, "invalid slot specification: {s}"),
            Self::Io(s) => write!(f, "{s}"),
            Self::Machine(e) => write!(f, "{e}"),
            Self::Sdl(e) => write!(f, "SDL2 error: {e}"),
        }
    }
}

impl std::error::Error for FrontendError {}

impl From<MachineError> for FrontendError {
    fn from(e: MachineError) -> Self {
        Self::Machine(e)
    }
}
