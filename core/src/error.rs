//! Error types for core device and CPU construction.

/// Errors that can occur constructing or loading data into a core device.
#[derive(Debug)]
pub enum CoreError {
    /// Underlying I/O error (disk image or ROM file not found, etc.)
    Io(std::io::Error),

    /// A ROM image's size does not match what the device expects.
    InvalidRomSize { expected: usize, actual: usize },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::InvalidRomSize { expected, actual } => {
                write!(f, "expected ROM of {expected} bytes, got {actual}")
            }
        }
    }
}

impl std::error::Error for CoreError {}

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
