use std::path::PathBuf;
use thiserror::Error;

/// Errors from the window host. The knob itself never fails.
#[derive(Debug, Error)]
pub enum KnobError {
    #[error("Event loop failed: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("Window creation failed: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("Pixel surface error: {0}")]
    Pixels(#[from] pixels::Error),
    #[error("Failed to read font {path:?}: {source}")]
    FontRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Not a usable font file: {path:?}")]
    FontParse { path: PathBuf },
    #[error("No font found in any of the fallback locations")]
    NoFont,
}

/// Result type for knob host operations.
pub type KnobResult<T> = Result<T, KnobError>;
