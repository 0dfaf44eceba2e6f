// Crate error type. Every variant states *where* things went wrong.
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Creating the window failed
    #[error("Window init error: {0}")]
    WindowInit(String),
    /// Updating the window buffer failed
    #[error("Window update error: {0}")]
    WindowUpdate(String),
    /// A canvas was requested with a zero dimension
    #[error("Invalid canvas size {width}x{height}")]
    InvalidCanvas { width: usize, height: usize },
    /// The surface is too large to encode as an image
    #[error("Surface {width}x{height} exceeds image limits")]
    SurfaceTooLarge { width: usize, height: usize },
    /// Encoding or writing a frame snapshot failed
    #[error("Snapshot error ({}): {source}", .path.display())]
    Snapshot {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    /// Command-line flags could not be parsed
    #[error("Invalid arguments: {0}")]
    InvalidArgs(String),
}
