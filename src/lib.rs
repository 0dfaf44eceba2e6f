// A circle that follows the pointer and grows by one pixel every frame,
// drawn into a software framebuffer and shown in a minifb window.

pub mod config;
pub mod draw;
pub mod error;
pub mod graphics;
pub mod runtime;
pub mod sketch;
pub mod types;

pub use config::Conf;
pub use error::Error;
pub use graphics::{Canvas, Graphics};
pub use runtime::Runtime;
pub use sketch::{GrowingCircle, Sketch};
pub use types::{FrameBuffer, Pointer, Rgb, Style};
