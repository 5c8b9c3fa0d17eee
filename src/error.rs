//! Error type shared by the renderer and its output writers.
//!
//! Absorbed rays and exhausted bounce budgets are ordinary outcomes of the
//! integrator and never show up here.

use std::fmt;

/// Everything that can stop a render from being set up or saved.
#[derive(Debug)]
pub enum RenderError {
    /// A render or camera setting is out of its valid range.
    InvalidSettings(String),
    /// The camera basis cannot be built without normalizing a zero vector.
    DegenerateCamera(&'static str),
    /// The output path has an extension no writer handles.
    UnsupportedFormat(String),
    /// Writing the output failed.
    Io(std::io::Error),
    /// The image encoder failed.
    Image(image::ImageError),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::InvalidSettings(msg) => write!(f, "invalid settings: {msg}"),
            RenderError::DegenerateCamera(msg) => write!(f, "degenerate camera: {msg}"),
            RenderError::UnsupportedFormat(ext) => {
                write!(f, "unsupported output format '{ext}' (use .ppm, .png, .jpg or .bmp)")
            }
            RenderError::Io(e) => write!(f, "i/o error: {e}"),
            RenderError::Image(e) => write!(f, "image encoding error: {e}"),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Io(e) => Some(e),
            RenderError::Image(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RenderError {
    fn from(e: std::io::Error) -> Self {
        RenderError::Io(e)
    }
}

impl From<image::ImageError> for RenderError {
    fn from(e: image::ImageError) -> Self {
        RenderError::Image(e)
    }
}
