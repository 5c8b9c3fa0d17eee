//! # Output Module
//!
//! Hands rendered 8-bit images to an encoder:
//! - Plain-text PPM (`P3`), written directly
//! - PNG, JPEG and BMP through the `image` crate

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::{ImageFormat, RgbImage};
use log::info;

use crate::error::RenderError;

/// Write `image` as ASCII PPM: header, then one `r g b` line per pixel in scan order.
pub fn write_ppm<W: Write>(mut out: W, image: &RgbImage) -> Result<(), RenderError> {
    let (width, height) = image.dimensions();
    writeln!(out, "P3\n{width} {height}\n255")?;
    for pixel in image.pixels() {
        writeln!(out, "{} {} {}", pixel[0], pixel[1], pixel[2])?;
    }
    out.flush()?;
    Ok(())
}

/// Save an image, choosing the encoder from the file extension.
pub fn save_image(image: &RgbImage, output_path: impl AsRef<Path>) -> Result<(), RenderError> {
    let path = output_path.as_ref();
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "ppm" => write_ppm(BufWriter::new(File::create(path)?), image)?,
        "png" => image.save_with_format(path, ImageFormat::Png)?,
        "jpg" | "jpeg" => image.save_with_format(path, ImageFormat::Jpeg)?,
        "bmp" => image.save_with_format(path, ImageFormat::Bmp)?,
        _ => return Err(RenderError::UnsupportedFormat(extension)),
    }

    info!("Image saved as {}", path.display());
    Ok(())
}
