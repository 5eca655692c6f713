//! PNG output for rendered figures.
//!
//! Figures carry their title and axis labels as metadata rather than
//! rasterized text; this module embeds them as standard `tEXt` chunks so
//! saved files stay self-describing. [`read_text_chunks`] recovers them.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::{RenderError, RenderResult};

/// `tEXt` keyword carrying the figure title.
pub const TITLE_KEYWORD: &str = "Title";
/// `tEXt` keyword carrying the x axis label.
pub const X_LABEL_KEYWORD: &str = "X-Label";
/// `tEXt` keyword carrying the y axis label.
pub const Y_LABEL_KEYWORD: &str = "Y-Label";
/// `tEXt` keyword identifying the producing software.
pub const SOFTWARE_KEYWORD: &str = "Software";

/// Figure text embedded in saved PNG files.
#[derive(Debug, Clone, Default)]
pub struct PngMetadata {
    /// Figure title, if any.
    pub title: Option<String>,
    /// X axis label, if any.
    pub x_label: Option<String>,
    /// Y axis label, if any.
    pub y_label: Option<String>,
}

impl PngMetadata {
    fn chunks(&self) -> Vec<(String, String)> {
        let mut chunks = Vec::new();
        if let Some(title) = &self.title {
            chunks.push((TITLE_KEYWORD.to_string(), title.clone()));
        }
        if let Some(x_label) = &self.x_label {
            chunks.push((X_LABEL_KEYWORD.to_string(), x_label.clone()));
        }
        if let Some(y_label) = &self.y_label {
            chunks.push((Y_LABEL_KEYWORD.to_string(), y_label.clone()));
        }
        chunks.push((SOFTWARE_KEYWORD.to_string(), "triplot-rs".to_string()));
        chunks
    }
}

/// Encodes straight RGBA pixels as an in-memory PNG.
///
/// `rgba` must hold exactly `width * height * 4` bytes.
pub fn encode_png(
    rgba: &[u8],
    width: u32,
    height: u32,
    metadata: &PngMetadata,
) -> RenderResult<Vec<u8>> {
    let mut buffer = Vec::new();
    write_png(&mut buffer, rgba, width, height, metadata)?;
    Ok(buffer)
}

/// Encodes straight RGBA pixels and writes them to `path`.
pub fn save_png(
    path: impl AsRef<Path>,
    rgba: &[u8],
    width: u32,
    height: u32,
    metadata: &PngMetadata,
) -> RenderResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_png(&mut writer, rgba, width, height, metadata)?;
    writer.flush()?;
    Ok(())
}

/// Reads the `tEXt` chunks of a PNG file as `(keyword, text)` pairs.
pub fn read_text_chunks(path: impl AsRef<Path>) -> RenderResult<Vec<(String, String)>> {
    let file = File::open(path)?;
    let decoder = png::Decoder::new(BufReader::new(file));
    let reader = decoder.read_info()?;
    Ok(reader
        .info()
        .uncompressed_latin1_text
        .iter()
        .map(|chunk| (chunk.keyword.clone(), chunk.text.clone()))
        .collect())
}

fn write_png<W: Write>(
    w: W,
    rgba: &[u8],
    width: u32,
    height: u32,
    metadata: &PngMetadata,
) -> RenderResult<()> {
    let expected = width as usize * height as usize * 4;
    if rgba.len() != expected {
        return Err(RenderError::InvalidImageData { width, height });
    }

    let mut encoder = png::Encoder::new(w, width, height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    for (keyword, text) in metadata.chunks() {
        encoder.add_text_chunk(keyword, text)?;
    }
    let mut writer = encoder.write_header()?;
    writer.write_image_data(rgba)?;
    Ok(())
}
