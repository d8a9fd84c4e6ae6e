//! Catalog file writer.

use crate::catalog::Catalog;
use anyhow::{Context, Result};
use brotli::enc::BrotliEncoderParams;
use brotli::CompressorWriter;
use std::fs::File;
use std::io::{BufWriter, Write};

/// Writes a catalog to disk as pretty-printed JSON.
///
/// Automatically enables Brotli compression if the file path ends with
/// `.br` (e.g. `hospitals.json.br`).
///
/// # Examples
///
/// ```no_run
/// # use caremap::{write_catalog, Catalog};
/// # fn main() -> anyhow::Result<()> {
/// let catalog = Catalog::builtin();
/// write_catalog(&catalog, "hospitals.json")?;
/// write_catalog(&catalog, "hospitals.json.br")?;
/// # Ok(())
/// # }
/// ```
pub fn write_catalog(catalog: &Catalog, file_path: &str) -> Result<()> {
    let file = File::create(file_path)
        .with_context(|| format!("Failed to create file: {}", file_path))?;

    let mut writer: Box<dyn Write> = if file_path.ends_with(".br") {
        let params = BrotliEncoderParams {
            quality: 6, // Balanced compression
            lgwin: 22,  // Window size
            ..Default::default()
        };
        Box::new(CompressorWriter::with_params(
            BufWriter::new(file),
            4096,
            &params,
        ))
    } else {
        Box::new(BufWriter::new(file))
    };

    let json = serde_json::to_string_pretty(catalog).context("Failed to serialize catalog")?;
    writer
        .write_all(json.as_bytes())
        .with_context(|| format!("Failed to write catalog: {}", file_path))?;
    writer.flush()?;
    Ok(())
}
