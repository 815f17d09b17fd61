use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbaImage};
use log::{debug, info};
use rayon::prelude::*;

use crate::color_image_mask::{colorize_luminance_map, luminance_map};
use crate::error::{TintError, TintResult};
use crate::helper::tinted_output_path;
use crate::tints::Tint;

pub const DEFAULT_INPUT: &str = "static/img/texture.png";

pub fn load_source(path: &Path) -> TintResult<RgbaImage> {
    let img = image::open(path).map_err(|e| TintError::from_image(path, e))?;
    info!(
        "Loaded '{}' ({}x{})",
        path.display(),
        img.width(),
        img.height()
    );
    Ok(img.to_rgba8())
}

/// Luminance is computed once and shared by every tint
pub fn render(source: &RgbaImage, tints: &[Tint]) -> TintResult<Vec<(Tint, RgbaImage)>> {
    let map = luminance_map(source);

    tints
        .par_iter()
        .map(|tint| {
            debug!("Rendering tint '{}' {:?}", tint.name, tint.color);
            colorize_luminance_map(&map, source, tint.color).map(|img| (*tint, img))
        })
        .collect()
}

pub fn save(image: &RgbaImage, path: &Path) -> TintResult<()> {
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| TintError::from_image(path, e))?;
    info!("Saved '{}'", path.display());
    Ok(())
}

/// Every tint is rendered before the first file is written; the first
/// failed save stops the run.
pub fn run(input: &Path, tints: &[Tint]) -> TintResult<Vec<PathBuf>> {
    let source = load_source(input)?;
    let rendered = render(&source, tints)?;

    let mut written = Vec::with_capacity(rendered.len());
    for (tint, image) in &rendered {
        let output_path = tinted_output_path(input, tint.name);
        save(image, &output_path)?;
        written.push(output_path);
    }

    Ok(written)
}
