use image::{Pixel, Rgba, RgbaImage};
use rayon::prelude::*;

use crate::error::{TintError, TintResult};

pub type Rgb = (u8, u8, u8);

const LUMA_R: f64 = 0.299;
const LUMA_G: f64 = 0.587;
const LUMA_B: f64 = 0.114;

/// Perceptual luminance of a pixel, in `[0, 255]`. Alpha is ignored.
#[inline]
pub fn luminance(pixel: &Rgba<u8>) -> f64 {
    let [r, g, b, _] = pixel.0;
    luminance_rgb(r, g, b)
}

#[inline]
pub fn luminance_rgb(r: u8, g: u8, b: u8) -> f64 {
    LUMA_R * r as f64 + LUMA_G * g as f64 + LUMA_B * b as f64
}

/// Scales `target` by `luma / 255`, truncating toward zero like an 8-bit cast
#[inline]
pub fn tint_channel(luma: f64, target: u8) -> u8 {
    (luma / 255.0 * target as f64) as u8
}

#[inline]
pub fn tint(luma: f64, color: Rgb) -> [u8; 3] {
    let (r, g, b) = color;
    [
        tint_channel(luma, r),
        tint_channel(luma, g),
        tint_channel(luma, b),
    ]
}

/// One luminance value per pixel, row-major
#[derive(Debug, Clone, PartialEq)]
pub struct LuminanceMap {
    width: u32,
    height: u32,
    values: Vec<f64>,
}

impl LuminanceMap {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

pub fn luminance_map(source: &RgbaImage) -> LuminanceMap {
    let values = source
        .as_raw()
        .par_chunks_exact(4)
        .map(|p| luminance(Rgba::from_slice(p)))
        .collect();

    LuminanceMap {
        width: source.width(),
        height: source.height(),
        values,
    }
}

/// Recolors a luminance map toward `color`, keeping the source's alpha
pub fn colorize_luminance_map(
    map: &LuminanceMap,
    source: &RgbaImage,
    color: Rgb,
) -> TintResult<RgbaImage> {
    if (map.width(), map.height()) != source.dimensions() {
        return Err(TintError::Dimensions {
            map: (map.width(), map.height()),
            source_dims: source.dimensions(),
        });
    }

    let mut out = RgbaImage::new(map.width, map.height);
    out.par_chunks_exact_mut(4)
        .zip(source.as_raw().par_chunks_exact(4))
        .zip(map.values.par_iter())
        .for_each(|((dst, src), &luma)| {
            let [r, g, b] = tint(luma, color);
            dst[0] = r;
            dst[1] = g;
            dst[2] = b;
            dst[3] = src[3];
        });

    Ok(out)
}
