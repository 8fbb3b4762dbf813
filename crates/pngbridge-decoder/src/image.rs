//! Decoded images and channel layout conversion

use pngbridge_core::{BridgeConfig, PixelFormat};

/// Options controlling a single decode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Layout of the returned pixels
    pub format: PixelFormat,
    /// Upper bound on memory allocated for one decode, in bytes
    pub max_decoded_bytes: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self::from(&BridgeConfig::default())
    }
}

impl From<&BridgeConfig> for DecodeOptions {
    fn from(config: &BridgeConfig) -> Self {
        Self {
            format: config.pixel_format,
            max_decoded_bytes: config.max_decoded_bytes,
        }
    }
}

/// An image decoded to 8 bits per channel
///
/// `pixels` holds `width * height * format.channels()` bytes, row by row with
/// no padding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub format: PixelFormat,
    pub pixels: Vec<u8>,
}

/// Convert 8-bit pixels from one channel layout to another
///
/// Gray is replicated into color channels, missing alpha becomes 255, and
/// color is reduced to gray with the integer luminance
/// `(299 R + 587 G + 114 B) / 1000`. Trailing bytes that do not form a whole
/// pixel are ignored.
pub fn convert_pixels(pixels: &[u8], from: PixelFormat, to: PixelFormat) -> Vec<u8> {
    if from == to {
        return pixels.to_vec();
    }

    let count = pixels.len() / from.channels();
    let mut out = Vec::with_capacity(count * to.channels());

    for px in pixels.chunks_exact(from.channels()) {
        let (r, g, b, a) = match from {
            PixelFormat::Gray => (px[0], px[0], px[0], u8::MAX),
            PixelFormat::GrayAlpha => (px[0], px[0], px[0], px[1]),
            PixelFormat::Rgb => (px[0], px[1], px[2], u8::MAX),
            PixelFormat::Rgba => (px[0], px[1], px[2], px[3]),
        };

        match to {
            PixelFormat::Gray => out.push(luminance(r, g, b)),
            PixelFormat::GrayAlpha => out.extend_from_slice(&[luminance(r, g, b), a]),
            PixelFormat::Rgb => out.extend_from_slice(&[r, g, b]),
            PixelFormat::Rgba => out.extend_from_slice(&[r, g, b, a]),
        }
    }

    out
}

fn luminance(r: u8, g: u8, b: u8) -> u8 {
    let y = (299 * u32::from(r) + 587 * u32::from(g) + 114 * u32::from(b)) / 1000;
    // At most 255 since the weights sum to 1000.
    y as u8
}
