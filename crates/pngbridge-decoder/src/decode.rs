//! PNG decoding entry points

use crate::error::DecodeError;
use crate::image::{DecodeOptions, DecodedImage, convert_pixels};
use png::{BitDepth, ColorType, Decoder, Limits, Transformations};
use pngbridge_core::PixelFormat;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Decode a PNG held in memory.
pub fn decode_memory(bytes: &[u8], options: &DecodeOptions) -> Result<DecodedImage, DecodeError> {
    decode_reader(bytes, options)
}

/// Decode the PNG file at `path`.
pub fn decode_file(path: &Path, options: &DecodeOptions) -> Result<DecodedImage, DecodeError> {
    let file = File::open(path)?;
    decode_reader(BufReader::new(file), options)
}

/// Decode a PNG from any reader.
///
/// Only the first frame of an animated PNG is decoded.
pub fn decode_reader<R: Read>(
    reader: R,
    options: &DecodeOptions,
) -> Result<DecodedImage, DecodeError> {
    let limit = options.max_decoded_bytes;

    let mut decoder = Decoder::new_with_limits(reader, Limits { bytes: limit });
    decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);

    let mut reader = decoder
        .read_info()
        .map_err(|e| DecodeError::from_png(e, limit))?;

    let (color_type, bit_depth) = reader.output_color_type();
    let source_format = output_format(color_type, bit_depth)?;

    let frame_bytes = reader.output_buffer_size();
    let (width, height) = {
        let info = reader.info();
        (info.width, info.height)
    };
    let final_bytes = (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(options.format.channels()))
        .ok_or(DecodeError::LimitExceeded { limit })?;
    if frame_bytes > limit || final_bytes > limit {
        return Err(DecodeError::LimitExceeded { limit });
    }

    let mut buf = vec![0u8; frame_bytes];
    let frame = reader
        .next_frame(&mut buf)
        .map_err(|e| DecodeError::from_png(e, limit))?;
    buf.truncate(frame.buffer_size());

    let packed = unpad_rows(buf, frame.line_size, frame.width, frame.height, source_format);
    let pixels = convert_pixels(&packed, source_format, options.format);

    tracing::trace!(
        width = frame.width,
        height = frame.height,
        source = ?source_format,
        target = ?options.format,
        "decoded png"
    );

    Ok(DecodedImage {
        width: frame.width,
        height: frame.height,
        format: options.format,
        pixels,
    })
}

/// Layout of the decoder output once expansion and 16-bit stripping are applied.
fn output_format(color_type: ColorType, bit_depth: BitDepth) -> Result<PixelFormat, DecodeError> {
    if bit_depth != BitDepth::Eight {
        return Err(DecodeError::Unsupported(format!(
            "decoder produced {bit_depth:?} samples"
        )));
    }
    match color_type {
        ColorType::Grayscale => Ok(PixelFormat::Gray),
        ColorType::GrayscaleAlpha => Ok(PixelFormat::GrayAlpha),
        ColorType::Rgb => Ok(PixelFormat::Rgb),
        ColorType::Rgba => Ok(PixelFormat::Rgba),
        ColorType::Indexed => Err(DecodeError::Unsupported(
            "palette was not expanded".to_string(),
        )),
    }
}

/// Drop any per-row padding so rows are packed back to back.
fn unpad_rows(
    buf: Vec<u8>,
    line_size: usize,
    width: u32,
    height: u32,
    format: PixelFormat,
) -> Vec<u8> {
    let row = width as usize * format.channels();
    if line_size == row {
        return buf;
    }
    buf.chunks(line_size)
        .take(height as usize)
        .flat_map(|line| &line[..row.min(line.len())])
        .copied()
        .collect()
}

#[cfg(test)]
#[path = "decode/decode_tests.rs"]
mod decode_tests;
