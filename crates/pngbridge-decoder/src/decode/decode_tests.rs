#![allow(non_snake_case)]

use super::*;
use std::io::Write;
use test_case::test_case;

fn encode(width: u32, height: u32, color: ColorType, depth: BitDepth, data: &[u8]) -> Vec<u8> {
    encode_with(width, height, color, depth, data, |_| {})
}

fn encode_with(
    width: u32,
    height: u32,
    color: ColorType,
    depth: BitDepth,
    data: &[u8],
    configure: impl FnOnce(&mut png::Encoder<'_, &mut Vec<u8>>),
) -> Vec<u8> {
    let mut out = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut out, width, height);
        encoder.set_color(color);
        encoder.set_depth(depth);
        configure(&mut encoder);
        let mut writer = encoder.write_header().unwrap();
        writer.write_image_data(data).unwrap();
        writer.finish().unwrap();
    }
    out
}

fn options(format: PixelFormat) -> DecodeOptions {
    DecodeOptions {
        format,
        ..DecodeOptions::default()
    }
}

#[test]
fn decode_memory___rgba_image___returns_exact_pixels() {
    let data = [255, 0, 0, 255, 0, 255, 0, 128, 0, 0, 255, 0, 9, 9, 9, 9];
    let png = encode(2, 2, ColorType::Rgba, BitDepth::Eight, &data);

    let image = decode_memory(&png, &DecodeOptions::default()).unwrap();

    assert_eq!(image.width, 2);
    assert_eq!(image.height, 2);
    assert_eq!(image.format, PixelFormat::Rgba);
    assert_eq!(image.pixels, data);
}

#[test]
fn decode_memory___rgb_image___gains_opaque_alpha() {
    let png = encode(1, 1, ColorType::Rgb, BitDepth::Eight, &[10, 20, 30]);

    let image = decode_memory(&png, &DecodeOptions::default()).unwrap();

    assert_eq!(image.pixels, vec![10, 20, 30, 255]);
}

#[test]
fn decode_memory___sixteen_bit_gray___strips_to_high_byte() {
    let png = encode(2, 1, ColorType::Grayscale, BitDepth::Sixteen, &[0xAB, 0xCD, 0x01, 0x02]);

    let image = decode_memory(&png, &options(PixelFormat::Gray)).unwrap();

    assert_eq!(image.pixels, vec![0xAB, 0x01]);
}

#[test]
fn decode_memory___one_bit_gray___expands_to_full_range() {
    // 8 pixels, alternating black and white
    let png = encode(8, 1, ColorType::Grayscale, BitDepth::One, &[0b0101_0101]);

    let image = decode_memory(&png, &options(PixelFormat::Gray)).unwrap();

    assert_eq!(image.pixels, vec![0, 255, 0, 255, 0, 255, 0, 255]);
}

#[test]
fn decode_memory___indexed_with_transparency___expands_palette() {
    let png = encode_with(2, 1, ColorType::Indexed, BitDepth::Eight, &[0, 1], |encoder| {
        encoder.set_palette(vec![255, 0, 0, 0, 0, 255]);
        encoder.set_trns(vec![0, 255]);
    });

    let image = decode_memory(&png, &DecodeOptions::default()).unwrap();

    assert_eq!(image.pixels, vec![255, 0, 0, 0, 0, 0, 255, 255]);
}

#[test_case(PixelFormat::Gray, 1)]
#[test_case(PixelFormat::GrayAlpha, 2)]
#[test_case(PixelFormat::Rgb, 3)]
#[test_case(PixelFormat::Rgba, 4)]
fn decode_memory___requested_format___sizes_buffer(format: PixelFormat, channels: usize) {
    let data = vec![128u8; 5 * 3 * 3];
    let png = encode(5, 3, ColorType::Rgb, BitDepth::Eight, &data);

    let image = decode_memory(&png, &options(format)).unwrap();

    assert_eq!(image.format, format);
    assert_eq!(image.pixels.len(), 5 * 3 * channels);
}

#[test]
fn decode_memory___empty_input___returns_error() {
    let result = decode_memory(&[], &DecodeOptions::default());

    assert!(result.is_err());
}

#[test]
fn decode_memory___garbage_input___returns_error() {
    let result = decode_memory(b"definitely not a png file", &DecodeOptions::default());

    assert!(result.is_err());
}

#[test]
fn decode_memory___truncated_png___returns_error() {
    let data = vec![7u8; 16 * 16 * 4];
    let png = encode(16, 16, ColorType::Rgba, BitDepth::Eight, &data);

    let result = decode_memory(&png[..png.len() / 2], &DecodeOptions::default());

    assert!(result.is_err());
}

#[test]
fn decode_memory___image_above_limit___returns_limit_exceeded() {
    let data = vec![0u8; 64 * 64 * 4];
    let png = encode(64, 64, ColorType::Rgba, BitDepth::Eight, &data);
    let options = DecodeOptions {
        format: PixelFormat::Rgba,
        max_decoded_bytes: 1024,
    };

    let result = decode_memory(&png, &options);

    assert!(matches!(result, Err(DecodeError::LimitExceeded { limit: 1024 })));
}

#[test]
fn decode_file___valid_png___decodes() {
    let data = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];
    let png = encode(3, 2, ColorType::GrayscaleAlpha, BitDepth::Eight, &data);
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(&png).unwrap();

    let image = decode_file(file.path(), &options(PixelFormat::GrayAlpha)).unwrap();

    assert_eq!(image.pixels, data);
}

#[test]
fn decode_file___missing_file___returns_io_error() {
    let dir = tempfile::tempdir().unwrap();

    let result = decode_file(&dir.path().join("missing.png"), &DecodeOptions::default());

    assert!(matches!(result, Err(DecodeError::Io(_))));
}

#[test]
fn output_format___sixteen_bit___is_unsupported() {
    let result = output_format(ColorType::Rgb, BitDepth::Sixteen);

    assert!(matches!(result, Err(DecodeError::Unsupported(_))));
}

#[test]
fn unpad_rows___padded_lines___drops_padding() {
    let buf = vec![1, 2, 0, 3, 4, 0];

    let packed = unpad_rows(buf, 3, 2, 2, PixelFormat::Gray);

    assert_eq!(packed, vec![1, 2, 3, 4]);
}

fn crc32(bytes: &[u8]) -> u32 {
    let mut crc = 0xFFFF_FFFFu32;
    for &byte in bytes {
        crc ^= u32::from(byte);
        for _ in 0..8 {
            crc = if crc & 1 != 0 { (crc >> 1) ^ 0xEDB8_8320 } else { crc >> 1 };
        }
    }
    !crc
}

/// Mark the IHDR of `png` as Adam7 interlaced and fix up its CRC
///
/// Only valid for a 1x1 image, whose single scanline is the same in both
/// layouts.
fn mark_adam7(png: &mut [u8]) {
    // signature (8) + chunk length (4), then the type and 13 data bytes
    assert_eq!(&png[12..16], b"IHDR");
    png[28] = 1;
    let crc = crc32(&png[12..29]);
    png[29..33].copy_from_slice(&crc.to_be_bytes());
}

#[test]
fn decode_memory___adam7_interlaced___decodes() {
    let mut png = encode(1, 1, ColorType::Rgb, BitDepth::Eight, &[10, 20, 30]);
    mark_adam7(&mut png);

    let image = decode_memory(&png, &DecodeOptions::default()).unwrap();

    assert_eq!(image.pixels, vec![10, 20, 30, 255]);
}

#[test]
fn decode_memory___animated_png___returns_first_frame_only() {
    let mut png = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut png, 1, 1);
        encoder.set_color(ColorType::Rgb);
        encoder.set_depth(BitDepth::Eight);
        encoder.set_animated(2, 0).unwrap();
        let mut writer = encoder.write_header().unwrap();
        writer.write_image_data(&[10, 20, 30]).unwrap();
        writer.write_image_data(&[40, 50, 60]).unwrap();
        writer.finish().unwrap();
    }
    assert!(png.windows(4).any(|chunk| chunk == b"fdAT"));

    let image = decode_memory(&png, &DecodeOptions::default()).unwrap();

    assert_eq!((image.width, image.height), (1, 1));
    assert_eq!(image.pixels, vec![10, 20, 30, 255]);
}
