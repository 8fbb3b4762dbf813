//! pngbridge-decoder - PNG decoding for the native reader
//!
//! Decodes a PNG held in memory or stored in a file into an 8-bit-per-channel
//! [`DecodedImage`] in the requested [`PixelFormat`]. Palette and low bit-depth
//! images are expanded, 16-bit samples are stripped to 8 bits, and the channel
//! layout is converted last.
//!
//! ```ignore
//! use pngbridge_decoder::{DecodeOptions, decode_memory};
//!
//! let image = decode_memory(&png_bytes, &DecodeOptions::default())?;
//! assert_eq!(image.pixels.len(), image.width as usize * image.height as usize * 4);
//! ```

mod decode;
mod error;
mod image;

pub use decode::{decode_file, decode_memory, decode_reader};
pub use error::DecodeError;
pub use image::{DecodeOptions, DecodedImage, convert_pixels};
pub use pngbridge_core::PixelFormat;
