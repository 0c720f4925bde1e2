//! Screen capture container: encoder and decoder.
//!
//! Layout (all fields little-endian):
//!
//! | offset | size  | field                                  |
//! |--------|-------|----------------------------------------|
//! | 0x00   | 4     | magic                                  |
//! | 0x04   | 2     | version                                |
//! | 0x06   | 2     | reserved                               |
//! | 0x08   | 4     | packed render parameters               |
//! | 0x0C   | 4     | reserved                               |
//! | 0x10   | 48    | four (x, y, z) `i32` vertex triples    |
//! | 0x40   | 98304 | 256x192 packed 15-bit pixels, row-major|

use alloc::vec::Vec;

use crate::color::Rgb555;
use crate::cursor::ByteReader;
use crate::params::{pack, unpack, RenderParams, Vertex};
use crate::{
    CAPTURE_MAGIC, FORMAT_VERSION, MAX_SUPPORTED_VERSION, PIXEL_COUNT, RECORD_SIZE, SCREEN_HEIGHT,
    SCREEN_WIDTH,
};

/// Reasons a byte buffer is not a usable capture record
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("not a valid screen capture file (magic 0x{found:08X})")]
    BadMagic { found: u32 },

    #[error("unsupported version {version}")]
    UnsupportedVersion { version: u16 },

    #[error("file truncated ({actual} bytes, need {needed})")]
    Truncated { needed: usize, actual: usize },
}

/// Read-only view of the packed pixel region of a record
#[derive(Debug, Clone, Copy)]
pub struct Pixels<'a> {
    bytes: &'a [u8],
}

impl<'a> Pixels<'a> {
    /// Raw little-endian pixel bytes, `PIXEL_COUNT * 2` long
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Rgb555> {
        if x >= SCREEN_WIDTH || y >= SCREEN_HEIGHT {
            return None;
        }

        let i = (y * SCREEN_WIDTH + x) * 2;
        Some(Rgb555(u16::from_le_bytes([self.bytes[i], self.bytes[i + 1]])))
    }

    /// Pixels in row-major order, top row first
    pub fn iter(&self) -> impl Iterator<Item = Rgb555> + 'a {
        self.bytes
            .chunks_exact(2)
            .map(|pair| Rgb555(u16::from_le_bytes([pair[0], pair[1]])))
    }
}

/// A validated capture record borrowed from its source buffer
#[derive(Debug, Clone, Copy)]
pub struct DecodedCapture<'a> {
    pub version: u16,
    pub params: RenderParams,
    pub pixels: Pixels<'a>,
}

/// Build a complete capture record.
///
/// The z component of each vertex is reserved and always written as zero.
pub fn encode_record(params: &RenderParams, pixels: &[u16; PIXEL_COUNT]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(RECORD_SIZE);

    bytes.extend_from_slice(&CAPTURE_MAGIC.to_le_bytes());
    bytes.extend_from_slice(&FORMAT_VERSION.to_le_bytes());
    bytes.extend_from_slice(&[0; 2]);
    bytes.extend_from_slice(&pack(params).to_le_bytes());
    bytes.extend_from_slice(&[0; 4]);

    for vertex in &params.vertices {
        bytes.extend_from_slice(&vertex.x.to_le_bytes());
        bytes.extend_from_slice(&vertex.y.to_le_bytes());
        bytes.extend_from_slice(&0i32.to_le_bytes());
    }

    for pixel in pixels {
        bytes.extend_from_slice(&pixel.to_le_bytes());
    }

    debug_assert_eq!(bytes.len(), RECORD_SIZE);
    bytes
}

/// Validate and parse a capture record.
///
/// Checks run in order and stop at the first failure: magic, version,
/// then total length. Reserved fields are not checked.
pub fn decode_record(bytes: &[u8]) -> Result<DecodedCapture<'_>, FormatError> {
    let mut reader = ByteReader::new(bytes);

    let magic = reader.read_u32_le()?;
    if magic != CAPTURE_MAGIC {
        return Err(FormatError::BadMagic { found: magic });
    }

    let version = reader.read_u16_le()?;
    if version > MAX_SUPPORTED_VERSION {
        return Err(FormatError::UnsupportedVersion { version });
    }

    if bytes.len() < RECORD_SIZE {
        return Err(FormatError::Truncated {
            needed: RECORD_SIZE,
            actual: bytes.len(),
        });
    }

    reader.skip(2)?;
    let mut params = unpack(reader.read_u32_le()?);
    reader.skip(4)?;

    for vertex in params.vertices.iter_mut() {
        let x = reader.read_i32_le()?;
        let y = reader.read_i32_le()?;
        let z = reader.read_i32_le()?;
        *vertex = Vertex::new(x, y, z);
    }

    let pixels = Pixels {
        bytes: reader.read_bytes(PIXEL_COUNT * 2)?,
    };

    Ok(DecodedCapture {
        version,
        params,
        pixels,
    })
}
