#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

pub mod color;
pub mod cursor;
pub mod params;
pub mod record;
pub mod report;
pub mod tga;

pub use color::{expand5to8, Rgb555};
pub use cursor::ByteReader;
pub use params::{pack, unpack, RenderParams, Vertex};
pub use record::{decode_record, encode_record, DecodedCapture, FormatError, Pixels};
pub use report::{ParamReport, TextureName, TEXTURE_NAMES};
pub use tga::{encode_tga, TGA_FILE_SIZE};

/// Magic number identifying a screen capture file ("DSSC" on disk)
pub const CAPTURE_MAGIC: u32 = 0x4353_5344;

/// Format revision written by the encoder
pub const FORMAT_VERSION: u16 = 1;

/// Highest format revision the decoder understands
pub const MAX_SUPPORTED_VERSION: u16 = 1;

/// Captured framebuffer width in pixels
pub const SCREEN_WIDTH: usize = 256;

/// Captured framebuffer height in pixels
pub const SCREEN_HEIGHT: usize = 192;

/// Number of packed pixels in one capture
pub const PIXEL_COUNT: usize = SCREEN_WIDTH * SCREEN_HEIGHT;

/// Byte offset of the pixel region; everything before it is header
pub const HEADER_SIZE: usize = 0x40;

/// Byte offset of the packed render parameters
pub const PARAMS_OFFSET: usize = 0x08;

/// Byte offset of the first vertex triple
pub const VERTICES_OFFSET: usize = 0x10;

/// Number of vertices stored in a capture
pub const VERTEX_COUNT: usize = 4;

/// Exact size of an encoded record, and the minimum size the decoder accepts
pub const RECORD_SIZE: usize = HEADER_SIZE + PIXEL_COUNT * 2;
