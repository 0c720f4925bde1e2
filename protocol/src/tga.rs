use alloc::vec::Vec;

use crate::record::Pixels;
use crate::{PIXEL_COUNT, SCREEN_HEIGHT, SCREEN_WIDTH};

/// Size of the fixed TGA header
pub const TGA_HEADER_SIZE: usize = 18;

/// Size of every TGA file produced by [`encode_tga`]
pub const TGA_FILE_SIZE: usize = TGA_HEADER_SIZE + PIXEL_COUNT * 3;

const TGA_UNCOMPRESSED_TRUECOLOR: u8 = 2;
const TGA_BITS_PER_PIXEL: u8 = 24;
/// Image descriptor: rows stored top to bottom, left to right
const TGA_ORIGIN_TOP_LEFT: u8 = 0x20;

fn tga_header() -> [u8; TGA_HEADER_SIZE] {
    let mut header = [0u8; TGA_HEADER_SIZE];
    header[2] = TGA_UNCOMPRESSED_TRUECOLOR;
    header[12..14].copy_from_slice(&(SCREEN_WIDTH as u16).to_le_bytes());
    header[14..16].copy_from_slice(&(SCREEN_HEIGHT as u16).to_le_bytes());
    header[16] = TGA_BITS_PER_PIXEL;
    header[17] = TGA_ORIGIN_TOP_LEFT;
    header
}

/// Render captured pixels as an uncompressed 24-bit TGA image.
///
/// Channels are written in blue, green, red order with each 5-bit channel
/// expanded to 8 bits.
pub fn encode_tga(pixels: &Pixels<'_>) -> Vec<u8> {
    let mut out = Vec::with_capacity(TGA_FILE_SIZE);
    out.extend_from_slice(&tga_header());

    for pixel in pixels.iter() {
        let [r, g, b] = pixel.to_rgb888();
        out.extend_from_slice(&[b, g, r]);
    }

    out
}
