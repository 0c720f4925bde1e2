//! Render parameters and their packed 32-bit encoding.
//!
//! Bit layout of the packed word (bit 0 = LSB):
//!
//! | bits  | field                      |
//! |-------|----------------------------|
//! | 0     | anti-aliasing              |
//! | 1     | edge marking               |
//! | 2     | wireframe                  |
//! | 3     | shape (1 = quad)           |
//! | 4..=6 | texture mode               |
//! | 7     | unused                     |
//! | 8..=12| alpha                      |
//! | 13..  | reserved                   |

use crate::VERTEX_COUNT;

const ANTI_ALIAS_BIT: u32 = 0;
const EDGE_MARK_BIT: u32 = 1;
const WIREFRAME_BIT: u32 = 2;
const QUAD_BIT: u32 = 3;
const TEX_MODE_SHIFT: u32 = 4;
const ALPHA_SHIFT: u32 = 8;

/// Mask of the 3-bit texture mode field (before shifting)
pub const TEX_MODE_MASK: u8 = 0x07;

/// Mask of the 5-bit alpha field (before shifting)
pub const ALPHA_MASK: u8 = 0x1F;

/// One stored vertex position. `z` is reserved and written as zero by
/// every known producer, but it is carried through as stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Vertex {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Vertex {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

/// Decoded render parameters of a capture
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderParams {
    pub anti_alias: bool,
    pub edge_mark: bool,
    pub wireframe: bool,
    /// `false` means the shape was drawn as a triangle
    pub quad: bool,
    /// Texture mode index, 0..=7
    pub tex_mode: u8,
    /// Polygon alpha, 0..=31
    pub alpha: u8,
    pub vertices: [Vertex; VERTEX_COUNT],
}

/// Pack the flag and enum fields of `params` into a 32-bit word.
///
/// Out-of-range `tex_mode` and `alpha` values are masked to their field
/// width so they never spill into neighbouring fields.
pub fn pack(params: &RenderParams) -> u32 {
    ((params.anti_alias as u32) << ANTI_ALIAS_BIT)
        | ((params.edge_mark as u32) << EDGE_MARK_BIT)
        | ((params.wireframe as u32) << WIREFRAME_BIT)
        | ((params.quad as u32) << QUAD_BIT)
        | (((params.tex_mode & TEX_MODE_MASK) as u32) << TEX_MODE_SHIFT)
        | (((params.alpha & ALPHA_MASK) as u32) << ALPHA_SHIFT)
}

/// Extract render parameters from a packed word.
///
/// Reserved bits are ignored. Vertices are not part of the word and come
/// back zeroed.
pub fn unpack(word: u32) -> RenderParams {
    let bit = |n: u32| (word >> n) & 1 != 0;

    RenderParams {
        anti_alias: bit(ANTI_ALIAS_BIT),
        edge_mark: bit(EDGE_MARK_BIT),
        wireframe: bit(WIREFRAME_BIT),
        quad: bit(QUAD_BIT),
        tex_mode: (word >> TEX_MODE_SHIFT) as u8 & TEX_MODE_MASK,
        alpha: (word >> ALPHA_SHIFT) as u8 & ALPHA_MASK,
        vertices: [Vertex::default(); VERTEX_COUNT],
    }
}
