//! Texture modes offered on the device and the per-vertex attributes each
//! one needs.

/// 8-bit vertex color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb888 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb888 {
    pub const RED: Self = Self::new(255, 0, 0);
    pub const YELLOW: Self = Self::new(255, 255, 0);
    pub const GREEN: Self = Self::new(0, 255, 0);
    pub const BLUE: Self = Self::new(0, 0, 255);
    pub const WHITE: Self = Self::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Square texture-coordinate rectangle from (0, 0) to (size, size)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UvRect {
    pub size: i32,
}

impl UvRect {
    /// Corner for a vertex, walking (0,0), (0,n), (n,n), (n,0)
    pub const fn corner(&self, index: usize) -> (i32, i32) {
        let n = self.size;
        match index % 4 {
            0 => (0, 0),
            1 => (0, n),
            2 => (n, n),
            _ => (n, 0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripePattern {
    Vertical,
    Horizontal,
    Crossed,
}

impl StripePattern {
    /// Texel color at (x, y), packed 15-bit with the opaque bit set
    pub const fn texel(&self, x: usize, y: usize) -> u16 {
        let (odd_x, odd_y) = (x % 2 == 1, y % 2 == 1);
        match self {
            Self::Vertical => {
                if odd_x {
                    0xFFFF
                } else {
                    0xABCD
                }
            }
            Self::Horizontal => {
                if odd_y {
                    0xFFFF
                } else {
                    0xABCD
                }
            }
            Self::Crossed => {
                0x8000
                    | match (odd_x, odd_y) {
                        (true, true) => 0x7FFF,
                        (true, false) => 0xABCD,
                        (false, true) => 0x765E,
                        (false, false) => 0x7E29,
                    }
            }
        }
    }
}

/// Side length of the stripe textures
pub const STRIPE_TEXTURE_SIZE: i32 = 128;

/// Everything needed to shade the captured shape in one texture mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureSetup {
    StripeTexture { pattern: StripePattern, uv: UvRect },
    /// Red follows S and green follows T across a `size`x`size` texture
    CoordinateGridTexture { size: u8, uv: UvRect },
    VertexColorFill { colors: [Rgb888; 4] },
}

/// Receiver of per-vertex attributes, in submission order.
///
/// Attributes for a vertex are emitted before its position.
pub trait VertexSink {
    fn tex_coord(&mut self, s: i32, t: i32);
    fn color(&mut self, color: Rgb888);
    fn position(&mut self, x: i32, y: i32, z: i32);
}

impl TextureSetup {
    pub const fn is_textured(&self) -> bool {
        !matches!(self, Self::VertexColorFill { .. })
    }

    /// Texture dimensions, if this setup samples a texture
    pub const fn texture_size(&self) -> Option<usize> {
        match self {
            Self::StripeTexture { .. } => Some(STRIPE_TEXTURE_SIZE as usize),
            Self::CoordinateGridTexture { size, .. } => Some(*size as usize),
            Self::VertexColorFill { .. } => None,
        }
    }

    /// Texel at (x, y) of the texture this setup samples
    pub fn texel(&self, x: usize, y: usize) -> Option<u16> {
        match self {
            Self::StripeTexture { pattern, .. } => Some(pattern.texel(x, y)),
            Self::CoordinateGridTexture { size, .. } => {
                // widen the coordinate to 5 bits by repeating its top bits
                let widen = |v: usize| -> u16 {
                    let v = v as u16;
                    match *size {
                        8 => (v << 2) | (v >> 1),
                        16 => (v << 1) | (v >> 3),
                        _ => v,
                    }
                };
                Some(0x8000 | widen(x) | (widen(y) << 5) | (0x0F << 10))
            }
            Self::VertexColorFill { .. } => None,
        }
    }

    /// Emit the attributes for vertex `index` (0..4) of the shape
    pub fn apply_vertex(&self, index: usize, sink: &mut impl VertexSink) {
        match self {
            Self::StripeTexture { uv, .. } | Self::CoordinateGridTexture { uv, .. } => {
                let (s, t) = uv.corner(index);
                sink.tex_coord(s, t);
            }
            Self::VertexColorFill { colors } => sink.color(colors[index % 4]),
        }
    }
}

/// Texture modes selectable on the device, in menu order.
///
/// The discriminant is the value stored in the packed parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum TextureMode {
    #[default]
    VerticalStripes = 0,
    HorizontalStripes = 1,
    CrossedStripes = 2,
    Coords8 = 3,
    Coords16 = 4,
    Coords32 = 5,
    ColorVertices = 6,
    PlainWhite = 7,
}

/// Number of texture modes the device cycles through
pub const TEXTURE_MODE_COUNT: u8 = 8;

impl TextureMode {
    pub const ALL: [Self; TEXTURE_MODE_COUNT as usize] = [
        Self::VerticalStripes,
        Self::HorizontalStripes,
        Self::CrossedStripes,
        Self::Coords8,
        Self::Coords16,
        Self::Coords32,
        Self::ColorVertices,
        Self::PlainWhite,
    ];

    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Mode for a stored index; only the low 3 bits are significant
    pub const fn from_index(index: u8) -> Self {
        Self::ALL[(index % TEXTURE_MODE_COUNT) as usize]
    }

    pub const fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    pub const fn prev(self) -> Self {
        Self::from_index(self.index() + TEXTURE_MODE_COUNT - 1)
    }

    /// Short name shown in the on-device menu
    pub const fn label(self) -> &'static str {
        match self {
            Self::VerticalStripes => "V stripes",
            Self::HorizontalStripes => "H stripes",
            Self::CrossedStripes => "VH stripes",
            Self::Coords8 => "Coords 8",
            Self::Coords16 => "Coords 16",
            Self::Coords32 => "Coords 32",
            Self::ColorVertices => "Color verts",
            Self::PlainWhite => "Plain white",
        }
    }

    pub fn setup(self) -> TextureSetup {
        let stripes = |pattern| TextureSetup::StripeTexture {
            pattern,
            uv: UvRect {
                size: STRIPE_TEXTURE_SIZE,
            },
        };
        let grid = |size: u8| TextureSetup::CoordinateGridTexture {
            size,
            uv: UvRect { size: size as i32 },
        };

        match self {
            Self::VerticalStripes => stripes(StripePattern::Vertical),
            Self::HorizontalStripes => stripes(StripePattern::Horizontal),
            Self::CrossedStripes => stripes(StripePattern::Crossed),
            Self::Coords8 => grid(8),
            Self::Coords16 => grid(16),
            Self::Coords32 => grid(32),
            Self::ColorVertices => TextureSetup::VertexColorFill {
                colors: [Rgb888::RED, Rgb888::YELLOW, Rgb888::BLUE, Rgb888::GREEN],
            },
            Self::PlainWhite => TextureSetup::VertexColorFill {
                colors: [Rgb888::WHITE; 4],
            },
        }
    }
}
