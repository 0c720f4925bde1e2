/// Expand a 5-bit color channel to 8 bits by replicating its top bits
/// into the low bits. Maps 0 to 0 and 31 to 255.
pub const fn expand5to8(v5: u8) -> u8 {
    let v5 = v5 & 0x1F;
    (v5 << 3) | (v5 >> 2)
}

/// Packed 15-bit color as produced by the display capture unit.
///
/// Red occupies bits 0..=4, green 5..=9, blue 10..=14. Bit 15 is unused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb555(pub u16);

impl Rgb555 {
    /// Build a packed color from 8-bit channels, dropping the low 3 bits
    pub const fn from_rgb888(r: u8, g: u8, b: u8) -> Self {
        Self(((r >> 3) as u16) | (((g >> 3) as u16) << 5) | (((b >> 3) as u16) << 10))
    }

    pub const fn r5(self) -> u8 {
        (self.0 & 0x1F) as u8
    }

    pub const fn g5(self) -> u8 {
        ((self.0 >> 5) & 0x1F) as u8
    }

    pub const fn b5(self) -> u8 {
        ((self.0 >> 10) & 0x1F) as u8
    }

    /// Expanded `[r, g, b]` channels
    pub const fn to_rgb888(self) -> [u8; 3] {
        [expand5to8(self.r5()), expand5to8(self.g5()), expand5to8(self.b5())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_endpoints() {
        assert_eq!(expand5to8(0), 0);
        assert_eq!(expand5to8(31), 255);
    }

    #[test]
    fn test_expand_replicates_high_bits() {
        assert_eq!(expand5to8(1), 8);
        assert_eq!(expand5to8(15), 123);
        assert_eq!(expand5to8(16), 132);
        assert_eq!(expand5to8(30), 247);

        // linear scaling gives 131 here
        assert_ne!(expand5to8(16), (16u32 * 255 / 31) as u8);
    }

    #[test]
    fn test_expand_is_monotonic() {
        for v in 1..32u8 {
            assert!(expand5to8(v) >= expand5to8(v - 1), "not monotonic at {v}");
        }
    }

    #[test]
    fn test_channel_extraction() {
        let color = Rgb555(0x8000 | (3 << 10) | (17 << 5) | 29);

        assert_eq!(color.r5(), 29);
        assert_eq!(color.g5(), 17);
        assert_eq!(color.b5(), 3);
        assert_eq!(
            color.to_rgb888(),
            [expand5to8(29), expand5to8(17), expand5to8(3)]
        );
    }

    #[test]
    fn test_from_rgb888_truncates() {
        let color = Rgb555::from_rgb888(0xFF, 0x80, 0x07);
        assert_eq!((color.r5(), color.g5(), color.b5()), (31, 16, 0));
        assert_eq!(color.0 & 0x8000, 0);
    }
}
