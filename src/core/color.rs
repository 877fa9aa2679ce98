//! sRGB colour value used as a mapping output.

use std::fmt;

/// 8-bit-per-channel colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a `0xRRGGBB` literal.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }

    /// Channel-wise linear blend; `t` is clamped to `[0, 1]`.
    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Rgb {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trips_through_display() {
        assert_eq!(Rgb::from_hex(0xCC5500).to_string(), "#CC5500");
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let day = Rgb::from_hex(0xF2F0E9);
        let night = Rgb::from_hex(0x1A1A18);
        assert_eq!(day.lerp(night, 0.0), day);
        assert_eq!(day.lerp(night, 1.0), night);
        assert_eq!(Rgb::new(0, 0, 0).lerp(Rgb::new(200, 100, 50), 0.5), Rgb::new(100, 50, 25));
        assert_eq!(day.lerp(night, 3.0), night);
    }
}
