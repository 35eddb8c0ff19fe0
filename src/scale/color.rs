//! Color values and the sequential palette used for attainment.

use std::{fmt, str::FromStr};

/// Simple RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self { Self { r, g, b } }
}

impl fmt::Display for Rgb {
    /// Format as CSS hex: #rrggbb
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = String;

    /// Parse `#rrggbb` or `#rgb`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').ok_or_else(|| format!("color {s:?} must start with '#'"))?;
        let channel = |digits: &str| u8::from_str_radix(digits, 16)
            .map_err(|_| format!("color {s:?} has invalid hex digits"));
        match hex.len() {
            6 => Ok(Rgb::new(channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
            3 => {
                let short = |i: usize| channel(&hex[i..i + 1]).map(|v| v * 17);
                Ok(Rgb::new(short(0)?, short(1)?, short(2)?))
            }
            _ => Err(format!("color {s:?} must have 3 or 6 hex digits")),
        }
    }
}

/// Fill for regions with no attainment record.
pub const MISSING_COLOR: Rgb = Rgb::new(0xcc, 0xcc, 0xcc);

/// Nine-step sequential blue palette, lightest first.
pub const BLUES_9: [Rgb; 9] = [
    Rgb::new(0xf7, 0xfb, 0xff),
    Rgb::new(0xde, 0xeb, 0xf7),
    Rgb::new(0xc6, 0xdb, 0xef),
    Rgb::new(0x9e, 0xca, 0xe1),
    Rgb::new(0x6b, 0xae, 0xd6),
    Rgb::new(0x42, 0x92, 0xc6),
    Rgb::new(0x21, 0x71, 0xb5),
    Rgb::new(0x08, 0x51, 0x9c),
    Rgb::new(0x08, 0x30, 0x6b),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_as_lowercase_hex() {
        assert_eq!(BLUES_9[0].to_string(), "#f7fbff");
        assert_eq!(BLUES_9[8].to_string(), "#08306b");
        assert_eq!(MISSING_COLOR.to_string(), "#cccccc");
    }

    #[test]
    fn parses_long_and_short_hex() {
        assert_eq!("#08519c".parse::<Rgb>().unwrap(), Rgb::new(8, 81, 156));
        assert_eq!("#ccc".parse::<Rgb>().unwrap(), MISSING_COLOR);
        assert!("ccc".parse::<Rgb>().is_err());
        assert!("#12345".parse::<Rgb>().is_err());
        assert!("#zzzzzz".parse::<Rgb>().is_err());
    }

    #[test]
    fn palette_darkens_monotonically() {
        let luma = |c: &Rgb| 299 * c.r as u32 + 587 * c.g as u32 + 114 * c.b as u32;
        for pair in BLUES_9.windows(2) { assert!(luma(&pair[0]) > luma(&pair[1])) }
    }
}
