use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

static HEX_COLOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#([0-9A-Fa-f]{2})([0-9A-Fa-f]{2})([0-9A-Fa-f]{2})$").unwrap()
});

/// An opaque 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0x00, 0x00, 0x00);
    pub const WHITE: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#RRGGBB` (case-insensitive). Anything else is rejected.
    pub fn parse(color: &str) -> Option<Self> {
        let caps = HEX_COLOR.captures(color.trim())?;
        let channel = |i: usize| u8::from_str_radix(&caps[i], 16).ok();
        Some(Self::new(channel(1)?, channel(2)?, channel(3)?))
    }

    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

// Config files carry colors as hex strings
impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Rgb::parse(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid color '{}', expected #RRGGBB", raw)))
    }
}

/// Wedge fill colors, in display order
pub const PALETTE: [Rgb; 9] = [
    Rgb::new(0xF0, 0xFF, 0xFF), // Azure
    Rgb::new(0xFA, 0xEB, 0xD7), // AntiqueWhite
    Rgb::new(0x5F, 0x9E, 0xA0), // CadetBlue
    Rgb::new(0xDD, 0xA0, 0xDD), // Plum
    Rgb::new(0xFF, 0xF0, 0xF5), // LavenderBlush
    Rgb::new(0xAF, 0xEE, 0xEE), // PaleTurquoise
    Rgb::new(0x8F, 0xBC, 0x8F), // DarkSeaGreen
    Rgb::new(0xFF, 0xFA, 0xF0), // FloralWhite
    Rgb::new(0xD2, 0xB4, 0x8C), // Tan
];

/// Fill color for the wedge at `index`, cycling through the palette.
#[inline]
pub fn palette_color(index: usize) -> Rgb {
    PALETTE[index % PALETTE.len()]
}
