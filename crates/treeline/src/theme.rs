use std::fmt;

use serde::{Serialize, Serializer};

/// An opaque RGB color, rendered as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

/// Node colors, handed out in input order.
/// Chosen to stay distinct from each other on a light canvas.
pub const PALETTE: [Color; 10] = [
    Color::from_rgb(0x4E, 0x79, 0xA7), // steel blue
    Color::from_rgb(0xF2, 0x8E, 0x2B), // orange
    Color::from_rgb(0xE1, 0x57, 0x59), // red
    Color::from_rgb(0x76, 0xB7, 0xB2), // teal
    Color::from_rgb(0x59, 0xA1, 0x4F), // green
    Color::from_rgb(0xED, 0xC9, 0x48), // yellow
    Color::from_rgb(0xB0, 0x7A, 0xA1), // mauve
    Color::from_rgb(0xFF, 0x9D, 0xA7), // pink
    Color::from_rgb(0x9C, 0x75, 0x5F), // brown
    Color::from_rgb(0x6B, 0x6E, 0xCF), // indigo
];

/// Connector color when the target node has no assigned color.
pub const NEUTRAL: Color = Color::from_rgb(0x88, 0x88, 0x88);

/// Color for the node at `index` in input order. Wraps around the palette.
pub fn palette_color(index: usize) -> Color {
    PALETTE[index % PALETTE.len()]
}
