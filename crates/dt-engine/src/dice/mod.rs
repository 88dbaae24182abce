//! Die kinds, roll requests and roll resolution.
//!
//! Every die kind carries its side count, the vertex count of the polygon
//! used to draw it, and its face color. Custom dice fall back to a white
//! 12-gon.

pub mod resolver;
pub mod roll;

pub use resolver::{RollResolver, parse_forced_values, parse_modifier, parse_quantity};
pub use roll::{RollMode, RollOutcome, RollRequest};

use serde::{Deserialize, Serialize};

/// A polyhedral die type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DieKind {
    /// Four-sided die.
    D4,
    /// Six-sided die.
    D6,
    /// Eight-sided die.
    D8,
    /// Ten-sided die.
    D10,
    /// Twelve-sided die.
    D12,
    /// Twenty-sided die.
    D20,
    /// Percentile die (1-100).
    D100,
    /// A die with a custom number of sides.
    Custom(u32),
}

/// An opaque RGB face color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DieColor {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl DieColor {
    /// Fallback color for dice without a table entry.
    pub const WHITE: Self = Self::rgb(0xff, 0xff, 0xff);

    /// Build a color from its channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb` form.
    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl DieKind {
    /// The seven standard dice, in selector order.
    pub const STANDARD: [Self; 7] = [
        Self::D4,
        Self::D6,
        Self::D8,
        Self::D10,
        Self::D12,
        Self::D20,
        Self::D100,
    ];

    /// Returns the number of sides on this die.
    pub fn sides(self) -> u32 {
        match self {
            Self::D4 => 4,
            Self::D6 => 6,
            Self::D8 => 8,
            Self::D10 => 10,
            Self::D12 => 12,
            Self::D20 => 20,
            Self::D100 => 100,
            Self::Custom(n) => n,
        }
    }

    /// Number of polygon vertices used to draw this die's tile.
    pub fn sprite_sides(self) -> u32 {
        match self {
            Self::D4 => 3,
            Self::D6 => 4,
            Self::D8 | Self::D10 | Self::D12 => 6,
            Self::D20 | Self::D100 => 8,
            Self::Custom(_) => 12,
        }
    }

    /// Face color of this die's tile.
    pub fn color(self) -> DieColor {
        match self {
            Self::D4 => DieColor::rgb(0xe0, 0xf7, 0xfa),
            Self::D6 => DieColor::rgb(0xff, 0xf9, 0xc4),
            Self::D8 => DieColor::rgb(0xff, 0xe0, 0xb2),
            Self::D10 => DieColor::rgb(0xdc, 0xed, 0xc8),
            Self::D12 => DieColor::rgb(0xd1, 0xc4, 0xe9),
            Self::D20 => DieColor::rgb(0xff, 0xcd, 0xd2),
            Self::D100 => DieColor::rgb(0xc8, 0xe6, 0xc9),
            Self::Custom(_) => DieColor::WHITE,
        }
    }

    /// Map a side count to its die kind.
    pub fn from_sides(sides: u32) -> Self {
        match sides {
            4 => Self::D4,
            6 => Self::D6,
            8 => Self::D8,
            10 => Self::D10,
            12 => Self::D12,
            20 => Self::D20,
            100 => Self::D100,
            n => Self::Custom(n),
        }
    }

    /// Parse a die from a string like "d20", "d6", "d100".
    pub fn from_str_tag(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        let num = s.strip_prefix('d')?.parse::<u32>().ok()?;
        if num >= 2 {
            Some(Self::from_sides(num))
        } else {
            None
        }
    }
}

impl std::fmt::Display for DieKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "d{}", self.sides())
    }
}
