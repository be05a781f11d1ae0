use alloc::vec::Vec;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::*;

/// Glyph drawn on the face of a tile.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    Circle,
    Square,
    Diamond,
    Triangle,
    Star,
    Plus,
    Cross,
    Hexagon,
}

impl Shape {
    pub const ALL: [Shape; 8] = [
        Shape::Circle,
        Shape::Square,
        Shape::Diamond,
        Shape::Triangle,
        Shape::Star,
        Shape::Plus,
        Shape::Cross,
        Shape::Hexagon,
    ];

    pub const fn name(self) -> &'static str {
        use Shape::*;
        match self {
            Circle => "circle",
            Square => "square",
            Diamond => "diamond",
            Triangle => "triangle",
            Star => "star",
            Plus => "plus",
            Cross => "cross",
            Hexagon => "hexagon",
        }
    }
}

/// Palette color a glyph is filled with.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Rose,
    Orange,
    Yellow,
    Lime,
    Emerald,
    Cyan,
    Blue,
    Violet,
    Pink,
}

impl Color {
    pub const ALL: [Color; 9] = [
        Color::Rose,
        Color::Orange,
        Color::Yellow,
        Color::Lime,
        Color::Emerald,
        Color::Cyan,
        Color::Blue,
        Color::Violet,
        Color::Pink,
    ];

    pub const fn name(self) -> &'static str {
        use Color::*;
        match self {
            Rose => "rose",
            Orange => "orange",
            Yellow => "yellow",
            Lime => "lime",
            Emerald => "emerald",
            Cyan => "cyan",
            Blue => "blue",
            Violet => "violet",
            Pink => "pink",
        }
    }

    pub const fn rgb(self) -> (u8, u8, u8) {
        use Color::*;
        match self {
            Rose => (0xf4, 0x3f, 0x5e),
            Orange => (0xf9, 0x73, 0x16),
            Yellow => (0xea, 0xb3, 0x08),
            Lime => (0x84, 0xcc, 0x16),
            Emerald => (0x10, 0xb9, 0x81),
            Cyan => (0x06, 0xb6, 0xd4),
            Blue => (0x3b, 0x82, 0xf6),
            Violet => (0x8b, 0x5c, 0xf6),
            Pink => (0xec, 0x48, 0x99),
        }
    }

    pub fn hex(self) -> alloc::string::String {
        let (r, g, b) = self.rgb();
        alloc::format!("#{r:02x}{g:02x}{b:02x}")
    }
}

/// What makes two tiles a pair: same shape and same color.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identity {
    pub shape: Shape,
    pub color: Color,
}

impl Identity {
    pub const fn new(shape: Shape, color: Color) -> Self {
        Self { shape, color }
    }
}

pub const IDENTITY_COUNT: usize = Shape::ALL.len() * Color::ALL.len();

/// Every identity, shape-major: all colors of the first shape, then the next shape, and so on.
///
/// The order is part of the seeding contract: a given seed selects identities by index into this list.
pub fn all_identities() -> Vec<Identity> {
    Shape::ALL
        .iter()
        .flat_map(|&shape| Color::ALL.iter().map(move |&color| Identity::new(shape, color)))
        .collect()
}

/// Draws `pairs` distinct identities without replacement.
///
/// Nothing is drawn from `rng` when the catalog is too small.
pub fn sample_identities<R: Rng + ?Sized>(rng: &mut R, pairs: usize) -> Result<Vec<Identity>> {
    if pairs > IDENTITY_COUNT {
        return Err(ConfigError::InsufficientIdentities {
            needed: pairs,
            available: IDENTITY_COUNT,
        }
        .into());
    }

    let catalog = all_identities();
    Ok(rand::seq::index::sample(rng, catalog.len(), pairs)
        .into_iter()
        .map(|index| catalog[index])
        .collect())
}
