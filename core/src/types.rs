use serde::{Deserialize, Serialize};

/// Position of a tile in the deck, row-major across the grid.
pub type TileIndex = u8;

/// Count type used for pair counts, grid dimensions and deck sizes.
pub type TileCount = u8;

/// One of the distinct faces a pair of tiles can share.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Symbol(u8);

impl Symbol {
    const GLYPHS: [&'static str; 12] = [
        "🍎", "🍌", "🍇", "🍊", "🍒", "🍓", "🥝", "🍍", "🍉", "🍑", "🍋", "🥥",
    ];

    /// Number of distinct symbols available, enough for the largest deck.
    pub const COUNT: TileCount = Self::GLYPHS.len() as TileCount;

    pub const fn new(id: u8) -> Option<Self> {
        if id < Self::COUNT {
            Some(Self(id))
        } else {
            None
        }
    }

    pub const fn id(self) -> u8 {
        self.0
    }

    pub const fn glyph(self) -> &'static str {
        Self::GLYPHS[self.0 as usize]
    }

    /// The first `count` symbols, clamped to [`Symbol::COUNT`].
    pub fn first(count: TileCount) -> impl Iterator<Item = Self> {
        (0..count.min(Self::COUNT)).map(Self)
    }
}
