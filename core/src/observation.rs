use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// What a single tile shows to the player.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileFace {
    Hidden,
    Revealed(Symbol),
    Matched(Symbol),
}

impl TileFace {
    pub const fn is_face_up(self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub const fn symbol(self) -> Option<Symbol> {
        match self {
            Self::Hidden => None,
            Self::Revealed(symbol) | Self::Matched(symbol) => Some(symbol),
        }
    }
}

impl Default for TileFace {
    fn default() -> Self {
        Self::Hidden
    }
}

/// Snapshot of everything the presenter is allowed to see.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub difficulty: Difficulty,
    pub faces: Vec<TileFace>,
    pub revealed: Vec<TileIndex>,
    pub matched: Vec<TileIndex>,
    pub moves: u32,
    pub elapsed_secs: u32,
    pub status: GameStatus,
}

impl Observation {
    pub fn from_engine(engine: &PlayEngine) -> Self {
        let faces = (0..engine.deck_size())
            .filter_map(|index| TileIndex::try_from(index).ok())
            .map(|index| engine.face_at(index))
            .collect();

        Self {
            difficulty: engine.difficulty(),
            faces,
            revealed: engine.revealed().to_vec(),
            matched: engine.matched().collect(),
            moves: engine.moves(),
            elapsed_secs: engine.elapsed_secs(),
            status: engine.status(),
        }
    }

    pub fn columns(&self) -> TileCount {
        self.difficulty.columns()
    }

    pub fn rows(&self) -> TileCount {
        self.difficulty.rows()
    }

    /// Faces laid out as `(rows, columns)`, row-major like tile indices.
    pub fn grid(&self) -> Array2<TileFace> {
        let columns = usize::from(self.columns());
        let rows = usize::from(self.rows());
        Array2::from_shape_fn((rows, columns), |(row, column)| {
            self.faces
                .get(row * columns + column)
                .copied()
                .unwrap_or_default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> PlayEngine {
        let symbols = [0, 1, 0, 1, 2, 2, 3, 3, 4, 4, 5, 5]
            .into_iter()
            .map(|id| Symbol::new(id).unwrap())
            .collect();
        PlayEngine::with_deck(Difficulty::Easy, Deck::from_symbols(symbols).unwrap()).unwrap()
    }

    #[test]
    fn hidden_tiles_do_not_leak_symbols() {
        let mut engine = engine();
        engine.flip(0);

        let obs = engine.observe();

        assert_eq!(obs.faces.len(), 12);
        assert_eq!(obs.faces[0], TileFace::Revealed(Symbol::new(0).unwrap()));
        assert!(obs.faces[1..].iter().all(|face| face.symbol().is_none()));
        assert_eq!(obs.revealed, [0]);
        assert!(obs.matched.is_empty());
    }

    #[test]
    fn matched_tiles_are_reported() {
        let mut engine = engine();
        engine.flip(0);
        engine.flip(2);
        engine.tick();

        let obs = engine.observe();

        assert_eq!(obs.matched, [0, 2]);
        assert_eq!(obs.faces[2], TileFace::Matched(Symbol::new(0).unwrap()));
        assert_eq!(obs.moves, 1);
        assert_eq!(obs.elapsed_secs, 1);
        assert_eq!(obs.status, GameStatus::Active);
    }

    #[test]
    fn grid_is_row_major_with_difficulty_columns() {
        let mut engine = engine();
        engine.flip(4);

        let grid = engine.observe().grid();

        assert_eq!(grid.dim(), (4, 3));
        assert_eq!(grid[(1, 1)], TileFace::Revealed(Symbol::new(2).unwrap()));
        assert_eq!(grid[(0, 0)], TileFace::Hidden);
    }
}
