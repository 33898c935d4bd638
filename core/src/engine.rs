use alloc::collections::BTreeSet;
use core::num::Saturating;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Active,
    Won,
}

impl GameStatus {
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }

    pub const fn is_won(self) -> bool {
        matches!(self, Self::Won)
    }
}

/// Permission to turn a completed pair back face down, valid only for the session that issued it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClearTicket {
    generation: u32,
    tiles: [TileIndex; 2],
}

impl ClearTicket {
    pub const fn generation(self) -> u32 {
        self.generation
    }

    pub const fn tiles(self) -> [TileIndex; 2] {
        self.tiles
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlayEngine {
    difficulty: Difficulty,
    deck: Deck,
    revealed: SmallVec<[TileIndex; 2]>,
    matched: BTreeSet<TileIndex>,
    moves: Saturating<u32>,
    elapsed_secs: Saturating<u32>,
    generation: u32,
}

impl PlayEngine {
    pub fn new(difficulty: Difficulty, seed: u64) -> Self {
        Self::from_parts(difficulty, Deck::deal(difficulty, seed), 0)
    }

    /// Starts a session on a known layout, which must have the size `difficulty` calls for.
    pub fn with_deck(difficulty: Difficulty, deck: Deck) -> Result<Self> {
        if deck.len() != usize::from(difficulty.deck_size()) {
            return Err(GameError::InvalidConfiguration);
        }
        Ok(Self::from_parts(difficulty, deck, 0))
    }

    fn from_parts(difficulty: Difficulty, deck: Deck, generation: u32) -> Self {
        log::debug!(
            "new {} session #{} with {} tiles",
            difficulty,
            generation,
            deck.len()
        );
        Self {
            difficulty,
            deck,
            revealed: SmallVec::new(),
            matched: BTreeSet::new(),
            moves: Saturating(0),
            elapsed_secs: Saturating(0),
            generation,
        }
    }

    /// Deals a fresh deck and resets every counter, invalidating tickets from earlier sessions.
    pub fn start_game(&mut self, difficulty: Difficulty, seed: u64) {
        let generation = self.generation.wrapping_add(1);
        *self = Self::from_parts(difficulty, Deck::deal(difficulty, seed), generation);
    }

    pub fn start_game_named(&mut self, difficulty: &str, seed: u64) -> Result<()> {
        let difficulty = difficulty.parse()?;
        self.start_game(difficulty, seed);
        Ok(())
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn status(&self) -> GameStatus {
        if !self.deck.is_empty() && self.matched.len() == self.deck.len() {
            GameStatus::Won
        } else {
            GameStatus::Active
        }
    }

    pub fn is_won(&self) -> bool {
        self.status().is_won()
    }

    pub fn moves(&self) -> u32 {
        self.moves.0
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed_secs.0
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn deck_size(&self) -> usize {
        self.deck.len()
    }

    pub fn columns(&self) -> TileCount {
        self.difficulty.columns()
    }

    pub fn rows(&self) -> TileCount {
        self.difficulty.rows()
    }

    pub fn pairs_found(&self) -> usize {
        self.matched.len() / 2
    }

    pub fn revealed(&self) -> &[TileIndex] {
        &self.revealed
    }

    pub fn matched(&self) -> impl Iterator<Item = TileIndex> + '_ {
        self.matched.iter().copied()
    }

    pub fn is_face_up(&self, index: TileIndex) -> bool {
        self.revealed.contains(&index) || self.matched.contains(&index)
    }

    /// What the presenter may show at `index`; hidden tiles never expose their symbol.
    pub fn face_at(&self, index: TileIndex) -> TileFace {
        match self.deck.get(index) {
            Some(symbol) if self.matched.contains(&index) => TileFace::Matched(symbol),
            Some(symbol) if self.revealed.contains(&index) => TileFace::Revealed(symbol),
            _ => TileFace::Hidden,
        }
    }

    pub fn can_flip(&self, index: TileIndex) -> bool {
        self.status().is_active()
            && usize::from(index) < self.deck.len()
            && self.revealed.len() < 2
            && !self.is_face_up(index)
    }

    pub fn flip(&mut self, index: TileIndex) -> FlipOutcome {
        if !self.can_flip(index) {
            log::trace!("ignoring flip at {}", index);
            return FlipOutcome::NoChange;
        }

        self.revealed.push(index);
        let &[first, second] = self.revealed.as_slice() else {
            return FlipOutcome::Revealed;
        };

        self.moves += 1;
        let matched = self.deck[first] == self.deck[second];
        if matched {
            self.matched.insert(first);
            self.matched.insert(second);
        }

        let won = self.is_won();
        if won {
            log::debug!(
                "session #{} won in {} moves and {}s",
                self.generation,
                self.moves.0,
                self.elapsed_secs.0
            );
        }

        FlipOutcome::Paired {
            matched,
            won,
            clear: ClearTicket {
                generation: self.generation,
                tiles: [first, second],
            },
        }
    }

    /// Turns the ticket's tiles back face down; matched tiles stay visible regardless.
    pub fn clear_revealed(&mut self, ticket: ClearTicket) -> bool {
        if ticket.generation != self.generation {
            log::debug!(
                "dropping clear ticket from session #{} in session #{}",
                ticket.generation,
                self.generation
            );
            return false;
        }

        let before = self.revealed.len();
        self.revealed.retain(|index| !ticket.tiles.contains(index));
        before != self.revealed.len()
    }

    pub fn tick(&mut self) -> bool {
        if self.status().is_active() {
            self.elapsed_secs += 1;
            true
        } else {
            false
        }
    }

    pub fn observe(&self) -> Observation {
        Observation::from_engine(self)
    }
}
