use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use core::ops::Index;
use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::*;

/// Fisher–Yates: every permutation of `items` is equally likely.
pub fn shuffle<T>(items: &mut [T], rng: &mut SmallRng) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

/// The face-down layout of one session: every symbol exactly twice.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    symbols: Vec<Symbol>,
}

impl Deck {
    pub fn deal(difficulty: Difficulty, seed: u64) -> Self {
        let mut symbols: Vec<Symbol> = Symbol::first(difficulty.pair_count())
            .flat_map(|symbol| [symbol, symbol])
            .collect();

        let mut rng = SmallRng::seed_from_u64(seed);
        shuffle(&mut symbols, &mut rng);

        if symbols.len() != usize::from(difficulty.deck_size()) {
            log::warn!(
                "Dealt {} tiles for {} but expected {}",
                symbols.len(),
                difficulty,
                difficulty.deck_size()
            );
        }
        Self { symbols }
    }

    /// Builds a deck from a fixed layout, which must pair every symbol exactly once.
    pub fn from_symbols(symbols: Vec<Symbol>) -> Result<Self> {
        if symbols.is_empty() || symbols.len() > usize::from(TileIndex::MAX) {
            return Err(GameError::InvalidConfiguration);
        }

        let mut counts = BTreeMap::<Symbol, usize>::new();
        for &symbol in &symbols {
            *counts.entry(symbol).or_default() += 1;
        }
        if counts.values().any(|&count| count != 2) {
            return Err(GameError::InvalidConfiguration);
        }

        Ok(Self { symbols })
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn pair_count(&self) -> usize {
        self.symbols.len() / 2
    }

    pub fn get(&self, index: TileIndex) -> Option<Symbol> {
        self.symbols.get(usize::from(index)).copied()
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }
}

impl Index<TileIndex> for Deck {
    type Output = Symbol;

    fn index(&self, index: TileIndex) -> &Self::Output {
        &self.symbols[usize::from(index)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn symbol(id: u8) -> Symbol {
        Symbol::new(id).unwrap()
    }

    fn sorted(mut symbols: Vec<Symbol>) -> Vec<Symbol> {
        symbols.sort();
        symbols
    }

    #[test]
    fn deal_pairs_every_symbol_for_each_difficulty() {
        for difficulty in Difficulty::ALL {
            let deck = Deck::deal(difficulty, 7);

            assert_eq!(deck.len(), usize::from(difficulty.deck_size()));
            assert_eq!(deck.pair_count(), usize::from(difficulty.pair_count()));

            let expected: Vec<Symbol> = Symbol::first(difficulty.pair_count())
                .flat_map(|symbol| [symbol, symbol])
                .collect();
            assert_eq!(sorted(deck.symbols().to_vec()), expected);
        }
    }

    #[test]
    fn deal_is_reproducible_from_seed() {
        assert_eq!(
            Deck::deal(Difficulty::Hard, 42),
            Deck::deal(Difficulty::Hard, 42)
        );
        let reference = Deck::deal(Difficulty::Hard, 42);
        assert!(
            (0..8).any(|seed| Deck::deal(Difficulty::Hard, seed) != reference),
            "different seeds should give different layouts"
        );
    }

    #[test]
    fn shuffle_keeps_the_multiset() {
        let mut rng = SmallRng::seed_from_u64(3);
        let original: Vec<u8> = vec![1, 1, 2, 3, 5, 8, 13, 21];
        let mut items = original.clone();

        for _ in 0..50 {
            shuffle(&mut items, &mut rng);
            let mut check = items.clone();
            check.sort();
            assert_eq!(check, original);
        }
    }

    #[test]
    fn shuffle_handles_trivial_slices() {
        let mut rng = SmallRng::seed_from_u64(0);
        let mut empty: [u8; 0] = [];
        shuffle(&mut empty, &mut rng);

        let mut single = [9];
        shuffle(&mut single, &mut rng);
        assert_eq!(single, [9]);
    }

    #[test]
    fn shuffle_has_no_positional_bias() {
        const TRIALS: usize = 24_000;
        let mut rng = SmallRng::seed_from_u64(0x5eed);
        let mut positions = [[0usize; 4]; 4];
        let mut permutations = BTreeMap::<[u8; 4], usize>::new();

        for _ in 0..TRIALS {
            let mut items = [0u8, 1, 2, 3];
            shuffle(&mut items, &mut rng);
            for (position, &item) in items.iter().enumerate() {
                positions[usize::from(item)][position] += 1;
            }
            *permutations.entry(items).or_default() += 1;
        }

        // 6000 expected per cell, 1000 per permutation
        for row in positions {
            for count in row {
                assert!((5_400..=6_600).contains(&count), "biased position count {count}");
            }
        }
        assert_eq!(permutations.len(), 24);
        for &count in permutations.values() {
            assert!((800..=1_200).contains(&count), "biased permutation count {count}");
        }
    }

    #[test]
    fn from_symbols_requires_exact_pairs() {
        assert!(Deck::from_symbols(vec![symbol(0), symbol(1), symbol(1), symbol(0)]).is_ok());
        assert_eq!(
            Deck::from_symbols(vec![symbol(0), symbol(0), symbol(0), symbol(1)]),
            Err(GameError::InvalidConfiguration)
        );
        assert_eq!(
            Deck::from_symbols(vec![symbol(0), symbol(1)]),
            Err(GameError::InvalidConfiguration)
        );
        assert_eq!(Deck::from_symbols(vec![]), Err(GameError::InvalidConfiguration));
    }
}
