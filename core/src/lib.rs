#![no_std]

extern crate alloc;

use alloc::string::String;
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

pub use deck::*;
pub use engine::*;
pub use error::*;
pub use observation::*;
pub use share::*;
pub use types::*;

mod deck;
mod engine;
mod error;
mod observation;
mod share;
mod types;

/// How long a completed pair stays face up before the presenter applies its [`ClearTicket`].
pub const CLEAR_DELAY_MS: u32 = 800;

/// Period of the elapsed-time clock.
pub const TICK_INTERVAL_MS: u32 = 1000;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    pub const fn pair_count(self) -> TileCount {
        use Difficulty::*;
        match self {
            Easy => 6,
            Medium => 8,
            Hard => 12,
        }
    }

    pub const fn columns(self) -> TileCount {
        use Difficulty::*;
        match self {
            Easy => 3,
            Medium => 4,
            Hard => 6,
        }
    }

    pub const fn deck_size(self) -> TileCount {
        self.pair_count() * 2
    }

    pub const fn rows(self) -> TileCount {
        self.deck_size().div_ceil(self.columns())
    }

    pub const fn name(self) -> &'static str {
        use Difficulty::*;
        match self {
            Easy => "easy",
            Medium => "medium",
            Hard => "hard",
        }
    }

    /// Upper-case name, as embedded in share messages.
    pub fn shout(self) -> String {
        self.name().to_uppercase()
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Medium
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|difficulty| difficulty.name().eq_ignore_ascii_case(s.trim()))
            .ok_or(GameError::InvalidConfiguration)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum FlipOutcome {
    NoChange,
    Revealed,
    Paired {
        matched: bool,
        won: bool,
        clear: ClearTicket,
    },
}

impl FlipOutcome {
    pub const fn has_update(self) -> bool {
        use FlipOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            Paired { .. } => true,
        }
    }

    pub const fn clear_ticket(self) -> Option<ClearTicket> {
        match self {
            Self::Paired { clear, .. } => Some(clear),
            _ => None,
        }
    }

    pub const fn is_won(self) -> bool {
        matches!(self, Self::Paired { won: true, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_tables_are_consistent() {
        for difficulty in Difficulty::ALL {
            assert_eq!(difficulty.deck_size(), difficulty.pair_count() * 2);
            assert_eq!(
                difficulty.rows() * difficulty.columns(),
                difficulty.deck_size()
            );
        }
        assert_eq!(Difficulty::Easy.deck_size(), 12);
        assert_eq!(Difficulty::Medium.columns(), 4);
        assert_eq!(Difficulty::Hard.rows(), 4);
    }

    #[test]
    fn parse_difficulty_ignores_case() {
        assert_eq!("easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!("Medium".parse::<Difficulty>(), Ok(Difficulty::Medium));
        assert_eq!(" HARD ".parse::<Difficulty>(), Ok(Difficulty::Hard));
    }

    #[test]
    fn unknown_difficulty_is_invalid_configuration() {
        assert_eq!(
            "nightmare".parse::<Difficulty>(),
            Err(GameError::InvalidConfiguration)
        );
        assert_eq!("".parse::<Difficulty>(), Err(GameError::InvalidConfiguration));
    }

    #[test]
    fn shout_uppercases_name() {
        assert_eq!(Difficulty::Hard.shout(), "HARD");
    }

    #[test]
    fn difficulty_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Difficulty::Easy).unwrap(),
            "\"easy\""
        );
        assert_eq!(
            serde_json::from_str::<Difficulty>("\"hard\"").unwrap(),
            Difficulty::Hard
        );
    }
}
