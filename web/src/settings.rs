use crate::utils::*;
use memento_core::Difficulty;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub(crate) struct Settings {
    pub difficulty: Difficulty,
}

impl StorageKey for Settings {
    const KEY: &'static str = "memento:settings";
}

/// Select option text, e.g. `Easy (3x4)`.
pub(crate) fn difficulty_label(difficulty: Difficulty) -> String {
    use Difficulty::*;
    let title = match difficulty {
        Easy => "Easy",
        Medium => "Medium",
        Hard => "Hard",
    };
    format!("{} ({}x{})", title, difficulty.columns(), difficulty.rows())
}
