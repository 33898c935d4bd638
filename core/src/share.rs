use alloc::format;
use alloc::string::String;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::*;

/// Result of a won game, the payload of every share message.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSummary {
    pub difficulty: Difficulty,
    pub moves: u32,
    pub elapsed_secs: u32,
}

impl ScoreSummary {
    /// Only a won session has a score to share.
    pub fn from_engine(engine: &PlayEngine) -> Option<Self> {
        engine.is_won().then(|| Self {
            difficulty: engine.difficulty(),
            moves: engine.moves(),
            elapsed_secs: engine.elapsed_secs(),
        })
    }

    pub fn message(&self, url: &str) -> ShareMessage {
        ShareMessage {
            title: String::from("Memory Game Score"),
            text: format!(
                "🎉 I just won the Memory Game on {} mode in {} moves and {}s! 🌀⏱\nPlay now and beat my score! 🔗",
                self.difficulty.shout(),
                self.moves,
                self.elapsed_secs
            ),
            url: String::from(url),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareMessage {
    pub title: String,
    pub text: String,
    pub url: String,
}

/// How a message left the app.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Shared {
    /// Handed to the platform share sheet.
    Sheet,
    /// Opened as a pre-filled post link.
    Link,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShareError {
    #[error("Sharing is not available here")]
    Unavailable,
    #[error("Sharing failed: {0}")]
    Failed(String),
}

pub trait ShareCapability {
    fn share(&self, message: &ShareMessage) -> core::result::Result<Shared, ShareError>;
}

/// Tries `primary` and only falls back when it is unavailable, not when it fails.
pub fn share_with_fallback(
    primary: &impl ShareCapability,
    fallback: &impl ShareCapability,
    message: &ShareMessage,
) -> core::result::Result<Shared, ShareError> {
    match primary.share(message) {
        Err(ShareError::Unavailable) => {
            log::debug!("primary share unavailable, falling back");
            fallback.share(message)
        }
        other => other,
    }
}
