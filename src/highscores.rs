//! Persisted best score and medal tiers
//!
//! The best score is monotonically non-decreasing across sessions. Storage
//! failures degrade to "best unknown" (0); the simulation never special-cases
//! that beyond treating it as the initial value.

use serde::{Deserialize, Serialize};

/// Best score across sessions
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct BestScore {
    pub score: u32,
}

impl BestScore {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "flappy_fury_best";

    pub fn new() -> Self {
        Self { score: 0 }
    }

    /// Record a score; returns true when it set a new best
    pub fn update(&mut self, score: u32) -> bool {
        if score > self.score {
            self.score = score;
            true
        } else {
            false
        }
    }

    /// Load the best score from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(best) = serde_json::from_str::<BestScore>(&json) {
                    log::info!("Loaded best score: {}", best.score);
                    return best;
                }
            }
        }

        log::info!("No stored best score, starting fresh");
        Self::new()
    }

    /// Save the best score to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Best score saved ({})", self.score);
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::new()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

/// Medal awarded on the game-over screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Medal {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl Medal {
    /// Tier for a final score, if it earned one
    pub fn for_score(score: u32) -> Option<Medal> {
        match score {
            0..=9 => None,
            10..=19 => Some(Medal::Bronze),
            20..=29 => Some(Medal::Silver),
            30..=39 => Some(Medal::Gold),
            _ => Some(Medal::Platinum),
        }
    }

    /// CSS class fragment for the game-over screen
    pub fn as_str(&self) -> &'static str {
        match self {
            Medal::Bronze => "bronze",
            Medal::Silver => "silver",
            Medal::Gold => "gold",
            Medal::Platinum => "platinum",
        }
    }
}
