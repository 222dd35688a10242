//! Celebration bursts (confetti)

use serde::Serialize;

use crate::error::GameError;

/// Celebration colors
pub const PALETTE: [&str; 5] = ["#ff4081", "#d81b60", "#ffebee", "#f8bbd0", "#c2185b"];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Origin {
    pub y: f32,
}

/// Options for one burst, serialized in the shape the page's
/// `confetti()` function expects
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Burst {
    pub particle_count: u32,
    pub spread: u32,
    pub origin: Origin,
    pub colors: [&'static str; 5],
}

impl Burst {
    /// New best score
    pub fn highscore() -> Self {
        Self {
            particle_count: 70,
            spread: 70,
            origin: Origin { y: 0.6 },
            colors: PALETTE,
        }
    }

    /// Milestone reached and the secret revealed
    pub fn milestone() -> Self {
        Self {
            particle_count: 150,
            spread: 120,
            origin: Origin { y: 0.6 },
            colors: PALETTE,
        }
    }

    pub fn to_json(&self) -> Result<String, GameError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Something that can show a burst
pub trait Celebration {
    fn celebrate(&mut self, burst: &Burst) -> Result<(), GameError>;
}

#[cfg(target_arch = "wasm32")]
pub use web::Confetti;

#[cfg(target_arch = "wasm32")]
mod web {
    use wasm_bindgen::prelude::*;

    use super::{Burst, Celebration};
    use crate::error::GameError;

    #[wasm_bindgen]
    extern "C" {
        /// Page-provided canvas-confetti
        #[wasm_bindgen(catch, js_name = confetti)]
        fn confetti_js(options: &JsValue) -> Result<JsValue, JsValue>;
    }

    /// Calls the page's global `confetti()`
    #[derive(Debug, Default)]
    pub struct Confetti;

    impl Celebration for Confetti {
        fn celebrate(&mut self, burst: &Burst) -> Result<(), GameError> {
            let options = js_sys::JSON::parse(&burst.to_json()?)
                .map_err(|e| GameError::Effect(GameError::describe(&e)))?;
            confetti_js(&options).map_err(|e| GameError::Effect(GameError::describe(&e)))?;
            Ok(())
        }
    }
}
