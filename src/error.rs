//! Crate error type
//!
//! Startup failures are fatal and abort initialization. Everything raised
//! after startup is best-effort: the game loop logs it and carries on.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("required element #{0} is missing")]
    MissingElement(&'static str),
    #[error("DOM error: {0}")]
    Dom(String),
    #[error("storage error: {0}")]
    Storage(String),
    #[error("audio error: {0}")]
    Audio(String),
    #[error("effect error: {0}")]
    Effect(String),
    #[error("invalid settings: {0}")]
    InvalidSettings(String),
    #[error("JSON error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
}

#[cfg(target_arch = "wasm32")]
impl GameError {
    /// Render a JS exception as a readable message
    pub fn describe(value: &wasm_bindgen::JsValue) -> String {
        value.as_string().unwrap_or_else(|| format!("{:?}", value))
    }
}
