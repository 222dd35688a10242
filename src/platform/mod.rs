//! Platform abstraction layer
//!
//! The game talks to the page through three seams:
//! - `Presentation`: imperative setters for the visible elements
//! - `AudioSink`: sound cues
//! - `Celebration`: confetti bursts
//!
//! `web` implements them against the DOM; `headless` records every call so
//! the full game loop runs natively.

pub mod headless;
pub mod input;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use headless::HeadlessHost;
pub use input::{InputAction, action_for_click, action_for_key};

use crate::audio::AudioSink;
use crate::effects::Celebration;

/// Fixed page elements the game drives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Player,
    Score,
    Highscore,
    SecretMessage,
    JumpButton,
    RestartButton,
}

impl Element {
    /// DOM id
    pub fn id(&self) -> &'static str {
        match self {
            Element::Player => "player",
            Element::Score => "score",
            Element::Highscore => "highscore",
            Element::SecretMessage => "secretMessage",
            Element::JumpButton => "jumpButton",
            Element::RestartButton => "restartButton",
        }
    }
}

/// Visual side of the game. No game logic lives behind this trait.
pub trait Presentation {
    fn set_text(&mut self, element: Element, text: &str);
    fn set_visible(&mut self, element: Element, visible: bool);
    /// Player height above the play-area bottom
    fn set_player_bottom(&mut self, bottom: f32);
    /// Player sprite image path
    fn set_player_sprite(&mut self, path: &str);
    fn add_obstacle(&mut self, id: u32, left: f32, bottom: f32);
    fn move_obstacle(&mut self, id: u32, left: f32);
    fn remove_obstacle(&mut self, id: u32);
}

/// Everything the game needs from its surroundings
pub trait Host: Presentation + AudioSink + Celebration {}

impl<T: Presentation + AudioSink + Celebration> Host for T {}
