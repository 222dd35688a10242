//! Headless host: keeps the visible state in memory and records every
//! cue and burst. Used by the native binary and by tests.

use std::collections::{BTreeMap, HashMap};

use super::{Element, Presentation};
use crate::audio::{AudioSink, Cue};
use crate::effects::{Burst, Celebration};
use crate::error::GameError;

#[derive(Debug, Default)]
pub struct HeadlessHost {
    pub texts: HashMap<Element, String>,
    pub visible: HashMap<Element, bool>,
    pub player_bottom: f32,
    pub player_sprite: String,
    /// Live obstacle elements by id → left
    pub obstacles: BTreeMap<u32, f32>,
    /// Cues played, in order
    pub cues: Vec<Cue>,
    pub bursts: Vec<Burst>,
    /// Times the secret message went from hidden to shown
    pub secret_reveals: usize,
    /// Make every cue fail
    pub fail_audio: bool,
    /// Make every burst fail
    pub fail_effects: bool,
}

impl HeadlessHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self, element: Element) -> Option<&str> {
        self.texts.get(&element).map(String::as_str)
    }

    pub fn is_visible(&self, element: Element) -> bool {
        self.visible.get(&element).copied().unwrap_or(false)
    }

    pub fn cue_count(&self, cue: Cue) -> usize {
        self.cues.iter().filter(|c| **c == cue).count()
    }
}

impl Presentation for HeadlessHost {
    fn set_text(&mut self, element: Element, text: &str) {
        self.texts.insert(element, text.to_string());
    }

    fn set_visible(&mut self, element: Element, visible: bool) {
        let was = self.visible.insert(element, visible).unwrap_or(false);
        if element == Element::SecretMessage && visible && !was {
            self.secret_reveals += 1;
        }
    }

    fn set_player_bottom(&mut self, bottom: f32) {
        self.player_bottom = bottom;
    }

    fn set_player_sprite(&mut self, path: &str) {
        self.player_sprite = path.to_string();
    }

    fn add_obstacle(&mut self, id: u32, left: f32, _bottom: f32) {
        self.obstacles.insert(id, left);
    }

    fn move_obstacle(&mut self, id: u32, left: f32) {
        if let Some(pos) = self.obstacles.get_mut(&id) {
            *pos = left;
        }
    }

    fn remove_obstacle(&mut self, id: u32) {
        self.obstacles.remove(&id);
    }
}

impl AudioSink for HeadlessHost {
    fn play(&mut self, cue: Cue) -> Result<(), GameError> {
        if self.fail_audio {
            return Err(GameError::Audio(format!("{:?} cue unavailable", cue)));
        }
        self.cues.push(cue);
        Ok(())
    }
}

impl Celebration for HeadlessHost {
    fn celebrate(&mut self, burst: &Burst) -> Result<(), GameError> {
        if self.fail_effects {
            return Err(GameError::Effect("confetti unavailable".to_string()));
        }
        self.bursts.push(burst.clone());
        Ok(())
    }
}
