//! DOM host
//!
//! Drives the page elements by id, creates obstacle elements inside the
//! game container and measures the layout the simulation runs in.

use std::collections::HashMap;

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use super::{Element, Presentation};
use crate::audio::{AudioSink, Cue, WebAudio};
use crate::effects::{Burst, Celebration, Confetti};
use crate::error::GameError;
use crate::settings::Settings;
use crate::sim::Layout;

const CONTAINER_ID: &str = "gameContainer";
const OBSTACLE_CLASS: &str = "obstacle";
const OBSTACLE_GLYPH: &str = "\u{1F494}";

pub struct WebHost {
    document: Document,
    container: HtmlElement,
    player: HtmlElement,
    jump_button: HtmlElement,
    restart_button: HtmlElement,
    score: Option<HtmlElement>,
    highscore: Option<HtmlElement>,
    secret: Option<HtmlElement>,
    obstacles: HashMap<u32, HtmlElement>,
    audio: WebAudio,
    confetti: Confetti,
}

fn find(document: &Document, id: &str) -> Option<HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

fn require(document: &Document, id: &'static str) -> Result<HtmlElement, GameError> {
    find(document, id).ok_or(GameError::MissingElement(id))
}

fn set_style(el: &HtmlElement, property: &str, value: &str) {
    let _ = el.style().set_property(property, value);
}

impl WebHost {
    /// Bind to the page. Fails if the player, game container or jump
    /// control is missing.
    pub fn attach(settings: &Settings) -> Result<Self, GameError> {
        let window = web_sys::window().ok_or(GameError::NoWindow)?;
        let document = window.document().ok_or(GameError::NoDocument)?;

        let player = require(&document, Element::Player.id())?;
        let container = require(&document, CONTAINER_ID)?;
        let jump_button = require(&document, Element::JumpButton.id())?;
        // The player only ever moves vertically
        set_style(&player, "left", &format!("{}px", settings.player_left));

        let restart_button = match find(&document, Element::RestartButton.id()) {
            Some(btn) => btn,
            None => create_restart_button(&document, &jump_button)?,
        };

        let audio = WebAudio::from_document(&document, settings.effective_volume());

        Ok(Self {
            score: find(&document, Element::Score.id()),
            highscore: find(&document, Element::Highscore.id()),
            secret: find(&document, Element::SecretMessage.id()),
            document,
            container,
            player,
            jump_button,
            restart_button,
            obstacles: HashMap::new(),
            audio,
            confetti: Confetti,
        })
    }

    pub fn element(&self, element: Element) -> Option<&HtmlElement> {
        match element {
            Element::Player => Some(&self.player),
            Element::Score => self.score.as_ref(),
            Element::Highscore => self.highscore.as_ref(),
            Element::SecretMessage => self.secret.as_ref(),
            Element::JumpButton => Some(&self.jump_button),
            Element::RestartButton => Some(&self.restart_button),
        }
    }

    /// Measure the play area, the player sprite and an obstacle marker
    pub fn measure_layout(&self) -> Layout {
        let defaults = Layout::default();
        let measured = |el: &HtmlElement, fallback: Vec2| {
            let size = Vec2::new(el.offset_width() as f32, el.offset_height() as f32);
            if size.x > 0.0 && size.y > 0.0 { size } else { fallback }
        };

        let play_width = match self.container.offset_width() {
            w if w > 0 => w as f32,
            _ => defaults.play_width,
        };
        let player_size = measured(&self.player, defaults.player_size);

        // Measure a throwaway marker so the hitbox matches what is drawn
        let obstacle_size = match self.create_obstacle_element(play_width, 0.0) {
            Ok(probe) => {
                let size = measured(&probe, defaults.obstacle_size);
                probe.remove();
                size
            }
            Err(e) => {
                log::warn!("Obstacle probe failed: {}", e);
                defaults.obstacle_size
            }
        };

        let layout = Layout {
            play_width,
            player_size,
            obstacle_size,
        };
        log::info!("Measured layout: {:?}", layout);
        layout
    }

    fn create_obstacle_element(&self, left: f32, bottom: f32) -> Result<HtmlElement, GameError> {
        let el = self
            .document
            .create_element("div")
            .map_err(|e| GameError::Dom(GameError::describe(&e)))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| GameError::Dom("div is not an HtmlElement".to_string()))?;
        el.set_class_name(OBSTACLE_CLASS);
        el.set_text_content(Some(OBSTACLE_GLYPH));
        set_style(&el, "left", &format!("{}px", left));
        set_style(&el, "bottom", &format!("{}px", bottom));
        self.container
            .append_child(&el)
            .map_err(|e| GameError::Dom(GameError::describe(&e)))?;
        Ok(el)
    }
}

/// The page may omit the restart control; build one after the jump control
fn create_restart_button(document: &Document, jump_button: &HtmlElement) -> Result<HtmlElement, GameError> {
    let btn = document
        .create_element("button")
        .map_err(|e| GameError::Dom(GameError::describe(&e)))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| GameError::Dom("button is not an HtmlElement".to_string()))?;
    btn.set_id(Element::RestartButton.id());
    btn.set_text_content(Some("Play Again"));
    for (property, value) in [
        ("display", "none"),
        ("background", "#ff4081"),
        ("color", "white"),
        ("border", "none"),
        ("padding", "15px 30px"),
        ("border-radius", "50px"),
        ("font-size", "1.2rem"),
        ("margin", "1rem auto"),
        ("cursor", "pointer"),
    ] {
        set_style(&btn, property, value);
    }
    jump_button
        .after_with_node_1(&btn)
        .map_err(|e| GameError::Dom(GameError::describe(&e)))?;
    log::info!("Created restart button");
    Ok(btn)
}

impl Presentation for WebHost {
    fn set_text(&mut self, element: Element, text: &str) {
        if let Some(el) = self.element(element) {
            el.set_text_content(Some(text));
        }
    }

    fn set_visible(&mut self, element: Element, visible: bool) {
        if let Some(el) = self.element(element) {
            set_style(el, "display", if visible { "block" } else { "none" });
        }
    }

    fn set_player_bottom(&mut self, bottom: f32) {
        set_style(&self.player, "bottom", &format!("{}px", bottom));
    }

    fn set_player_sprite(&mut self, path: &str) {
        set_style(&self.player, "background-image", &format!("url('{}')", path));
    }

    fn add_obstacle(&mut self, id: u32, left: f32, bottom: f32) {
        match self.create_obstacle_element(left, bottom) {
            Ok(el) => {
                self.obstacles.insert(id, el);
            }
            Err(e) => log::warn!("Obstacle {} not drawn: {}", id, e),
        }
    }

    fn move_obstacle(&mut self, id: u32, left: f32) {
        if let Some(el) = self.obstacles.get(&id) {
            set_style(el, "left", &format!("{}px", left));
        }
    }

    fn remove_obstacle(&mut self, id: u32) {
        if let Some(el) = self.obstacles.remove(&id) {
            el.remove();
        }
    }
}

impl AudioSink for WebHost {
    fn play(&mut self, cue: Cue) -> Result<(), GameError> {
        self.audio.play(cue)
    }
}

impl Celebration for WebHost {
    fn celebrate(&mut self, burst: &Burst) -> Result<(), GameError> {
        self.confetti.celebrate(burst)
    }
}
