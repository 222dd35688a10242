//! Game loop and host glue
//!
//! `Game` owns the simulation state, the highscore store and the host. Each
//! frame it advances the simulation, then turns the raised `GameEvent`s into
//! presentation updates, sound cues, confetti and highscore writes. Cue and
//! confetti failures are logged and dropped.

use crate::audio::Cue;
use crate::consts::{DEFEAT_SPRITE, RUN_SPRITE};
use crate::effects::Burst;
use crate::error::GameError;
use crate::highscores::{load_highscore, record_highscore};
use crate::persistence::KeyValueStore;
use crate::platform::{Element, Host, InputAction};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, Layout, advance, autopilot};

pub fn score_text(score: u32) -> String {
    format!("Score: {}", score)
}

pub fn highscore_text(highscore: u32) -> String {
    format!("Highscore: {}", highscore)
}

/// Log a failed best-effort side effect and move on
fn best_effort(what: &str, result: Result<(), GameError>) {
    if let Err(e) = result {
        log::warn!("{} failed: {}", what, e);
    }
}

pub struct Game<S: KeyValueStore, H: Host> {
    state: GameState,
    store: S,
    host: H,
    autopilot: bool,
    /// The autopilot played some part of the current run
    assisted: bool,
}

impl<S: KeyValueStore, H: Host> Game<S, H> {
    /// Build a game. Call `start` to begin the first run.
    pub fn new(settings: Settings, layout: Layout, seed: u64, store: S, host: H) -> Result<Self, GameError> {
        settings.validate()?;
        Ok(Self {
            state: GameState::new(settings, layout, seed),
            store,
            host,
            autopilot: false,
            assisted: false,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    pub fn autopilot(&self) -> bool {
        self.autopilot
    }

    /// Runs the autopilot touched never count toward the stored best
    pub fn is_assisted(&self) -> bool {
        self.assisted
    }

    pub fn set_autopilot(&mut self, on: bool) {
        self.autopilot = on;
        self.assisted |= on;
        log::info!("Autopilot: {}", on);
    }

    /// Begin a run: clear the field, re-read the best score and reset the
    /// readouts. The first obstacle appears on the next frame.
    pub fn start(&mut self) {
        let highscore = load_highscore(&self.store);
        self.assisted = self.autopilot;
        self.state.restart(highscore);
        self.host.set_text(Element::Highscore, &highscore_text(highscore));
        self.apply_events();
        self.sync_view();
        log::info!("Run started (highscore {})", highscore);
    }

    /// GameOver → Running. Ignored while a run is live.
    pub fn restart(&mut self) -> bool {
        if !self.is_game_over() {
            return false;
        }
        self.start();
        true
    }

    /// Jump if grounded and the run is live
    pub fn jump(&mut self) -> bool {
        let jumped = self.state.jump();
        self.apply_events();
        jumped
    }

    /// Route an input action. Returns true when the frame loop has to be
    /// started again (after a restart).
    pub fn handle(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::Jump => {
                self.jump();
                false
            }
            InputAction::Restart => self.restart(),
            InputAction::ToggleAutopilot => {
                self.set_autopilot(!self.autopilot);
                false
            }
        }
    }

    /// Per-frame update. Returns true while another frame should be
    /// requested; false once the run is over.
    pub fn frame(&mut self, elapsed_ms: f64) -> bool {
        if self.is_game_over() {
            return false;
        }
        if self.autopilot && autopilot::should_jump(&self.state) {
            self.state.jump();
        }
        let running = advance(&mut self.state, elapsed_ms);
        self.apply_events();
        self.sync_view();
        running
    }

    fn apply_events(&mut self) {
        for event in self.state.drain_events() {
            match event {
                GameEvent::Jumped => best_effort("Jump cue", self.host.play(Cue::Jump)),
                GameEvent::ObstacleSpawned { id, left } => {
                    self.host
                        .add_obstacle(id, left, self.state.settings.ground_level);
                }
                GameEvent::ObstacleRemoved { id } => self.host.remove_obstacle(id),
                GameEvent::ScoreChanged { score } => {
                    self.host.set_text(Element::Score, &score_text(score));
                }
                GameEvent::NewHighscore { highscore } if self.assisted => {
                    log::debug!("Assisted run reached {}, best not updated", highscore);
                }
                GameEvent::NewHighscore { highscore } => {
                    record_highscore(&mut self.store, highscore);
                    self.host
                        .set_text(Element::Highscore, &highscore_text(highscore));
                    best_effort("Highscore confetti", self.host.celebrate(&Burst::highscore()));
                }
                GameEvent::MilestoneReached { .. } => {
                    self.host.set_visible(Element::SecretMessage, true);
                    best_effort("Milestone confetti", self.host.celebrate(&Burst::milestone()));
                }
                GameEvent::SpeedIncreased { .. } => {
                    best_effort("Shield cue", self.host.play(Cue::Shield));
                }
                GameEvent::GameOver { .. } => {
                    best_effort("Game over cue", self.host.play(Cue::GameOver));
                    self.host.set_player_sprite(DEFEAT_SPRITE);
                    self.host.set_visible(Element::RestartButton, true);
                }
                GameEvent::Restarted => {
                    self.host.set_visible(Element::RestartButton, false);
                    self.host.set_visible(Element::SecretMessage, false);
                    self.host.set_player_sprite(RUN_SPRITE);
                }
            }
        }
    }

    /// Push continuous state (player height, obstacle positions) to the view
    fn sync_view(&mut self) {
        self.host.set_player_bottom(self.state.player.bottom);
        for obstacle in self.state.spawner.obstacles() {
            self.host.move_obstacle(obstacle.id, obstacle.left);
        }
    }

    /// End the run as if the player had been hit
    pub fn game_over(&mut self) -> bool {
        let ended = self.state.end_run();
        self.apply_events();
        ended
    }
}
