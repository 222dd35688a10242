//! Game state and core simulation types

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::player::Player;
use super::spawner::Spawner;
use crate::settings::Settings;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Run ended, waiting for restart
    GameOver,
}

/// Things the simulation reports to the host, in the order they happened
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Jump impulse applied
    Jumped,
    ObstacleSpawned { id: u32, left: f32 },
    /// Obstacle removed (crossed off-screen, or cleared on restart)
    ObstacleRemoved { id: u32 },
    ScoreChanged { score: u32 },
    NewHighscore { highscore: u32 },
    /// Milestone score reached; the secret message is revealed
    MilestoneReached { score: u32 },
    SpeedIncreased { speed: f32 },
    GameOver { score: u32 },
    Restarted,
}

/// Measured play-area geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    /// Width of the play area; obstacles enter at this x
    pub play_width: f32,
    pub player_size: Vec2,
    pub obstacle_size: Vec2,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            play_width: 800.0,
            player_size: Vec2::new(40.0, 40.0),
            obstacle_size: Vec2::new(30.0, 30.0),
        }
    }
}

/// Per-run bookkeeping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    pub score: u32,
    pub phase: GamePhase,
    /// Units each obstacle moves per advancement tick
    pub obstacle_speed: f32,
    pub highscore: u32,
}

impl GameSession {
    pub fn new(obstacle_speed: f32, highscore: u32) -> Self {
        Self {
            score: 0,
            phase: GamePhase::Running,
            obstacle_speed,
            highscore,
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    pub settings: Settings,
    pub layout: Layout,
    pub session: GameSession,
    pub player: Player,
    pub spawner: Spawner,
    /// Time banked toward the next player tick
    pub(crate) frame_acc_ms: f64,
    /// Time banked toward the next obstacle advancement tick
    pub(crate) advance_acc_ms: f64,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Fresh running session with the first spawn armed
    pub fn new(settings: Settings, layout: Layout, seed: u64) -> Self {
        let mut spawner = Spawner::new(seed);
        spawner.reset();
        Self {
            session: GameSession::new(settings.base_obstacle_speed, 0),
            player: Player::grounded(settings.ground_level),
            spawner,
            settings,
            layout,
            frame_acc_ms: 0.0,
            advance_acc_ms: 0.0,
            events: Vec::new(),
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.session.is_game_over()
    }

    pub fn score(&self) -> u32 {
        self.session.score
    }

    pub fn player_rect(&self) -> Rect {
        self.player.rect(self.settings.player_left, self.layout.player_size)
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all events raised since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Jump if grounded and the run is live. Returns true if the impulse
    /// was applied.
    pub fn jump(&mut self) -> bool {
        if self.is_game_over() {
            return false;
        }
        if !self.player.jump(self.settings.jump_force) {
            return false;
        }
        self.push_event(GameEvent::Jumped);
        true
    }

    /// Running → GameOver. Halts spawning and every clock in the same step.
    /// Returns false (and does nothing) if the run was already over.
    pub fn end_run(&mut self) -> bool {
        if self.is_game_over() {
            return false;
        }
        self.session.phase = GamePhase::GameOver;
        self.spawner.halt();
        self.frame_acc_ms = 0.0;
        self.advance_acc_ms = 0.0;
        log::info!("Game over at score {}", self.session.score);
        self.push_event(GameEvent::GameOver {
            score: self.session.score,
        });
        true
    }

    /// Start a new run. Clears every obstacle, resets score, speed and the
    /// player, adopts `highscore` as the best to beat and arms an immediate
    /// first spawn.
    pub fn restart(&mut self, highscore: u32) {
        for id in self.spawner.reset() {
            self.push_event(GameEvent::ObstacleRemoved { id });
        }
        self.session = GameSession::new(self.settings.base_obstacle_speed, highscore);
        self.player = Player::grounded(self.settings.ground_level);
        self.frame_acc_ms = 0.0;
        self.advance_acc_ms = 0.0;
        self.push_event(GameEvent::Restarted);
        self.push_event(GameEvent::ScoreChanged { score: 0 });
    }
}
