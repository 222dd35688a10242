//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Fixed tick periods only
//! - Seeded RNG only
//! - Obstacles iterated in spawn order
//! - No rendering, audio or storage dependencies; the host reacts to
//!   `GameEvent`s instead

pub mod autopilot;
pub mod collision;
pub mod player;
pub mod scoring;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{Rect, hits};
pub use player::Player;
pub use spawner::{Obstacle, Spawner};
pub use state::{GameEvent, GamePhase, GameSession, GameState, Layout};
pub use tick::{advance, spawn_obstacle, step_obstacles, step_player};
