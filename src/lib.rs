//! Love Runner - an endless jump-in-place runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player, obstacles, collisions, scoring)
//! - `game`: Frame loop glue between the simulation and its host
//! - `platform`: Presentation seam, input bindings, DOM and headless hosts
//! - `persistence`: Key-value storage for the best score
//! - `settings`: Data-driven tuning

pub mod audio;
pub mod effects;
pub mod error;
pub mod game;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod settings;
pub mod sim;

pub use error::GameError;
pub use game::Game;
pub use settings::{Settings, SpeedRamp};

/// Game configuration constants
pub mod consts {
    /// Longest frame gap honored by the simulation (ms). A tab that was in
    /// the background resumes instead of fast-forwarding.
    pub const MAX_FRAME_MS: f64 = 100.0;
    /// Maximum substeps per clock per frame
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Player sprite while running
    pub const RUN_SPRITE: &str = "Anim_Robot_Jump1_v1.gif";
    /// Player sprite after the run ends
    pub const DEFEAT_SPRITE: &str = "images/Anim_Robot_Walk_v1.gif";
}
