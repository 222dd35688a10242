//! Central simulation clock
//!
//! One call per display frame drives three schedules: player kinematics at
//! the frame period, obstacle advancement at the advancement period, and
//! the spawn countdown. Nothing runs once the run is over.

use super::collision::hits;
use super::scoring::award_point;
use super::state::{GameEvent, GameState};
use crate::consts::{MAX_FRAME_MS, MAX_SUBSTEPS};

/// Advance the simulation by `elapsed_ms` of wall time.
/// Returns true while the run is still live.
pub fn advance(state: &mut GameState, elapsed_ms: f64) -> bool {
    if state.is_game_over() {
        return false;
    }
    let elapsed_ms = elapsed_ms.clamp(0.0, MAX_FRAME_MS);

    if state.spawner.spawn_due(elapsed_ms) {
        spawn_obstacle(state);
    }

    state.frame_acc_ms += elapsed_ms;
    let mut substeps = 0;
    while state.frame_acc_ms >= state.settings.frame_interval_ms && substeps < MAX_SUBSTEPS {
        step_player(state);
        state.frame_acc_ms -= state.settings.frame_interval_ms;
        substeps += 1;
    }

    state.advance_acc_ms += elapsed_ms;
    let mut substeps = 0;
    while state.advance_acc_ms >= state.settings.advance_interval_ms
        && substeps < MAX_SUBSTEPS
        && !state.is_game_over()
    {
        step_obstacles(state);
        state.advance_acc_ms -= state.settings.advance_interval_ms;
        substeps += 1;
    }

    !state.is_game_over()
}

/// Spawn one obstacle at the right edge
pub fn spawn_obstacle(state: &mut GameState) {
    let settings = &state.settings;
    let obstacle = state.spawner.spawn_one(
        state.layout.play_width,
        settings.ground_level,
        state.layout.obstacle_size,
        settings.spawn_delay_min_ms,
        settings.spawn_delay_max_ms,
    );
    state.push_event(GameEvent::ObstacleSpawned {
        id: obstacle.id,
        left: obstacle.left,
    });
}

/// One player kinematics tick
pub fn step_player(state: &mut GameState) {
    if state.is_game_over() {
        return;
    }
    let settings = &state.settings;
    state.player.update(settings.gravity, settings.ground_level);
}

/// One advancement tick for every live obstacle: move left, test for a
/// hit, then evict and score whatever crossed off-screen.
pub fn step_obstacles(state: &mut GameState) {
    if state.is_game_over() {
        return;
    }

    let speed = state.session.obstacle_speed;
    let margin = state.settings.collision_margin;
    let player = state.player_rect();

    let mut hit = false;
    for obstacle in state.spawner.obstacles_mut().iter_mut() {
        obstacle.left -= speed;
        if hits(&player, &obstacle.rect(), margin) {
            hit = true;
            break;
        }
    }
    if hit {
        state.end_run();
        return;
    }

    for id in state.spawner.evict_off_screen() {
        state.push_event(GameEvent::ObstacleRemoved { id });
        award_point(state);
    }
}
