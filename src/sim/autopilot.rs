//! Idle mode: the game plays itself
//!
//! Times each jump so the apex of the arc lines up with the moment the
//! nearest approaching obstacle passes the player's center.

use super::state::GameState;

/// Milliseconds from takeoff to the top of the jump arc
pub fn apex_ms(state: &GameState) -> f64 {
    let settings = &state.settings;
    let ticks_to_apex = (-settings.jump_force / settings.gravity) as f64;
    ticks_to_apex * settings.frame_interval_ms
}

/// Milliseconds until the nearest approaching obstacle's center crosses the
/// player's center, if any obstacle is still approaching
pub fn time_to_contact_ms(state: &GameState) -> Option<f64> {
    let player = state.player_rect();
    let player_center = (player.min.x + player.max.x) * 0.5;
    let speed = state.session.obstacle_speed as f64;
    let tick_ms = state.settings.advance_interval_ms;

    state
        .spawner
        .obstacles()
        .iter()
        .map(|o| o.left + o.size.x * 0.5 - player_center)
        .filter(|gap| *gap > 0.0)
        .map(|gap| gap as f64 / speed * tick_ms)
        .min_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
}

/// True when jumping now best clears the next obstacle
pub fn should_jump(state: &GameState) -> bool {
    if state.is_game_over() || state.player.jumping {
        return false;
    }
    time_to_contact_ms(state).is_some_and(|t| t <= apex_ms(state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::state::Layout;
    use crate::sim::tick::spawn_obstacle;

    fn state() -> GameState {
        GameState::new(Settings::default(), Layout::default(), 5)
    }

    #[test]
    fn test_apex_timing() {
        // 18 ticks at 60 Hz
        assert!((apex_ms(&state()) - 300.0).abs() < 1e-6);
    }

    #[test]
    fn test_no_obstacles_no_jump() {
        assert!(!should_jump(&state()));
        assert_eq!(time_to_contact_ms(&state()), None);
    }

    #[test]
    fn test_jumps_only_when_close() {
        let mut state = state();
        spawn_obstacle(&mut state);
        assert!(!should_jump(&state));

        // Centers 44 units apart: under 15 ticks away
        state.spawner.obstacles_mut()[0].left = 99.0;
        assert!(should_jump(&state));

        state.jump();
        assert!(!should_jump(&state));
    }

    #[test]
    fn test_ignores_passed_obstacles() {
        let mut state = state();
        spawn_obstacle(&mut state);
        state.spawner.obstacles_mut()[0].left = 20.0;
        assert_eq!(time_to_contact_ms(&state), None);
        assert!(!should_jump(&state));
    }
}
