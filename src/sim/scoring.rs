//! Scoring, highscore tracking and the difficulty ramp

use super::state::{GameEvent, GameState};
use crate::settings::SpeedRamp;

/// Award one point for an obstacle that made it off-screen
pub fn award_point(state: &mut GameState) {
    let score = state.session.score + 1;
    state.session.score = score;
    state.push_event(GameEvent::ScoreChanged { score });

    if score > state.session.highscore {
        state.session.highscore = score;
        log::info!("New highscore: {}", score);
        state.push_event(GameEvent::NewHighscore { highscore: score });
    }

    let interval = state.settings.ramp_interval.max(1);
    let on_interval = score > 0 && score % interval == 0;

    if score == state.settings.milestone_score {
        log::info!("Milestone reached at {}", score);
        state.push_event(GameEvent::MilestoneReached { score });
        if state.settings.speed_ramp == SpeedRamp::MilestoneOnly && on_interval {
            ramp_speed(state);
        }
    }

    if state.settings.speed_ramp == SpeedRamp::EveryInterval && on_interval {
        ramp_speed(state);
    }
}

fn ramp_speed(state: &mut GameState) {
    state.session.obstacle_speed += state.settings.speed_increment;
    let speed = state.session.obstacle_speed;
    log::info!("Obstacle speed now {}", speed);
    state.push_event(GameEvent::SpeedIncreased { speed });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::state::Layout;
    use proptest::prelude::*;

    fn state_with(settings: Settings) -> GameState {
        let mut state = GameState::new(settings, Layout::default(), 1);
        state.drain_events();
        state
    }

    fn award(state: &mut GameState, points: u32) -> Vec<GameEvent> {
        for _ in 0..points {
            award_point(state);
        }
        state.drain_events()
    }

    #[test]
    fn test_first_point_sets_highscore() {
        let mut state = state_with(Settings::default());
        let events = award(&mut state, 1);
        assert_eq!(
            events,
            vec![
                GameEvent::ScoreChanged { score: 1 },
                GameEvent::NewHighscore { highscore: 1 },
            ]
        );
        assert_eq!(state.session.highscore, 1);
    }

    #[test]
    fn test_no_highscore_event_below_best() {
        let mut state = state_with(Settings::default());
        state.session.highscore = 5;
        let events = award(&mut state, 5);
        assert!(!events.iter().any(|e| matches!(e, GameEvent::NewHighscore { .. })));
        let events = award(&mut state, 1);
        assert!(events.contains(&GameEvent::NewHighscore { highscore: 6 }));
    }

    #[test]
    fn test_milestone_ramps_speed_once() {
        let mut state = state_with(Settings::default());
        let events = award(&mut state, 20);

        let milestones: Vec<_> = events
            .iter()
            .filter(|e| matches!(e, GameEvent::MilestoneReached { .. }))
            .collect();
        assert_eq!(milestones, vec![&GameEvent::MilestoneReached { score: 10 }]);

        // Only the milestone ramps: not 5, 15 or 20
        let ramps: Vec<_> = events
            .iter()
            .filter(|e| matches!(e, GameEvent::SpeedIncreased { .. }))
            .collect();
        assert_eq!(ramps, vec![&GameEvent::SpeedIncreased { speed: 3.5 }]);
        assert_eq!(state.session.obstacle_speed, 3.5);
    }

    #[test]
    fn test_milestone_event_follows_highscore() {
        let mut state = state_with(Settings::default());
        award(&mut state, 9);
        let events = award(&mut state, 1);
        assert_eq!(
            events,
            vec![
                GameEvent::ScoreChanged { score: 10 },
                GameEvent::NewHighscore { highscore: 10 },
                GameEvent::MilestoneReached { score: 10 },
                GameEvent::SpeedIncreased { speed: 3.5 },
            ]
        );
    }

    #[test]
    fn test_every_interval_ramp() {
        let mut state = state_with(Settings {
            speed_ramp: SpeedRamp::EveryInterval,
            ..Default::default()
        });
        let events = award(&mut state, 20);
        let ramps = events
            .iter()
            .filter(|e| matches!(e, GameEvent::SpeedIncreased { .. }))
            .count();
        assert_eq!(ramps, 4);
        assert_eq!(state.session.obstacle_speed, 5.0);
    }

    proptest! {
        #[test]
        fn prop_score_and_highscore_monotonic(points in 0u32..40, best in 0u32..30) {
            let mut state = state_with(Settings::default());
            state.session.highscore = best;
            let mut last_score = 0;
            let mut last_best = best;
            for _ in 0..points {
                award_point(&mut state);
                prop_assert!(state.session.score > last_score);
                prop_assert!(state.session.highscore >= last_best);
                prop_assert!(state.session.highscore >= state.session.score);
                last_score = state.session.score;
                last_best = state.session.highscore;
            }
        }
    }
}
