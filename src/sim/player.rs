//! Player kinematics
//!
//! The player never moves horizontally; a jump is a single vertical arc
//! under constant gravity.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Height of the player's feet above the play-area bottom
    pub bottom: f32,
    /// Vertical velocity (negative = rising)
    pub velocity: f32,
    pub jumping: bool,
}

impl Player {
    /// Player standing on the ground
    pub fn grounded(ground_level: f32) -> Self {
        Self {
            bottom: ground_level,
            velocity: 0.0,
            jumping: false,
        }
    }

    /// Apply the jump impulse unless already airborne.
    /// Returns true if the impulse was applied.
    pub fn jump(&mut self, jump_force: f32) -> bool {
        if self.jumping {
            return false;
        }
        self.jumping = true;
        self.velocity = jump_force;
        true
    }

    /// One kinematics tick. Returns true on the tick the player lands.
    pub fn update(&mut self, gravity: f32, ground_level: f32) -> bool {
        self.velocity += gravity;
        let bottom = (self.bottom - self.velocity).max(ground_level);
        self.bottom = bottom;

        if bottom <= ground_level {
            let landed = self.jumping;
            self.bottom = ground_level;
            self.jumping = false;
            self.velocity = 0.0;
            return landed;
        }
        false
    }

    pub fn rect(&self, left: f32, size: Vec2) -> Rect {
        Rect::from_bottom_left(left, self.bottom, size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const GROUND: f32 = 10.0;
    const GRAVITY: f32 = 0.5;
    const JUMP: f32 = -9.0;

    #[test]
    fn test_jump_arc_returns_to_ground() {
        let mut player = Player::grounded(GROUND);
        assert!(player.jump(JUMP));

        let mut peak = GROUND;
        let mut ticks = 0;
        loop {
            ticks += 1;
            if player.update(GRAVITY, GROUND) {
                break;
            }
            peak = peak.max(player.bottom);
            assert!(ticks < 100, "player never landed");
        }

        // 8.5 + 8.0 + ... + 0.5 above the ground
        assert!((peak - (GROUND + 76.5)).abs() < 0.001);
        assert_eq!(ticks, 35);
        assert_eq!(player, Player::grounded(GROUND));
    }

    #[test]
    fn test_second_jump_while_airborne_is_ignored() {
        let mut player = Player::grounded(GROUND);
        assert!(player.jump(JUMP));
        player.update(GRAVITY, GROUND);
        let velocity = player.velocity;
        assert!(!player.jump(JUMP));
        assert_eq!(player.velocity, velocity);
    }

    #[test]
    fn test_idle_update_stays_grounded() {
        let mut player = Player::grounded(GROUND);
        for _ in 0..10 {
            assert!(!player.update(GRAVITY, GROUND));
        }
        assert_eq!(player, Player::grounded(GROUND));
    }

    proptest! {
        #[test]
        fn prop_never_below_ground(presses in prop::collection::vec(any::<bool>(), 0..300)) {
            let mut player = Player::grounded(GROUND);
            for press in presses {
                if press {
                    player.jump(JUMP);
                }
                player.update(GRAVITY, GROUND);
                prop_assert!(player.bottom >= GROUND);
                if player.bottom <= GROUND {
                    prop_assert!(!player.jumping);
                }
            }
        }

        #[test]
        fn prop_one_impulse_per_airborne_period(presses in prop::collection::vec(any::<bool>(), 0..300)) {
            let mut player = Player::grounded(GROUND);
            let mut impulses_this_flight = 0;
            for press in presses {
                if press && player.jump(JUMP) {
                    impulses_this_flight += 1;
                }
                prop_assert!(impulses_this_flight <= 1);
                if player.update(GRAVITY, GROUND) {
                    impulses_this_flight = 0;
                }
            }
        }
    }
}
