//! Axis-aligned hitboxes
//!
//! Play-area coordinates: x grows to the right, y grows upward from the
//! bottom edge (the same frame CSS `left`/`bottom` use).

use glam::Vec2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    /// Rectangle anchored at its bottom-left corner
    pub fn from_bottom_left(left: f32, bottom: f32, size: Vec2) -> Self {
        let min = Vec2::new(left, bottom);
        Self { min, max: min + size }
    }

    /// Shrink inward by `margin` on every side. A margin larger than half
    /// the size collapses the rectangle onto its center.
    pub fn shrink(&self, margin: f32) -> Self {
        let center = (self.min + self.max) * 0.5;
        Self {
            min: (self.min + Vec2::splat(margin)).min(center),
            max: (self.max - Vec2::splat(margin)).max(center),
        }
    }

    /// Strict overlap; touching edges do not count
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.max.x > other.min.x
            && self.min.x < other.max.x
            && self.max.y > other.min.y
            && self.min.y < other.max.y
    }
}

/// Player vs obstacle test with the forgiveness margin applied to the
/// obstacle's box.
pub fn hits(player: &Rect, obstacle: &Rect, margin: f32) -> bool {
    player.overlaps(&obstacle.shrink(margin))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(left: f32, bottom: f32, side: f32) -> Rect {
        Rect::from_bottom_left(left, bottom, Vec2::splat(side))
    }

    #[test]
    fn test_overlap_basic() {
        let a = square(0.0, 0.0, 10.0);
        assert!(a.overlaps(&square(5.0, 5.0, 10.0)));
        assert!(!a.overlaps(&square(20.0, 0.0, 10.0)));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = square(0.0, 0.0, 10.0);
        assert!(!a.overlaps(&square(10.0, 0.0, 10.0)));
        assert!(!a.overlaps(&square(0.0, 10.0, 10.0)));
    }

    #[test]
    fn test_margin_forgives_grazing_contact() {
        let player = square(50.0, 10.0, 40.0);
        // Obstacle overlaps the player by 8 units horizontally
        let obstacle = square(82.0, 10.0, 30.0);
        assert!(player.overlaps(&obstacle));
        assert!(!hits(&player, &obstacle, 10.0));
        // 12 units of overlap gets through the margin
        let obstacle = square(78.0, 10.0, 30.0);
        assert!(hits(&player, &obstacle, 10.0));
    }

    #[test]
    fn test_margin_forgives_clearing_jump() {
        // Player's feet inside the obstacle's margin band
        let player = square(60.0, 35.0, 40.0);
        let obstacle = square(60.0, 10.0, 30.0);
        assert!(player.overlaps(&obstacle));
        assert!(!hits(&player, &obstacle, 10.0));
    }

    #[test]
    fn test_shrink_collapses_to_center() {
        let r = square(0.0, 0.0, 10.0).shrink(20.0);
        assert_eq!(r.min, Vec2::splat(5.0));
        assert_eq!(r.max, Vec2::splat(5.0));
    }
}
