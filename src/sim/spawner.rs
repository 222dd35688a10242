//! Obstacle spawning and the live obstacle collection
//!
//! Obstacles live in a Vec in spawn order. The central tick advances them
//! all at once; there is no per-obstacle timer to cancel.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    /// Left edge in play-area coordinates
    pub left: f32,
    pub bottom: f32,
    pub size: Vec2,
}

impl Obstacle {
    pub fn rect(&self) -> Rect {
        Rect::from_bottom_left(self.left, self.bottom, self.size)
    }

    /// Fully past the left edge of the play area
    pub fn is_off_screen(&self) -> bool {
        self.left < -self.size.x
    }
}

#[derive(Debug, Clone)]
pub struct Spawner {
    obstacles: Vec<Obstacle>,
    /// Milliseconds until the next spawn; None once halted
    next_spawn_ms: Option<f64>,
    rng: Pcg32,
    next_id: u32,
}

impl Spawner {
    pub fn new(seed: u64) -> Self {
        Self {
            obstacles: Vec::new(),
            next_spawn_ms: None,
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn obstacles_mut(&mut self) -> &mut Vec<Obstacle> {
        &mut self.obstacles
    }

    pub fn live_count(&self) -> usize {
        self.obstacles.len()
    }

    pub fn next_spawn_ms(&self) -> Option<f64> {
        self.next_spawn_ms
    }

    /// Drop every obstacle and arm an immediate first spawn.
    /// Returns the ids of the removed obstacles.
    pub fn reset(&mut self) -> Vec<u32> {
        self.next_spawn_ms = Some(0.0);
        self.obstacles.drain(..).map(|o| o.id).collect()
    }

    /// Stop scheduling spawns. Live obstacles stay where they are.
    pub fn halt(&mut self) {
        self.next_spawn_ms = None;
    }

    /// Count the spawn timer down by `elapsed_ms`; true when a spawn is due
    pub fn spawn_due(&mut self, elapsed_ms: f64) -> bool {
        match self.next_spawn_ms.as_mut() {
            Some(remaining) => {
                *remaining -= elapsed_ms;
                *remaining <= 0.0
            }
            None => false,
        }
    }

    /// Create an obstacle at the right edge and schedule the next spawn
    /// after a delay drawn from `[delay_min_ms, delay_max_ms)`.
    pub fn spawn_one(
        &mut self,
        play_width: f32,
        ground_level: f32,
        size: Vec2,
        delay_min_ms: f64,
        delay_max_ms: f64,
    ) -> Obstacle {
        let id = self.next_id;
        self.next_id += 1;

        let obstacle = Obstacle {
            id,
            left: play_width,
            bottom: ground_level,
            size,
        };
        self.obstacles.push(obstacle);

        let delay = self.rng.random_range(delay_min_ms..delay_max_ms);
        self.next_spawn_ms = Some(delay);
        log::debug!("Spawned obstacle {} (next in {:.0} ms)", id, delay);

        obstacle
    }

    /// Remove obstacles that have left the play area, in spawn order
    pub fn evict_off_screen(&mut self) -> Vec<u32> {
        let mut evicted = Vec::new();
        self.obstacles.retain(|o| {
            if o.is_off_screen() {
                evicted.push(o.id);
                false
            } else {
                true
            }
        });
        evicted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: Vec2 = Vec2::new(30.0, 30.0);

    #[test]
    fn test_spawn_at_right_edge_on_ground() {
        let mut spawner = Spawner::new(7);
        let o = spawner.spawn_one(800.0, 10.0, SIZE, 5000.0, 9000.0);
        assert_eq!(o.left, 800.0);
        assert_eq!(o.bottom, 10.0);
        assert_eq!(spawner.live_count(), 1);
    }

    #[test]
    fn test_spawn_delay_within_bounds() {
        let mut spawner = Spawner::new(42);
        for _ in 0..200 {
            spawner.spawn_one(800.0, 10.0, SIZE, 5000.0, 9000.0);
            let delay = spawner.next_spawn_ms().unwrap();
            assert!((5000.0..9000.0).contains(&delay));
        }
    }

    #[test]
    fn test_ids_are_unique_and_ordered() {
        let mut spawner = Spawner::new(1);
        let ids: Vec<u32> = (0..5)
            .map(|_| spawner.spawn_one(800.0, 10.0, SIZE, 5000.0, 9000.0).id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        let removed = spawner.reset();
        assert_eq!(removed, ids);
        assert_eq!(spawner.live_count(), 0);
        // Ids keep counting after a reset
        assert_eq!(spawner.spawn_one(800.0, 10.0, SIZE, 5000.0, 9000.0).id, 6);
    }

    #[test]
    fn test_halt_stops_spawning() {
        let mut spawner = Spawner::new(3);
        spawner.reset();
        assert!(spawner.spawn_due(0.0));
        spawner.halt();
        assert!(!spawner.spawn_due(100_000.0));
    }

    #[test]
    fn test_evict_only_fully_off_screen() {
        let mut spawner = Spawner::new(3);
        spawner.spawn_one(800.0, 10.0, SIZE, 5000.0, 9000.0);
        spawner.spawn_one(800.0, 10.0, SIZE, 5000.0, 9000.0);
        spawner.obstacles_mut()[0].left = -30.0;
        spawner.obstacles_mut()[1].left = -31.0;
        assert_eq!(spawner.evict_off_screen(), vec![2]);
        assert_eq!(spawner.live_count(), 1);
    }
}
