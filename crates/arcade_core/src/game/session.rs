//! Score keeping and the collision reaction
//!
//! `GameSession` owns only the score and the game-over flag. The objects it
//! acts on are passed in by reference each frame.

use crate::config::SessionConfig;
use crate::game::HudState;
use crate::physics::overlaps;
use crate::scene::GameObject;

/// Score, win state and the rules that change them
#[derive(Debug, Clone, PartialEq)]
pub struct GameSession {
    score: u32,
    is_game_over: bool,
    growth_factor: f32,
    winning_score: u32,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(&SessionConfig::default())
    }
}

impl GameSession {
    /// Fresh session with zero score
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            score: 0,
            is_game_over: false,
            growth_factor: config.growth_factor,
            winning_score: config.winning_score,
        }
    }

    /// Pickups collected so far
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Whether every required pickup has been collected
    pub fn is_game_over(&self) -> bool {
        self.is_game_over
    }

    /// Read-only snapshot for the overlay
    pub fn hud(&self) -> HudState {
        HudState {
            score: self.score,
            is_game_over: self.is_game_over,
        }
    }

    /// React to the ship touching `pickup`
    ///
    /// Scores the pickup, removes it from play and grows the ship. Reaching
    /// the winning score deactivates the ship and ends the game. Has no
    /// effect if either object is already inactive.
    pub fn on_collision(&mut self, ship: &mut GameObject, pickup: &mut GameObject) {
        if !(ship.is_active() && pickup.is_active()) {
            return;
        }

        self.score += 1;
        pickup.set_active(false);
        ship.transform_mut().scale_by(self.growth_factor, self.growth_factor);
        log::debug!(
            "Pickup at ({}, {}) collected, score {}",
            pickup.position().x,
            pickup.position().y,
            self.score
        );

        if self.score == self.winning_score {
            ship.set_active(false);
            self.is_game_over = true;
            log::info!("All {} pickups collected, game over", self.winning_score);
        }
    }

    /// Collision pass for one frame
    ///
    /// Every pickup is tested in order, so several pickups touched in the
    /// same frame all score. Returns how many were collected.
    pub fn tick(&mut self, ship: &mut GameObject, pickups: &mut [GameObject]) -> u32 {
        let before = self.score;
        for pickup in pickups.iter_mut() {
            if overlaps(ship, pickup) {
                self.on_collision(ship, pickup);
            }
        }
        self.score - before
    }

    /// Start over: zero score, clear game over, respawn every object
    pub fn reset(&mut self, ship: &mut GameObject, pickups: &mut [GameObject]) {
        self.score = 0;
        self.is_game_over = false;
        ship.reset_all_state_to_default();
        for pickup in pickups.iter_mut() {
            pickup.reset_all_state_to_default();
        }
        log::debug!("Session reset");
    }
}
