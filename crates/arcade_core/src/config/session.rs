//! Gameplay tuning for one session

use super::{Config, ConfigError};
use crate::foundation::math::Vec2;
use serde::{Deserialize, Serialize};

/// Spawn position and scale of a single object
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnConfig {
    /// Spawn position in world coordinates
    pub position: Vec2,
    /// Spawn scale
    pub scale: Vec2,
}

/// Gameplay settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Distance moved per forward/backward key event
    pub translation_step: f32,

    /// Per-axis ship growth applied on each pickup
    pub growth_factor: f32,

    /// Score that ends the game
    pub winning_score: u32,

    /// Frames taken to turn toward a new heading
    pub animation_steps: u32,

    /// Player ship
    pub ship: SpawnConfig,

    /// Scale shared by every pickup
    pub pickup_scale: Vec2,

    /// Pickup spawn positions, in insertion order
    pub pickup_positions: Vec<Vec2>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            translation_step: 0.01,
            growth_factor: 1.2,
            winning_score: 3,
            animation_steps: 10,
            ship: SpawnConfig {
                position: Vec2::new(0.0, 0.0),
                scale: Vec2::new(0.09, 0.06),
            },
            pickup_scale: Vec2::new(0.07, 0.07),
            pickup_positions: vec![
                Vec2::new(0.5, 0.5),
                Vec2::new(-0.5, 0.5),
                Vec2::new(0.5, -0.5),
            ],
        }
    }
}

fn check_scale(field: &'static str, scale: Vec2) -> Result<(), ConfigError> {
    if scale.iter().all(|s| s.is_finite() && *s > 0.0) {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("scale must be positive, got ({}, {})", scale.x, scale.y),
        })
    }
}

impl Config for SessionConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if !self.translation_step.is_finite() {
            return Err(ConfigError::Invalid {
                field: "translation_step",
                reason: "must be finite".to_string(),
            });
        }
        if !(self.growth_factor.is_finite() && self.growth_factor > 0.0) {
            return Err(ConfigError::Invalid {
                field: "growth_factor",
                reason: format!("must be positive, got {}", self.growth_factor),
            });
        }
        if self.animation_steps == 0 {
            return Err(ConfigError::Invalid {
                field: "animation_steps",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.winning_score == 0 || self.winning_score as usize > self.pickup_positions.len() {
            return Err(ConfigError::Invalid {
                field: "winning_score",
                reason: format!(
                    "must be between 1 and the pickup count ({}), got {}",
                    self.pickup_positions.len(),
                    self.winning_score
                ),
            });
        }
        check_scale("ship.scale", self.ship.scale)?;
        check_scale("pickup_scale", self.pickup_scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = SessionConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.pickup_positions.len(), 3);
        assert_eq!(config.winning_score, 3);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: SessionConfig = toml::from_str(
            r#"
            growth_factor = 1.5
            pickup_positions = [[0.25, 0.25], [-0.25, -0.25], [0.75, 0.0]]
            "#,
        )
        .unwrap();

        assert_eq!(config.growth_factor, 1.5);
        assert_eq!(config.pickup_positions[1], Vec2::new(-0.25, -0.25));
        assert_eq!(config.translation_step, 0.01);
        assert_eq!(config.ship.scale, Vec2::new(0.09, 0.06));
    }

    #[test]
    fn test_ron_ship_section() {
        let config: SessionConfig =
            ron::from_str("(ship: (position: (0.1, -0.1), scale: (0.2, 0.1)))").unwrap();
        assert_eq!(config.ship.position, Vec2::new(0.1, -0.1));
        assert_eq!(config.animation_steps, 10);
    }

    #[test]
    fn test_unwinnable_score_is_rejected() {
        let config = SessionConfig {
            winning_score: 4,
            ..SessionConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "winning_score", .. })
        ));
    }

    #[test]
    fn test_bad_values_are_rejected() {
        let zero_steps = SessionConfig {
            animation_steps: 0,
            ..SessionConfig::default()
        };
        assert!(zero_steps.validate().is_err());

        let mut flat_ship = SessionConfig::default();
        flat_ship.ship.scale = Vec2::new(0.09, 0.0);
        assert!(matches!(
            flat_ship.validate(),
            Err(ConfigError::Invalid { field: "ship.scale", .. })
        ));

        let shrinking = SessionConfig {
            growth_factor: -1.0,
            ..SessionConfig::default()
        };
        assert!(shrinking.validate().is_err());
    }
}
