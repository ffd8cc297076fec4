//! Full frames through `Game::frame` with a recording backend

use crate::animation::AnimationState;
use crate::config::SessionConfig;
use crate::foundation::math::Vec2;
use crate::game::{Game, HudState};
use crate::input::{InputEvent, KeyAction, KeyCode, Viewport};
use crate::render::{DrawQueue, RenderResource, RenderResources, ResourceKey};
use approx::assert_relative_eq;

struct Harness {
    game: Game,
    resources: RenderResources,
    queue: DrawQueue,
    ship_key: ResourceKey,
}

impl Harness {
    fn new(config: &SessionConfig) -> Self {
        let mut resources = RenderResources::new();
        let ship_key = resources.insert(RenderResource::textured_quad("textures/ship.png"));
        let pickup_key = resources.insert(RenderResource::textured_quad("textures/diamond.png"));
        Self {
            game: Game::new(config, Viewport::default(), ship_key, pickup_key),
            resources,
            queue: DrawQueue::new(),
            ship_key,
        }
    }

    fn frame(&mut self, events: &[InputEvent]) -> HudState {
        self.queue.clear();
        self.game.frame(events, &mut self.queue, &self.resources).unwrap()
    }

    fn idle_frames(&mut self, count: usize) {
        for _ in 0..count {
            self.frame(&[]);
        }
    }

    fn ship_drawn(&self) -> bool {
        self.queue.commands().iter().any(|c| c.resource == self.ship_key)
    }
}

fn key(key: KeyCode) -> InputEvent {
    InputEvent::Key {
        key,
        action: KeyAction::Press,
    }
}

fn pointer(x: f64, y: f64) -> InputEvent {
    InputEvent::PointerMoved { x, y }
}

#[test]
fn test_first_frame_draws_everything() {
    let mut harness = Harness::new(&SessionConfig::default());
    let hud = harness.frame(&[]);

    assert_eq!(hud, HudState::default());
    assert_eq!(harness.queue.commands().len(), 4);
    assert_eq!(harness.queue.commands()[0].resource, harness.ship_key);
    assert_eq!(harness.queue.commands()[0].transform, harness.game.ship().transformation_matrix());
}

#[test]
fn test_pointer_turn_starts_in_same_frame() {
    let mut harness = Harness::new(&SessionConfig::default());

    // Pixel (600, 200) is world (0.5, 0.5): an eighth turn clockwise
    harness.frame(&[pointer(600.0, 200.0)]);
    assert_eq!(harness.game.animator().state(), AnimationState::Animating);
    assert_relative_eq!(
        harness.game.ship().transform().theta(),
        std::f32::consts::FRAC_PI_4 / 10.0,
        epsilon = 1e-5
    );

    harness.idle_frames(9);
    assert_eq!(harness.game.animator().state(), AnimationState::Idle);
    assert_relative_eq!(harness.game.ship().transform().theta(), std::f32::consts::FRAC_PI_4, epsilon = 1e-5);

    // The drawn matrix is the rotated one
    let drawn = harness.queue.commands()[0].transform;
    assert_relative_eq!(drawn, harness.game.ship().transformation_matrix());
}

#[test]
fn test_movement_lands_before_collision_pass() {
    let config = SessionConfig {
        pickup_positions: vec![Vec2::new(0.0, 0.065), Vec2::new(0.5, 0.5), Vec2::new(-0.5, 0.5)],
        ..SessionConfig::default()
    };
    let mut harness = Harness::new(&config);

    assert_eq!(harness.frame(&[]).score, 0);

    let hud = harness.frame(&[key(KeyCode::W)]);
    assert_eq!(hud.score, 1);
    assert!(!harness.game.pickups()[0].is_active());
    // Collected pickup is already gone from this frame's draw list
    assert_eq!(harness.queue.commands().len(), 3);
}

#[test]
fn test_backward_moves_against_heading() {
    let mut harness = Harness::new(&SessionConfig::default());

    // Face left, then back up
    harness.frame(&[pointer(0.0, 400.0)]);
    harness.idle_frames(9);
    harness.frame(&[InputEvent::Key {
        key: KeyCode::Down,
        action: KeyAction::Repeat,
    }]);

    let position = harness.game.ship().position();
    assert_relative_eq!(position.x, 0.01, epsilon = 1e-6);
    assert_relative_eq!(position.y, 0.0, epsilon = 1e-6);

    harness.frame(&[key(KeyCode::W), key(KeyCode::W)]);
    assert_relative_eq!(harness.game.ship().position().x, -0.01, epsilon = 1e-6);
}

#[test]
fn test_game_over_freezes_ship_until_restart() {
    let config = SessionConfig {
        winning_score: 1,
        pickup_positions: vec![Vec2::new(0.05, 0.05), Vec2::new(0.5, 0.5)],
        ..SessionConfig::default()
    };
    let mut harness = Harness::new(&config);

    let hud = harness.frame(&[]);
    assert_eq!(hud, HudState { score: 1, is_game_over: true });
    assert!(!harness.ship_drawn());
    assert_eq!(harness.queue.commands().len(), 1);

    // Inactive ship neither turns nor moves
    harness.frame(&[pointer(0.0, 0.0), key(KeyCode::W)]);
    assert!(!harness.game.animator().is_animating());
    assert_eq!(harness.game.ship().position(), Vec2::zeros());

    // Restart is applied before the collision pass, so the first pickup is
    // collected again within the same frame
    let hud = harness.frame(&[key(KeyCode::R)]);
    assert_eq!(hud, HudState { score: 1, is_game_over: true });
}

#[test]
fn test_restart_resets_heading_and_animation() {
    let mut harness = Harness::new(&SessionConfig::default());

    harness.frame(&[pointer(100.0, 700.0), key(KeyCode::W)]);
    harness.frame(&[]);
    assert!(harness.game.animator().is_animating());

    let hud = harness.frame(&[key(KeyCode::R)]);
    assert_eq!(hud, HudState::default());
    assert!(!harness.game.animator().is_animating());
    assert_eq!(harness.game.ship().transform().theta(), 0.0);
    assert_eq!(harness.game.ship().position(), Vec2::zeros());
    assert!(harness.ship_drawn());
    assert_eq!(harness.queue.commands().len(), 4);
}
