//! Frame driver
//!
//! [`Game`] owns the ship, the pickups, the heading animator and the session
//! and runs one frame at a time in a fixed order:
//!
//! 1. apply queued input (movement, new heading targets, restart)
//! 2. collision pass
//! 3. one animation step
//! 4. hand every active object to the render backend
//!
//! Input therefore always lands before collisions are evaluated, and what is
//! drawn is the fully resolved state of the current frame.

use crate::animation::RotationAnimator;
use crate::config::SessionConfig;
use crate::foundation::math::constants::HALF_PI;
use crate::game::{GameSession, HudState};
use crate::input::{GameCommand, InputEvent, Viewport};
use crate::render::{submit_objects, RenderBackend, RenderResources, RenderResult, ResourceKey};
use crate::scene::GameObject;

/// Build the pickups listed in the config, in order
pub fn spawn_pickups(config: &SessionConfig, resource: ResourceKey) -> Vec<GameObject> {
    config
        .pickup_positions
        .iter()
        .map(|&position| GameObject::new(resource, position, config.pickup_scale))
        .collect()
}

/// Complete game state advanced one frame per [`Game::frame`] call
#[derive(Debug, Clone)]
pub struct Game {
    session: GameSession,
    ship: GameObject,
    pickups: Vec<GameObject>,
    animator: RotationAnimator,
    viewport: Viewport,
    translation_step: f32,
}

impl Game {
    /// Set up a new game from config
    ///
    /// `ship_resource` and `pickup_resource` are keys into the render
    /// resource table the frames will be drawn with.
    pub fn new(
        config: &SessionConfig,
        viewport: Viewport,
        ship_resource: ResourceKey,
        pickup_resource: ResourceKey,
    ) -> Self {
        let ship = GameObject::new(ship_resource, config.ship.position, config.ship.scale);
        let pickups = spawn_pickups(config, pickup_resource);
        log::info!("New game with {} pickups", pickups.len());

        Self {
            session: GameSession::new(config),
            ship,
            pickups,
            animator: RotationAnimator::new(config.animation_steps),
            viewport,
            translation_step: config.translation_step,
        }
    }

    /// Score and win state
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// The player ship
    pub fn ship(&self) -> &GameObject {
        &self.ship
    }

    /// Mutable access to the ship, for scripted setups
    pub fn ship_mut(&mut self) -> &mut GameObject {
        &mut self.ship
    }

    /// Pickups in spawn order
    pub fn pickups(&self) -> &[GameObject] {
        &self.pickups
    }

    /// The ship's heading animator
    pub fn animator(&self) -> &RotationAnimator {
        &self.animator
    }

    /// Viewport used to convert pointer positions
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Change the viewport, e.g. after a window resize
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Overlay snapshot
    pub fn hud(&self) -> HudState {
        self.session.hud()
    }

    /// Apply a single input event
    pub fn handle_event(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::Key { key, action } => {
                if let Some(command) = GameCommand::from_key(key, action) {
                    self.apply_command(command);
                }
            }
            InputEvent::PointerMoved { x, y } => {
                if self.ship.is_active() {
                    let pointer = self.viewport.to_world(x, y);
                    self.animator.aim_at(pointer, self.ship.transform());
                }
            }
        }
    }

    /// Apply a decoded command
    pub fn apply_command(&mut self, command: GameCommand) {
        match command {
            GameCommand::Restart => self.restart(),
            GameCommand::MoveForward => self.move_ship(self.translation_step),
            GameCommand::MoveBackward => self.move_ship(-self.translation_step),
        }
    }

    /// Reset the session, every object and the animator
    pub fn restart(&mut self) {
        self.session.reset(&mut self.ship, &mut self.pickups);
        self.animator.reset();
        log::info!("Game restarted");
    }

    /// Collision pass followed by one animation step
    pub fn update(&mut self) {
        self.session.tick(&mut self.ship, &mut self.pickups);
        self.animator.tick(self.ship.transform_mut());
    }

    /// Draw the ship then every pickup; inactive objects are skipped
    pub fn render<B: RenderBackend + ?Sized>(&self, backend: &mut B, resources: &RenderResources) -> RenderResult<usize> {
        submit_objects(
            backend,
            resources,
            std::iter::once(&self.ship).chain(self.pickups.iter()),
        )
    }

    /// Run one full frame and return what the overlay should show
    pub fn frame<'a, I, B>(&mut self, events: I, backend: &mut B, resources: &RenderResources) -> RenderResult<HudState>
    where
        I: IntoIterator<Item = &'a InputEvent>,
        B: RenderBackend + ?Sized,
    {
        for event in events {
            self.handle_event(event);
        }
        self.update();
        self.render(backend, resources)?;
        Ok(self.hud())
    }

    /// Move along the heading; negative distances move backward
    fn move_ship(&mut self, distance: f32) {
        if !self.ship.is_active() {
            return;
        }
        // Heading is measured from the ship's local up axis
        let angle_from_x_axis = self.ship.transform().theta() + HALF_PI;
        self.ship
            .transform_mut()
            .translate_by(-distance * angle_from_x_axis.cos(), distance * angle_from_x_axis.sin());
    }
}
