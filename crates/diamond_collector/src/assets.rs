//! Game asset registration

use crate::config::AssetConfig;
use arcade_core::render::{RenderResource, RenderResources, ResourceKey};

/// Handles to the resources the game draws with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameAssets {
    /// Ship quad and texture
    pub ship: ResourceKey,

    /// Pickup quad and texture, shared by every pickup
    pub pickup: ResourceKey,
}

impl GameAssets {
    /// Register the ship and pickup resources in `resources`
    pub fn register(config: &AssetConfig, resources: &mut RenderResources) -> Self {
        let ship = resources.insert(RenderResource::textured_quad_with_filter(
            config.ship.path.clone(),
            config.ship.filter,
        ));
        let pickup = resources.insert(RenderResource::textured_quad_with_filter(
            config.pickup.path.clone(),
            config.pickup.filter,
        ));
        log::debug!("Registered textures {} and {}", config.ship.path, config.pickup.path);
        Self { ship, pickup }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_adds_two_entries() {
        let mut resources = RenderResources::new();
        let assets = GameAssets::register(&AssetConfig::default(), &mut resources);

        assert_eq!(resources.len(), 2);
        assert_ne!(assets.ship, assets.pickup);
        assert_eq!(
            resources.get(assets.pickup).map(|r| r.texture.path.as_str()),
            Some("textures/diamond.png")
        );
    }
}
