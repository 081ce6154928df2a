//! Lifetime decay for expiring entities.

use hecs::World;

use starfall_core::components::Lifetime;

/// Run down lifetimes and queue expired entities for cleanup.
pub fn run(world: &mut World, dt: f32, despawn_buffer: &mut Vec<hecs::Entity>) {
    for (entity, lifetime) in world.query_mut::<&mut Lifetime>() {
        lifetime.remaining -= dt;
        if lifetime.expired() {
            despawn_buffer.push(entity);
        }
    }
}
