//! Buffered despawn, applied after every other system has run.

use hecs::World;

/// Despawn everything queued this frame. Entities can be queued more than
/// once (e.g. an intercepted projectile that also expired), so missing
/// entities are ignored.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<hecs::Entity>) {
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
