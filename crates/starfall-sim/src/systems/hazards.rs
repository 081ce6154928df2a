//! Hazard grow-in: scale ramps from zero to full size after spawn.

use hecs::World;

use starfall_core::components::Hazard;

pub fn run(world: &mut World, dt: f32) {
    for (_entity, hazard) in world.query_mut::<&mut Hazard>() {
        hazard.grow(dt);
    }
}
