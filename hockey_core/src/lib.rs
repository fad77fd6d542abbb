pub mod components;
pub mod config;
pub mod params;
pub mod pointer;
pub mod resources;
pub mod simulation;
pub mod snapshot;
pub mod systems;
pub mod table;

pub use components::*;
pub use config::*;
pub use params::*;
pub use pointer::*;
pub use resources::*;
pub use simulation::*;
pub use snapshot::*;
pub use table::*;

use hecs::World;
use systems::*;

/// Advance the air hockey simulation by one fixed tick
pub fn step(
    world: &mut World,
    time: &mut Time,
    table: &Table,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    queue: &mut InputQueue,
) {
    // Clear events at start of tick
    events.clear();

    // 1. Apply paddle targets from the pointer and the AI
    ingest_targets(world, table, queue);

    // 2. Ease paddles toward their targets
    move_paddles(world, config, table);

    // 3. Move puck (integrate, drag, speed cap)
    move_puck(world, config);

    // 4. Side walls
    check_walls(world, config, table, events);

    // 5. Goal lines (scoring or bounce)
    check_goal_lines(world, config, table, score, events);

    // 6. Paddle contacts, human then AI
    resolve_paddle_hits(world, config, events);

    // 7. Re-serve a scored puck once its delay runs out
    respawn_tick(world, config, table, events);

    time.tick += 1;
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, pos: glam::Vec2) -> hecs::Entity {
    world.spawn((Paddle::new(side, pos),))
}

/// Helper to create the puck entity
pub fn create_puck(world: &mut World, pos: glam::Vec2, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Puck::new(pos, vel),))
}
