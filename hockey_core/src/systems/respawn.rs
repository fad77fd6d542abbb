use crate::{Config, Events, Puck, PuckPhase, Table};
use hecs::World;

/// Count down a scored puck and re-serve it from the centre
pub fn respawn_tick(world: &mut World, config: &Config, table: &Table, events: &mut Events) {
    for (_entity, puck) in world.query_mut::<&mut Puck>() {
        if let PuckPhase::AwaitingRespawn {
            ticks_left,
            serve_toward,
        } = puck.phase
        {
            if ticks_left == 0 {
                puck.serve(table.puck_spawn(), config.serve_speed, serve_toward);
                events.respawned = true;
                log::debug!("Puck served toward {serve_toward:?}");
            } else {
                puck.phase = PuckPhase::AwaitingRespawn {
                    ticks_left: ticks_left - 1,
                    serve_toward,
                };
            }
        }
    }
}
