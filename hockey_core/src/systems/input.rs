use crate::{InputQueue, Paddle, Side, Table};
use hecs::World;

/// Apply queued target positions to the paddles.
///
/// Human targets are clamped into the human half-plane. AI targets are kept
/// as aimed; `move_paddles` clamps the paddle itself after easing. The last
/// target queued for a side wins.
pub fn ingest_targets(world: &mut World, table: &Table, queue: &mut InputQueue) {
    for (side, target) in queue.drain() {
        if !target.is_finite() {
            log::debug!("Dropping non-finite {side:?} target {target}");
            continue;
        }
        for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
            if paddle.side == side {
                paddle.target = match side {
                    Side::Human => table.clamp_paddle(side, target),
                    Side::Ai => target,
                };
            }
        }
    }
}
