use crate::{Config, InputQueue, Puck, Side, Table};
use glam::Vec2;
use hecs::World;

/// Target for the AI paddle given the puck position.
///
/// Strategy:
/// 1. Puck in the AI half: chase it, but never aim deeper than
///    `ai_attack_margin` short of the paddle's own half-plane edge.
/// 2. Puck in the human half: hold a shallow post near the AI goal and
///    shadow the puck along x.
pub fn ai_target(puck_pos: Vec2, config: &Config, table: &Table) -> Vec2 {
    let mid = table.midline_y();
    if puck_pos.y < mid {
        let max_y = mid - config.paddle_radius - config.ai_attack_margin;
        Vec2::new(puck_pos.x, puck_pos.y.min(max_y))
    } else {
        Vec2::new(puck_pos.x, config.ai_defense_y)
    }
}

/// Queue this tick's AI target from the current puck position
pub fn drive_ai(world: &World, config: &Config, table: &Table, queue: &mut InputQueue) {
    let puck_pos = world
        .query::<&Puck>()
        .iter()
        .next()
        .map(|(_e, puck)| puck.pos);

    if let Some(pos) = puck_pos {
        queue.push_target(Side::Ai, ai_target(pos, config, table));
    }
}
