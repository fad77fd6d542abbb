use crate::{Config, Events, Paddle, Puck, Side, Table};
use glam::Vec2;
use hecs::World;

/// Bounce the puck off the left and right walls
pub fn check_walls(world: &mut World, config: &Config, table: &Table, events: &mut Events) {
    let r = config.puck_radius;
    for (_entity, puck) in world.query_mut::<&mut Puck>() {
        if puck.pos.x - r < 0.0 {
            puck.pos.x = r;
            puck.vel.x = puck.vel.x.abs() * config.wall_bounce;
            events.wall_hit = true;
        } else if puck.pos.x + r > table.width {
            puck.pos.x = table.width - r;
            puck.vel.x = -puck.vel.x.abs() * config.wall_bounce;
            events.wall_hit = true;
        }
    }
}

/// Resolve puck contact with both paddles, human first.
///
/// Each contact is resolved once per tick with no iteration, so a puck
/// pinched between both paddles can end up slightly favouring the AI side.
pub fn resolve_paddle_hits(world: &mut World, config: &Config, events: &mut Events) {
    let mut paddles: Vec<(Side, Vec2, Vec2)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| (p.side, p.pos, p.velocity()))
        .collect();
    paddles.sort_by_key(|(side, _, _)| *side != Side::Human);

    for (_entity, puck) in world.query_mut::<&mut Puck>() {
        for &(side, pos, vel) in &paddles {
            if resolve_contact(puck, pos, vel, config) {
                events.paddle_hit = Some(side);
            }
        }
    }
}

/// Resolve a single puck/paddle contact.
///
/// Any overlap is removed by pushing the puck out along the contact normal.
/// If the puck is closing on the paddle an impulse with restitution
/// `config.restitution` (capped at `config.impulse_cap()`) is applied, plus a
/// bounded share of the paddle's own motion. Returns true when the puck was
/// bounced.
pub fn resolve_contact(puck: &mut Puck, paddle_pos: Vec2, paddle_vel: Vec2, config: &Config) -> bool {
    let offset = puck.pos - paddle_pos;
    let min_dist = config.contact_distance();
    let dist_sq = offset.length_squared();
    if dist_sq >= min_dist * min_dist {
        return false;
    }

    let dist = dist_sq.sqrt();
    // Exact centre overlap has no direction; push along +x
    let normal = if dist > 0.0 { offset / dist } else { Vec2::X };

    puck.pos += normal * (min_dist - dist);

    let closing = (puck.vel - paddle_vel).dot(normal);
    if closing >= 0.0 {
        return false;
    }

    let impulse = (-(1.0 + config.restitution) * closing).min(config.impulse_cap());
    puck.vel += normal * impulse;

    let limit = Vec2::splat(config.smash_limit);
    puck.vel += (paddle_vel * config.smash_factor).clamp(-limit, limit);
    true
}
