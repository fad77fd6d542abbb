use crate::{Config, Paddle, Puck, Side, Table};
use hecs::World;

/// Ease each paddle toward its target, then clamp it into its half-plane
pub fn move_paddles(world: &mut World, config: &Config, table: &Table) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.prev_pos = paddle.pos;

        let follow = match paddle.side {
            Side::Human => config.human_follow,
            Side::Ai => config.ai_follow,
        };
        paddle.pos += (paddle.target - paddle.pos) * follow;
        paddle.pos = table.clamp_paddle(paddle.side, paddle.pos);
    }
}

/// Integrate the puck, apply table drag and cap its speed
pub fn move_puck(world: &mut World, config: &Config) {
    for (_entity, puck) in world.query_mut::<&mut Puck>() {
        puck.pos += puck.vel;
        puck.vel *= config.friction;
        puck.vel = puck.vel.clamp_length_max(config.max_speed);
    }
}
