//! Read-only view of the table for renderers

use glam::Vec2;
use hecs::World;
use serde::Serialize;

use crate::{Paddle, Puck, Score, Side, Time};

/// Positions and score at the end of a tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Snapshot {
    pub tick: u64,
    pub puck: Vec2,
    pub puck_vel: Vec2,
    pub puck_live: bool,
    pub human: Vec2,
    pub ai: Vec2,
    pub score: Score,
}

impl Snapshot {
    pub fn capture(world: &World, time: &Time, score: &Score) -> Self {
        let (puck, puck_vel, puck_live) = world
            .query::<&Puck>()
            .iter()
            .next()
            .map(|(_e, p)| (p.pos, p.vel, p.is_live()))
            .unwrap_or((Vec2::ZERO, Vec2::ZERO, false));

        let mut human = Vec2::ZERO;
        let mut ai = Vec2::ZERO;
        for (_e, paddle) in world.query::<&Paddle>().iter() {
            match paddle.side {
                Side::Human => human = paddle.pos,
                Side::Ai => ai = paddle.pos,
            }
        }

        Self {
            tick: time.tick,
            puck,
            puck_vel,
            puck_live,
            human,
            ai,
            score: *score,
        }
    }
}
