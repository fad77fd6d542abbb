use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Which end of the table a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Side {
    /// Bottom half, defends the bottom goal
    #[serde(rename = "PLAYER")]
    Human,
    /// Top half, defends the top goal
    Ai,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Human => Side::Ai,
            Side::Ai => Side::Human,
        }
    }
}

/// Puck lifecycle between goals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PuckPhase {
    Live,
    /// A goal was counted; the puck keeps moving until it is re-served
    AwaitingRespawn { ticks_left: u32, serve_toward: Side },
}

/// Puck component
#[derive(Debug, Clone, Copy)]
pub struct Puck {
    pub pos: Vec2,
    pub vel: Vec2,
    pub phase: PuckPhase,
}

impl Puck {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            phase: PuckPhase::Live,
        }
    }

    pub fn is_live(&self) -> bool {
        self.phase == PuckPhase::Live
    }

    /// Place the puck at `center` and serve it toward `toward`
    pub fn serve(&mut self, center: Vec2, speed: f32, toward: Side) {
        self.pos = center;
        // Human defends the bottom edge (+y), the AI the top edge (-y)
        let vy = match toward {
            Side::Human => speed,
            Side::Ai => -speed,
        };
        self.vel = Vec2::new(0.0, vy);
        self.phase = PuckPhase::Live;
    }
}

/// Paddle component
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2,
    pub prev_pos: Vec2, // position before this tick's integration
    pub target: Vec2,
}

impl Paddle {
    pub fn new(side: Side, pos: Vec2) -> Self {
        Self {
            side,
            pos,
            prev_pos: pos,
            target: pos,
        }
    }

    /// Displacement over the last tick
    pub fn velocity(&self) -> Vec2 {
        self.pos - self.prev_pos
    }
}
