use glam::Vec2;

use crate::{Config, Side};

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    pub fn clamp(&self, point: Vec2) -> Vec2 {
        point.clamp(self.min, self.max)
    }
}

/// Table geometry: outer bounds, goal mouths and the paddle half-planes
#[derive(Debug, Clone)]
pub struct Table {
    pub width: f32,
    pub height: f32,
    pub goal_width: f32,
    paddle_radius: f32,
}

impl Table {
    pub fn new(config: &Config) -> Self {
        Self {
            width: config.table_width,
            height: config.table_height,
            goal_width: config.goal_width,
            paddle_radius: config.paddle_radius,
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn midline_y(&self) -> f32 {
        self.height / 2.0
    }

    /// Goal mouth as an open interval on x
    pub fn goal_mouth(&self) -> (f32, f32) {
        (
            (self.width - self.goal_width) / 2.0,
            (self.width + self.goal_width) / 2.0,
        )
    }

    pub fn in_goal_mouth(&self, x: f32) -> bool {
        let (left, right) = self.goal_mouth();
        x > left && x < right
    }

    /// Legal region for a paddle centre on the given side
    pub fn paddle_bounds(&self, side: Side) -> Aabb {
        let r = self.paddle_radius;
        let mid = self.midline_y();
        match side {
            Side::Human => Aabb::new(Vec2::new(r, mid + r), Vec2::new(self.width - r, self.height - r)),
            Side::Ai => Aabb::new(Vec2::new(r, r), Vec2::new(self.width - r, mid - r)),
        }
    }

    pub fn clamp_paddle(&self, side: Side, pos: Vec2) -> Vec2 {
        self.paddle_bounds(side).clamp(pos)
    }

    /// Spawn position for a paddle at match start
    pub fn paddle_spawn(&self, side: Side, config: &Config) -> Vec2 {
        match side {
            Side::Human => Vec2::new(self.width / 2.0, self.height - config.human_start_offset),
            Side::Ai => Vec2::new(self.width / 2.0, config.ai_start_y),
        }
    }

    pub fn puck_spawn(&self) -> Vec2 {
        self.center()
    }
}
