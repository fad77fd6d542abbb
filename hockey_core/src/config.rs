use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::params::Params;

/// Rejected configuration values
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f32 },
    #[error("{field} must lie in {range}, got {value}")]
    OutOfRange {
        field: &'static str,
        range: &'static str,
        value: f32,
    },
    #[error("goal width {goal} does not fit a table {table} wide")]
    GoalTooWide { goal: f32, table: f32 },
    #[error("paddles of radius {radius} do not fit a table half {half} high")]
    PaddleTooLarge { radius: f32, half: f32 },
    #[error("win score must be at least 1")]
    ZeroWinScore,
    #[error("tick rate must be at least 1 Hz")]
    ZeroTickRate,
}

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub table_width: f32,
    pub table_height: f32,
    pub goal_width: f32,
    pub puck_radius: f32,
    pub paddle_radius: f32,
    pub friction: f32,
    pub wall_bounce: f32,
    pub max_speed: f32,
    pub restitution: f32,
    pub impulse_cap_factor: f32,
    pub smash_factor: f32,
    pub smash_limit: f32,
    pub human_follow: f32,
    pub ai_follow: f32,
    pub ai_defense_y: f32,
    pub ai_attack_margin: f32,
    pub human_start_offset: f32,
    pub ai_start_y: f32,
    pub serve_speed: f32,
    pub respawn_delay_ticks: u32,
    pub win_score: u8,
    pub countdown_seconds: u8,
    pub tick_rate_hz: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            table_width: Params::TABLE_WIDTH,
            table_height: Params::TABLE_HEIGHT,
            goal_width: Params::GOAL_WIDTH,
            puck_radius: Params::PUCK_RADIUS,
            paddle_radius: Params::PADDLE_RADIUS,
            friction: Params::FRICTION,
            wall_bounce: Params::WALL_BOUNCE,
            max_speed: Params::MAX_SPEED,
            restitution: Params::RESTITUTION,
            impulse_cap_factor: Params::IMPULSE_CAP_FACTOR,
            smash_factor: Params::SMASH_FACTOR,
            smash_limit: Params::SMASH_LIMIT,
            human_follow: Params::HUMAN_FOLLOW,
            ai_follow: Params::AI_FOLLOW,
            ai_defense_y: Params::AI_DEFENSE_Y,
            ai_attack_margin: Params::AI_ATTACK_MARGIN,
            human_start_offset: Params::HUMAN_START_OFFSET,
            ai_start_y: Params::AI_START_Y,
            serve_speed: Params::SERVE_SPEED,
            respawn_delay_ticks: Params::RESPAWN_DELAY_TICKS,
            win_score: Params::WIN_SCORE,
            countdown_seconds: Params::COUNTDOWN_SECONDS,
            tick_rate_hz: Params::TICK_RATE_HZ,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Largest impulse a single paddle contact may apply
    pub fn impulse_cap(&self) -> f32 {
        self.max_speed * self.impulse_cap_factor
    }

    /// Sum of puck and paddle radii (contact distance)
    pub fn contact_distance(&self) -> f32 {
        self.puck_radius + self.paddle_radius
    }

    /// Frame period in milliseconds for the simulation loop
    pub fn frame_ms(&self) -> u64 {
        (1000 / self.tick_rate_hz.max(1)) as u64
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("table_width", self.table_width),
            ("table_height", self.table_height),
            ("goal_width", self.goal_width),
            ("puck_radius", self.puck_radius),
            ("paddle_radius", self.paddle_radius),
            ("max_speed", self.max_speed),
        ];
        for (field, value) in positive {
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigError::NotPositive { field, value });
            }
        }

        if !(self.friction > 0.0 && self.friction <= 1.0) {
            return Err(ConfigError::OutOfRange {
                field: "friction",
                range: "(0, 1]",
                value: self.friction,
            });
        }
        if !(0.0..=1.0).contains(&self.wall_bounce) {
            return Err(ConfigError::OutOfRange {
                field: "wall_bounce",
                range: "[0, 1]",
                value: self.wall_bounce,
            });
        }
        for (field, value) in [
            ("human_follow", self.human_follow),
            ("ai_follow", self.ai_follow),
        ] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(ConfigError::OutOfRange {
                    field,
                    range: "(0, 1]",
                    value,
                });
            }
        }

        if self.goal_width >= self.table_width {
            return Err(ConfigError::GoalTooWide {
                goal: self.goal_width,
                table: self.table_width,
            });
        }
        let half = self.table_height / 2.0;
        if self.paddle_radius * 2.0 >= half || self.paddle_radius * 2.0 >= self.table_width {
            return Err(ConfigError::PaddleTooLarge {
                radius: self.paddle_radius,
                half,
            });
        }
        if self.win_score == 0 {
            return Err(ConfigError::ZeroWinScore);
        }
        if self.tick_rate_hz == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        Ok(())
    }
}
