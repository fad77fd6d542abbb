/// Game tuning parameters for air hockey
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Table (logical canvas units)
    pub const TABLE_WIDTH: f32 = 400.0;
    pub const TABLE_HEIGHT: f32 = 700.0;
    pub const GOAL_WIDTH: f32 = 160.0;

    // Bodies
    pub const PUCK_RADIUS: f32 = 18.0;
    pub const PADDLE_RADIUS: f32 = 28.0;

    // Puck physics (per tick)
    pub const FRICTION: f32 = 0.99;
    pub const WALL_BOUNCE: f32 = 0.9;
    pub const MAX_SPEED: f32 = 25.0;

    // Paddle collision response
    pub const RESTITUTION: f32 = 1.3; // > 1 for a lively bounce
    pub const IMPULSE_CAP_FACTOR: f32 = 1.5; // x MAX_SPEED
    pub const SMASH_FACTOR: f32 = 0.3;
    pub const SMASH_LIMIT: f32 = 10.0;

    // Paddle tracking (fraction of remaining distance per tick)
    pub const HUMAN_FOLLOW: f32 = 0.8;
    pub const AI_FOLLOW: f32 = 0.09;

    // AI heuristic
    pub const AI_DEFENSE_Y: f32 = 80.0;
    pub const AI_ATTACK_MARGIN: f32 = 10.0;

    // Spawns
    pub const HUMAN_START_OFFSET: f32 = 100.0; // from the bottom edge
    pub const AI_START_Y: f32 = 100.0;

    // Serve
    pub const SERVE_SPEED: f32 = 6.0;
    pub const RESPAWN_DELAY_TICKS: u32 = 60; // 1 s at 60 Hz

    // Match
    pub const WIN_SCORE: u8 = 3; // first to 3
    pub const COUNTDOWN_SECONDS: u8 = 5;
    pub const TICK_RATE_HZ: u32 = 60;
}
