/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Court (pixels)
    pub const COURT_WIDTH: f64 = 800.0;
    pub const COURT_HEIGHT: f64 = 600.0;
    pub const WALL_THICKNESS: f64 = 10.0;

    // Paddle
    pub const PADDLE_WIDTH: f64 = 10.0;
    pub const PADDLE_HEIGHT: f64 = 60.0;
    pub const PADDLE_SPEED: f64 = 0.5; // pixels per millisecond
    pub const PADDLE_INSET: f64 = 40.0; // distance from the side walls

    // Ball
    pub const BALL_WIDTH: f64 = 20.0;
    pub const BALL_HEIGHT: f64 = 20.0;
    pub const BALL_SPEED: f64 = 5.0; // per update, or per millisecond when time-scaled

    // Physics
    pub const FRAME_MILLIS: i64 = 16; // ~60 Hz
    pub const MAX_DELTA_MILLIS: i64 = 100; // Clamp to prevent large jumps

    // Deterministic default seed
    pub const SEED: u64 = 12345;
}
