use crate::params::Params;

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Time {
    pub delta_millis: i64, // Elapsed time since the previous frame
    pub now_millis: i64,   // Total elapsed time
}

impl Time {
    pub fn new(delta_millis: i64, now_millis: i64) -> Self {
        Self {
            delta_millis,
            now_millis,
        }
    }

    /// Add a finished frame's delta to the running clock
    pub fn advance(&mut self, delta_millis: i64) {
        self.now_millis += delta_millis;
    }
}

impl Default for Time {
    fn default() -> Self {
        Self {
            delta_millis: Params::FRAME_MILLIS,
            now_millis: 0,
        }
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(Params::SEED)
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    pub wall_hits: Vec<String>,   // Wall ids, in check order
    pub player_hits: Vec<String>, // Player ids, in check order
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.wall_hits.clear();
        self.player_hits.clear();
    }

    pub fn ball_hit_wall(&self) -> bool {
        !self.wall_hits.is_empty()
    }

    pub fn ball_hit_player(&self) -> bool {
        !self.player_hits.is_empty()
    }
}

/// Paddle input queue, filled by the input layer between frames
#[derive(Debug, Clone, Default)]
pub struct IntentQueue {
    pub intents: Vec<(String, i8)>, // (player_id, direction)
}

impl IntentQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.intents.clear();
    }

    pub fn push_intent(&mut self, player_id: impl Into<String>, dir: i8) {
        self.intents.push((player_id.into(), dir));
    }

    pub fn pop_intents(&mut self) -> Vec<(String, i8)> {
        std::mem::take(&mut self.intents)
    }
}
