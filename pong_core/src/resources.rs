use crate::components::Side;

/// Game score tracking. Scores only ever go up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub player: u32,
    pub opponent: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Player => self.player += 1,
            Side::Opponent => self.opponent += 1,
        }
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.player,
            Side::Opponent => self.opponent,
        }
    }

    /// Label text for the player score element
    pub fn player_label(&self) -> String {
        format!("Player: {}", self.player)
    }

    /// Label text for the opponent score element
    pub fn opponent_label(&self) -> String {
        format!("AI: {}", self.opponent)
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
        Self::new(12345)
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    pub player_scored: bool,
    pub opponent_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.player_scored = false;
        self.opponent_scored = false;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
    }

    pub fn record_score(&mut self, scorer: Side) {
        match scorer {
            Side::Player => self.player_scored = true,
            Side::Opponent => self.opponent_scored = true,
        }
    }

    pub fn any_score(&self) -> bool {
        self.player_scored || self.opponent_scored
    }

    /// Fold another frame's events into this one
    pub fn merge(&mut self, other: &Events) {
        self.player_scored |= other.player_scored;
        self.opponent_scored |= other.opponent_scored;
        self.ball_hit_paddle |= other.ball_hit_paddle;
        self.ball_hit_wall |= other.ball_hit_wall;
    }
}
