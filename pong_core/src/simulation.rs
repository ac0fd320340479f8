//! Fixed-timestep driver
//!
//! Hosts either call `tick` once per display refresh or feed elapsed time to
//! `advance`, which runs whole frames of `Params::FIXED_DT`.

use crate::{build_frame, step, Config, Events, Frame, GameRng, GameState, InputSnapshot, Params};

pub struct Simulation {
    pub state: GameState,
    pub config: Config,
    /// Events from every frame run by the last `tick`/`advance`
    pub events: Events,
    rng: GameRng,
    frame_events: Events,
    accumulator: f32,
    frames: u64,
}

impl Simulation {
    pub fn new(config: Config, seed: u64) -> Self {
        let mut rng = GameRng::new(seed);
        let state = GameState::new(&config, &mut rng);
        log::info!(
            "Simulation ready: {}x{} playfield, seed {}",
            config.width,
            config.height,
            seed
        );

        Self {
            state,
            config,
            events: Events::new(),
            rng,
            frame_events: Events::new(),
            accumulator: 0.0,
            frames: 0,
        }
    }

    /// Run exactly one frame
    pub fn tick(&mut self, input: &InputSnapshot) -> &Events {
        self.events.clear();
        self.run_frame(input);
        &self.events
    }

    /// Accumulate host time and run as many whole frames as it covers.
    /// Returns the number of frames run.
    pub fn advance(&mut self, dt: f32, input: &InputSnapshot) -> u32 {
        self.events.clear();

        // Clamp dt to prevent large jumps (tab switches, debugger pauses)
        let dt = dt.max(0.0).min(Params::MAX_DT);
        self.accumulator += dt;

        let mut steps = 0;
        while self.accumulator >= Params::FIXED_DT && steps < Params::MAX_STEPS_PER_ADVANCE {
            self.run_frame(input);
            self.accumulator -= Params::FIXED_DT;
            steps += 1;
        }

        if steps == Params::MAX_STEPS_PER_ADVANCE {
            self.accumulator %= Params::FIXED_DT;
        }

        steps
    }

    /// Total frames simulated
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Draw commands for the current state
    pub fn frame(&self) -> Frame {
        build_frame(&self.state, &self.config)
    }

    fn run_frame(&mut self, input: &InputSnapshot) {
        step(
            &mut self.state,
            input,
            &self.config,
            &mut self.rng,
            &mut self.frame_events,
        );
        self.events.merge(&self.frame_events);
        self.frames += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (Simulation, InputSnapshot) {
        let sim = Simulation::new(Config::new(), 2024);
        let input = InputSnapshot::new(&sim.config);
        (sim, input)
    }

    #[test]
    fn test_tick_runs_one_frame() {
        let (mut sim, input) = setup();
        sim.tick(&input);
        sim.tick(&input);
        assert_eq!(sim.frames(), 2);
    }

    #[test]
    fn test_advance_accumulates_partial_frames() {
        let (mut sim, input) = setup();
        let half = Params::FIXED_DT / 2.0;

        assert_eq!(sim.advance(half, &input), 0);
        assert_eq!(sim.advance(half, &input), 1);
        assert_eq!(sim.frames(), 1);
    }

    #[test]
    fn test_advance_runs_whole_frames() {
        let (mut sim, input) = setup();
        let steps = sim.advance(Params::FIXED_DT * 3.5, &input);
        assert_eq!(steps, 3);
    }

    #[test]
    fn test_advance_clamps_large_dt() {
        let (mut sim, input) = setup();
        let steps = sim.advance(10.0, &input);
        assert!(steps <= Params::MAX_STEPS_PER_ADVANCE);
        assert!(steps >= Params::MAX_STEPS_PER_ADVANCE - 1);

        // Nothing carried over beyond one partial frame
        let next = sim.advance(0.0, &input);
        assert!(next <= 1);
    }

    #[test]
    fn test_advance_ignores_negative_dt() {
        let (mut sim, input) = setup();
        assert_eq!(sim.advance(-1.0, &input), 0);
        assert_eq!(sim.frames(), 0);
    }

    #[test]
    fn test_same_seed_same_game() {
        let (mut a, input) = setup();
        let (mut b, _) = setup();
        for _ in 0..600 {
            a.tick(&input);
            b.tick(&input);
        }
        assert_eq!(a.state.ball.pos, b.state.ball.pos);
        assert_eq!(a.state.score, b.state.score);
    }

    #[test]
    fn test_frame_reflects_state() {
        let (sim, _) = setup();
        let frame = sim.frame();
        assert_eq!(frame.width, sim.config.width);
        assert!(!frame.commands.is_empty());
    }
}
