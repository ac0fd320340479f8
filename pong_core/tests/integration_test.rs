use glam::Vec2;
use pong_core::*;
use rand::{Rng, SeedableRng};

struct Harness {
    state: GameState,
    input: InputSnapshot,
    config: Config,
    rng: GameRng,
    events: Events,
}

impl Harness {
    fn new(speed: u32) -> Self {
        let config = Config::new();
        let mut rng = GameRng::new(12345);
        let state = GameState::new(&config, &mut rng);
        let mut input = InputSnapshot::new(&config);
        input.set_speed(SpeedMultiplier::new(speed));
        Self {
            state,
            input,
            config,
            rng,
            events: Events::new(),
        }
    }

    fn step(&mut self) {
        step(
            &mut self.state,
            &self.input,
            &self.config,
            &mut self.rng,
            &mut self.events,
        );
    }
}

#[test]
fn test_ball_returned_by_player_paddle() {
    let mut h = Harness::new(3);
    h.input.player_y = 210.0; // span 210..290
    h.state.ball = Ball::new(Vec2::new(42.0, 250.0), Vec2::new(-5.0, 0.0));

    h.step();

    let expected_x = h.config.paddle_margin + h.config.paddle_width + h.config.ball_radius;
    assert_eq!(h.state.ball.pos.x, expected_x);
    assert!(h.state.ball.vel.x > 0.0, "Horizontal velocity flips");
    assert!(h.events.ball_hit_paddle);
    assert_eq!(h.state.score, Score::new());
}

#[test]
fn test_ball_from_center_reaches_player_paddle() {
    let mut h = Harness::new(3);
    h.input.player_y = 210.0;
    h.state.ball = Ball::new(h.config.center(), Vec2::new(-5.0, 0.0));

    let mut frames = 0;
    while !h.events.ball_hit_paddle {
        h.step();
        frames += 1;
        assert!(frames < 200, "Ball never reached the paddle");
    }

    assert_eq!(h.state.ball.pos.x, 40.0);
    assert_eq!(h.state.ball.vel, Vec2::new(5.0, 0.0));
}

#[test]
fn test_ball_level_with_paddle_edge_scores_for_opponent() {
    let mut h = Harness::new(3);
    h.input.player_y = 210.0;
    h.state.ball = Ball::new(Vec2::new(42.0, 210.0), Vec2::new(-5.0, 0.0));

    let mut frames = 0;
    while !h.events.any_score() {
        h.step();
        assert!(!h.events.ball_hit_paddle, "Edge contact is never a hit");
        frames += 1;
        assert!(frames < 50, "Ball never left the playfield");
    }

    assert!(h.events.opponent_scored);
    assert!(!h.events.player_scored);
    assert_eq!(h.state.score.opponent, 1);
    assert_eq!(h.state.score.player, 0);
    assert_eq!(h.state.ball.pos, h.config.center());
}

#[test]
fn test_ball_clamped_at_top_wall() {
    let mut h = Harness::new(3);
    h.state.ball = Ball::new(Vec2::new(400.0, 0.0), Vec2::new(3.0, -2.0));

    h.step();

    assert_eq!(h.state.ball.pos.y, h.config.ball_radius);
    assert!(h.state.ball.vel.y > 0.0);
    assert!(h.events.ball_hit_wall);
}

#[test]
fn test_reset_after_opponent_scores() {
    for seed in 0..200u64 {
        let mut h = Harness::new(7);
        h.rng = GameRng::new(seed);
        h.state.ball = Ball::new(Vec2::new(12.0, 50.0), Vec2::new(-6.0, 1.0));
        h.input.player_y = 300.0;

        h.step();
        assert!(h.events.opponent_scored, "seed {}", seed);

        let vel = h.state.ball.vel;
        assert!((vel.length() - (5.0 + 7.0)).abs() < 1e-4);
        assert!(vel.x > 0.0, "Serve reverses the pre-reset direction");
        let angle = vel.y.atan2(vel.x);
        assert!(angle.abs() <= std::f32::consts::FRAC_PI_6 + 1e-5);
    }
}

#[test]
fn test_reset_after_player_scores_serves_left() {
    let mut h = Harness::new(2);
    h.state.opponent.y = 0.0;
    h.state.ball = Ball::new(Vec2::new(788.0, 450.0), Vec2::new(6.0, 0.0));

    h.step();

    assert!(h.events.player_scored);
    assert_eq!(h.state.score.player, 1);
    assert!(h.state.ball.vel.x < 0.0);
    assert!((h.state.ball.vel.length() - 7.0).abs() < 1e-4);
}

#[test]
fn test_opponent_moves_up_toward_higher_ball() {
    for speed in [1, 3, 10] {
        let mut h = Harness::new(speed);
        h.state.opponent.y = 300.0; // center 340
        h.state.ball = Ball::new(Vec2::new(400.0, 100.0), Vec2::new(1.0, 0.0));

        h.step();

        let expected = 300.0 - (2.0 + speed as f32) * 0.7;
        assert!(
            (h.state.opponent.y - expected).abs() < 1e-4,
            "speed {}: got {}, expected {}",
            speed,
            h.state.opponent.y,
            expected
        );
    }
}

#[test]
fn test_invariants_hold_over_long_play() {
    let mut h = Harness::new(3);
    let mut pointer_rng = rand::rngs::StdRng::seed_from_u64(77);
    let mut last_score = h.state.score;

    for frame in 0..20_000 {
        if frame % 30 == 0 {
            let pointer_y = pointer_rng.gen_range(-100.0..600.0);
            h.input.pointer_moved(pointer_y, &h.config);
        }
        if frame % 2_000 == 0 {
            h.input
                .set_speed(SpeedMultiplier::new(pointer_rng.gen_range(1..=10)));
        }

        h.step();

        let max_y = h.config.height - h.config.paddle_height;
        assert!(h.state.player.y >= 0.0 && h.state.player.y <= max_y);
        assert!(h.state.opponent.y >= 0.0 && h.state.opponent.y <= max_y);

        let r = h.config.ball_radius;
        assert!(h.state.ball.pos.y >= r && h.state.ball.pos.y <= h.config.height - r);

        let score = h.state.score;
        assert!(score.player >= last_score.player);
        assert!(score.opponent >= last_score.opponent);
        let gained =
            (score.player - last_score.player) + (score.opponent - last_score.opponent);
        assert!(gained <= 1, "At most one point per frame");
        assert_eq!(gained == 1, h.events.any_score());
        last_score = score;
    }

    assert!(
        last_score.player + last_score.opponent > 0,
        "Somebody should have scored in 20k frames"
    );
}

#[test]
fn test_simulation_driver_matches_manual_steps() {
    let config = Config::new();
    let input = InputSnapshot::new(&config);
    let mut sim = Simulation::new(config.clone(), 42);

    let mut rng = GameRng::new(42);
    let mut state = GameState::new(&config, &mut rng);
    let mut events = Events::new();

    for _ in 0..120 {
        sim.tick(&input);
        step(&mut state, &input, &config, &mut rng, &mut events);
    }

    assert_eq!(sim.state.ball.pos, state.ball.pos);
    assert_eq!(sim.state.opponent.y, state.opponent.y);
    assert_eq!(sim.frames(), 120);
}
