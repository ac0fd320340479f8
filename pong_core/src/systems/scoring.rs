use crate::{Config, Events, GameRng, GameState, Side, SpeedMultiplier};

/// Award a point to `scorer` and re-serve the ball from the center
pub fn award_point(
    state: &mut GameState,
    scorer: Side,
    speed: SpeedMultiplier,
    config: &Config,
    rng: &mut GameRng,
    events: &mut Events,
) {
    state.score.increment(scorer);
    events.record_score(scorer);
    log::debug!(
        "{:?} scored, now {} - {}",
        scorer,
        state.score.player,
        state.score.opponent
    );

    let serve_speed = config.ball_base_speed + speed.as_f32();
    state
        .ball
        .reset(config.center(), serve_speed, config.serve_max_angle, rng);
    log::trace!("Ball served with velocity {:?}", state.ball.vel);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Ball;
    use glam::Vec2;

    fn setup_state() -> (GameState, Config, Events, GameRng) {
        let config = Config::new();
        let mut rng = GameRng::new(12345); // Fixed seed for deterministic tests
        let state = GameState::new(&config, &mut rng);
        (state, config, Events::new(), rng)
    }

    #[test]
    fn test_opponent_scores() {
        let (mut state, config, mut events, mut rng) = setup_state();
        state.ball = Ball::new(Vec2::new(-5.0, 100.0), Vec2::new(-6.0, 0.0));

        award_point(
            &mut state,
            Side::Opponent,
            SpeedMultiplier::new(3),
            &config,
            &mut rng,
            &mut events,
        );

        assert_eq!(state.score.opponent, 1, "Opponent should score");
        assert_eq!(state.score.player, 0, "Player should not score");
        assert!(events.opponent_scored);
        assert!(!events.player_scored);
    }

    #[test]
    fn test_ball_resets_after_scoring() {
        let (mut state, config, mut events, mut rng) = setup_state();
        state.ball = Ball::new(Vec2::new(805.0, 40.0), Vec2::new(6.0, 2.0));
        let speed = SpeedMultiplier::new(4);

        award_point(&mut state, Side::Player, speed, &config, &mut rng, &mut events);

        assert_eq!(state.ball.pos, config.center(), "Ball back at center");
        let expected_speed = config.ball_base_speed + 4.0;
        assert!((state.ball.vel.length() - expected_speed).abs() < 1e-4);
        assert!(state.ball.vel.x < 0.0, "Served back toward the player");
    }

    #[test]
    fn test_multiple_scores_accumulate() {
        let (mut state, config, mut events, mut rng) = setup_state();
        let speed = SpeedMultiplier::default();

        award_point(&mut state, Side::Player, speed, &config, &mut rng, &mut events);
        events.clear();
        award_point(&mut state, Side::Player, speed, &config, &mut rng, &mut events);

        assert_eq!(state.score.player, 2, "Scores should accumulate");
        assert_eq!(state.score.opponent, 0);
    }
}
