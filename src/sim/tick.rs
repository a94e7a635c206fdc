//! Fixed timestep simulation tick
//!
//! Advances the game state by one tick: motion, wall and paddle bounces,
//! scoring and win detection.

use super::collision::collision;
use super::state::{GameEvent, GamePhase, GameState, Side};
use crate::consts::*;

/// Advance the game state by one tick
///
/// Returns the events produced, in the order they happened. A paused or
/// finished game is left untouched.
pub fn tick(state: &mut GameState) -> Vec<GameEvent> {
    let mut events = Vec::new();

    // Don't tick if paused or game over
    match state.phase {
        GamePhase::Paused | GamePhase::GameOver { .. } => return events,
        GamePhase::Playing => {}
    }

    let arena = state.arena;

    state.ball.pos += state.ball.vel;

    for side in [Side::Left, Side::Right] {
        let paddle = state.paddle_mut(side);
        paddle.y += paddle.dy;
        paddle.clamp_to(&arena);
    }

    // Top/bottom walls
    let ball = &mut state.ball;
    if ball.pos.y + ball.radius > arena.height || ball.pos.y - ball.radius < 0.0 {
        ball.vel.y = -ball.vel.y;
        events.push(GameEvent::WallBounce);
    }

    // Only the paddle on the ball's half can be hit
    let side = arena.side_of(state.ball.pos.x);
    if collision(&state.ball, state.paddle(side)) {
        let paddle = state.paddle(side);
        let half = paddle.height / 2.0;
        // -1 at the paddle's top end, +1 at its bottom end
        let collide_point = (state.ball.pos.y - paddle.center_y()) / half;
        let angle = MAX_BOUNCE_ANGLE * collide_point;
        let direction = match side {
            Side::Left => 1.0,
            Side::Right => -1.0,
        };

        let ball = &mut state.ball;
        ball.vel.x = direction * ball.speed * angle.cos();
        ball.vel.y = ball.speed * angle.sin();
        ball.speed += PADDLE_HIT_SPEEDUP;

        log::debug!("Paddle hit ({:?}), speed now {:.1}", side, ball.speed);
        events.push(GameEvent::PaddleHit {
            side,
            speed: ball.speed,
        });
    }

    // Ball left the field: the opposite side scores
    let ball = &state.ball;
    let scorer = if ball.pos.x - ball.radius < 0.0 {
        Some(Side::Left.opponent())
    } else if ball.pos.x + ball.radius > arena.width {
        Some(Side::Right.opponent())
    } else {
        None
    };

    if let Some(scorer) = scorer {
        let paddle = state.paddle_mut(scorer);
        paddle.score += 1;
        let score = paddle.score;
        state.ball.reset(arena.center());

        log::info!(
            "{:?} scores: {} - {}",
            scorer,
            state.left.score,
            state.right.score
        );
        events.push(GameEvent::Scored { side: scorer, score });

        if score >= state.win_score {
            state.phase = GamePhase::GameOver { winner: scorer };
            log::info!("{:?} wins the match", scorer);
            events.push(GameEvent::Won { side: scorer });
        }
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Arena;
    use glam::Vec2;
    use proptest::prelude::*;

    fn new_state() -> GameState {
        GameState::new(Arena::new(600.0, 400.0), WIN_SCORE)
    }

    #[test]
    fn test_tick_moves_ball() {
        let mut state = new_state();
        let events = tick(&mut state);
        assert_eq!(state.ball.pos, Vec2::new(305.0, 205.0));
        assert!(events.is_empty());
    }

    #[test]
    fn test_tick_pause() {
        let mut state = new_state();
        state.phase = GamePhase::Paused;
        state.left.dy = -PADDLE_SPEED;
        state.ball.pos = Vec2::new(5.0, 200.0);
        let before = format!("{:?}", state);

        for _ in 0..5 {
            assert!(tick(&mut state).is_empty());
        }
        assert_eq!(format!("{:?}", state), before);
    }

    #[test]
    fn test_bottom_wall_bounce() {
        let mut state = new_state();
        state.ball.pos = Vec2::new(300.0, 388.0);
        state.ball.vel = Vec2::new(5.0, 5.0);

        let events = tick(&mut state);
        assert_eq!(state.ball.vel, Vec2::new(5.0, -5.0));
        assert_eq!(events, vec![GameEvent::WallBounce]);
    }

    #[test]
    fn test_top_wall_bounce() {
        let mut state = new_state();
        state.ball.pos = Vec2::new(300.0, 12.0);
        state.ball.vel = Vec2::new(5.0, -5.0);

        let events = tick(&mut state);
        assert_eq!(state.ball.pos, Vec2::new(305.0, 7.0));
        assert_eq!(state.ball.vel, Vec2::new(5.0, 5.0));
        assert_eq!(events, vec![GameEvent::WallBounce]);
    }

    #[test]
    fn test_paddle_hit_at_center_sends_ball_straight() {
        let mut state = new_state();
        // Left paddle spans y 150..250, center 200
        state.ball.pos = Vec2::new(22.0, 200.0);
        state.ball.vel = Vec2::new(-5.0, 0.0);

        let events = tick(&mut state);
        assert!((state.ball.vel.x - 5.0).abs() < 1e-5);
        assert!(state.ball.vel.y.abs() < 1e-5);
        assert!((state.ball.speed - 5.1).abs() < 1e-5);
        assert!(matches!(
            events.as_slice(),
            [GameEvent::PaddleHit { side: Side::Left, .. }]
        ));
    }

    #[test]
    fn test_paddle_hit_near_end_deflects_up_to_45_degrees() {
        let mut state = new_state();
        // Right paddle spans y 150..250; hit right at the top end
        state.ball.pos = Vec2::new(582.0, 150.0);
        state.ball.vel = Vec2::new(5.0, 0.0);

        tick(&mut state);
        let expected = 5.0 * std::f32::consts::FRAC_PI_4.cos();
        assert!((state.ball.vel.x + expected).abs() < 1e-4);
        assert!((state.ball.vel.y + expected).abs() < 1e-4);
    }

    #[test]
    fn test_speed_grows_by_fixed_step_per_hit() {
        let mut state = new_state();
        for hit in 1..=5 {
            let before = state.ball.speed;
            state.ball.pos = Vec2::new(22.0, 200.0);
            state.ball.vel = Vec2::new(-5.0, 0.0);
            tick(&mut state);
            assert!(
                (state.ball.speed - before - PADDLE_HIT_SPEEDUP).abs() < 1e-5,
                "hit {hit} changed speed by {}",
                state.ball.speed - before
            );
        }
        assert!((state.ball.speed - 5.5).abs() < 1e-4);
    }

    #[test]
    fn test_left_exit_scores_for_right_and_resets_ball() {
        let mut state = new_state();
        state.left.y = 0.0;
        state.ball.pos = Vec2::new(12.0, 350.0);
        state.ball.vel = Vec2::new(-6.0, 2.0);
        state.ball.speed = 6.3;

        let events = tick(&mut state);
        assert_eq!(state.right.score, 1);
        assert_eq!(state.left.score, 0);
        assert_eq!(state.ball.pos, state.arena.center());
        assert_eq!(state.ball.speed, BALL_START_SPEED);
        assert_eq!(state.ball.vel, Vec2::new(6.0, 2.0));
        assert_eq!(
            events,
            vec![GameEvent::Scored {
                side: Side::Right,
                score: 1
            }]
        );
    }

    #[test]
    fn test_right_exit_scores_for_left() {
        let mut state = new_state();
        state.right.y = 0.0;
        state.ball.pos = Vec2::new(588.0, 350.0);
        state.ball.vel = Vec2::new(6.0, 0.0);

        tick(&mut state);
        assert_eq!(state.left.score, 1);
        assert_eq!(state.ball.vel.x, -6.0);
    }

    #[test]
    fn test_tenth_point_ends_game() {
        let mut state = new_state();
        state.right.score = 9;
        state.left.y = 0.0;
        state.ball.pos = Vec2::new(12.0, 350.0);
        state.ball.vel = Vec2::new(-5.0, 0.0);

        let events = tick(&mut state);
        assert_eq!(state.right.score, 10);
        assert_eq!(state.phase, GamePhase::GameOver { winner: Side::Right });
        assert_eq!(events.last(), Some(&GameEvent::Won { side: Side::Right }));

        // Terminal: nothing moves any more
        state.ball.pos = Vec2::new(12.0, 350.0);
        assert!(tick(&mut state).is_empty());
        assert_eq!(state.right.score, 10);
        assert_eq!(state.ball.pos, Vec2::new(12.0, 350.0));
    }

    proptest! {
        #[test]
        fn paddles_stay_inside_arena(
            start_left in -50.0f32..450.0,
            start_right in -50.0f32..450.0,
            moves in proptest::collection::vec((-1i8..=1, -1i8..=1), 1..60),
        ) {
            let mut state = new_state();
            state.left.y = start_left;
            state.right.y = start_right;
            for (l, r) in moves {
                state.left.dy = l as f32 * PADDLE_SPEED;
                state.right.dy = r as f32 * PADDLE_SPEED;
                tick(&mut state);
                if state.winner().is_some() {
                    break;
                }
                for paddle in [&state.left, &state.right] {
                    prop_assert!(paddle.y >= 0.0);
                    prop_assert!(paddle.y <= state.arena.height - paddle.height);
                }
            }
        }

        #[test]
        fn speed_never_drops_below_serve_speed(
            ticks in 1usize..400,
            left_dy in -1i8..=1,
            right_dy in -1i8..=1,
        ) {
            let mut state = new_state();
            state.left.dy = left_dy as f32 * PADDLE_SPEED;
            state.right.dy = right_dy as f32 * PADDLE_SPEED;
            for _ in 0..ticks {
                tick(&mut state);
                prop_assert!(state.ball.speed >= BALL_START_SPEED);
            }
        }
    }
}
