//! Single-frame simulation step
//!
//! Order per frame: gravity, friction, integrate, pegs (field order),
//! walls, landing check. There is no dt; each call is exactly one frame.

use super::board::Board;
use super::collision::{ball_peg_collision, resolve_peg_collision, resolve_walls};
use super::pegs::Peg;
use super::rng::RandomSource;
use super::state::{Ball, PegHit};
use super::tuning::PhysicsTuning;

/// Advance a ball by one frame
///
/// `on_hit` is invoked once for every peg the ball overlapped this frame.
/// Returns true while the ball is still falling.
pub fn step_ball(
    ball: &mut Ball,
    pegs: &[Peg],
    board: &Board,
    tuning: &PhysicsTuning,
    rng: &mut impl RandomSource,
    frame: u64,
    on_hit: &mut dyn FnMut(&PegHit),
) -> bool {
    ball.vel.y += tuning.gravity;
    ball.vel *= tuning.friction;
    ball.pos += ball.vel;

    let center_x = board.center_x();
    for peg in pegs {
        let contact = ball_peg_collision(ball.pos, ball.radius, peg);
        if !contact.hit {
            continue;
        }
        let impact_speed = resolve_peg_collision(ball, &contact, center_x, tuning, rng);
        on_hit(&PegHit {
            peg_id: peg.id,
            pos: peg.pos,
            frame,
            impact_speed,
        });
    }

    resolve_walls(ball, board, tuning.bounce);

    !ball.has_landed(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::pegs::generate_pegs;
    use crate::sim::rng::ScriptedSource;
    use glam::Vec2;

    #[test]
    fn test_free_fall_order() {
        let board = Board::default();
        let tuning = PhysicsTuning::default();
        let mut rng = ScriptedSource::neutral();
        let mut ball = Ball::new(Vec2::new(300.0, BALL_START_Y), Vec2::new(1.0, 0.0));
        let mut hits = 0;

        let falling = step_ball(
            &mut ball,
            &generate_pegs(&board),
            &board,
            &tuning,
            &mut rng,
            1,
            &mut |_: &PegHit| hits += 1,
        );

        assert!(falling);
        assert_eq!(hits, 0);
        // Gravity is added before friction scales both components
        let vy = tuning.gravity * tuning.friction;
        let vx = tuning.friction;
        assert!((ball.vel.y - vy).abs() < 1e-6);
        assert!((ball.vel.x - vx).abs() < 1e-6);
        assert!((ball.pos.y - (BALL_START_Y + vy)).abs() < 1e-5);
        assert!((ball.pos.x - (300.0 + vx)).abs() < 1e-5);
        // No randomness drawn without a collision
        assert_eq!(rng.draws(), 0);
    }

    #[test]
    fn test_peg_hit_reported_with_frame() {
        let board = Board::default();
        let pegs = generate_pegs(&board);
        let top = pegs[1];
        let tuning = PhysicsTuning::default();
        let mut rng = ScriptedSource::neutral();
        // Just above the middle peg of row 0, moving down
        let mut ball = Ball::new(top.pos - Vec2::new(0.0, 12.0), Vec2::new(0.0, 2.0));
        let mut seen = Vec::new();

        step_ball(&mut ball, &pegs, &board, &tuning, &mut rng, 42, &mut |hit: &PegHit| {
            seen.push(*hit)
        });

        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].peg_id, top.id);
        assert_eq!(seen[0].frame, 42);
        assert!(seen[0].impact_speed > 0.0);
        assert!(ball.vel.y < 0.0);
        assert!((ball.pos - top.pos).length() >= BALL_RADIUS + PEG_RADIUS - 1e-3);
    }

    #[test]
    fn test_wall_runs_after_integration() {
        let board = Board::default();
        let tuning = PhysicsTuning::default();
        let mut rng = ScriptedSource::neutral();
        let mut ball = Ball::new(Vec2::new(BALL_RADIUS + 1.0, 200.0), Vec2::new(-3.0, 0.0));

        step_ball(&mut ball, &[], &board, &tuning, &mut rng, 1, &mut |_: &PegHit| {});

        assert_eq!(ball.pos.x, BALL_RADIUS);
        let expected = 3.0 * tuning.friction * tuning.bounce;
        assert!((ball.vel.x - expected).abs() < 1e-5);
    }

    #[test]
    fn test_reports_landing() {
        let board = Board::default();
        let tuning = PhysicsTuning::default();
        let mut rng = ScriptedSource::neutral();
        let mut ball = Ball::new(
            Vec2::new(300.0, board.landing_y() - 1.0),
            Vec2::new(0.0, 3.0),
        );

        let falling = step_ball(&mut ball, &[], &board, &tuning, &mut rng, 1, &mut |_: &PegHit| {});
        assert!(!falling);
        assert!(ball.has_landed(&board));
    }
}
