//! Collision detection and response
//!
//! Ball/peg contacts are plain circle-circle overlaps. The response is where
//! the outcome gets shaped: every hit loses energy, gets a random horizontal
//! kick, and, once the ball strays far enough from center, a small steer back.
//!
//! The random kick is what keeps a ball from settling into a repeating
//! bounce between two pegs. Removing it breaks bounded landing times.

use glam::Vec2;

use super::board::Board;
use super::pegs::Peg;
use super::rng::RandomSource;
use super::state::Ball;
use super::tuning::PhysicsTuning;

/// Result of a collision check
#[derive(Debug, Clone)]
pub struct CollisionResult {
    /// Whether a collision occurred
    pub hit: bool,
    /// Contact point on the peg surface (if hit)
    pub point: Vec2,
    /// Unit direction from peg center to ball center
    pub normal: Vec2,
    /// Overlap depth (for position correction)
    pub penetration: f32,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            point: Vec2::ZERO,
            normal: Vec2::ZERO,
            penetration: 0.0,
        }
    }
}

/// Check a ball against one peg
pub fn ball_peg_collision(ball_pos: Vec2, ball_radius: f32, peg: &Peg) -> CollisionResult {
    let offset = ball_pos - peg.pos;
    let min_dist = ball_radius + peg.radius;
    let dist_sq = offset.length_squared();

    if dist_sq >= min_dist * min_dist {
        return CollisionResult::miss();
    }

    let dist = dist_sq.sqrt();
    // Concentric: push straight up
    let angle = if dist > f32::EPSILON {
        offset.y.atan2(offset.x)
    } else {
        -std::f32::consts::FRAC_PI_2
    };
    let normal = Vec2::new(angle.cos(), angle.sin());

    CollisionResult {
        hit: true,
        point: peg.pos + normal * peg.radius,
        normal,
        penetration: min_dist - dist,
    }
}

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

/// Apply the full peg response to a ball already known to overlap
///
/// Returns the approach speed along the normal, 0 if the ball was already
/// separating (in which case the normal component is left alone).
pub fn resolve_peg_collision(
    ball: &mut Ball,
    contact: &CollisionResult,
    center_x: f32,
    tuning: &PhysicsTuning,
    rng: &mut impl RandomSource,
) -> f32 {
    ball.pos += contact.normal * contact.penetration;

    let approach = -ball.vel.dot(contact.normal);
    if approach > 0.0 {
        ball.vel = reflect_velocity(ball.vel, contact.normal);
    }
    ball.vel *= tuning.bounce;
    ball.vel.y *= tuning.vertical_damping;

    ball.vel.x += rng.symmetric(tuning.collision_impulse);
    apply_center_bias(ball, center_x, tuning);

    approach.max(0.0)
}

/// Steer horizontal velocity back toward the board center
///
/// Only applies beyond the threshold; the correction is constant.
#[inline]
pub fn apply_center_bias(ball: &mut Ball, center_x: f32, tuning: &PhysicsTuning) {
    let offset = ball.pos.x - center_x;
    if offset.abs() > tuning.center_bias_threshold {
        ball.vel.x -= offset.signum() * tuning.center_bias_strength;
    }
}

/// Clamp the ball inside the side walls, reflecting horizontal velocity
///
/// Returns true if a wall was hit.
pub fn resolve_walls(ball: &mut Ball, board: &Board, bounce: f32) -> bool {
    if ball.pos.x - ball.radius < 0.0 {
        ball.pos.x = ball.radius;
        ball.vel.x = -ball.vel.x * bounce;
        true
    } else if ball.pos.x + ball.radius > board.width() {
        ball.pos.x = board.width() - ball.radius;
        ball.vel.x = -ball.vel.x * bounce;
        true
    } else {
        false
    }
}
