//! Ball state and simulation events

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::board::Board;
use super::rng::RandomSource;
use super::tuning::PhysicsTuning;
use crate::consts::*;

/// Lifecycle of the engine's single ball slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BallPhase {
    /// No ball (fresh engine or after reset)
    Absent,
    /// Ball is above the bucket strip and moving
    Falling,
    /// Ball reached the bucket strip; kept, but no longer simulated
    Landed,
}

/// The falling ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            radius: BALL_RADIUS,
        }
    }

    /// Spawn at the drop line, jittered around `start_x`
    ///
    /// A non-finite `start_x` drops from the board center. The jittered
    /// position is kept inside the walls.
    pub fn spawn(
        board: &Board,
        start_x: f32,
        tuning: &PhysicsTuning,
        rng: &mut impl RandomSource,
    ) -> Self {
        let base_x = if start_x.is_finite() {
            start_x
        } else {
            board.center_x()
        };
        let x = (base_x + rng.symmetric(tuning.drop_jitter))
            .clamp(BALL_RADIUS, board.width() - BALL_RADIUS);
        let vx = rng.symmetric(tuning.drop_max_vx);

        Self::new(Vec2::new(x, BALL_START_Y), Vec2::new(vx, 0.0))
    }

    /// True once the ball has reached the bucket strip
    #[inline]
    pub fn has_landed(&self, board: &Board) -> bool {
        self.pos.y >= board.landing_y()
    }
}

/// A ball/peg contact, handed to presentation collaborators
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PegHit {
    pub peg_id: u32,
    /// Peg center
    pub pos: Vec2,
    /// Engine frame counter when the hit happened
    pub frame: u64,
    /// Approach speed along the contact normal (0 for grazing contacts)
    pub impact_speed: f32,
}
