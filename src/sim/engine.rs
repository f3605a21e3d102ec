//! Drop engine: one board, one peg field, at most one ball
//!
//! The caller's render loop drives everything: `drop_ball`, then `step`
//! once per frame until it returns false, then `bucket_index`. Dropping
//! again replaces the current ball; callers that must prevent overlapping
//! drops enforce that themselves.

use rand_pcg::Pcg32;

use super::board::{Board, BoardResult};
use super::pegs::{Peg, generate_pegs};
use super::rng::{self, RandomSource};
use super::state::{Ball, BallPhase, PegHit};
use super::tick::step_ball;
use super::tuning::{PhysicsTuning, TuningResult};
use crate::buckets::bucket_index_for;

/// Receiver for peg hit events (sound, glow)
pub type PegHitSink = Box<dyn FnMut(&PegHit)>;

/// Owns the board, peg field, ball and random source for one drop game
pub struct Engine<R: RandomSource = Pcg32> {
    board: Board,
    pegs: Vec<Peg>,
    ball: Option<Ball>,
    tuning: PhysicsTuning,
    rng: R,
    /// Frames simulated over the engine's lifetime (hit timestamps)
    frame: u64,
    on_peg_hit: PegHitSink,
}

impl Engine<Pcg32> {
    /// Engine with an entropy-seeded random source
    pub fn new(
        width: f32,
        height: f32,
        on_peg_hit: impl FnMut(&PegHit) + 'static,
    ) -> BoardResult<Self> {
        Self::with_rng(width, height, on_peg_hit, rng::from_entropy())
    }

    /// Engine whose drops are reproducible for a given seed
    pub fn seeded(
        width: f32,
        height: f32,
        seed: u64,
        on_peg_hit: impl FnMut(&PegHit) + 'static,
    ) -> BoardResult<Self> {
        Self::with_rng(width, height, on_peg_hit, rng::seeded(seed))
    }
}

impl<R: RandomSource> Engine<R> {
    pub fn with_rng(
        width: f32,
        height: f32,
        on_peg_hit: impl FnMut(&PegHit) + 'static,
        rng: R,
    ) -> BoardResult<Self> {
        let board = Board::new(width, height)?;
        Ok(Self {
            board,
            pegs: generate_pegs(&board),
            ball: None,
            tuning: PhysicsTuning::default(),
            rng,
            frame: 0,
            on_peg_hit: Box::new(on_peg_hit),
        })
    }

    /// Replace the physics parameters, rejecting any that would not damp
    pub fn with_tuning(mut self, tuning: PhysicsTuning) -> TuningResult<Self> {
        tuning.validate()?;
        self.tuning = tuning;
        Ok(self)
    }

    /// Spawn a ball near `start_x`, replacing any current ball
    pub fn drop_ball(&mut self, start_x: f32) {
        if self.ball.is_some() {
            log::debug!("Drop replaces existing ball");
        }
        let ball = Ball::spawn(&self.board, start_x, &self.tuning, &mut self.rng);
        log::debug!(
            "Ball dropped at x={:.2} (requested {:.2}), vx={:.3}",
            ball.pos.x,
            start_x,
            ball.vel.x
        );
        self.ball = Some(ball);
    }

    /// Advance one frame; returns true while the ball is still falling
    ///
    /// With no ball, or a ball that has already landed, nothing moves and
    /// the result is false.
    pub fn step(&mut self) -> bool {
        let Some(ball) = self.ball.as_mut() else {
            return false;
        };
        if ball.has_landed(&self.board) {
            return false;
        }

        self.frame += 1;
        let falling = step_ball(
            ball,
            &self.pegs,
            &self.board,
            &self.tuning,
            &mut self.rng,
            self.frame,
            &mut *self.on_peg_hit,
        );
        if !falling {
            log::trace!(
                "Ball landed at x={:.2} on frame {}",
                ball.pos.x,
                self.frame
            );
        }
        falling
    }

    /// Step until landing or `max_frames`, returning frames taken if landed
    ///
    /// A ball that has already landed takes 0 frames.
    pub fn run_to_landing(&mut self, max_frames: u32) -> Option<u32> {
        match self.phase() {
            BallPhase::Absent => return None,
            BallPhase::Landed => return Some(0),
            BallPhase::Falling => {}
        }
        for taken in 1..=max_frames {
            if !self.step() {
                return self.has_landed().then_some(taken);
            }
        }
        None
    }

    pub fn ball(&self) -> Option<&Ball> {
        self.ball.as_ref()
    }

    pub fn pegs(&self) -> &[Peg] {
        &self.pegs
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn tuning(&self) -> &PhysicsTuning {
        &self.tuning
    }

    /// Frames simulated so far
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn phase(&self) -> BallPhase {
        match &self.ball {
            None => BallPhase::Absent,
            Some(ball) if ball.has_landed(&self.board) => BallPhase::Landed,
            Some(_) => BallPhase::Falling,
        }
    }

    fn has_landed(&self) -> bool {
        self.phase() == BallPhase::Landed
    }

    /// Bucket containing the ball, clamped into `[0, total_buckets - 1]`
    ///
    /// 0 when there is no ball.
    pub fn bucket_index(&self, total_buckets: usize) -> usize {
        match &self.ball {
            Some(ball) => bucket_index_for(ball.pos.x, self.board.width(), total_buckets),
            None => 0,
        }
    }

    /// Discard the ball
    pub fn reset(&mut self) {
        self.ball = None;
    }

    /// Change board size and regenerate the peg field
    ///
    /// An in-flight ball keeps its position and velocity, so pegs can end up
    /// overlapping it; the next step pushes it out. Returns `Ok(true)` when
    /// that happened so callers can reset or ignore it. On error the board
    /// and pegs are unchanged.
    ///
    /// A landed ball stays landed: it moves onto the new landing line,
    /// inside the new walls, and keeps its velocity.
    pub fn resize(&mut self, width: f32, height: f32) -> BoardResult<bool> {
        let board = Board::new(width, height)?;
        let phase = self.phase();
        self.board = board;
        self.pegs = generate_pegs(&board);

        match (phase, self.ball.as_mut()) {
            (BallPhase::Landed, Some(ball)) => {
                ball.pos.x = ball.pos.x.clamp(ball.radius, board.width() - ball.radius);
                ball.pos.y = board.landing_y();
                Ok(false)
            }
            (BallPhase::Falling, Some(_)) => {
                log::warn!("Board resized to {width}x{height} with a ball in flight");
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
