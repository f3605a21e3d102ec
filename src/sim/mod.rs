//! Stepwise drop simulation
//!
//! All outcome-relevant logic lives here. This module stays pure:
//! - One discrete frame per `step` call, no clock
//! - Randomness only through an injectable `RandomSource`
//! - Pegs resolved in field order
//! - No rendering, audio or platform dependencies

pub mod board;
pub mod collision;
pub mod engine;
pub mod pegs;
pub mod rng;
pub mod state;
pub mod tick;
pub mod tuning;

pub use board::{Board, BoardError, BoardResult};
pub use collision::{
    CollisionResult, apply_center_bias, ball_peg_collision, reflect_velocity,
    resolve_peg_collision, resolve_walls,
};
pub use engine::{Engine, PegHitSink};
pub use pegs::{Peg, generate_pegs, row_len};
pub use rng::{RandomSource, ScriptedSource};
pub use state::{Ball, BallPhase, PegHit};
pub use tick::step_ball;
pub use tuning::{PhysicsTuning, TuningError, TuningResult};
