//! Prize Drop - a peg-field prize mini-game
//!
//! Core modules:
//! - `sim`: Stepwise physics (peg field, collisions, engine)
//! - `prizes`: Symmetric rarity-ordered prize table
//! - `buckets`: Bucket strip geometry
//! - `highlight`: Presentation-side peg glow tracking
//! - `settings`: Data-driven configuration

pub mod buckets;
pub mod highlight;
pub mod prizes;
pub mod settings;
pub mod sim;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use highlight::PegHighlights;
pub use prizes::{Prize, PrizeKind, PrizeTable};
pub use settings::{Settings, SettingsError};
pub use sim::{
    Ball, BallPhase, Board, BoardError, Engine, Peg, PegHit, PhysicsTuning, TuningError,
};

/// Game configuration constants
pub mod consts {
    /// Reference board size
    pub const DEFAULT_BOARD_WIDTH: f32 = 600.0;
    pub const DEFAULT_BOARD_HEIGHT: f32 = 800.0;
    /// Smallest board that fits the widest peg row plus a ball lane on each side
    pub const MIN_BOARD_WIDTH: f32 = 600.0;
    /// Smallest board that fits the drop zone, all peg rows and the bucket strip
    pub const MIN_BOARD_HEIGHT: f32 = 760.0;

    /// Peg pyramid: row i holds FIRST_ROW_PEGS + i pegs
    pub const PEG_ROWS: usize = 16;
    pub const FIRST_ROW_PEGS: usize = 3;
    pub const PEG_COUNT: usize = 168;
    pub const PEG_RADIUS: f32 = 4.0;
    /// Horizontal distance between neighbouring pegs in a row
    pub const PEG_SPACING_X: f32 = 32.0;
    /// Vertical distance between rows
    pub const PEG_SPACING_Y: f32 = 40.0;
    /// Gap between the bottom peg row and the bucket strip
    pub const PEG_FIELD_BOTTOM_MARGIN: f32 = 40.0;

    /// Height of the bucket strip; the ball has landed once it reaches it
    pub const BUCKET_STRIP_HEIGHT: f32 = 60.0;
    /// Buckets in the reference layout
    pub const DEFAULT_BUCKETS: usize = 13;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 7.0;
    pub const BALL_START_Y: f32 = 30.0;

    /// Per-frame physics (pixels per frame, unitless factors)
    pub const GRAVITY: f32 = 0.25;
    pub const FRICTION: f32 = 0.99;
    pub const BOUNCE: f32 = 0.5;
    /// Extra damping on the vertical component after a peg bounce
    pub const VERTICAL_DAMPING: f32 = 0.7;
    /// Half-range of the random horizontal kick after every peg hit
    pub const COLLISION_IMPULSE: f32 = 0.25;
    /// Horizontal distance from center beyond which collisions steer back
    pub const CENTER_BIAS_THRESHOLD: f32 = 40.0;
    pub const CENTER_BIAS_STRENGTH: f32 = 0.1;

    /// Drop randomization (half-ranges)
    pub const DROP_JITTER: f32 = 12.0;
    pub const DROP_MAX_VX: f32 = 0.8;

    /// Frame cap used by headless callers; landings take well under this
    pub const MAX_DROP_FRAMES: u32 = 2000;
}
