//! Board dimensions and validation
//!
//! Peg spacing is fixed, so a board has to be large enough to hold the
//! whole pyramid. Sizes are checked once, at construction and on resize.

use std::fmt;

use crate::buckets::bucket_index_for;
use crate::consts::*;

/// Rejected board configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoardError {
    /// Width or height is NaN or infinite
    NonFinite { width: f32, height: f32 },
    /// Width or height is below the minimum playable size (includes non-positive sizes)
    TooSmall { width: f32, height: f32 },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::NonFinite { width, height } => {
                write!(f, "board size must be finite, got {width}x{height}")
            }
            BoardError::TooSmall { width, height } => write!(
                f,
                "board size {width}x{height} is below the minimum {MIN_BOARD_WIDTH}x{MIN_BOARD_HEIGHT}"
            ),
        }
    }
}

impl std::error::Error for BoardError {}

pub type BoardResult<T> = Result<T, BoardError>;

/// A validated board
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Board {
    width: f32,
    height: f32,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            width: DEFAULT_BOARD_WIDTH,
            height: DEFAULT_BOARD_HEIGHT,
        }
    }
}

impl Board {
    pub fn new(width: f32, height: f32) -> BoardResult<Self> {
        if !width.is_finite() || !height.is_finite() {
            return Err(BoardError::NonFinite { width, height });
        }
        if width < MIN_BOARD_WIDTH || height < MIN_BOARD_HEIGHT {
            return Err(BoardError::TooSmall { width, height });
        }
        Ok(Self { width, height })
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.width / 2.0
    }

    /// Vertical position at which a ball counts as landed
    #[inline]
    pub fn landing_y(&self) -> f32 {
        self.height - BUCKET_STRIP_HEIGHT
    }

    /// Vertical position of the bottom peg row
    #[inline]
    pub fn peg_field_bottom(&self) -> f32 {
        self.landing_y() - PEG_FIELD_BOTTOM_MARGIN
    }

    /// Bucket slice containing `x`, clamped into `[0, total - 1]`
    pub fn bucket_index(&self, x: f32, total: usize) -> usize {
        bucket_index_for(x, self.width, total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_board_is_valid() {
        let board = Board::new(600.0, 800.0).unwrap();
        assert_eq!(board.center_x(), 300.0);
        assert_eq!(board.landing_y(), 740.0);
        assert_eq!(board.peg_field_bottom(), 700.0);
    }

    #[test]
    fn test_rejects_non_positive() {
        assert!(matches!(
            Board::new(0.0, 800.0),
            Err(BoardError::TooSmall { .. })
        ));
        assert!(matches!(
            Board::new(600.0, -10.0),
            Err(BoardError::TooSmall { .. })
        ));
    }

    #[test]
    fn test_rejects_non_finite() {
        assert!(matches!(
            Board::new(f32::NAN, 800.0),
            Err(BoardError::NonFinite { .. })
        ));
        assert!(matches!(
            Board::new(600.0, f32::INFINITY),
            Err(BoardError::NonFinite { .. })
        ));
    }

    #[test]
    fn test_rejects_below_minimum() {
        assert!(Board::new(MIN_BOARD_WIDTH - 1.0, 800.0).is_err());
        assert!(Board::new(600.0, MIN_BOARD_HEIGHT - 1.0).is_err());
        assert!(Board::new(MIN_BOARD_WIDTH, MIN_BOARD_HEIGHT).is_ok());
    }

    #[test]
    fn test_error_message_names_sizes() {
        let err = Board::new(100.0, 200.0).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("100x200"));
        assert!(msg.contains("minimum"));
    }
}
