//! Peg field generation
//!
//! The field is a centered, widening pyramid: row 0 has three pegs and each
//! row below adds one. Spacing is fixed in both axes and the bottom row sits
//! a fixed margin above the bucket strip. Generation has no randomness, so
//! the same board always yields the same pegs.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::board::Board;
use crate::consts::*;

/// A fixed circular obstacle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Peg {
    /// Index in field order (row-major, left to right)
    pub id: u32,
    pub row: u8,
    pub pos: Vec2,
    pub radius: f32,
}

/// Number of pegs in a row
#[inline]
pub fn row_len(row: usize) -> usize {
    FIRST_ROW_PEGS + row
}

/// Build the full peg pyramid for a board
pub fn generate_pegs(board: &Board) -> Vec<Peg> {
    let center_x = board.center_x();
    let bottom_y = board.peg_field_bottom();
    let mut pegs = Vec::with_capacity(PEG_COUNT);

    for row in 0..PEG_ROWS {
        let count = row_len(row);
        let y = bottom_y - (PEG_ROWS - 1 - row) as f32 * PEG_SPACING_Y;
        let half_span = (count - 1) as f32 * PEG_SPACING_X / 2.0;

        for col in 0..count {
            let x = center_x - half_span + col as f32 * PEG_SPACING_X;
            pegs.push(Peg {
                id: pegs.len() as u32,
                row: row as u8,
                pos: Vec2::new(x, y),
                radius: PEG_RADIUS,
            });
        }
    }

    log::debug!(
        "Generated {} pegs for {}x{} board",
        pegs.len(),
        board.width(),
        board.height()
    );
    pegs
}
