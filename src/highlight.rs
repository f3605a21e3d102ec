//! Peg glow tracking for renderers
//!
//! Physics pegs carry no presentation state. A renderer feeds `PegHit`
//! events in here and asks, per frame, how brightly each peg should glow.

use std::collections::HashMap;

use crate::sim::PegHit;

/// Default glow length, in frames
pub const DEFAULT_GLOW_FRAMES: u64 = 12;

/// Last-hit frame per peg id
#[derive(Debug, Clone)]
pub struct PegHighlights {
    last_hit: HashMap<u32, u64>,
    glow_frames: u64,
}

impl Default for PegHighlights {
    fn default() -> Self {
        Self::new(DEFAULT_GLOW_FRAMES)
    }
}

impl PegHighlights {
    pub fn new(glow_frames: u64) -> Self {
        Self {
            last_hit: HashMap::new(),
            glow_frames: glow_frames.max(1),
        }
    }

    pub fn record(&mut self, hit: &PegHit) {
        let entry = self.last_hit.entry(hit.peg_id).or_insert(hit.frame);
        *entry = (*entry).max(hit.frame);
    }

    /// Frame of the most recent hit on a peg
    pub fn last_hit(&self, peg_id: u32) -> Option<u64> {
        self.last_hit.get(&peg_id).copied()
    }

    pub fn is_lit(&self, peg_id: u32, now: u64) -> bool {
        self.intensity(peg_id, now) > 0.0
    }

    /// Glow from 1.0 on the hit frame fading linearly to 0.0
    pub fn intensity(&self, peg_id: u32, now: u64) -> f32 {
        match self.last_hit(peg_id) {
            Some(frame) if now >= frame => {
                let age = now - frame;
                if age >= self.glow_frames {
                    0.0
                } else {
                    1.0 - age as f32 / self.glow_frames as f32
                }
            }
            _ => 0.0,
        }
    }

    /// Drop entries whose glow has finished
    pub fn prune(&mut self, now: u64) {
        let glow = self.glow_frames;
        self.last_hit
            .retain(|_, frame| now < frame.saturating_add(glow));
    }

    pub fn clear(&mut self) {
        self.last_hit.clear();
    }

    /// Pegs currently tracked
    pub fn len(&self) -> usize {
        self.last_hit.len()
    }

    pub fn is_empty(&self) -> bool {
        self.last_hit.is_empty()
    }
}
