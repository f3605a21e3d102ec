//! Browser bindings
//!
//! Exposes the engine to a JavaScript render loop. JS calls `step()` from
//! `requestAnimationFrame`, draws from `ball()` / `pegs()` / `peg_glow()`,
//! and plays a sound from the peg hit callback.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::highlight::PegHighlights;
use crate::prizes::PrizeTable;
use crate::settings::Settings;
use crate::sim::{BallPhase, Engine, PegHit};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // A second init (hot reload) fails harmlessly
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Prize Drop starting...");
}

fn js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// A drop board driven from JavaScript
#[wasm_bindgen]
pub struct PrizeDrop {
    engine: Engine,
    highlights: Rc<RefCell<PegHighlights>>,
    prizes: PrizeTable,
}

impl PrizeDrop {
    fn from_settings(settings: Settings, on_peg_hit: js_sys::Function) -> Result<PrizeDrop, JsValue> {
        let highlights = Rc::new(RefCell::new(PegHighlights::new(settings.glow_frames)));
        let sink = Rc::clone(&highlights);

        let engine = settings
            .build_engine(move |hit: &PegHit| {
                sink.borrow_mut().record(hit);
                let result = on_peg_hit.call2(
                    &JsValue::NULL,
                    &JsValue::from(hit.peg_id),
                    &JsValue::from_f64(f64::from(hit.impact_speed)),
                );
                if let Err(e) = result {
                    log::warn!("Peg hit callback failed: {:?}", e);
                }
            })
            .map_err(js_error)?;

        Ok(PrizeDrop {
            engine,
            highlights,
            prizes: PrizeTable::reference(),
        })
    }
}

#[wasm_bindgen]
impl PrizeDrop {
    /// `on_peg_hit(pegId, impactSpeed)` is called once per peg contact
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32, on_peg_hit: js_sys::Function) -> Result<PrizeDrop, JsValue> {
        let settings = Settings {
            board_width: width,
            board_height: height,
            ..Default::default()
        };
        Self::from_settings(settings, on_peg_hit)
    }

    /// Build from a settings JSON string (missing fields use defaults)
    pub fn with_settings(json: &str, on_peg_hit: js_sys::Function) -> Result<PrizeDrop, JsValue> {
        let settings = Settings::from_json(json).map_err(js_error)?;
        Self::from_settings(settings, on_peg_hit)
    }

    pub fn drop_ball(&mut self, start_x: f32) {
        self.engine.drop_ball(start_x);
    }

    /// One animation frame; false once landed (or with no ball)
    pub fn step(&mut self) -> bool {
        self.engine.step()
    }

    /// `[x, y, vx, vy, radius]`, or undefined with no ball
    pub fn ball(&self) -> Option<Vec<f32>> {
        self.engine
            .ball()
            .map(|b| vec![b.pos.x, b.pos.y, b.vel.x, b.vel.y, b.radius])
    }

    /// Flattened `[x, y, radius]` per peg, in field order
    pub fn pegs(&self) -> Vec<f32> {
        self.engine
            .pegs()
            .iter()
            .flat_map(|p| [p.pos.x, p.pos.y, p.radius])
            .collect()
    }

    /// Glow intensity per peg for the current frame, in field order
    pub fn peg_glow(&self) -> Vec<f32> {
        let now = self.engine.frame();
        let highlights = self.highlights.borrow();
        self.engine
            .pegs()
            .iter()
            .map(|p| highlights.intensity(p.id, now))
            .collect()
    }

    pub fn bucket_index(&self, total_buckets: usize) -> usize {
        self.engine.bucket_index(total_buckets)
    }

    /// Prize JSON for the landed bucket, undefined until the ball lands
    pub fn prize_json(&self) -> Option<String> {
        if self.engine.phase() != BallPhase::Landed {
            return None;
        }
        let index = self.engine.bucket_index(self.prizes.len());
        self.prizes
            .prize_for_bucket(index)
            .and_then(|p| serde_json::to_string(p).ok())
    }

    pub fn prize_table_json(&self) -> Result<String, JsValue> {
        self.prizes.to_json().map_err(js_error)
    }

    pub fn reset(&mut self) {
        self.engine.reset();
        self.highlights.borrow_mut().clear();
    }

    /// True when a ball was in flight during the resize
    pub fn resize(&mut self, width: f32, height: f32) -> Result<bool, JsValue> {
        let in_flight = self.engine.resize(width, height).map_err(js_error)?;
        self.highlights.borrow_mut().clear();
        Ok(in_flight)
    }
}
