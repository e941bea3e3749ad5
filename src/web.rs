//! Browser bindings
//!
//! The JS render loop owns a `WebGame` and calls `frame(dt)` from
//! `requestAnimationFrame`; keyboard handlers call `set_direction`. Snapshots
//! cross the boundary as JSON strings.

use wasm_bindgen::prelude::*;

use crate::config::SimConfig;
use crate::driver::Driver;
use crate::highscores::HighScores;
use crate::sim::Axis;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // A second init (hot reload) fails harmlessly
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Coin Rush starting...");
}

fn to_js(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn seed_from_clock() -> u64 {
    js_sys::Date::now() as u64
}

#[wasm_bindgen]
pub struct WebGame {
    driver: Driver,
}

#[wasm_bindgen]
impl WebGame {
    /// New game with stored config and high scores
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<WebGame, JsValue> {
        let driver = Driver::new(SimConfig::load(), seed_from_clock(), HighScores::load())
            .map_err(to_js)?;
        Ok(WebGame { driver })
    }

    /// New game with a JSON config override, stored for later visits
    pub fn with_config(json: &str) -> Result<WebGame, JsValue> {
        let config = SimConfig::from_json(json).map_err(to_js)?;
        if !config.save() {
            log::warn!("Config override not persisted");
        }
        let driver =
            Driver::new(config, seed_from_clock(), HighScores::load()).map_err(to_js)?;
        Ok(WebGame { driver })
    }

    /// Advance one animation frame; returns the frame's events as JSON
    pub fn frame(&mut self, dt: f32) -> Result<String, JsValue> {
        let events = self.driver.advance(dt);
        serde_json::to_string(&events).map_err(to_js)
    }

    /// `axis` is "x" or "z"; `value` snaps to -1, 0 or 1
    pub fn set_direction(&mut self, axis: &str, value: i32) {
        let axis = match axis {
            "x" | "X" => Axis::X,
            "z" | "Z" => Axis::Z,
            other => {
                log::warn!("Unknown axis {:?}", other);
                return;
            }
        };
        self.driver.set_direction(axis, value);
    }

    pub fn set_autopilot(&mut self, enabled: bool) {
        self.driver.set_autopilot(enabled);
    }

    /// Abandon the session (e.g. player leaves the game page)
    pub fn end(&mut self) {
        self.driver.end();
    }

    pub fn restart(&mut self) -> Result<(), JsValue> {
        self.driver.restart(seed_from_clock()).map_err(to_js)
    }

    pub fn snapshot(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.driver.snapshot()).map_err(to_js)
    }

    pub fn score(&self) -> u32 {
        self.driver.session().score
    }

    pub fn high_score(&self) -> u32 {
        self.driver.high_scores().best()
    }

    pub fn is_over(&self) -> bool {
        self.driver.session().is_ended()
    }
}
