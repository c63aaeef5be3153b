//! Simulated pen pressure: slow pointer motion draws thick, fast motion thin.

use egui::Pos2;
use serde::{Deserialize, Serialize};

pub const MIN_SPEED: f32 = 50.0;
pub const MAX_SPEED: f32 = 500.0;
pub const MIN_WIDTH: f32 = 1.0;

/// A pointer position with the monotonic time (seconds) it was sampled at
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub time: f64,
    pub pos: Pos2,
}

impl PointerSample {
    pub fn new(time: f64, pos: Pos2) -> Self {
        Self { time, pos }
    }
}

/// Maps pointer speed (pixels per second) to a stroke width.
///
/// Speeds at or below `min_speed` give the ceiling width, speeds at or above
/// `max_speed` give `min_width`, linear in between.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeedToWidth {
    pub min_speed: f32,
    pub max_speed: f32,
    pub min_width: f32,
}

impl Default for SpeedToWidth {
    fn default() -> Self {
        Self {
            min_speed: MIN_SPEED,
            max_speed: MAX_SPEED,
            min_width: MIN_WIDTH,
        }
    }
}

impl SpeedToWidth {
    /// Speed between two samples, `None` when time did not advance
    pub fn speed(prev: PointerSample, cur: PointerSample) -> Option<f32> {
        let dt = cur.time - prev.time;
        if dt <= 0.0 {
            return None;
        }
        Some((f64::from(prev.pos.distance(cur.pos)) / dt) as f32)
    }

    pub fn width_for_speed(&self, speed: f32, max_width: f32) -> f32 {
        let norm = ((speed - self.min_speed) / (self.max_speed - self.min_speed)).clamp(0.0, 1.0);
        (max_width - norm * (max_width - self.min_width)).max(self.min_width)
    }

    /// Width for the motion from `prev` to `cur`.
    ///
    /// Returns `previous_width` unchanged when `dt <= 0`.
    pub fn map(
        &self,
        prev: PointerSample,
        cur: PointerSample,
        max_width: f32,
        previous_width: f32,
    ) -> f32 {
        match Self::speed(prev, cur) {
            Some(speed) => self.width_for_speed(speed, max_width),
            None => previous_width,
        }
    }
}
