use std::cmp::Ordering;

use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::geometry::hit_testing::DEFAULT_HIT_TOLERANCE;
use crate::pressure::SpeedToWidth;

/// Key under which the config is stored by eframe
pub const CONFIG_KEY: &str = "sketch_canvas_config";

/// User-tunable canvas settings, persisted between runs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // new fields get their defaults when loading an older config
pub struct CanvasConfig {
    /// Color of newly drawn strokes
    pub color: Color32,
    /// Fixed stroke width when pressure simulation is off
    pub base_width: f32,
    /// Widest stroke pressure simulation may produce
    pub pressure_ceiling: f32,
    pub pressure_sensitive: bool,
    pub min_slider_width: f32,
    pub max_slider_width: f32,
    pub hit_tolerance: f32,
    pub speed_mapping: SpeedToWidth,
    /// Pointer-move events closer together than this (seconds) are coalesced
    pub min_move_interval: f64,
    pub scale_up: f32,
    pub scale_down: f32,
    pub palette: Vec<Color32>,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            color: Color32::BLACK,
            base_width: 3.0,
            pressure_ceiling: 3.0,
            pressure_sensitive: false,
            min_slider_width: 1.0,
            max_slider_width: 20.0,
            hit_tolerance: DEFAULT_HIT_TOLERANCE,
            speed_mapping: SpeedToWidth::default(),
            min_move_interval: 0.010,
            scale_up: 1.1,
            scale_down: 0.9,
            palette: vec![
                Color32::BLACK,
                Color32::RED,
                Color32::GREEN,
                Color32::BLUE,
                Color32::YELLOW,
                Color32::from_rgb(156, 39, 176), // purple
            ],
        }
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

impl CanvasConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("base_width", self.base_width)?;
        positive("pressure_ceiling", self.pressure_ceiling)?;
        positive("min_slider_width", self.min_slider_width)?;
        positive("max_slider_width", self.max_slider_width)?;
        positive("speed_mapping.min_width", self.speed_mapping.min_width)?;
        positive("scale_up", self.scale_up)?;
        positive("scale_down", self.scale_down)?;

        if self.min_slider_width > self.max_slider_width {
            return Err(ConfigError::EmptySliderRange {
                min: self.min_slider_width,
                max: self.max_slider_width,
            });
        }

        for (field, width) in [
            ("base_width", self.base_width),
            ("pressure_ceiling", self.pressure_ceiling),
        ] {
            if !self.slider_range().contains(&width) {
                return Err(ConfigError::OutsideSliderRange {
                    field,
                    value: width,
                    min: self.min_slider_width,
                    max: self.max_slider_width,
                });
            }
        }

        // NaN compares as unordered, so it fails these checks too
        let SpeedToWidth { min_speed, max_speed, .. } = self.speed_mapping;
        if min_speed.partial_cmp(&max_speed) != Some(Ordering::Less) {
            return Err(ConfigError::InvertedSpeedRange { min_speed, max_speed });
        }

        if self.hit_tolerance.partial_cmp(&0.0).is_none_or(Ordering::is_lt) {
            return Err(ConfigError::Negative {
                field: "hit_tolerance",
                value: f64::from(self.hit_tolerance),
            });
        }
        if self.min_move_interval.partial_cmp(&0.0).is_none_or(Ordering::is_lt) {
            return Err(ConfigError::Negative {
                field: "min_move_interval",
                value: self.min_move_interval,
            });
        }

        Ok(())
    }

    /// Return `self` if valid, otherwise log the problem and use the defaults
    pub fn or_default_if_invalid(self) -> Self {
        match self.validate() {
            Ok(()) => self,
            Err(err) => {
                log::warn!("Invalid canvas config ({err}), falling back to defaults");
                Self::default()
            }
        }
    }

    pub fn slider_range(&self) -> std::ops::RangeInclusive<f32> {
        self.min_slider_width..=self.max_slider_width
    }
}
