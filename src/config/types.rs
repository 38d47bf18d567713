// Configuration type definitions

use serde::Deserialize;

use crate::error::ViewScrollError;
use crate::scroll::ScrollStep;
use crate::zoom::Zoom;

/// Scroll configuration section
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScrollConfig {
    #[serde(default = "default_block_increment")]
    pub block_increment: i32,
    #[serde(default = "default_unit_increment")]
    pub unit_increment: i32,
    /// Lines per wheel notch
    #[serde(default = "default_wheel_lines")]
    pub wheel_lines: i32,
}

fn default_block_increment() -> i32 {
    ScrollStep::DEFAULT_BLOCK
}

fn default_unit_increment() -> i32 {
    ScrollStep::DEFAULT_UNIT
}

fn default_wheel_lines() -> i32 {
    3
}

impl ScrollConfig {
    pub fn step(&self) -> Result<ScrollStep, ViewScrollError> {
        ScrollStep::new(self.block_increment, self.unit_increment)
    }
}

impl Default for ScrollConfig {
    fn default() -> Self {
        ScrollConfig {
            block_increment: default_block_increment(),
            unit_increment: default_unit_increment(),
            wheel_lines: default_wheel_lines(),
        }
    }
}

/// Zoom configuration section
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ZoomConfig {
    #[serde(default = "default_initial_zoom")]
    pub initial: f64,
}

fn default_initial_zoom() -> f64 {
    1.0
}

impl ZoomConfig {
    pub fn zoom(&self) -> Zoom {
        Zoom::from_factor(self.initial)
    }
}

impl Default for ZoomConfig {
    fn default() -> Self {
        ZoomConfig {
            initial: default_initial_zoom(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub scroll: ScrollConfig,
    #[serde(default)]
    pub zoom: ZoomConfig,
}

impl Config {
    /// Replace values that parse but cannot be used, describing each fix
    pub fn sanitize(mut self) -> (Config, Vec<String>) {
        let mut warnings = Vec::new();

        if let Err(e) = self.scroll.step() {
            warnings.push(format!("{}, using defaults", e));
            self.scroll.block_increment = default_block_increment();
            self.scroll.unit_increment = default_unit_increment();
        }

        if self.scroll.wheel_lines < 1 {
            warnings.push(format!(
                "Invalid wheel_lines {}, using {}",
                self.scroll.wheel_lines,
                default_wheel_lines()
            ));
            self.scroll.wheel_lines = default_wheel_lines();
        }

        (self, warnings)
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
