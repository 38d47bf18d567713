//! Discrete zoom ladder driven by zoom signals

use crate::wheel::ZoomSignal;

/// Available zoom factors, smallest first
pub const ZOOM_LEVELS: [f64; 6] = [0.25, 0.5, 1.0, 2.0, 3.0, 4.0];

const DEFAULT_INDEX: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Zoom {
    index: usize,
}

impl Zoom {
    pub fn new() -> Self {
        Self {
            index: DEFAULT_INDEX,
        }
    }

    /// Level closest to `factor`; non-finite or non-positive input gives 100%
    pub fn from_factor(factor: f64) -> Self {
        if !factor.is_finite() || factor <= 0.0 {
            return Self::new();
        }

        let distance = |level: f64| (level - factor).abs();
        let index = ZOOM_LEVELS
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| distance(**a).total_cmp(&distance(**b)))
            .map_or(DEFAULT_INDEX, |(i, _)| i);

        Self { index }
    }

    pub fn factor(&self) -> f64 {
        ZOOM_LEVELS[self.index]
    }

    /// Returns false when already at the largest level
    pub fn zoom_in(&mut self) -> bool {
        if self.index + 1 < ZOOM_LEVELS.len() {
            self.index += 1;
            true
        } else {
            false
        }
    }

    /// Returns false when already at the smallest level
    pub fn zoom_out(&mut self) -> bool {
        if self.index > 0 {
            self.index -= 1;
            true
        } else {
            false
        }
    }

    pub fn apply(&mut self, signal: ZoomSignal) -> bool {
        match signal {
            ZoomSignal::ZoomIn => self.zoom_in(),
            ZoomSignal::ZoomOut => self.zoom_out(),
        }
    }

    /// Length of `len` source cells once zoomed, rounded up
    pub fn scale(&self, len: usize) -> usize {
        (len as f64 * self.factor()).ceil() as usize
    }

    /// Source cell shown at zoomed position `pos`
    pub fn source_index(&self, pos: usize) -> usize {
        (pos as f64 / self.factor()).floor() as usize
    }

    pub fn percent(&self) -> u32 {
        (self.factor() * 100.0).round() as u32
    }
}

impl Default for Zoom {
    fn default() -> Self {
        Self::new()
    }
}
