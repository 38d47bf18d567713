//! Text content shown inside the view scroller
//!
//! A canvas is a grid of characters. Zooming uses nearest-neighbour
//! sampling: at 200% every cell covers two columns and two rows, at 50%
//! every other column and row is skipped.

use crate::scroll::{Extent, ViewContent};
use crate::wheel::ZoomSignal;
use crate::zoom::Zoom;

const TAB_WIDTH: usize = 4;

#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    rows: Vec<Vec<char>>,
    width: usize,
    zoom: Zoom,
}

impl Canvas {
    pub fn from_text(text: &str) -> Self {
        let rows: Vec<Vec<char>> = text.lines().map(expand_tabs).collect();
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);

        Self {
            rows,
            width,
            zoom: Zoom::new(),
        }
    }

    pub fn with_zoom(mut self, zoom: Zoom) -> Self {
        self.zoom = zoom;
        self
    }

    /// Unzoomed column count of the widest row
    pub fn width(&self) -> usize {
        self.width
    }

    /// Unzoomed row count
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn zoom(&self) -> Zoom {
        self.zoom
    }

    /// Returns false when the zoom was already at the end of the ladder
    pub fn apply_zoom(&mut self, signal: ZoomSignal) -> bool {
        self.zoom.apply(signal)
    }

    /// Zoomed cells of the window starting at (`x`, `y`)
    pub fn visible_rows(&self, x: usize, y: usize, width: usize, height: usize) -> Vec<String> {
        let extent = self.extent();
        let bottom = (y + height).min(extent.height);
        let right = (x + width).min(extent.width);

        (y..bottom)
            .map(|row| {
                let source = &self.rows[self.zoom.source_index(row)];
                (x..right)
                    .map(|col| {
                        source
                            .get(self.zoom.source_index(col))
                            .copied()
                            .unwrap_or(' ')
                    })
                    .collect::<String>()
                    .trim_end()
                    .to_string()
            })
            .collect()
    }
}

impl ViewContent for Canvas {
    fn extent(&self) -> Extent {
        Extent::new(
            self.zoom.scale(self.width),
            self.zoom.scale(self.rows.len()),
        )
    }
}

fn expand_tabs(line: &str) -> Vec<char> {
    let mut cells = Vec::with_capacity(line.len());
    for ch in line.chars() {
        if ch == '\t' {
            let pad = TAB_WIDTH - cells.len() % TAB_WIDTH;
            cells.extend(std::iter::repeat_n(' ', pad));
        } else if !ch.is_control() {
            cells.push(ch);
        }
    }
    cells
}

#[cfg(test)]
#[path = "canvas_tests.rs"]
mod canvas_tests;
