use std::sync::mpsc::{self, Receiver};

use ratatui::layout::Rect;

use crate::canvas::Canvas;
use crate::config::Config;
use crate::notification::NotificationState;
use crate::scroll::{Axis, ScrollPane, Viewport};
use crate::wheel::{ViewScroller, ZoomSignal};

pub struct App {
    pub canvas: Canvas,
    pub scroller: ViewScroller<ScrollPane>,
    pub source_name: String,
    pub wheel_lines: i32,
    pub notification: NotificationState,
    pub should_quit: bool,
    /// Inner area of the view from the last render, used for mouse hit tests
    pub view_area: Option<Rect>,
    zoom_signals: Receiver<ZoomSignal>,
    dirty: bool,
}

impl App {
    pub fn new(text: &str, source_name: &str, config: &Config) -> Self {
        let canvas = Canvas::from_text(text).with_zoom(config.zoom.zoom());

        // The observer only queues signals; the event loop applies them
        let (zoom_tx, zoom_signals) = mpsc::channel();
        let mut scroller = ViewScroller::with_view(ScrollPane::new(), &canvas, move |signal| {
            // The receiver is owned by the same App, so it outlives this sender
            if zoom_tx.send(signal).is_err() {
                #[cfg(debug_assertions)]
                log::debug!("Zoom signal {} dropped, receiver gone", signal);
            }
        });
        if let Ok(step) = config.scroll.step() {
            scroller.set_step(step);
        }

        Self {
            canvas,
            scroller,
            source_name: source_name.to_string(),
            wheel_lines: config.scroll.wheel_lines,
            notification: NotificationState::new(),
            should_quit: false,
            view_area: None,
            zoom_signals,
            dirty: true,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn should_render(&self) -> bool {
        self.dirty || self.notification.current().is_some()
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    /// Apply every zoom signal the observer queued since the last call
    pub fn poll_zoom_signals(&mut self) {
        while let Ok(signal) = self.zoom_signals.try_recv() {
            self.apply_zoom(signal);
        }
    }

    /// Change the zoom and keep the top-left content cell in place
    fn apply_zoom(&mut self, signal: ZoomSignal) {
        let old_factor = self.canvas.zoom().factor();
        if !self.canvas.apply_zoom(signal) {
            let percent = self.canvas.zoom().percent();
            self.notification.show(&format!("Zoom limit {percent}%"));
            return;
        }

        let ratio = self.canvas.zoom().factor() / old_factor;
        let offsets = Axis::ALL.map(|axis| self.scroller.viewport().value(axis));

        self.scroller.set_view(&self.canvas);
        for (axis, value) in Axis::ALL.into_iter().zip(offsets) {
            let scaled = (f64::from(value) * ratio).round() as i32;
            self.scroller.viewport_mut().set_value(axis, scaled);
        }

        let percent = self.canvas.zoom().percent();

        #[cfg(debug_assertions)]
        log::debug!("Zoom {} applied: {}%", signal, percent);

        self.notification.show(&format!("Zoom {percent}%"));
        self.dirty = true;
    }

    /// True when (`column`, `row`) is inside the view, or nothing was rendered yet
    pub fn is_inside_view(&self, column: u16, row: u16) -> bool {
        self.view_area.is_none_or(|area| {
            column >= area.x && column < area.right() && row >= area.y && row < area.bottom()
        })
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
