use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

use super::app_state::App;
use super::mouse_events;
use crate::scroll::Axis;
use crate::wheel::ZoomSignal;

/// Timeout for event polling - allows periodic UI refresh for notifications
const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

impl App {
    pub fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(EVENT_POLL_TIMEOUT)? {
            self.handle_event(event::read()?);
        }
        Ok(())
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event);
            }
            Event::Mouse(mouse_event) => {
                mouse_events::handle_mouse_event(self, mouse_event);
            }
            Event::Resize(_, _) => self.mark_dirty(),
            _ => {}
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        let pane = self.scroller.viewport_mut();
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => pane.scroll_units(Axis::Vertical, -1),
            KeyCode::Down | KeyCode::Char('j') => pane.scroll_units(Axis::Vertical, 1),
            KeyCode::Left | KeyCode::Char('h') => pane.scroll_units(Axis::Horizontal, -1),
            KeyCode::Right | KeyCode::Char('l') => pane.scroll_units(Axis::Horizontal, 1),
            KeyCode::PageUp => pane.scroll_blocks(Axis::Vertical, -1),
            KeyCode::PageDown => pane.scroll_blocks(Axis::Vertical, 1),
            KeyCode::Home | KeyCode::Char('g') => pane.reset(),
            KeyCode::End | KeyCode::Char('G') => pane.jump_to_end(Axis::Vertical),
            // Keyboard zoom goes through the same observer path as ctrl+wheel
            KeyCode::Char('+') | KeyCode::Char('=') => self.scroller.emit(ZoomSignal::ZoomIn),
            KeyCode::Char('-') => self.scroller.emit(ZoomSignal::ZoomOut),
            _ => return,
        }

        self.poll_zoom_signals();
        self.mark_dirty();
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
