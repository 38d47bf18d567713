//! Shared test utilities for viewscroll
//!
//! Common fixtures and event builders used across test modules.

#[cfg(test)]
pub mod test_helpers {
    use crate::app::App;
    use crate::config::Config;
    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

    /// 200 rows of 300 columns, every cell names its own row
    pub fn large_text() -> String {
        (0..200)
            .map(|row| format!("{:03}", row).repeat(100))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Helper to create App with default config for tests
    pub fn test_app(text: &str) -> App {
        App::new(text, "test.txt", &Config::default())
    }

    /// App over `large_text` with a 40x10 visible window and no render yet
    pub fn large_app() -> App {
        let mut app = test_app(&large_text());
        app.scroller
            .viewport_mut()
            .set_visible_extent(crate::scroll::Extent::new(40, 10));
        app
    }

    /// Helper to create a KeyEvent without modifiers
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// Helper to create a KeyEvent with specific modifiers
    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    /// Wheel event at a fixed position inside any reasonable view
    pub fn wheel(kind: MouseEventKind, modifiers: KeyModifiers) -> MouseEvent {
        wheel_at(kind, modifiers, 5, 5)
    }

    pub fn wheel_at(
        kind: MouseEventKind,
        modifiers: KeyModifiers,
        column: u16,
        row: u16,
    ) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers,
        }
    }
}
