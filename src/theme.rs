//! Centralized theme configuration for all UI components.
//!
//! All colors and styles are defined here. Render code uses
//! `theme::module::CONSTANT` instead of hardcoding `Color::*` values.
//!
//! Theme: Galaxy - Purple/pink accents with deep space blue background

use ratatui::style::{Color, Modifier, Style};

/// Core color palette - shared base colors.
pub mod palette {
    use super::*;

    pub const TEXT: Color = Color::Rgb(236, 236, 244);
    pub const TEXT_DIM: Color = Color::Rgb(90, 92, 119);
    pub const TEXT_MUTED: Color = Color::Rgb(130, 133, 158);

    pub const BG_DARK: Color = Color::Rgb(26, 26, 46);
    pub const BG_HIGHLIGHT: Color = Color::Rgb(55, 55, 85);

    pub const CYAN: Color = Color::Rgb(0, 217, 255);
    pub const YELLOW: Color = Color::Rgb(255, 217, 61);
    pub const PINK: Color = Color::Rgb(255, 107, 157);
}

/// Scrolled view styles
pub mod view {
    use super::*;

    pub const BORDER: Color = palette::CYAN;
    pub const TEXT: Color = palette::TEXT;
    pub const BACKGROUND: Color = palette::BG_DARK;
    pub const TITLE: Style = Style::new().fg(palette::CYAN).add_modifier(Modifier::BOLD);
    pub const ZOOM_BADGE: Style = Style::new().fg(palette::PINK).add_modifier(Modifier::BOLD);
}

/// Notification styles
pub mod notification {
    use super::*;

    pub struct NotificationColors {
        pub fg: Color,
        pub bg: Color,
        pub border: Color,
    }

    pub const INFO: NotificationColors = NotificationColors {
        fg: palette::TEXT,
        bg: palette::BG_HIGHLIGHT,
        border: palette::TEXT_MUTED,
    };

    pub const WARNING: NotificationColors = NotificationColors {
        fg: palette::BG_DARK,
        bg: palette::YELLOW,
        border: palette::YELLOW,
    };
}

/// Help line (bottom status bar) styles
pub mod help_line {
    use super::*;

    pub const KEY: Color = palette::TEXT_MUTED;
    pub const DESCRIPTION: Color = palette::TEXT_DIM;
    pub const SEPARATOR: Color = palette::TEXT_DIM;
    pub const POSITION: Color = palette::CYAN;
}

/// Scrollbar styles
pub mod scrollbar {
    use super::*;

    pub const DEFAULT: Color = palette::CYAN;
    pub const TRACK: Color = palette::BG_HIGHLIGHT;
}
