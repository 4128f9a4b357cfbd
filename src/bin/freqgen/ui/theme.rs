//! Colour scheme: near-black background with a green accent

use ratatui::style::{Color, Modifier, Style};

pub const BACKGROUND: Color = Color::Rgb(0x12, 0x12, 0x12);
pub const PANEL: Color = Color::Rgb(0x19, 0x14, 0x14);
pub const FIELD: Color = Color::Rgb(0x33, 0x33, 0x33);
pub const ACCENT: Color = Color::Rgb(0x1D, 0xB9, 0x54);
pub const TEXT: Color = Color::White;
pub const MUTED: Color = Color::DarkGray;
pub const PLAYING: Color = Color::Green;
pub const STOPPED: Color = Color::Red;
pub const LEFT_CHANNEL: Color = Color::Cyan;
pub const RIGHT_CHANNEL: Color = Color::Magenta;

pub fn base() -> Style {
    Style::default().fg(TEXT).bg(PANEL)
}

pub fn title() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}
