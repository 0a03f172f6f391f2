//! Colors from the FMDB brand: deep navy background, TMDB-ish blue accent.

use ratatui::style::Color;

pub const BACKGROUND: Color = Color::Rgb(0x00, 0x1B, 0x36);
pub const CARD: Color = Color::Rgb(0x00, 0x2B, 0x50);
pub const ACCENT: Color = Color::Rgb(0x00, 0x85, 0xCA);
pub const TEXT: Color = Color::White;
pub const MUTED: Color = Color::Gray;
pub const ERROR: Color = Color::Rgb(0xFF, 0x6B, 0x6B);
