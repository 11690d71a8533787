//! Color theme constants for the sheetnav UI.
//!
//! A minimal dark palette; panels brighten their border when focused.

use ratatui::style::Color;

/// Border color for unfocused panels.
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color for the focused panel border and cursor marker.
pub const COLOR_ACCENT: Color = Color::White;

/// Header/title text color.
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for hints, placeholders and scroll indicators.
pub const COLOR_DIM: Color = Color::DarkGray;

/// Confirmed-selection marker color.
pub const COLOR_CONFIRMED: Color = Color::LightGreen;
