//! Color constants and status-to-color helpers for the TUI.

use ratatui::style::Color;

use crate::balance::AutarkyStatus;
use crate::formulas::HeaterSizing;

/// Selected row highlight.
pub const SELECTED_FG: Color = Color::Cyan;
/// Header bar foreground.
pub const HEADER_FG: Color = Color::White;
/// Header bar background.
pub const HEADER_BG: Color = Color::DarkGray;
/// Footer help text color.
pub const FOOTER_FG: Color = Color::DarkGray;
/// Rejected-entry warning color.
pub const WARNING_FG: Color = Color::Red;
/// Placeholder color when no devices are recorded.
pub const NO_DATA_FG: Color = Color::DarkGray;

/// Returns the color for an autarky tier.
pub fn status_color(status: Option<&AutarkyStatus>) -> Color {
    match status {
        Some(AutarkyStatus::FullySelfSufficient { .. }) => Color::Green,
        Some(AutarkyStatus::Excellent { .. }) => Color::LightGreen,
        Some(AutarkyStatus::Good) => Color::Yellow,
        Some(AutarkyStatus::Insufficient { .. }) => Color::Red,
        None => NO_DATA_FG,
    }
}

/// Returns the color for a heater recommendation.
pub fn sizing_color(sizing: HeaterSizing) -> Color {
    match sizing {
        HeaterSizing::NoHeatingNeeded | HeaterSizing::TwoKwSufficient => Color::Green,
        HeaterSizing::FourKwRecommended => Color::Yellow,
        HeaterSizing::AboveFourKw => Color::Red,
    }
}
