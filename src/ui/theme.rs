// ============================================================================
// Thème : couleurs partagées par les écrans
// ============================================================================

use ratatui::style::{Color, Modifier, Style};

use crate::app::StatusLevel;
use crate::models::Sentiment;

/// Couleur des bordures et titres
pub const ACCENT: Color = Color::Cyan;

/// Couleurs par sentiment
const POSITIVE_COLOR: Color = Color::Rgb(46, 204, 113); // Vert
const NEGATIVE_COLOR: Color = Color::Rgb(231, 76, 60);  // Rouge
const NEUTRAL_COLOR: Color = Color::Rgb(243, 156, 18);  // Orange

pub fn sentiment_color(sentiment: Sentiment) -> Color {
    match sentiment {
        Sentiment::Positive => POSITIVE_COLOR,
        Sentiment::Neutral => NEUTRAL_COLOR,
        Sentiment::Negative => NEGATIVE_COLOR,
    }
}

pub fn status_color(level: StatusLevel) -> Color {
    match level {
        StatusLevel::Info => Color::Cyan,
        StatusLevel::Success => Color::Green,
        StatusLevel::Warning => Color::Yellow,
    }
}

/// Style d'un raccourci clavier dans le footer (ex: "[q]")
pub fn key_style(color: Color) -> Style {
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

/// Style de la ligne sélectionnée dans une liste
pub fn selected_style(base: Style) -> Style {
    base.add_modifier(Modifier::BOLD).add_modifier(Modifier::REVERSED)
}
