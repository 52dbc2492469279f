// ============================================================================
// Onglet About
// ============================================================================
// Texte statique + un résumé de la session (historique de recherche)
// ============================================================================

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::ui::theme;

/// Nombre de recherches récentes affichées
const RECENT_SEARCHES: usize = 5;

pub fn render_about(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    render_description(frame, chunks[0]);
    render_session(frame, app, chunks[1]);
}

fn render_description(frame: &mut Frame, area: Rect) {
    let title = Style::default().fg(theme::ACCENT).add_modifier(Modifier::BOLD);

    let text = vec![
        Line::from(Span::styled("🎬 What is Movie Quote Finder?", title)),
        Line::from(""),
        Line::from("  🔍 Search famous movie quotes by text, title or character"),
        Line::from("  🎭 Analyze quotes by sentiment, character and year"),
        Line::from("  📊 Visualize trends and patterns in cinematic dialogue"),
        Line::from("  ⭐ Save your favorite quotes for this session"),
        Line::from(""),
        Line::from(Span::styled("📚 How It Works", title)),
        Line::from(""),
        Line::from("  1. Search: enter keywords, movie titles or character names"),
        Line::from("  2. Filter: narrow down by year range and sentiment"),
        Line::from("  3. Analyze: explore charts and statistics"),
        Line::from("  4. Save: build your collection of favorite quotes"),
        Line::from(""),
        Line::from(Span::styled(
            format!("Version: {}", env!("CARGO_PKG_VERSION")),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::ACCENT))
                .title(" About Movie Quote Finder "),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn render_session(frame: &mut Frame, app: &App, area: Rect) {
    let label = Style::default().fg(Color::Gray);
    let value = Style::default().fg(Color::Green).add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Searches with results: ", label),
            Span::styled(app.history.len().to_string(), value),
        ]),
        Line::from(vec![
            Span::styled("Favorites: ", label),
            Span::styled(app.favorites.len().to_string(), value),
        ]),
        Line::from(""),
    ];

    if app.history.is_empty() {
        lines.push(Line::from(Span::styled(
            "No searches yet.",
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        lines.push(Line::from(Span::styled("Recent searches:", label)));
        for record in app.history.recent(RECENT_SEARCHES) {
            let query = if record.query.is_empty() {
                "(browse)".to_string()
            } else {
                format!("\"{}\"", record.query)
            };
            lines.push(Line::from(vec![
                Span::styled(record.timestamp_display(), Style::default().fg(Color::DarkGray)),
                Span::raw(format!("  {query} in {} → {}", record.scope, record.results)),
            ]));
        }
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::ACCENT))
                .title(" Session "),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}
