// ============================================================================
// Onglet Favorites
// ============================================================================

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::app::App;
use crate::models::Quote;
use crate::ui::theme;

/// Longueur maximale de la réplique affichée dans la liste
const PREVIEW_CHARS: usize = 100;

pub fn render_favorites(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::ACCENT))
        .title(format!(" ⭐ Favorite Quotes ({}) ", app.favorites.len()));

    if app.favorites.is_empty() {
        let paragraph = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "You haven't added any quotes to favorites yet.",
                Style::default().fg(Color::Gray),
            )),
            Line::from(Span::styled(
                "Press [f] on a search result to add it.",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .block(block)
        .alignment(Alignment::Center);

        frame.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = app
        .favorites
        .iter()
        .enumerate()
        .map(|(index, quote)| {
            let item = ListItem::new(favorite_card(quote));
            if index == app.favorite_index {
                item.style(theme::selected_style(Style::default()))
            } else {
                item
            }
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

/// Aperçu tronqué : les 100 premiers caractères suivis de "..."
pub fn preview(text: &str) -> String {
    let truncated: String = text.chars().take(PREVIEW_CHARS).collect();
    format!("{truncated}...")
}

fn favorite_card(quote: &Quote) -> Text<'static> {
    Text::from(vec![
        Line::from(Span::styled(
            format!(" \"{}\"", preview(&quote.text)),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::raw("   "),
            Span::styled(quote.character.clone(), Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" in "),
            Span::styled(quote.title.clone(), Style::default().add_modifier(Modifier::ITALIC)),
        ]),
        Line::from(""),
    ])
}
