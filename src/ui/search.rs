// ============================================================================
// Onglet Search - formulaire et cartes de résultats
// ============================================================================
// Layout vertical :
// - formulaire (texte libre + filtres avancés)
// - ligne de statut ("Found N quotes...")
// - liste des résultats, une carte par réplique
// ============================================================================

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::app::{App, FormField, Mode, POPULAR_SEARCHES};
use crate::models::Quote;
use crate::ui::theme;

/// Dessine l'onglet Search dans la zone donnée
pub fn render_search(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Formulaire : 3 lignes + bordures
            Constraint::Length(1), // Statut
            Constraint::Min(0),    // Résultats
        ])
        .split(area);

    render_form(frame, app, chunks[0]);
    render_status(frame, app, chunks[1]);
    render_results(frame, app, chunks[2]);
}

// ============================================================================
// Formulaire
// ============================================================================

fn render_form(frame: &mut Frame, app: &App, area: Rect) {
    let editing = app.mode == Mode::Editing;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if editing { Color::Green } else { theme::ACCENT }))
        .title(" Find Movie Quotes ");

    // Ligne 1 : texte libre (buffer en cours d'édition, sinon texte de la requête)
    let text_line = if editing {
        Line::from(vec![
            Span::styled("Search: ", theme::key_style(theme::ACCENT)),
            Span::styled(app.input_buffer.as_str(), Style::default().fg(Color::White)),
            Span::styled(
                "█", // Curseur
                Style::default().fg(Color::White).add_modifier(Modifier::SLOW_BLINK),
            ),
        ])
    } else if app.query.text.is_empty() {
        Line::from(vec![
            Span::styled("Search: ", theme::key_style(theme::ACCENT)),
            Span::styled(
                "e.g. 'You talking to me?' or 'The Godfather' or 'Tony Montana'",
                Style::default().fg(Color::DarkGray),
            ),
        ])
    } else {
        Line::from(vec![
            Span::styled("Search: ", theme::key_style(theme::ACCENT)),
            Span::raw(app.query.text.as_str()),
        ])
    };

    // Ligne 2 : filtres avancés, le champ focalisé est surligné
    let field = |name: &'static str, value: String, target: FormField| -> Vec<Span<'static>> {
        let value_style = if app.focused_field == target && !editing {
            Style::default().fg(Color::Black).bg(theme::ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        vec![
            Span::styled(format!("{name}: "), Style::default().fg(Color::Gray)),
            Span::styled(format!(" {value} "), value_style),
            Span::raw("  "),
        ]
    };

    let mut filters = Vec::new();
    filters.extend(field("In", app.query.scope.label().to_string(), FormField::Scope));
    filters.extend(field("From", app.query.year_from.to_string(), FormField::YearFrom));
    filters.extend(field("To", app.query.year_to.to_string(), FormField::YearTo));
    filters.extend(field(
        "Sentiment",
        app.query.sentiment.label().to_string(),
        FormField::Sentiment,
    ));
    filters.extend(field("Sort", app.query.sort.label().to_string(), FormField::Sort));

    // Ligne 3 : suggestion populaire suivante
    let next_popular = POPULAR_SEARCHES[app.popular_index % POPULAR_SEARCHES.len()];
    let popular_line = Line::from(vec![
        Span::styled("Popular: ", Style::default().fg(Color::Gray)),
        Span::styled("[p] ", theme::key_style(Color::Yellow)),
        Span::styled(next_popular, Style::default().fg(Color::Magenta)),
    ]);

    let paragraph = Paragraph::new(vec![text_line, Line::from(filters), popular_line]).block(block);
    frame.render_widget(paragraph, area);
}

fn render_status(frame: &mut Frame, app: &App, area: Rect) {
    let line = match &app.status {
        Some(status) => Line::from(Span::styled(
            format!(" {}", status.text),
            Style::default()
                .fg(theme::status_color(status.level))
                .add_modifier(Modifier::BOLD),
        )),
        None => Line::from(Span::styled(
            " Press [/] to type a query, [Enter] to search (empty text browses everything)",
            Style::default().fg(Color::DarkGray),
        )),
    };

    frame.render_widget(Paragraph::new(line), area);
}

// ============================================================================
// Résultats
// ============================================================================

fn render_results(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::ACCENT))
        .title(format!(" Results ({}) ", app.results.len()));

    if !app.engine.has_data() || app.results.is_empty() {
        let message = if !app.engine.has_data() {
            "No data available."
        } else if app.has_searched {
            "No quotes found matching your criteria."
        } else {
            "Run a search to see movie quotes here."
        };

        let paragraph = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(message, Style::default().fg(Color::Gray))),
        ])
        .block(block)
        .alignment(Alignment::Center);

        frame.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = app
        .results
        .iter()
        .enumerate()
        .map(|(index, quote)| {
            let card = quote_card(quote);
            if index == app.selected_index {
                ListItem::new(card).style(theme::selected_style(Style::default()))
            } else {
                ListItem::new(card)
            }
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

/// Construit la carte d'une réplique (4 lignes)
///
/// CONCEPT RATATUI : Text multi-lignes
/// - Un ListItem peut contenir plusieurs Line
/// - La dernière ligne vide sert de séparateur
pub fn quote_card(quote: &Quote) -> Text<'static> {
    let label = Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD);
    let sentiment_style = Style::default()
        .fg(theme::sentiment_color(quote.sentiment))
        .add_modifier(Modifier::BOLD);

    Text::from(vec![
        Line::from(vec![
            Span::styled(
                format!(" \"{}\" ", quote.text),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" {} ", quote.character),
                Style::default().fg(Color::White).bg(Color::Rgb(74, 144, 226)),
            ),
        ]),
        Line::from(vec![
            Span::styled("  🎬 Movie: ", label),
            Span::raw(format!("{} ({})", quote.title, quote.year)),
            Span::styled("   🎭 Scene: ", label),
            Span::raw(quote.scene_display().to_string()),
        ]),
        Line::from(vec![
            Span::styled("  📊 Sentiment: ", label),
            Span::styled(quote.sentiment.label(), sentiment_style),
            Span::styled("   🏷 Tags: ", label),
            Span::raw(quote.tags_display()),
            Span::styled("   Length: ", label),
            Span::raw(format!("{} characters", quote.char_len())),
        ]),
        Line::from(""),
    ])
}
