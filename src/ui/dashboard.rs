// ============================================================================
// Dashboard - Rendu de l'interface principale
// ============================================================================
// Découpe l'écran en header (onglets), contenu et footer (raccourcis),
// puis délègue le contenu à l'écran de l'onglet actif.
//
// CONCEPTS RATATUI :
// 1. Frame : surface de dessin
// 2. Layout : découpage de l'espace en zones
// 3. Tabs : barre d'onglets
// 4. Clear : efface une zone avant d'y dessiner une popup
// ============================================================================

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap},
    Frame,
};

use crate::app::{App, Mode, Tab};
use crate::models::Quote;
use crate::ui::{about, analysis, favorites, search, theme};

/// Dessine l'interface complète
///
/// CONCEPT RUST : Routing avec match sur enum
/// - Le compilateur garantit que chaque onglet est géré
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = create_layout(frame.size());

    render_header(frame, app, chunks[0]);

    match app.current_tab {
        Tab::Search => search::render_search(frame, app, chunks[1]),
        Tab::Analysis => analysis::render_analysis(frame, app, chunks[1]),
        Tab::Favorites => favorites::render_favorites(frame, app, chunks[1]),
        Tab::About => about::render_about(frame, app, chunks[1]),
    }

    render_footer(frame, app, chunks[2]);

    // La popup se dessine en dernier, par-dessus le reste
    if let (Mode::Context, Some(quote)) = (&app.mode, &app.context) {
        render_context_popup(frame, quote);
    }
}

/// Crée le layout principal (header, content, footer)
fn create_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header : 3 lignes
            Constraint::Min(0),    // Content : tout le reste
            Constraint::Length(3), // Footer : 3 lignes
        ])
        .split(area)
        .to_vec()
}

// ============================================================================
// Header : titre + onglets
// ============================================================================

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = Tab::ALL.iter().map(|tab| Line::from(tab.title())).collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::ACCENT))
                .title(" 🎬 Movie Quote Finder & Analyzer ")
                .title_alignment(Alignment::Center),
        )
        .select(app.current_tab.index())
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
                .add_modifier(Modifier::UNDERLINED),
        )
        .divider(" │ ");

    frame.render_widget(tabs, area);
}

// ============================================================================
// Footer : raccourcis et confirmations
// ============================================================================

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::ACCENT));

    let shortcuts = if app.is_awaiting_quit_confirmation() {
        confirmation_line(
            "[q]",
            " à nouveau pour quitter, ou n'importe quelle autre touche pour annuler ⚠",
        )
    } else if app.is_awaiting_delete_confirmation() {
        confirmation_line(
            "[d]",
            " à nouveau pour retirer ce favori, ou autre touche pour annuler ⚠",
        )
    } else {
        Line::from(shortcut_spans(app))
    };

    let paragraph = Paragraph::new(vec![shortcuts])
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

/// Message de confirmation two-step (quit / delete)
fn confirmation_line(key: &'static str, message: &'static str) -> Line<'static> {
    let warning = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    Line::from(vec![
        Span::styled("⚠  Appuyez sur ", warning),
        Span::styled(
            key,
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD)
                .add_modifier(Modifier::SLOW_BLINK),
        ),
        Span::styled(message, warning),
    ])
}

/// Raccourcis selon le mode et l'onglet actif
fn shortcut_spans(app: &App) -> Vec<Span<'static>> {
    let pairs: Vec<(&'static str, &'static str, Color)> = match (&app.mode, app.current_tab) {
        (Mode::Editing, _) => vec![
            ("[Enter]", " Search  ", Color::Green),
            ("[ESC]", " Cancel", Color::Red),
        ],
        (Mode::Context, _) => vec![("[ESC / Space]", " Close", Color::Yellow)],
        (Mode::Normal, Tab::Search) => vec![
            ("[/]", " Type  ", Color::Green),
            ("[Enter]", " Search  ", Color::Green),
            ("[n]", " Filter  ", Color::Yellow),
            ("[←→]", " Change  ", Color::Yellow),
            ("[j k]", " Navigate  ", Color::Yellow),
            ("[f]", " Favorite  ", Color::Magenta),
            ("[c]", " Context  ", Color::Cyan),
            ("[p]", " Popular  ", Color::Cyan),
        ],
        (Mode::Normal, Tab::Analysis) => {
            vec![("[←→ / h l]", " Analysis type  ", Color::Yellow)]
        }
        (Mode::Normal, Tab::Favorites) => vec![
            ("[j k]", " Navigate  ", Color::Yellow),
            ("[Enter]", " Context  ", Color::Cyan),
            ("[d]", " Remove  ", Color::Red),
        ],
        (Mode::Normal, Tab::About) => Vec::new(),
    };

    let mut spans: Vec<Span<'static>> = pairs
        .into_iter()
        .flat_map(|(key, label, color)| {
            [Span::styled(key, theme::key_style(color)), Span::raw(label)]
        })
        .collect();

    if app.mode == Mode::Normal {
        spans.push(Span::styled("[Tab]", theme::key_style(Color::Yellow)));
        spans.push(Span::raw(" Next tab  "));
        spans.push(Span::styled("[q]", theme::key_style(Color::Yellow)));
        spans.push(Span::raw(" Quit"));
    }

    spans
}

// ============================================================================
// Popup de contexte
// ============================================================================

/// Rectangle centré occupant un pourcentage de la zone
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

fn render_context_popup(frame: &mut Frame, quote: &Quote) {
    let area = centered_rect(70, 50, frame.size());
    let label = Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD);

    let text = vec![
        Line::from(vec![
            Span::styled("Context for: ", label),
            Span::styled(
                quote.title.as_str(),
                Style::default().fg(theme::ACCENT).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(vec![Span::styled("Character: ", label), Span::raw(quote.character.as_str())]),
        Line::from(vec![Span::styled("Scene: ", label), Span::raw(quote.scene_display())]),
        Line::from(vec![Span::styled("Full Quote: ", label), Span::raw(quote.text.as_str())]),
    ];

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow))
                .title(" 🔍 Context "),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}

// ============================================================================
// Tests de rendu
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AnalysisKind;
    use crate::data::sample_corpus;
    use crate::engine::QuoteFilterEngine;
    use crate::models::Corpus;
    use ratatui::{backend::TestBackend, Terminal};

    /// Dessine l'app et retourne tout le buffer sous forme de texte
    fn draw(app: &App) -> String {
        let backend = TestBackend::new(140, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();

        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn app() -> App {
        App::new(QuoteFilterEngine::new(sample_corpus()))
    }

    #[test]
    fn test_render_initial_search_tab() {
        let screen = draw(&app());
        assert!(screen.contains("Find Movie Quotes"));
        assert!(screen.contains("Run a search"));
        assert!(screen.contains("1950"));
    }

    #[test]
    fn test_render_search_results() {
        let mut app = app();
        app.query.text = "king".to_string();
        app.run_search();

        let screen = draw(&app);
        assert!(screen.contains("Found 1 quotes matching your search"));
        assert!(screen.contains("Jack Dawson"));
        assert!(screen.contains("love, freedom, ocean"));
    }

    #[test]
    fn test_render_every_analysis() {
        let mut app = app();
        app.select_tab(Tab::Analysis);

        for _ in AnalysisKind::ALL {
            let screen = draw(&app);
            assert!(screen.contains("Database Statistics"));
            assert!(screen.contains(app.analysis.label()));
            app.next_analysis();
        }
    }

    #[test]
    fn test_render_empty_favorites() {
        let mut app = app();
        app.select_tab(Tab::Favorites);
        let screen = draw(&app);
        assert!(screen.contains("You haven't added any quotes to favorites yet."));
    }

    #[test]
    fn test_render_context_popup() {
        let mut app = app();
        app.run_search();
        app.show_context();
        let screen = draw(&app);
        assert!(screen.contains("Context for: The Godfather"));
        assert!(screen.contains("Business negotiation scene"));
    }

    #[test]
    fn test_render_quit_confirmation() {
        let mut app = app();
        app.request_quit();
        assert!(draw(&app).contains("Appuyez sur"));
    }

    #[test]
    fn test_render_without_data() {
        let mut app = App::new(QuoteFilterEngine::new(Corpus::empty()));
        assert!(draw(&app).contains("No data available."));

        app.select_tab(Tab::Analysis);
        assert!(draw(&app).contains("No data available for analysis."));
    }
}
