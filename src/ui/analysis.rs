// ============================================================================
// Onglet Analysis - graphiques et statistiques
// ============================================================================
// Un graphique à la fois, choisi avec ←/→ :
// - Sentiment Distribution : barres + pourcentages (le terminal n'a pas de camembert)
// - Most Quoted Characters : barres horizontales (top 10)
// - Quotes by Year         : courbe avec marqueurs
// - Word Frequency         : barres horizontales (top 20)
//
// CONCEPTS RATATUI :
// 1. BarChart / BarGroup / Bar : histogrammes
// 2. Chart / Dataset / Axis : courbes
// ============================================================================

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

use crate::app::{AnalysisKind, App};
use crate::engine::TOP_CHARACTERS;
use crate::ui::theme;

/// Dessine l'onglet Analysis
pub fn render_analysis(frame: &mut Frame, app: &App, area: Rect) {
    if !app.engine.has_data() {
        render_no_data(frame, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Sélecteur d'analyse
            Constraint::Min(0),    // Graphique
            Constraint::Length(4), // Statistiques
        ])
        .split(area);

    render_selector(frame, app, chunks[0]);

    match app.analysis {
        AnalysisKind::SentimentDistribution => render_sentiment(frame, app, chunks[1]),
        AnalysisKind::TopCharacters => render_characters(frame, app, chunks[1]),
        AnalysisKind::QuotesByYear => render_years(frame, app, chunks[1]),
        AnalysisKind::WordFrequency => render_words(frame, app, chunks[1]),
    }

    render_stats(frame, app, chunks[2]);
}

fn chart_block(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White))
        .title(format!(" {title} "))
}

/// Ligne "◀ Sentiment Distribution ▶" avec les autres analyses en gris
fn render_selector(frame: &mut Frame, app: &App, area: Rect) {
    let spans: Vec<Span> = AnalysisKind::ALL
        .iter()
        .flat_map(|kind| {
            let style = if *kind == app.analysis {
                Style::default().fg(theme::ACCENT).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            [Span::styled(kind.label(), style), Span::raw("  │  ")]
        })
        .collect();

    let paragraph = Paragraph::new(Line::from(spans))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::ACCENT))
                .title(" Select Analysis Type [←/→] "),
        )
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

// ============================================================================
// Graphiques
// ============================================================================

fn render_sentiment(frame: &mut Frame, app: &App, area: Rect) {
    let distribution = app.engine.sentiment_distribution();
    let total: usize = distribution.iter().map(|(_, count)| count).sum();

    let bars: Vec<Bar> = distribution
        .iter()
        .map(|(sentiment, count)| {
            let percent = if total == 0 {
                0.0
            } else {
                *count as f64 * 100.0 / total as f64
            };
            Bar::default()
                .value(*count as u64)
                .label(Line::from(sentiment.label()))
                .text_value(format!("{count} ({percent:.0}%)"))
                .style(Style::default().fg(theme::sentiment_color(*sentiment)))
        })
        .collect();

    let chart = BarChart::default()
        .block(chart_block("Sentiment Distribution of Movie Quotes"))
        .bar_width(14)
        .bar_gap(4)
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}

fn render_characters(frame: &mut Frame, app: &App, area: Rect) {
    let characters = app.engine.top_characters(TOP_CHARACTERS);
    render_horizontal_bars(
        frame,
        area,
        &format!("Top {TOP_CHARACTERS} Most Quoted Characters"),
        &characters,
        Color::Blue,
    );
}

fn render_words(frame: &mut Frame, app: &App, area: Rect) {
    let words = app.engine.word_frequency();
    render_horizontal_bars(
        frame,
        area,
        "Top 20 Most Common Words in Movie Quotes",
        &words,
        Color::Magenta,
    );
}

/// Barres horizontales (label à gauche, valeur au bout de la barre)
fn render_horizontal_bars(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    entries: &[(String, usize)],
    color: Color,
) {
    let bars: Vec<Bar> = entries
        .iter()
        .map(|(label, count)| {
            Bar::default()
                .value(*count as u64)
                .label(Line::from(label.as_str()))
                .style(Style::default().fg(color))
        })
        .collect();

    let chart = BarChart::default()
        .block(chart_block(title))
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}

/// Courbe du nombre de répliques par année
///
/// CONCEPT RUST : Iterator avec fold
/// - Calcule min/max des années en une seule passe
fn render_years(frame: &mut Frame, app: &App, area: Rect) {
    let points: Vec<(f64, f64)> = app
        .engine
        .quotes_by_year()
        .iter()
        .map(|&(year, count)| (f64::from(year), count as f64))
        .collect();

    let (min_year, max_year) = points
        .iter()
        .fold((f64::MAX, f64::MIN), |(min, max), &(x, _)| (min.min(x), max.max(x)));
    let max_count = points.iter().fold(0.0_f64, |max, &(_, y)| max.max(y));

    // Une seule année : on élargit l'axe pour que le point soit visible
    let (x_min, x_max) = if min_year < max_year {
        (min_year, max_year)
    } else {
        (min_year - 1.0, max_year + 1.0)
    };
    let y_max = max_count + 1.0;

    // Deux datasets : la ligne, puis les marqueurs par-dessus
    let datasets = vec![
        Dataset::default()
            .name("quotes")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(theme::ACCENT))
            .data(&points),
        Dataset::default()
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(Color::Yellow))
            .data(&points),
    ];

    let x_axis = Axis::default()
        .title("Year")
        .style(Style::default().fg(Color::Gray))
        .bounds([x_min, x_max])
        .labels(vec![
            Span::raw(format!("{x_min:.0}")),
            Span::raw(format!("{:.0}", (x_min + x_max) / 2.0)),
            Span::raw(format!("{x_max:.0}")),
        ]);

    let y_axis = Axis::default()
        .title("Quotes")
        .style(Style::default().fg(Color::Gray))
        .bounds([0.0, y_max])
        .labels(vec![
            Span::raw("0"),
            Span::raw(format!("{:.0}", y_max / 2.0)),
            Span::raw(format!("{y_max:.0}")),
        ]);

    let chart = Chart::new(datasets)
        .block(chart_block("Movie Quotes Trend by Year"))
        .x_axis(x_axis)
        .y_axis(y_axis);

    frame.render_widget(chart, area);
}

// ============================================================================
// Statistiques
// ============================================================================

fn render_stats(frame: &mut Frame, app: &App, area: Rect) {
    let stats = app.engine.stats();
    let value = Style::default().fg(Color::Green).add_modifier(Modifier::BOLD);
    let label = Style::default().fg(Color::Gray);

    let line = Line::from(vec![
        Span::styled("Total Quotes: ", label),
        Span::styled(stats.total_quotes.to_string(), value),
        Span::raw("    "),
        Span::styled("Unique Movies: ", label),
        Span::styled(stats.unique_movies.to_string(), value),
        Span::raw("    "),
        Span::styled("Unique Characters: ", label),
        Span::styled(stats.unique_characters.to_string(), value),
        Span::raw("    "),
        Span::styled("Average Quote Length: ", label),
        Span::styled(format!("{:.0} chars", stats.average_length), value),
    ]);

    let paragraph = Paragraph::new(vec![Line::from(""), line])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::ACCENT))
                .title(" Database Statistics "),
        )
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn render_no_data(frame: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "No data available for analysis.",
            Style::default().fg(Color::Yellow),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(" ⚠ Analysis "),
    )
    .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
