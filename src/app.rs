// ============================================================================
// Structure : App
// ============================================================================
// Gère l'état global de l'application TUI
//
// PATTERN : "Application State"
// - Tous les composants de l'UI lisent depuis App
// - Toutes les modifications passent par les méthodes de App
// - Les favoris et l'historique de la session vivent ici, pas dans un global
// ============================================================================

use tracing::{debug, info};

use crate::engine::QuoteFilterEngine;
use crate::models::{Favorites, Query, Quote, SearchHistory, MAX_YEAR, MIN_YEAR};

/// Année de départ proposée dans le formulaire de recherche
pub const DEFAULT_YEAR_FROM: u16 = 1950;

/// Suggestions de recherche proposées avec la touche 'p'
pub const POPULAR_SEARCHES: [&str; 5] = [
    "Love quotes",
    "Famous monologues",
    "Scarface",
    "The Dark Knight",
    "Forrest Gump",
];

// ============================================================================
// Enums d'état
// ============================================================================

/// Onglets de l'application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Search,
    Analysis,
    Favorites,
    About,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Search, Tab::Analysis, Tab::Favorites, Tab::About];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Search => "🔍 Search Quotes",
            Tab::Analysis => "📊 Analysis",
            Tab::Favorites => "⭐ Favorites",
            Tab::About => "ℹ About",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Mode d'interaction
///
/// CONCEPT : Modal input (Vim-like)
/// - Normal : navigation et raccourcis
/// - Editing : les touches construisent le texte de recherche
/// - Context : popup de contexte d'une réplique
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Editing,
    Context,
}

/// Champ du formulaire qui reçoit ←/→
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Scope,
    YearFrom,
    YearTo,
    Sentiment,
    Sort,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Scope,
        FormField::YearFrom,
        FormField::YearTo,
        FormField::Sentiment,
        FormField::Sort,
    ];

    pub fn next(&self) -> Self {
        let index = Self::ALL.iter().position(|f| f == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}

/// Graphique affiché dans l'onglet Analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisKind {
    SentimentDistribution,
    TopCharacters,
    QuotesByYear,
    WordFrequency,
}

impl AnalysisKind {
    pub const ALL: [AnalysisKind; 4] = [
        AnalysisKind::SentimentDistribution,
        AnalysisKind::TopCharacters,
        AnalysisKind::QuotesByYear,
        AnalysisKind::WordFrequency,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AnalysisKind::SentimentDistribution => "Sentiment Distribution",
            AnalysisKind::TopCharacters => "Most Quoted Characters",
            AnalysisKind::QuotesByYear => "Quotes by Year",
            AnalysisKind::WordFrequency => "Word Frequency",
        }
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|k| k == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Niveau d'un message de statut (détermine la couleur)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Success,
    Warning,
}

/// Message affiché sous le formulaire de recherche
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub level: StatusLevel,
    pub text: String,
}

impl StatusMessage {
    fn new(level: StatusLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }
}

// ============================================================================
// Structure : App
// ============================================================================

/// État principal de l'application
pub struct App {
    /// Indique si l'application doit continuer à tourner
    pub running: bool,

    /// Moteur de recherche (possède le corpus)
    pub engine: QuoteFilterEngine,

    pub current_tab: Tab,
    pub mode: Mode,

    /// Requête en cours d'édition dans le formulaire
    pub query: Query,
    pub focused_field: FormField,

    /// Buffer de saisie du texte libre (mode Editing)
    pub input_buffer: String,

    /// Résultats de la dernière recherche (copies)
    pub results: Vec<Quote>,

    /// Vrai dès qu'une recherche a été lancée
    pub has_searched: bool,

    /// Index du résultat sélectionné
    pub selected_index: usize,

    /// Favoris de la session
    pub favorites: Favorites,

    /// Index du favori sélectionné
    pub favorite_index: usize,

    /// Historique des recherches de la session
    pub history: SearchHistory,

    pub analysis: AnalysisKind,

    pub status: Option<StatusMessage>,

    /// Réplique affichée dans la popup de contexte
    pub context: Option<Quote>,

    /// Prochaine suggestion de POPULAR_SEARCHES
    pub popular_index: usize,

    /// Two-step quit : première pression de 'q' arme la confirmation
    pub confirm_quit: bool,

    /// Two-step delete dans l'onglet Favorites
    pub confirm_delete: bool,
}

impl App {
    /// Crée l'application autour d'un moteur de recherche
    pub fn new(engine: QuoteFilterEngine) -> Self {
        Self {
            running: true,
            engine,
            current_tab: Tab::Search,
            mode: Mode::Normal,
            query: Query::new().with_years(DEFAULT_YEAR_FROM, MAX_YEAR),
            focused_field: FormField::Scope,
            input_buffer: String::new(),
            results: Vec::new(),
            has_searched: false,
            selected_index: 0,
            favorites: Favorites::new(),
            favorite_index: 0,
            history: SearchHistory::new(),
            analysis: AnalysisKind::SentimentDistribution,
            status: None,
            context: None,
            popular_index: 0,
            confirm_quit: false,
            confirm_delete: false,
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Tick : appelé à chaque itération de la boucle
    pub fn tick(&mut self) {}

    // ========================================================================
    // Onglets
    // ========================================================================

    pub fn next_tab(&mut self) {
        self.select_tab(self.current_tab.next());
    }

    pub fn previous_tab(&mut self) {
        self.select_tab(self.current_tab.previous());
    }

    pub fn select_tab(&mut self, tab: Tab) {
        debug!(?tab, "Switching tab");
        self.current_tab = tab;
        self.confirm_delete = false;
    }

    pub fn is_on(&self, tab: Tab) -> bool {
        self.current_tab == tab && self.mode == Mode::Normal
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    /// Monte dans la liste de l'onglet courant
    ///
    /// CONCEPT RUST : saturating_sub() ne descend pas en dessous de 0
    pub fn navigate_up(&mut self) {
        match self.current_tab {
            Tab::Search => self.selected_index = self.selected_index.saturating_sub(1),
            Tab::Favorites => self.favorite_index = self.favorite_index.saturating_sub(1),
            _ => {}
        }
    }

    /// Descend dans la liste de l'onglet courant
    pub fn navigate_down(&mut self) {
        match self.current_tab {
            Tab::Search => {
                let max_index = self.results.len().saturating_sub(1);
                self.selected_index = (self.selected_index + 1).min(max_index);
            }
            Tab::Favorites => {
                let max_index = self.favorites.len().saturating_sub(1);
                self.favorite_index = (self.favorite_index + 1).min(max_index);
            }
            _ => {}
        }
    }

    pub fn selected_result(&self) -> Option<&Quote> {
        self.results.get(self.selected_index)
    }

    pub fn selected_favorite(&self) -> Option<&Quote> {
        self.favorites.get(self.favorite_index)
    }

    // ========================================================================
    // Recherche
    // ========================================================================

    /// Lance la recherche avec la requête du formulaire
    pub fn run_search(&mut self) {
        let results: Vec<Quote> = self.engine.search(&self.query).into_iter().cloned().collect();

        info!(
            query = %self.query.text,
            scope = %self.query.scope,
            from = self.query.year_from,
            to = self.query.year_to,
            sentiment = %self.query.sentiment.label(),
            results = results.len(),
            "Search executed"
        );

        self.status = Some(if !self.engine.has_data() {
            StatusMessage::new(
                StatusLevel::Warning,
                "No movie quotes database found. No data available.",
            )
        } else if results.is_empty() {
            StatusMessage::new(StatusLevel::Warning, "No quotes found matching your criteria.")
        } else {
            self.history
                .record(&self.query.text, self.query.scope, results.len());
            StatusMessage::new(
                StatusLevel::Success,
                format!("Found {} quotes matching your search", results.len()),
            )
        });

        self.results = results;
        self.has_searched = true;
        self.selected_index = 0;
    }

    /// Charge la suggestion suivante dans le texte et lance la recherche
    pub fn next_popular_search(&mut self) {
        let suggestion = POPULAR_SEARCHES[self.popular_index % POPULAR_SEARCHES.len()];
        self.popular_index = (self.popular_index + 1) % POPULAR_SEARCHES.len();
        info!(suggestion, "Popular search selected");
        self.query.text = suggestion.to_string();
        self.run_search();
    }

    // ========================================================================
    // Formulaire
    // ========================================================================

    pub fn focus_next_field(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    /// Valeur suivante du champ focalisé (→)
    pub fn increase_field(&mut self) {
        match self.focused_field {
            FormField::Scope => self.query.scope = self.query.scope.next(),
            FormField::YearFrom => self.query.year_from = step_year(self.query.year_from, 1),
            FormField::YearTo => self.query.year_to = step_year(self.query.year_to, 1),
            FormField::Sentiment => self.query.sentiment = self.query.sentiment.next(),
            FormField::Sort => self.query.sort = self.query.sort.next(),
        }
    }

    /// Valeur précédente du champ focalisé (←)
    pub fn decrease_field(&mut self) {
        match self.focused_field {
            FormField::Scope => self.query.scope = self.query.scope.previous(),
            FormField::YearFrom => self.query.year_from = step_year(self.query.year_from, -1),
            FormField::YearTo => self.query.year_to = step_year(self.query.year_to, -1),
            FormField::Sentiment => self.query.sentiment = self.query.sentiment.previous(),
            FormField::Sort => self.query.sort = self.query.sort.next(),
        }
    }

    // ========================================================================
    // Input Mode
    // ========================================================================

    /// Entre en mode saisie, le buffer reprend le texte actuel
    pub fn start_editing(&mut self) {
        self.mode = Mode::Editing;
        self.input_buffer = self.query.text.clone();
    }

    /// Annule la saisie : le texte précédent est conservé
    pub fn cancel_editing(&mut self) {
        self.mode = Mode::Normal;
        self.input_buffer.clear();
    }

    /// Valide la saisie et lance la recherche
    ///
    /// Les espaces tapés autour du texte sont retirés ici : le moteur,
    /// lui, compare le texte tel quel.
    pub fn submit_editing(&mut self) {
        self.query.text = self.input_buffer.trim().to_string();
        self.input_buffer.clear();
        self.mode = Mode::Normal;
        self.run_search();
    }

    pub fn append_char(&mut self, c: char) {
        self.input_buffer.push(c);
    }

    pub fn backspace(&mut self) {
        self.input_buffer.pop();
    }

    pub fn is_editing(&self) -> bool {
        self.mode == Mode::Editing
    }

    // ========================================================================
    // Favoris et contexte
    // ========================================================================

    /// Copie le résultat sélectionné dans les favoris
    pub fn favorite_selected(&mut self) {
        let Some(quote) = self.results.get(self.selected_index) else {
            return;
        };

        let added = self.favorites.add(quote);
        info!(title = %quote.title, added, "Favorite requested");
        self.status = Some(if added {
            StatusMessage::new(StatusLevel::Success, "Added to favorites!")
        } else {
            StatusMessage::new(StatusLevel::Info, "Already in favorites")
        });
    }

    /// Ouvre la popup de contexte pour l'élément sélectionné de l'onglet courant
    pub fn show_context(&mut self) {
        let quote = match self.current_tab {
            Tab::Search => self.selected_result(),
            Tab::Favorites => self.selected_favorite(),
            _ => None,
        };

        if let Some(quote) = quote.cloned() {
            debug!(title = %quote.title, "Opening context");
            self.context = Some(quote);
            self.mode = Mode::Context;
        }
    }

    pub fn close_context(&mut self) {
        self.context = None;
        self.mode = Mode::Normal;
    }

    pub fn is_showing_context(&self) -> bool {
        self.mode == Mode::Context
    }

    // ========================================================================
    // Analysis
    // ========================================================================

    pub fn next_analysis(&mut self) {
        self.analysis = self.analysis.next();
    }

    pub fn previous_analysis(&mut self) {
        self.analysis = self.analysis.previous();
    }

    // ========================================================================
    // Confirmations (quit / delete)
    // ========================================================================

    pub fn request_quit(&mut self) {
        self.confirm_quit = true;
    }

    pub fn cancel_quit(&mut self) {
        self.confirm_quit = false;
    }

    pub fn is_awaiting_quit_confirmation(&self) -> bool {
        self.confirm_quit
    }

    pub fn request_delete(&mut self) {
        self.confirm_delete = true;
    }

    pub fn cancel_delete(&mut self) {
        self.confirm_delete = false;
    }

    pub fn is_awaiting_delete_confirmation(&self) -> bool {
        self.confirm_delete
    }

    /// Supprime le favori sélectionné et ajuste l'index
    pub fn delete_selected_favorite(&mut self) {
        if let Some(removed) = self.favorites.remove(self.favorite_index) {
            info!(title = %removed.title, "Favorite removed");
            if self.favorite_index >= self.favorites.len() && self.favorite_index > 0 {
                self.favorite_index -= 1;
            }
        }
        self.confirm_delete = false;
    }
}

/// Avance une année d'un pas, bornée à [MIN_YEAR, MAX_YEAR]
fn step_year(year: u16, delta: i32) -> u16 {
    let stepped = (i32::from(year) + delta).clamp(i32::from(MIN_YEAR), i32::from(MAX_YEAR));
    stepped as u16
}

// ============================================================================
// Tests unitaires
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample_corpus;
    use crate::models::{Corpus, SearchScope, SentimentFilter};
    use pretty_assertions::assert_eq;

    fn app() -> App {
        App::new(QuoteFilterEngine::new(sample_corpus()))
    }

    #[test]
    fn test_app_creation() {
        let app = app();
        assert!(app.is_running());
        assert_eq!(app.current_tab, Tab::Search);
        assert_eq!(app.query.year_from, DEFAULT_YEAR_FROM);
        assert_eq!(app.query.year_to, MAX_YEAR);
        assert!(!app.has_searched);
    }

    #[test]
    fn test_tab_cycle() {
        let mut app = app();
        app.previous_tab();
        assert_eq!(app.current_tab, Tab::About);
        app.next_tab();
        app.next_tab();
        assert_eq!(app.current_tab, Tab::Analysis);
    }

    #[test]
    fn test_browse_search_records_history() {
        let mut app = app();
        app.run_search();
        assert_eq!(app.results.len(), 5);
        assert_eq!(app.history.len(), 1);
        assert_eq!(
            app.status.as_ref().map(|s| s.text.as_str()),
            Some("Found 5 quotes matching your search")
        );
    }

    #[test]
    fn test_empty_search_not_recorded() {
        let mut app = app();
        app.query.text = "zzz".to_string();
        app.run_search();
        assert!(app.results.is_empty());
        assert!(app.history.is_empty());
        assert_eq!(app.status.as_ref().map(|s| s.level), Some(StatusLevel::Warning));
    }

    #[test]
    fn test_editing_submit_runs_search() {
        let mut app = app();
        app.start_editing();
        for c in "king".chars() {
            app.append_char(c);
        }
        app.submit_editing();

        assert_eq!(app.mode, Mode::Normal);
        assert_eq!(app.query.text, "king");
        assert_eq!(app.results.len(), 1);
        assert_eq!(app.results[0].title, "Titanic");
    }

    #[test]
    fn test_editing_submit_trims_padding() {
        let mut app = app();
        app.start_editing();
        for c in "  joker ".chars() {
            app.append_char(c);
        }
        app.submit_editing();

        assert_eq!(app.query.text, "joker");
        assert_eq!(app.results.len(), 1);

        app.start_editing();
        app.input_buffer = "   ".to_string();
        app.submit_editing();
        assert_eq!(app.query.text, "");
        assert_eq!(app.results.len(), 5);
    }

    #[test]
    fn test_editing_cancel_restores_text() {
        let mut app = app();
        app.query.text = "joker".to_string();
        app.start_editing();
        assert_eq!(app.input_buffer, "joker");
        app.backspace();
        app.append_char('X');
        app.cancel_editing();

        assert_eq!(app.query.text, "joker");
        assert!(app.input_buffer.is_empty());
        assert!(!app.is_editing());
    }

    #[test]
    fn test_form_field_cycling() {
        let mut app = app();
        app.increase_field();
        assert_eq!(app.query.scope, SearchScope::QuoteText);

        app.focus_next_field();
        app.decrease_field();
        assert_eq!(app.query.year_from, DEFAULT_YEAR_FROM - 1);

        app.focus_next_field();
        app.increase_field();
        assert_eq!(app.query.year_to, MAX_YEAR);

        app.focus_next_field();
        app.decrease_field();
        assert_eq!(app.query.sentiment, SentimentFilter::Negative);
    }

    #[test]
    fn test_step_year_is_bounded() {
        assert_eq!(step_year(MIN_YEAR, -1), MIN_YEAR);
        assert_eq!(step_year(MAX_YEAR, 1), MAX_YEAR);
        assert_eq!(step_year(2000, 1), 2001);
    }

    #[test]
    fn test_popular_search_cycles() {
        let mut app = app();
        app.next_popular_search();
        assert_eq!(app.query.text, "Love quotes");
        assert!(app.results.is_empty());

        app.next_popular_search();
        app.next_popular_search();
        assert_eq!(app.query.text, "Scarface");
        assert_eq!(app.results.len(), 1);
    }

    #[test]
    fn test_navigation_bounds() {
        let mut app = app();
        app.run_search();

        app.navigate_up();
        assert_eq!(app.selected_index, 0);
        for _ in 0..10 {
            app.navigate_down();
        }
        assert_eq!(app.selected_index, 4);
        assert_eq!(app.selected_result().map(|q| q.title.as_str()), Some("Titanic"));
    }

    #[test]
    fn test_favorite_and_delete() {
        let mut app = app();
        app.run_search();

        app.favorite_selected();
        app.favorite_selected();
        assert_eq!(app.favorites.len(), 1);
        assert_eq!(
            app.status.as_ref().map(|s| s.text.as_str()),
            Some("Already in favorites")
        );

        app.navigate_down();
        app.favorite_selected();
        assert_eq!(app.favorites.len(), 2);

        app.select_tab(Tab::Favorites);
        app.navigate_down();
        assert_eq!(app.favorite_index, 1);
        app.request_delete();
        app.delete_selected_favorite();
        assert_eq!(app.favorites.len(), 1);
        assert_eq!(app.favorite_index, 0);
        assert!(!app.is_awaiting_delete_confirmation());
    }

    #[test]
    fn test_context_popup() {
        let mut app = app();
        app.show_context();
        assert!(!app.is_showing_context());

        app.run_search();
        app.show_context();
        assert!(app.is_showing_context());
        assert_eq!(app.context.as_ref().map(|q| q.title.as_str()), Some("The Godfather"));

        app.close_context();
        assert!(app.context.is_none());
        assert_eq!(app.mode, Mode::Normal);
    }

    #[test]
    fn test_search_without_data() {
        let mut app = App::new(QuoteFilterEngine::new(Corpus::empty()));
        app.run_search();
        assert!(app.results.is_empty());
        assert!(app
            .status
            .as_ref()
            .is_some_and(|s| s.text.contains("No data available")));
    }

    #[test]
    fn test_quit_confirmation() {
        let mut app = app();
        app.request_quit();
        assert!(app.is_awaiting_quit_confirmation());
        app.cancel_quit();
        assert!(!app.is_awaiting_quit_confirmation());
        app.quit();
        assert!(!app.is_running());
    }
}
