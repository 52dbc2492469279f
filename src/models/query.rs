// ============================================================================
// Structure : Query
// ============================================================================
// Une requête de recherche : texte libre, champ ciblé, plage d'années,
// filtre de sentiment et ordre d'affichage.
//
// CONCEPT : Cycle d'états
// - Chaque enum expose next() / previous() en bouclant sur ses variantes
// - Le formulaire du TUI fait défiler les valeurs avec ←/→
// ============================================================================

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::{ParseError, Sentiment};

/// Première année acceptée par les filtres
pub const MIN_YEAR: u16 = 1900;

/// Dernière année acceptée par les filtres
pub const MAX_YEAR: u16 = 2024;

// ============================================================================
// Enum : SearchScope
// ============================================================================

/// Champ(s) dans le(s)quel(s) chercher le texte libre
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchScope {
    /// Réplique OU titre OU personnage (jamais les tags)
    #[default]
    All,
    /// Texte de la réplique uniquement
    QuoteText,
    /// Titre du film uniquement
    Title,
    /// Personnage uniquement
    Character,
}

impl SearchScope {
    pub const ALL: [SearchScope; 4] = [
        SearchScope::All,
        SearchScope::QuoteText,
        SearchScope::Title,
        SearchScope::Character,
    ];

    /// Retourne le label pour l'affichage
    pub fn label(&self) -> &'static str {
        match self {
            SearchScope::All => "All Fields",
            SearchScope::QuoteText => "Quotes Only",
            SearchScope::Title => "Movie Titles",
            SearchScope::Character => "Characters",
        }
    }

    pub fn next(&self) -> Self {
        cycle(&Self::ALL, self, 1)
    }

    pub fn previous(&self) -> Self {
        cycle(&Self::ALL, self, Self::ALL.len() - 1)
    }
}

impl fmt::Display for SearchScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SearchScope {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" | "all-fields" => Ok(SearchScope::All),
            "quote" | "quotes" | "text" => Ok(SearchScope::QuoteText),
            "title" | "titles" | "movie" => Ok(SearchScope::Title),
            "character" | "characters" => Ok(SearchScope::Character),
            _ => Err(ParseError::UnknownScope(s.to_string())),
        }
    }
}

// ============================================================================
// Enum : SentimentFilter
// ============================================================================

/// Filtre de sentiment (All laisse tout passer)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentFilter {
    #[default]
    All,
    Positive,
    Neutral,
    Negative,
}

impl SentimentFilter {
    pub const ALL: [SentimentFilter; 4] = [
        SentimentFilter::All,
        SentimentFilter::Positive,
        SentimentFilter::Neutral,
        SentimentFilter::Negative,
    ];

    /// Vérifie si un sentiment passe le filtre
    pub fn matches(&self, sentiment: Sentiment) -> bool {
        match self {
            SentimentFilter::All => true,
            SentimentFilter::Positive => sentiment == Sentiment::Positive,
            SentimentFilter::Neutral => sentiment == Sentiment::Neutral,
            SentimentFilter::Negative => sentiment == Sentiment::Negative,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SentimentFilter::All => "All",
            SentimentFilter::Positive => "Positive",
            SentimentFilter::Neutral => "Neutral",
            SentimentFilter::Negative => "Negative",
        }
    }

    pub fn next(&self) -> Self {
        cycle(&Self::ALL, self, 1)
    }

    pub fn previous(&self) -> Self {
        cycle(&Self::ALL, self, Self::ALL.len() - 1)
    }
}

impl From<Sentiment> for SentimentFilter {
    fn from(sentiment: Sentiment) -> Self {
        match sentiment {
            Sentiment::Positive => SentimentFilter::Positive,
            Sentiment::Neutral => SentimentFilter::Neutral,
            Sentiment::Negative => SentimentFilter::Negative,
        }
    }
}

impl FromStr for SentimentFilter {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(SentimentFilter::All);
        }
        s.parse::<Sentiment>()
            .map(SentimentFilter::from)
            .map_err(|_| ParseError::UnknownSentimentFilter(s.to_string()))
    }
}

// ============================================================================
// Enum : SortOrder
// ============================================================================

/// Ordre d'affichage des résultats
///
/// Relevance n'effectue aucun tri : il n'existe pas de score de pertinence,
/// l'ordre du corpus est conservé.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Relevance,
    /// Tri stable par année croissante
    Chronological,
}

impl SortOrder {
    pub const ALL: [SortOrder; 2] = [SortOrder::Relevance, SortOrder::Chronological];

    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Relevance => "Relevance",
            SortOrder::Chronological => "Year",
        }
    }

    pub fn next(&self) -> Self {
        cycle(&Self::ALL, self, 1)
    }
}

impl FromStr for SortOrder {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "relevance" => Ok(SortOrder::Relevance),
            "chronological" | "year" => Ok(SortOrder::Chronological),
            _ => Err(ParseError::UnknownSortOrder(s.to_string())),
        }
    }
}

/// Avance de `step` positions dans un tableau de variantes, en bouclant
fn cycle<T: Copy + PartialEq>(values: &[T], current: &T, step: usize) -> T {
    let index = values.iter().position(|v| v == current).unwrap_or(0);
    values[(index + step) % values.len()]
}

// ============================================================================
// Structure : Query
// ============================================================================

/// Requête de recherche sur le corpus
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    /// Texte libre (vide = mode "browse")
    pub text: String,
    pub scope: SearchScope,
    /// Borne basse incluse
    pub year_from: u16,
    /// Borne haute incluse
    pub year_to: u16,
    pub sentiment: SentimentFilter,
    pub sort: SortOrder,
}

impl Query {
    /// Requête "browse" : aucun texte, toutes les années, tous les sentiments
    pub fn new() -> Self {
        Self {
            text: String::new(),
            scope: SearchScope::All,
            year_from: MIN_YEAR,
            year_to: MAX_YEAR,
            sentiment: SentimentFilter::All,
            sort: SortOrder::Relevance,
        }
    }

    /// Requête texte sur tous les champs
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::new()
        }
    }

    pub fn with_scope(mut self, scope: SearchScope) -> Self {
        self.scope = scope;
        self
    }

    pub fn with_years(mut self, from: u16, to: u16) -> Self {
        self.year_from = from;
        self.year_to = to;
        self
    }

    pub fn with_sentiment(mut self, sentiment: SentimentFilter) -> Self {
        self.sentiment = sentiment;
        self
    }

    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    /// Plage d'années bornée à [MIN_YEAR, MAX_YEAR]
    ///
    /// Retourne None si from > to après bornage (aucun résultat possible)
    pub fn year_range(&self) -> Option<(u16, u16)> {
        let from = self.year_from.clamp(MIN_YEAR, MAX_YEAR);
        let to = self.year_to.clamp(MIN_YEAR, MAX_YEAR);
        (from <= to).then_some((from, to))
    }

    /// Un texte vide laisse passer toutes les répliques ("browse")
    pub fn is_browse(&self) -> bool {
        self.text.is_empty()
    }
}

impl Default for Query {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_default_query_is_browse_mode() {
        let query = Query::default();
        assert!(query.is_browse());
        assert_eq!(query.year_range(), Some((MIN_YEAR, MAX_YEAR)));
        assert_eq!(query.scope, SearchScope::All);
        assert_eq!(query.sentiment, SentimentFilter::All);
    }

    #[test]
    fn test_whitespace_text_is_not_browse() {
        assert!(!Query::text("   ").is_browse());
    }

    #[test]
    fn test_year_range_is_clamped() {
        let query = Query::new().with_years(1800, 3000);
        assert_eq!(query.year_range(), Some((1900, 2024)));
    }

    #[test]
    fn test_inverted_year_range_is_empty() {
        let query = Query::new().with_years(2000, 1990);
        assert_eq!(query.year_range(), None);
    }

    #[rstest]
    #[case("all", SearchScope::All)]
    #[case("Quotes", SearchScope::QuoteText)]
    #[case("movie", SearchScope::Title)]
    #[case("CHARACTER", SearchScope::Character)]
    fn test_scope_from_str(#[case] input: &str, #[case] expected: SearchScope) {
        assert_eq!(input.parse::<SearchScope>().unwrap(), expected);
    }

    #[test]
    fn test_scope_from_str_rejects_tags() {
        assert_eq!(
            "tags".parse::<SearchScope>(),
            Err(ParseError::UnknownScope("tags".to_string()))
        );
    }

    #[rstest]
    #[case("all", SentimentFilter::All)]
    #[case("Positive", SentimentFilter::Positive)]
    #[case("neutral", SentimentFilter::Neutral)]
    #[case("negative", SentimentFilter::Negative)]
    fn test_sentiment_filter_from_str(#[case] input: &str, #[case] expected: SentimentFilter) {
        assert_eq!(input.parse::<SentimentFilter>().unwrap(), expected);
    }

    #[test]
    fn test_sentiment_filter_matches() {
        assert!(SentimentFilter::All.matches(Sentiment::Negative));
        assert!(SentimentFilter::Positive.matches(Sentiment::Positive));
        assert!(!SentimentFilter::Positive.matches(Sentiment::Neutral));
    }

    #[test]
    fn test_scope_cycle() {
        assert_eq!(SearchScope::All.next(), SearchScope::QuoteText);
        assert_eq!(SearchScope::Character.next(), SearchScope::All);
        assert_eq!(SearchScope::All.previous(), SearchScope::Character);
    }

    #[test]
    fn test_sentiment_filter_cycle() {
        assert_eq!(SentimentFilter::Negative.next(), SentimentFilter::All);
        assert_eq!(SentimentFilter::All.previous(), SentimentFilter::Negative);
    }

    #[test]
    fn test_sort_order_cycle() {
        assert_eq!(SortOrder::Relevance.next(), SortOrder::Chronological);
        assert_eq!(SortOrder::Chronological.next(), SortOrder::Relevance);
        assert_eq!("year".parse::<SortOrder>().unwrap(), SortOrder::Chronological);
    }
}
