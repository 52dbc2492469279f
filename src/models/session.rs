// ============================================================================
// Session : favoris et historique de recherche
// ============================================================================
// Etat propre à la session en cours (durée de vie du processus).
// Rien n'est persisté : quitter l'application efface tout.
//
// CONCEPT : Contexte explicite
// - Ces structures appartiennent à App et sont passées au rendu
// - Pas de variable globale
// ============================================================================

use chrono::{DateTime, Local};

use crate::models::{Quote, SearchScope};

// ============================================================================
// Favoris
// ============================================================================

/// Liste des répliques favorites (copies des valeurs, pas des références)
#[derive(Debug, Clone, Default)]
pub struct Favorites {
    quotes: Vec<Quote>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ajoute une copie de la réplique si elle n'est pas déjà présente
    ///
    /// Retourne false si une réplique identique est déjà dans les favoris
    pub fn add(&mut self, quote: &Quote) -> bool {
        if self.contains(quote) {
            return false;
        }
        self.quotes.push(quote.clone());
        true
    }

    pub fn contains(&self, quote: &Quote) -> bool {
        self.quotes.iter().any(|q| q == quote)
    }

    /// Supprime le favori à l'index donné
    pub fn remove(&mut self, index: usize) -> Option<Quote> {
        (index < self.quotes.len()).then(|| self.quotes.remove(index))
    }

    pub fn get(&self, index: usize) -> Option<&Quote> {
        self.quotes.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Quote> {
        self.quotes.iter()
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }
}

// ============================================================================
// Historique de recherche
// ============================================================================

/// Une recherche effectuée pendant la session
#[derive(Debug, Clone)]
pub struct SearchRecord {
    pub query: String,
    pub scope: SearchScope,
    pub results: usize,
    pub timestamp: DateTime<Local>,
}

impl SearchRecord {
    pub fn new(query: impl Into<String>, scope: SearchScope, results: usize) -> Self {
        Self {
            query: query.into(),
            scope,
            results,
            timestamp: Local::now(),
        }
    }

    /// Horodatage formaté : "2024-11-02 14:03:59"
    pub fn timestamp_display(&self) -> String {
        self.timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

/// Historique append-only des recherches
#[derive(Debug, Clone, Default)]
pub struct SearchHistory {
    records: Vec<SearchRecord>,
}

impl SearchHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enregistre une recherche, uniquement si elle a trouvé des résultats
    pub fn record(&mut self, query: &str, scope: SearchScope, results: usize) -> bool {
        if results == 0 {
            return false;
        }
        self.records.push(SearchRecord::new(query, scope, results));
        true
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Les `n` dernières recherches, la plus récente en premier
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &SearchRecord> {
        self.records.iter().rev().take(n)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Sentiment;

    fn titanic() -> Quote {
        Quote::new(
            "Titanic",
            1997,
            "Jack Dawson",
            "I'm the king of the world!",
            Sentiment::Positive,
        )
    }

    #[test]
    fn test_favorites_add_copies_and_dedupes() {
        let mut favorites = Favorites::new();
        assert!(favorites.is_empty());

        assert!(favorites.add(&titanic()));
        assert!(!favorites.add(&titanic()));
        assert_eq!(favorites.len(), 1);
        assert!(favorites.contains(&titanic()));
    }

    #[test]
    fn test_favorites_remove() {
        let mut favorites = Favorites::new();
        favorites.add(&titanic());

        assert_eq!(favorites.remove(5), None);
        assert_eq!(favorites.remove(0), Some(titanic()));
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_history_skips_empty_searches() {
        let mut history = SearchHistory::new();
        assert!(!history.record("nothing", SearchScope::All, 0));
        assert!(history.record("king", SearchScope::All, 1));
        assert!(history.record("power", SearchScope::Title, 2));

        assert_eq!(history.len(), 2);
        let recent: Vec<&str> = history.recent(5).map(|r| r.query.as_str()).collect();
        assert_eq!(recent, vec!["power", "king"]);
    }

    #[test]
    fn test_timestamp_format() {
        let record = SearchRecord::new("king", SearchScope::All, 1);
        let formatted = record.timestamp_display();
        assert_eq!(formatted.len(), 19);
        assert_eq!(&formatted[4..5], "-");
        assert_eq!(&formatted[13..14], ":");
    }
}
