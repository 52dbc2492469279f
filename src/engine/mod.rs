// ============================================================================
// Module : engine
// ============================================================================
// Moteur de recherche/filtrage des répliques.
// Fonctions pures : mêmes entrées, mêmes sorties, aucun effet de bord.
// ============================================================================

pub mod aggregate; // Regroupement et comptage
pub mod search;    // Filtrage par requête
pub mod words;     // Fréquence des mots

pub use aggregate::{
    aggregate_by, count_by, quotes_by_year, sentiment_distribution, top_characters, AggregateKey,
    TOP_CHARACTERS,
};
pub use search::{search, sort_results};
pub use words::{word_frequency, STOP_WORDS, TOP_WORDS};

use crate::models::{Corpus, CorpusStats, Query, Quote, Sentiment};

/// Possède le corpus et répond aux requêtes
///
/// CONCEPT : Façade
/// - L'UI et la ligne de commande ne voient que cette structure
/// - Chaque méthode délègue à une fonction pure du module
#[derive(Debug, Clone)]
pub struct QuoteFilterEngine {
    corpus: Corpus,
}

impl QuoteFilterEngine {
    pub fn new(corpus: Corpus) -> Self {
        Self { corpus }
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// Vrai si aucune donnée n'est disponible (l'UI affiche "no data")
    pub fn has_data(&self) -> bool {
        !self.corpus.is_empty()
    }

    /// Résultats de la requête, triés selon `query.sort`
    pub fn search(&self, query: &Query) -> Vec<&Quote> {
        let mut results = search(self.corpus.quotes(), query);
        sort_results(&mut results, query.sort);
        results
    }

    pub fn word_frequency(&self) -> Vec<(String, usize)> {
        word_frequency(self.corpus.quotes())
    }

    pub fn aggregate_by(&self, key: AggregateKey) -> Vec<(String, usize)> {
        aggregate_by(self.corpus.quotes(), key)
    }

    pub fn sentiment_distribution(&self) -> Vec<(Sentiment, usize)> {
        sentiment_distribution(self.corpus.quotes())
    }

    pub fn quotes_by_year(&self) -> Vec<(u16, usize)> {
        quotes_by_year(self.corpus.quotes())
    }

    pub fn top_characters(&self, n: usize) -> Vec<(String, usize)> {
        top_characters(self.corpus.quotes(), n)
    }

    pub fn stats(&self) -> CorpusStats {
        self.corpus.stats()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample_corpus;
    use crate::models::SortOrder;

    #[test]
    fn test_engine_applies_sort_after_filter() {
        let engine = QuoteFilterEngine::new(sample_corpus());
        let query = Query::new().with_sort(SortOrder::Chronological);
        let titles: Vec<&str> = engine.search(&query).iter().map(|q| q.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["The Godfather", "Scarface", "Forrest Gump", "Titanic", "The Dark Knight"]
        );
    }

    #[test]
    fn test_engine_without_data() {
        let engine = QuoteFilterEngine::new(Corpus::empty());
        assert!(!engine.has_data());
        assert!(engine.search(&Query::new()).is_empty());
        assert!(engine.word_frequency().is_empty());
        assert!(engine.quotes_by_year().is_empty());
    }
}
