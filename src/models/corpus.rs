// ============================================================================
// Structure : Corpus
// ============================================================================
// Collection ordonnée et figée de répliques, construite au démarrage.
// Aucune identité en dehors de la position dans la liste.
// ============================================================================

use std::collections::HashSet;

use serde::Serialize;

use crate::models::Quote;

/// Le corpus de répliques (lecture seule après construction)
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    quotes: Vec<Quote>,
}

/// Statistiques globales du corpus ("Database Statistics")
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorpusStats {
    pub total_quotes: usize,
    pub unique_movies: usize,
    pub unique_characters: usize,
    /// Longueur moyenne en caractères (0.0 si corpus vide)
    pub average_length: f64,
}

impl Corpus {
    pub fn new(quotes: Vec<Quote>) -> Self {
        Self { quotes }
    }

    /// Corpus vide (source de données indisponible)
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Quote> {
        self.quotes.iter()
    }

    /// Calcule les statistiques affichées sous les graphiques
    ///
    /// CONCEPT RUST : HashSet<&str>
    /// - Emprunte les titres au lieu de les cloner
    /// - len() donne le nombre de valeurs distinctes
    pub fn stats(&self) -> CorpusStats {
        let unique_movies: HashSet<&str> = self.quotes.iter().map(|q| q.title.as_str()).collect();
        let unique_characters: HashSet<&str> =
            self.quotes.iter().map(|q| q.character.as_str()).collect();

        let average_length = if self.quotes.is_empty() {
            0.0
        } else {
            let total: usize = self.quotes.iter().map(Quote::char_len).sum();
            total as f64 / self.quotes.len() as f64
        };

        CorpusStats {
            total_quotes: self.quotes.len(),
            unique_movies: unique_movies.len(),
            unique_characters: unique_characters.len(),
            average_length,
        }
    }
}

impl From<Vec<Quote>> for Corpus {
    fn from(quotes: Vec<Quote>) -> Self {
        Self::new(quotes)
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a Quote;
    type IntoIter = std::slice::Iter<'a, Quote>;

    fn into_iter(self) -> Self::IntoIter {
        self.quotes.iter()
    }
}

// ============================================================================
// Tests
// ============================================================================
