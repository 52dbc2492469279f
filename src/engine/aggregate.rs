// ============================================================================
// Agrégation : regroupement et comptage
// ============================================================================
// Sert aux graphiques de l'onglet Analysis :
// - répartition des sentiments
// - nombre de répliques par année
// - personnages (ou films) les plus cités
// ============================================================================

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use crate::models::{ParseError, Quote, Sentiment};

/// Nombre de personnages affichés dans "Most Quoted Characters"
pub const TOP_CHARACTERS: usize = 10;

/// Champ utilisé pour regrouper les répliques
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateKey {
    Sentiment,
    Year,
    Character,
    Title,
}

impl AggregateKey {
    pub fn label(&self) -> &'static str {
        match self {
            AggregateKey::Sentiment => "sentiment",
            AggregateKey::Year => "year",
            AggregateKey::Character => "character",
            AggregateKey::Title => "title",
        }
    }
}

impl fmt::Display for AggregateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AggregateKey {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sentiment" => Ok(AggregateKey::Sentiment),
            "year" => Ok(AggregateKey::Year),
            "character" => Ok(AggregateKey::Character),
            "title" | "movie" => Ok(AggregateKey::Title),
            _ => Err(ParseError::UnknownAggregateKey(s.to_string())),
        }
    }
}

/// Compte les répliques par valeur de clé, dans l'ordre de première apparition
///
/// CONCEPT RUST : Generics avec trait bounds
/// - K doit être hashable (HashMap) et clonable
/// - F extrait la clé de chaque réplique
pub fn count_by<K, F>(quotes: &[Quote], key: F) -> Vec<(K, usize)>
where
    K: Eq + Hash + Clone,
    F: Fn(&Quote) -> K,
{
    let mut counts: Vec<(K, usize)> = Vec::new();
    let mut positions: HashMap<K, usize> = HashMap::new();

    for quote in quotes {
        let value = key(quote);
        match positions.get(&value) {
            Some(&index) => counts[index].1 += 1,
            None => {
                positions.insert(value.clone(), counts.len());
                counts.push((value, 1));
            }
        }
    }

    counts
}

/// Tri stable par nombre décroissant (égalité : premier vu devant)
fn by_frequency<K>(mut counts: Vec<(K, usize)>) -> Vec<(K, usize)> {
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Répartition des sentiments, du plus fréquent au moins fréquent
pub fn sentiment_distribution(quotes: &[Quote]) -> Vec<(Sentiment, usize)> {
    by_frequency(count_by(quotes, |q| q.sentiment))
}

/// Nombre de répliques par année, années croissantes
pub fn quotes_by_year(quotes: &[Quote]) -> Vec<(u16, usize)> {
    let mut counts = count_by(quotes, |q| q.year);
    counts.sort_by_key(|&(year, _)| year);
    counts
}

/// Les `n` personnages les plus cités
pub fn top_characters(quotes: &[Quote], n: usize) -> Vec<(String, usize)> {
    let mut counts = by_frequency(count_by(quotes, |q| q.character.clone()));
    counts.truncate(n);
    counts
}

/// Regroupement générique, valeurs converties en texte
///
/// - Year : années croissantes
/// - Sentiment / Character / Title : nombre décroissant
pub fn aggregate_by(quotes: &[Quote], key: AggregateKey) -> Vec<(String, usize)> {
    match key {
        AggregateKey::Sentiment => sentiment_distribution(quotes)
            .into_iter()
            .map(|(sentiment, count)| (sentiment.to_string(), count))
            .collect(),
        AggregateKey::Year => quotes_by_year(quotes)
            .into_iter()
            .map(|(year, count)| (year.to_string(), count))
            .collect(),
        AggregateKey::Character => by_frequency(count_by(quotes, |q| q.character.clone())),
        AggregateKey::Title => by_frequency(count_by(quotes, |q| q.title.clone())),
    }
}

// ============================================================================
// Tests
// ============================================================================
