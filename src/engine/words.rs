// ============================================================================
// Fréquence des mots
// ============================================================================
// Découpe toutes les répliques en mots (\b\w+\b), passe en minuscules,
// retire les mots de 2 lettres ou moins et les mots vides, puis compte.
//
// Pas de NLP : simple comptage, comme un "most common" classique.
// ============================================================================

use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::Quote;

/// Nombre maximum d'entrées retournées
pub const TOP_WORDS: usize = 20;

/// Mots vides ignorés
pub const STOP_WORDS: [&str; 21] = [
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "is",
    "are", "was", "were", "be", "been", "being",
];

lazy_static! {
    static ref WORD: Regex = Regex::new(r"\b\w+\b").expect("word regex is valid");
}

/// Vérifie si un mot (déjà en minuscules) doit être compté
fn is_counted(word: &str) -> bool {
    word.chars().count() > 2 && !STOP_WORDS.contains(&word)
}

/// Les TOP_WORDS mots les plus fréquents, par nombre décroissant
///
/// CONCEPT : Ordre stable
/// - Les mots sont indexés dans l'ordre de première apparition
/// - sort_by est stable : à égalité, le premier vu reste devant
pub fn word_frequency(quotes: &[Quote]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for quote in quotes {
        let lowered = quote.text.to_lowercase();
        for word in WORD.find_iter(&lowered).map(|m| m.as_str()) {
            if !is_counted(word) {
                continue;
            }
            match positions.get(word) {
                Some(&index) => counts[index].1 += 1,
                None => {
                    positions.insert(word.to_string(), counts.len());
                    counts.push((word.to_string(), 1));
                }
            }
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(TOP_WORDS);
    counts
}

// ============================================================================
// Tests
// ============================================================================
