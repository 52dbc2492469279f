// ============================================================================
// Erreurs de parsing
// ============================================================================
// Seules les valeurs saisies par l'utilisateur (ligne de commande) peuvent
// être invalides. Le moteur de recherche, lui, est total.
// ============================================================================

use thiserror::Error;

/// Erreur lors de la conversion d'un texte en filtre
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown sentiment '{0}' (expected positive, neutral or negative)")]
    UnknownSentiment(String),

    #[error("unknown sentiment filter '{0}' (expected all, positive, neutral or negative)")]
    UnknownSentimentFilter(String),

    #[error("unknown search scope '{0}' (expected all, quote, title or character)")]
    UnknownScope(String),

    #[error("unknown sort order '{0}' (expected relevance or chronological)")]
    UnknownSortOrder(String),

    #[error("unknown aggregate key '{0}' (expected sentiment, year, character or title)")]
    UnknownAggregateKey(String),
}
