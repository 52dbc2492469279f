// ============================================================================
// Module : models
// ============================================================================
// Ce module contient toutes les structures de données de l'application
// ============================================================================

pub mod corpus;  // Corpus figé + statistiques
pub mod error;   // Erreurs de parsing des filtres
pub mod query;   // Requête de recherche et ses enums
pub mod quote;   // Réplique de film
pub mod session; // Favoris et historique de la session

// Re-export des structures principales pour simplifier les imports
pub use corpus::{Corpus, CorpusStats};
pub use error::ParseError;
pub use query::{Query, SearchScope, SentimentFilter, SortOrder, MAX_YEAR, MIN_YEAR};
pub use quote::{join_tags, parse_tags, Quote, Sentiment};
pub use session::{Favorites, SearchHistory, SearchRecord};
