// ============================================================================
// QuoteFinder - Library
// ============================================================================
// Expose les modules publics pour le binaire et les tests d'intégration
// ============================================================================

pub mod app;    // État du dashboard
pub mod cli;    // Ligne de commande (clap)
pub mod data;   // Corpus d'exemple
pub mod engine; // Recherche, fréquences, agrégations
pub mod models; // Structures de données
pub mod ui;     // Interface utilisateur
