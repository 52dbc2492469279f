// ============================================================================
// Module : ui
// ============================================================================
// Gère toute l'interface utilisateur (Terminal User Interface)
// ============================================================================

pub mod about;     // Onglet About
pub mod analysis;  // Onglet Analysis (graphiques)
pub mod dashboard; // Layout principal, onglets, footer, popup
pub mod events;    // Gestion des événements clavier
pub mod favorites; // Onglet Favorites
pub mod search;    // Onglet Search (formulaire + cartes)
pub mod theme;     // Couleurs partagées

// Re-exports pour simplifier les imports
pub use dashboard::render;
pub use events::{Event, EventHandler};
