// ============================================================================
// Module : data
// ============================================================================
// Source des répliques. Le corpus est défini dans le programme au démarrage :
// pas de fichier, pas de chargement, pas de sauvegarde.
// ============================================================================

pub mod sample; // Jeu d'exemple de 5 films

pub use sample::sample_corpus;
