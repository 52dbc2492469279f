// ============================================================================
// Données d'exemple
// ============================================================================
// Cinq répliques célèbres, une par film.
// ============================================================================

use tracing::debug;

use crate::models::{Corpus, Quote, Sentiment};

/// Construit le corpus d'exemple
///
/// CONCEPT RUST : Array de tuples
/// - (titre, personnage, réplique, année, sentiment, scène, tags)
/// - Converti en Vec<Quote> via un iterator
pub fn sample_corpus() -> Corpus {
    let rows = [
        (
            "The Godfather",
            "Michael Corleone",
            "I'm going to make him an offer he can't refuse.",
            1972,
            Sentiment::Neutral,
            "Business negotiation scene",
            ["mafia", "power", "negotiation"],
        ),
        (
            "The Dark Knight",
            "Joker",
            "Why so serious?",
            2008,
            Sentiment::Negative,
            "Hospital scene with Harvey Dent",
            ["chaos", "violence", "philosophy"],
        ),
        (
            "Forrest Gump",
            "Forrest Gump",
            "Life is like a box of chocolates. You never know what you're gonna get.",
            1994,
            Sentiment::Positive,
            "Bench conversation",
            ["life", "wisdom", "innocence"],
        ),
        (
            "Scarface",
            "Tony Montana",
            "Say hello to my little friend!",
            1983,
            Sentiment::Negative,
            "Final showdown",
            ["violence", "drugs", "power"],
        ),
        (
            "Titanic",
            "Jack Dawson",
            "I'm the king of the world!",
            1997,
            Sentiment::Positive,
            "Ship bow scene",
            ["love", "freedom", "ocean"],
        ),
    ];

    let quotes: Vec<Quote> = rows
        .into_iter()
        .map(|(title, character, text, year, sentiment, scene, tags)| {
            Quote::new(title, year, character, text, sentiment)
                .with_scene(scene)
                .with_tags(tags)
        })
        .collect();

    debug!(quotes = quotes.len(), "Sample corpus built");
    Corpus::new(quotes)
}
