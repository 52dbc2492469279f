// ============================================================================
// Recherche et filtrage
// ============================================================================
// Applique les prédicats d'une Query au corpus, dans l'ordre :
//   (a) année dans [from, to]
//   (b) sentiment == filtre (ou filtre == All)
//   (c) texte libre contenu (insensible à la casse) dans le(s) champ(s) ciblé(s)
//
// Le résultat est une sous-séquence du corpus : même ordre relatif,
// aucune copie, aucun score.
// ============================================================================

use tracing::{debug, instrument};

use crate::models::{Query, Quote, SearchScope, SortOrder};

/// Filtre le corpus selon la requête
///
/// CONCEPT RUST : Lifetimes
/// - Les références retournées vivent aussi longtemps que le corpus ('a)
/// - Le corpus n'est jamais modifié
///
/// Un texte vide ("browse") laisse passer tout ce qui satisfait (a) et (b).
#[instrument(level = "debug", skip(corpus), fields(corpus = corpus.len()))]
pub fn search<'a>(corpus: &'a [Quote], query: &Query) -> Vec<&'a Quote> {
    let Some((from, to)) = query.year_range() else {
        debug!("Inverted year range, nothing to match");
        return Vec::new();
    };

    let needle = query.text.to_lowercase();

    let results: Vec<&Quote> = corpus
        .iter()
        .filter(|quote| (from..=to).contains(&quote.year))
        .filter(|quote| query.sentiment.matches(quote.sentiment))
        .filter(|quote| query.is_browse() || matches_scope(quote, &needle, query.scope))
        .collect();

    debug!(results = results.len(), "Search done");
    results
}

/// Test de contenance dans le(s) champ(s) du scope
///
/// `needle` doit déjà être en minuscules. Les tags ne sont jamais inspectés.
fn matches_scope(quote: &Quote, needle: &str, scope: SearchScope) -> bool {
    let contains = |field: &str| field.to_lowercase().contains(needle);

    match scope {
        SearchScope::All => {
            contains(&quote.text) || contains(&quote.title) || contains(&quote.character)
        }
        SearchScope::QuoteText => contains(&quote.text),
        SearchScope::Title => contains(&quote.title),
        SearchScope::Character => contains(&quote.character),
    }
}

/// Ordonne des résultats pour l'affichage
///
/// - Relevance : aucun tri (l'ordre du corpus est conservé)
/// - Chronological : tri stable par année croissante
pub fn sort_results(results: &mut [&Quote], order: SortOrder) {
    match order {
        SortOrder::Relevance => {}
        SortOrder::Chronological => results.sort_by_key(|quote| quote.year),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample_corpus;
    use crate::models::{Sentiment, SentimentFilter};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn titles(results: &[&Quote]) -> Vec<String> {
        results.iter().map(|q| q.title.clone()).collect()
    }

    #[test]
    fn test_browse_returns_whole_corpus_in_order() {
        let corpus = sample_corpus();
        let results = search(corpus.quotes(), &Query::new());
        assert_eq!(results.len(), corpus.len());
        assert!(results.iter().zip(corpus.iter()).all(|(a, b)| *a == b));
    }

    #[test]
    fn test_king_matches_titanic() {
        let corpus = sample_corpus();
        let results = search(corpus.quotes(), &Query::text("king"));
        assert_eq!(titles(&results), vec!["Titanic"]);
        assert_eq!(results[0].text, "I'm the king of the world!");
    }

    #[test]
    fn test_year_range_preserves_corpus_order() {
        let corpus = sample_corpus();
        let results = search(corpus.quotes(), &Query::new().with_years(1980, 1996));
        assert_eq!(titles(&results), vec!["Forrest Gump", "Scarface"]);
    }

    #[test]
    fn test_tags_are_not_searched() {
        let corpus = sample_corpus();
        let query = Query::text("power").with_scope(SearchScope::QuoteText);
        assert!(search(corpus.quotes(), &query).is_empty());

        // Même en scope All : "power" n'apparait que dans les tags
        assert!(search(corpus.quotes(), &Query::text("power")).is_empty());
    }

    #[rstest]
    #[case("GODFATHER", SearchScope::Title, vec!["The Godfather"])]
    #[case("godfather", SearchScope::QuoteText, vec![])]
    #[case("gump", SearchScope::Character, vec!["Forrest Gump"])]
    #[case("gump", SearchScope::All, vec!["Forrest Gump"])]
    #[case("the", SearchScope::Title, vec!["The Godfather", "The Dark Knight"])]
    #[case("  joker  ", SearchScope::Character, vec![])]
    #[case("   ", SearchScope::All, vec![])]
    fn test_scope_containment(
        #[case] text: &str,
        #[case] scope: SearchScope,
        #[case] expected: Vec<&str>,
    ) {
        let corpus = sample_corpus();
        let results = search(corpus.quotes(), &Query::text(text).with_scope(scope));
        assert_eq!(titles(&results), expected);
    }

    #[test]
    fn test_sentiment_filter() {
        let corpus = sample_corpus();
        let query = Query::new().with_sentiment(SentimentFilter::Negative);
        let results = search(corpus.quotes(), &query);
        assert_eq!(titles(&results), vec!["The Dark Knight", "Scarface"]);
        assert!(results.iter().all(|q| q.sentiment == Sentiment::Negative));
    }

    #[test]
    fn test_inverted_years_give_empty_result() {
        let corpus = sample_corpus();
        assert!(search(corpus.quotes(), &Query::new().with_years(2000, 1950)).is_empty());
    }

    #[test]
    fn test_years_outside_bounds_are_clamped() {
        let corpus = sample_corpus();
        let results = search(corpus.quotes(), &Query::new().with_years(0, 9999));
        assert_eq!(results.len(), 5);
    }

    #[test]
    fn test_empty_corpus_gives_empty_result() {
        assert!(search(&[], &Query::text("king")).is_empty());
        assert!(search(&[], &Query::new()).is_empty());
    }

    #[test]
    fn test_search_is_idempotent() {
        let corpus = sample_corpus();
        let query = Query::text("i'm").with_sentiment(SentimentFilter::All);
        let first = search(corpus.quotes(), &query);
        let second = search(corpus.quotes(), &query);
        assert_eq!(first, second);
        assert_eq!(titles(&first), vec!["The Godfather", "Titanic"]);
    }

    #[test]
    fn test_every_result_satisfies_predicates() {
        let corpus = sample_corpus();
        let query = Query::text("o")
            .with_years(1975, 2010)
            .with_sentiment(SentimentFilter::Positive);

        for quote in search(corpus.quotes(), &query) {
            assert!((1975..=2010).contains(&quote.year));
            assert_eq!(quote.sentiment, Sentiment::Positive);
            let haystack = format!("{} {} {}", quote.text, quote.title, quote.character);
            assert!(haystack.to_lowercase().contains('o'));
        }
    }

    #[test]
    fn test_relevance_sort_is_noop() {
        let corpus = sample_corpus();
        let mut results = search(corpus.quotes(), &Query::new());
        let before = titles(&results);
        sort_results(&mut results, SortOrder::Relevance);
        assert_eq!(titles(&results), before);
    }

    #[test]
    fn test_chronological_sort() {
        let corpus = sample_corpus();
        let mut results = search(corpus.quotes(), &Query::new());
        sort_results(&mut results, SortOrder::Chronological);
        let years: Vec<u16> = results.iter().map(|q| q.year).collect();
        assert_eq!(years, vec![1972, 1983, 1994, 1997, 2008]);
    }
}
