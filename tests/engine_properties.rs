// ============================================================================
// Tests d'intégration : moteur de recherche sur le corpus d'exemple
// ============================================================================
// Passe uniquement par l'API publique de la bibliothèque.
// ============================================================================

use pretty_assertions::assert_eq;
use rstest::rstest;

use quotefinder::data::sample_corpus;
use quotefinder::engine::{AggregateKey, QuoteFilterEngine, TOP_WORDS};
use quotefinder::models::{
    Corpus, Query, SearchScope, SentimentFilter, SortOrder, MAX_YEAR, MIN_YEAR,
};

fn engine() -> QuoteFilterEngine {
    QuoteFilterEngine::new(sample_corpus())
}

fn titles(engine: &QuoteFilterEngine, query: &Query) -> Vec<String> {
    engine
        .search(query)
        .into_iter()
        .map(|quote| quote.title.clone())
        .collect()
}

#[test]
fn test_king_finds_titanic_only() {
    assert_eq!(titles(&engine(), &Query::text("king")), vec!["Titanic"]);
}

#[test]
fn test_year_window_keeps_corpus_order() {
    let query = Query::new().with_years(1980, 1996);
    assert_eq!(titles(&engine(), &query), vec!["Forrest Gump", "Scarface"]);
}

#[test]
fn test_tags_are_never_searched() {
    let engine = engine();
    let quote_only = Query::text("power").with_scope(SearchScope::QuoteText);
    assert!(engine.search(&quote_only).is_empty());

    let everywhere = Query::text("power");
    assert!(engine.search(&everywhere).is_empty());
}

#[rstest]
#[case("GODFATHER", SearchScope::Title, 1)]
#[case("joker", SearchScope::Character, 1)]
#[case("joker", SearchScope::QuoteText, 0)]
#[case("forrest", SearchScope::All, 1)]
#[case("the", SearchScope::All, 3)]
#[case("  the  ", SearchScope::All, 0)]
fn test_scope_and_case(#[case] text: &str, #[case] scope: SearchScope, #[case] expected: usize) {
    let query = Query::text(text).with_scope(scope);
    assert_eq!(engine().search(&query).len(), expected);
}

#[test]
fn test_whitespace_only_text_matches_nothing() {
    let engine = engine();
    assert!(engine.search(&Query::text("   ")).is_empty());
    assert_eq!(engine.search(&Query::text("")).len(), engine.corpus().len());
}

#[test]
fn test_results_are_subset_and_ordered() {
    let engine = engine();
    for sentiment in SentimentFilter::ALL {
        let query = Query::new().with_sentiment(sentiment);
        let results = engine.search(&query);

        let positions: Vec<usize> = results
            .iter()
            .map(|quote| {
                engine
                    .corpus()
                    .iter()
                    .position(|q| q == *quote)
                    .expect("result must come from the corpus")
            })
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(results.iter().all(|q| sentiment.matches(q.sentiment)));
    }
}

#[test]
fn test_inverted_year_range_is_empty() {
    let query = Query::new().with_years(2000, 1990);
    assert!(engine().search(&query).is_empty());
}

#[test]
fn test_chronological_sort() {
    let query = Query::new().with_sort(SortOrder::Chronological);
    let years: Vec<u16> = engine().search(&query).iter().map(|q| q.year).collect();
    assert_eq!(years, vec![1972, 1983, 1994, 1997, 2008]);
}

#[test]
fn test_word_frequency_bounds() {
    let words = engine().word_frequency();
    assert_eq!(words.len(), TOP_WORDS);
    assert_eq!(words[0], ("you".to_string(), 2));
    assert!(words.windows(2).all(|w| w[0].1 >= w[1].1));
    assert!(words.iter().all(|(word, _)| word.len() > 2));
}

#[test]
fn test_aggregations_sum_to_corpus_size() {
    let engine = engine();
    for key in [
        AggregateKey::Sentiment,
        AggregateKey::Year,
        AggregateKey::Character,
        AggregateKey::Title,
    ] {
        let total: usize = engine.aggregate_by(key).iter().map(|(_, count)| count).sum();
        assert_eq!(total, engine.corpus().len(), "key {key}");
    }
}

#[test]
fn test_empty_corpus_is_quiet() {
    let engine = QuoteFilterEngine::new(Corpus::empty());
    assert!(!engine.has_data());
    assert!(engine.search(&Query::new().with_years(MIN_YEAR, MAX_YEAR)).is_empty());
    assert!(engine.word_frequency().is_empty());
    assert!(engine.aggregate_by(AggregateKey::Year).is_empty());
    assert_eq!(engine.stats().total_quotes, 0);
}
