// ============================================================================
// Ligne de commande
// ============================================================================
// Sans sous-commande : lance le dashboard TUI.
// Avec sous-commande : interroge le moteur et affiche le résultat (texte/JSON).
// ============================================================================

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::engine::{AggregateKey, QuoteFilterEngine};
use crate::models::{Query, Quote, SearchScope, SentimentFilter, SortOrder, MAX_YEAR, MIN_YEAR};

#[derive(Parser, Debug)]
#[command(author, version, about = "Movie Quote Finder & Analyzer", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Répertoire des fichiers de log (défaut : ~/.local/share/quotefinder/logs)
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Search quotes (empty text browses everything)
    Search {
        /// Free text, matched case-insensitively
        #[arg(default_value = "")]
        text: String,

        /// Field scope: all, quote, title, character
        #[arg(short, long, default_value = "all")]
        scope: SearchScope,

        /// First year (inclusive)
        #[arg(long, default_value_t = MIN_YEAR)]
        from: u16,

        /// Last year (inclusive)
        #[arg(long, default_value_t = MAX_YEAR)]
        to: u16,

        /// Sentiment filter: all, positive, neutral, negative
        #[arg(long, default_value = "all")]
        sentiment: SentimentFilter,

        /// Result order: relevance (corpus order) or chronological
        #[arg(long, default_value = "relevance")]
        sort: SortOrder,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Top 20 most common words in quote texts
    Words {
        #[arg(long)]
        json: bool,
    },

    /// Corpus statistics, or counts grouped by a field
    Stats {
        /// Group by: sentiment, year, character, title
        #[arg(long)]
        by: Option<AggregateKey>,

        #[arg(long)]
        json: bool,
    },
}

impl Command {
    /// Construit la requête correspondant à une sous-commande `search`
    pub fn query(&self) -> Option<Query> {
        match self {
            Command::Search {
                text,
                scope,
                from,
                to,
                sentiment,
                sort,
                ..
            } => Some(
                Query::text(text.clone())
                    .with_scope(*scope)
                    .with_years(*from, *to)
                    .with_sentiment(*sentiment)
                    .with_sort(*sort),
            ),
            _ => None,
        }
    }
}

/// Paire (valeur, nombre) pour la sortie JSON
#[derive(Debug, Serialize)]
struct Count<'a> {
    value: &'a str,
    count: usize,
}

/// Exécute une sous-commande et retourne le texte à afficher
///
/// Le rendu est séparé de l'affichage pour pouvoir être testé.
pub fn run_command(engine: &QuoteFilterEngine, command: &Command) -> Result<String> {
    match command {
        Command::Search { json, .. } => {
            let query = command.query().unwrap_or_default();
            let results = engine.search(&query);
            if *json {
                serde_json::to_string_pretty(&results)
                    .context("Échec de l'encodage JSON des résultats")
            } else {
                Ok(format_quotes(&results))
            }
        }
        Command::Words { json } => {
            let words = engine.word_frequency();
            if *json {
                to_json_counts(&words)
            } else {
                Ok(format_counts(&words))
            }
        }
        Command::Stats { by: Some(key), json } => {
            let counts = engine.aggregate_by(*key);
            if *json {
                to_json_counts(&counts)
            } else {
                Ok(format_counts(&counts))
            }
        }
        Command::Stats { by: None, json } => {
            let stats = engine.stats();
            if *json {
                serde_json::to_string_pretty(&stats)
                    .context("Échec de l'encodage JSON des statistiques")
            } else {
                Ok([
                    format!("Total Quotes: {}", stats.total_quotes),
                    format!("Unique Movies: {}", stats.unique_movies),
                    format!("Unique Characters: {}", stats.unique_characters),
                    format!("Average Quote Length: {:.0} chars", stats.average_length),
                ]
                .join("\n"))
            }
        }
    }
}

fn to_json_counts(counts: &[(String, usize)]) -> Result<String> {
    let rows: Vec<Count> = counts
        .iter()
        .map(|(value, count)| Count {
            value,
            count: *count,
        })
        .collect();
    serde_json::to_string_pretty(&rows).context("Échec de l'encodage JSON des comptages")
}

fn format_counts(counts: &[(String, usize)]) -> String {
    let width = counts.iter().map(|(v, _)| v.chars().count()).max().unwrap_or(0);
    counts
        .iter()
        .map(|(value, count)| format!("{value:<width$}  {count}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_quotes(quotes: &[&Quote]) -> String {
    if quotes.is_empty() {
        return "No quotes found matching your criteria.".to_string();
    }

    let mut lines = vec![format!("Found {} quotes matching your search", quotes.len())];
    for quote in quotes {
        lines.push(String::new());
        lines.push(format!("\"{}\"", quote.text));
        lines.push(format!("  {} in {} ({})", quote.character, quote.title, quote.year));
        lines.push(format!(
            "  Sentiment: {}  Tags: {}",
            quote.sentiment.label(),
            quote.tags_display()
        ));
    }
    lines.join("\n")
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample_corpus;
    use pretty_assertions::assert_eq;

    fn engine() -> QuoteFilterEngine {
        QuoteFilterEngine::new(sample_corpus())
    }

    #[test]
    fn test_no_subcommand_means_tui() {
        let cli = Cli::try_parse_from(["quotefinder"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.log_dir.is_none());
    }

    #[test]
    fn test_parse_search_arguments() {
        let cli = Cli::try_parse_from([
            "quotefinder",
            "search",
            "king",
            "--scope",
            "quote",
            "--from",
            "1990",
            "--sentiment",
            "positive",
        ])
        .unwrap();

        let query = cli.command.unwrap().query().unwrap();
        assert_eq!(query.text, "king");
        assert_eq!(query.scope, SearchScope::QuoteText);
        assert_eq!(query.year_from, 1990);
        assert_eq!(query.year_to, MAX_YEAR);
        assert_eq!(query.sentiment, SentimentFilter::Positive);
    }

    #[test]
    fn test_invalid_scope_is_rejected() {
        assert!(Cli::try_parse_from(["quotefinder", "search", "x", "--scope", "tags"]).is_err());
    }

    #[test]
    fn test_search_text_output() {
        let command = Command::Search {
            text: "king".to_string(),
            scope: SearchScope::All,
            from: MIN_YEAR,
            to: MAX_YEAR,
            sentiment: SentimentFilter::All,
            sort: SortOrder::Relevance,
            json: false,
        };

        let output = run_command(&engine(), &command).unwrap();
        assert!(output.starts_with("Found 1 quotes matching your search"));
        assert!(output.contains("Jack Dawson in Titanic (1997)"));
    }

    #[test]
    fn test_search_json_output() {
        let cli = Cli::try_parse_from([
            "quotefinder",
            "search",
            "--from",
            "1980",
            "--to",
            "1996",
            "--json",
        ])
        .unwrap();
        let output = run_command(&engine(), &cli.command.unwrap()).unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        let titles: Vec<&str> = value
            .as_array()
            .unwrap()
            .iter()
            .map(|q| q["title"].as_str().unwrap())
            .collect();
        assert_eq!(titles, vec!["Forrest Gump", "Scarface"]);
        assert_eq!(value[1]["tags"], "violence,drugs,power");
    }

    #[test]
    fn test_stats_by_year() {
        let cli = Cli::try_parse_from(["quotefinder", "stats", "--by", "year"]).unwrap();
        let output = run_command(&engine(), &cli.command.unwrap()).unwrap();
        assert_eq!(output.lines().next(), Some("1972  1"));
        assert_eq!(output.lines().count(), 5);
    }

    #[test]
    fn test_stats_summary() {
        let cli = Cli::try_parse_from(["quotefinder", "stats"]).unwrap();
        let output = run_command(&engine(), &cli.command.unwrap()).unwrap();
        assert!(output.contains("Total Quotes: 5"));
        assert!(output.contains("Unique Movies: 5"));
    }

    #[test]
    fn test_words_json() {
        let cli = Cli::try_parse_from(["quotefinder", "words", "--json"]).unwrap();
        let output = run_command(&engine(), &cli.command.unwrap()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value[0]["value"], "you");
        assert_eq!(value[0]["count"], 2);
        assert_eq!(value.as_array().map(Vec::len), Some(20));
    }

    #[test]
    fn test_global_log_dir() {
        let cli = Cli::try_parse_from(["quotefinder", "words", "--log-dir", "/tmp/qf"]).unwrap();
        assert_eq!(cli.log_dir, Some(PathBuf::from("/tmp/qf")));
    }
}
