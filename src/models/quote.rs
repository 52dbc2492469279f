// ============================================================================
// Structure : Quote
// ============================================================================
// Représente une réplique de film (titre, année, personnage, texte, etc.)
//
// CONCEPTS RUST :
// 1. Enum avec FromStr : parser une valeur saisie par l'utilisateur
// 2. #[serde(with = "...")] : personnaliser la sérialisation d'un champ
// 3. Option<String> : champ facultatif (description de scène)
// ============================================================================

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::ParseError;

/// Sentiment attaché à une réplique (métadonnée statique, pas calculée)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// Tous les sentiments, dans l'ordre d'affichage
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative];

    /// Retourne la valeur en minuscules (ex: "positive")
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }

    /// Retourne le label pour l'affichage (ex: "Positive")
    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negative",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sentiment {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "positive" => Ok(Sentiment::Positive),
            "neutral" => Ok(Sentiment::Neutral),
            "negative" => Ok(Sentiment::Negative),
            _ => Err(ParseError::UnknownSentiment(s.to_string())),
        }
    }
}

/// Une réplique de film
///
/// CONCEPT RUST : Données immuables
/// - Une fois construite, une Quote n'est jamais modifiée
/// - Les favoris stockent une copie (Clone), pas une référence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Titre du film (ex: "The Godfather")
    pub title: String,

    /// Année de sortie (1900-2024)
    pub year: u16,

    /// Personnage qui prononce la réplique
    pub character: String,

    /// Texte de la réplique
    #[serde(rename = "quote")]
    pub text: String,

    pub sentiment: Sentiment,

    /// Tags ordonnés (sérialisés en une seule chaîne "a,b,c")
    #[serde(with = "delimited_tags")]
    pub tags: Vec<String>,

    /// Description de la scène (facultative)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scene: Option<String>,
}

impl Quote {
    /// Crée une nouvelle réplique sans tags ni scène
    pub fn new(
        title: impl Into<String>,
        year: u16,
        character: impl Into<String>,
        text: impl Into<String>,
        sentiment: Sentiment,
    ) -> Self {
        Self {
            title: title.into(),
            year,
            character: character.into(),
            text: text.into(),
            sentiment,
            tags: Vec::new(),
            scene: None,
        }
    }

    /// Ajoute les tags (builder pattern)
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Ajoute la description de scène (builder pattern)
    pub fn with_scene(mut self, scene: impl Into<String>) -> Self {
        self.scene = Some(scene.into());
        self
    }

    /// Longueur de la réplique en caractères (pas en octets)
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Tags formatés pour l'affichage : "mafia, power, negotiation"
    pub fn tags_display(&self) -> String {
        self.tags.join(", ")
    }

    /// Description de scène, ou un tiret si absente
    pub fn scene_display(&self) -> &str {
        self.scene.as_deref().unwrap_or("-")
    }
}

// ============================================================================
// Sérialisation des tags
// ============================================================================
// Dans le domaine, les tags sont une Vec<String>.
// A la frontière de sérialisation, ils deviennent une seule chaîne délimitée
// par des virgules. Le découpage/jointure ne concerne que cette couche.
// ============================================================================

/// Sépare une chaîne "a, b,c" en tags, en ignorant les morceaux vides
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(String::from)
        .collect()
}

/// Joint des tags en une seule chaîne "a,b,c"
pub fn join_tags(tags: &[String]) -> String {
    tags.join(",")
}

mod delimited_tags {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(tags: &[String], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::join_tags(tags))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(super::parse_tags(&raw))
    }
}

// ============================================================================
// Tests unitaires
// ============================================================================
