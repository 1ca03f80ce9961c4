//! Fundamental types used by this crate.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Grammatical gender of a German noun phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Masculine,
    Feminine,
    Neuter,
    Unknown,
}

impl Gender {
    /// Classifies a German phrase by its first token: "der" is masculine, "die" feminine,
    /// "das" neuter. Everything else is [Gender::Unknown]. The rest of the phrase is never inspected.
    pub fn from_article(phrase: &str) -> Self {
        match phrase.split_whitespace().next() {
            Some("der") => Gender::Masculine,
            Some("die") => Gender::Feminine,
            Some("das") => Gender::Neuter,
            _ => Gender::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Masculine => "masculine",
            Gender::Feminine => "feminine",
            Gender::Neuter => "neuter",
            Gender::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Grammatical case. The input catalog is always in the nominative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Case {
    Nominative,
    Accusative,
    Dative,
}

impl Case {
    /// The gettext message context used for this case in the output catalog.
    pub fn context(&self) -> &'static str {
        match self {
            Case::Nominative => "nom",
            Case::Accusative => "akk",
            Case::Dative => "dat",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Case::Nominative => "nominative",
            Case::Accusative => "accusative",
            Case::Dative => "dative",
        }
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a phrase is rendered with a definite ("the", "der") or indefinite ("a", "ein") article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Article {
    Definite,
    Indefinite,
}

impl Article {
    pub fn as_str(&self) -> &'static str {
        match self {
            Article::Definite => "definite",
            Article::Indefinite => "indefinite",
        }
    }
}

impl fmt::Display for Article {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One (case, article) combination. Every catalog entry is expanded once per key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeclensionKey {
    pub case: Case,
    pub article: Article,
}

impl DeclensionKey {
    pub fn new(case: Case, article: Article) -> Self {
        DeclensionKey { case, article }
    }

    /// All six keys in the order the passes are written: definite first, then indefinite,
    /// each going nominative, accusative, dative.
    pub fn all() -> Vec<DeclensionKey> {
        let mut keys = Vec::with_capacity(6);
        for article in &[Article::Definite, Article::Indefinite] {
            for case in &[Case::Nominative, Case::Accusative, Case::Dative] {
                keys.push(DeclensionKey::new(*case, *article));
            }
        }
        keys
    }
}

impl fmt::Display for DeclensionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.article, self.case)
    }
}

/// A plural phrase. If `needs_quantity` is set the leading article was dropped and a count
/// has to be put in front of `text` when it is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluralForm {
    pub text: String,
    pub needs_quantity: bool,
}

impl PluralForm {
    pub fn new<S: Into<String>>(text: S, needs_quantity: bool) -> Self {
        PluralForm {
            text: text.into(),
            needs_quantity,
        }
    }

    /// Renders the form, prefixing `quantity` (e. g. a `%d` placeholder or a literal number) if needed.
    pub fn render(&self, quantity: &str) -> String {
        if self.needs_quantity {
            format!("{} {}", quantity, self.text)
        } else {
            self.text.clone()
        }
    }

    /// Appends text verbatim, used to reattach a detached genitive suffix.
    pub fn with_suffix(mut self, suffix: &str) -> Self {
        self.text.push_str(suffix);
        self
    }
}

/// A German plural together with how sure the rule that produced it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GermanPlural {
    pub form: PluralForm,
    /// `false` if the plural came from a broad heuristic and should be reviewed by hand.
    pub certain: bool,
}

/// Singular and plural forms in both languages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluralForms {
    pub english: PluralForm,
    pub german: PluralForm,
    pub certain: bool,
}

/// The declined forms of one catalog entry for one [DeclensionKey].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParadigmResult {
    pub key: DeclensionKey,
    pub english: String,
    pub german: String,
    /// Only set for indefinite keys.
    pub plural: Option<PluralForms>,
}

impl ParadigmResult {
    /// Whether the German plural should be checked by hand.
    pub fn needs_review(&self) -> bool {
        self.plural.as_ref().map_or(false, |plural| !plural.certain)
    }
}
