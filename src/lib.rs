//! Declension of a bilingual English/German noun glossary.
//! # Overview
//!
//! A glossary gives each noun once: in English with "the" and in German in the nominative with
//! definite article. This crate expands such entries into the forms a translation catalog needs:
//! nominative, accusative and dative, each with definite and indefinite article, singular and plural.
//!
//! - [paradigm::generate] expands one [Entry][paradigm::Entry] for one [DeclensionKey][types::DeclensionKey].
//! - [catalog::Catalog] does this for every entry of a gettext catalog and writes the result.
//! - [lang::de] and [lang::en] contain the rules, which are heuristics: plurals that are guesses
//!   are flagged, and German phrases whose article does not fit their ending are reported
//!   through [Diagnostics][diagnostics::Diagnostics].
//!
//! # Examples
//!
//! Decline a single entry:
//!
//! ```
//! use declension::paradigm::{generate, Entry};
//! use declension::types::{Article, Case, DeclensionKey};
//! use declension::diagnostics::Advice;
//!
//! let mut advice: Vec<Advice> = Vec::new();
//! let result = generate(
//!     &Entry::new("the farmer", "der Bauer"),
//!     DeclensionKey::new(Case::Accusative, Article::Indefinite),
//!     &mut advice,
//! )
//! .expect("masculine nouns have an accusative");
//!
//! assert_eq!(result.german, "einen Bauern");
//! assert_eq!(result.english, "a farmer");
//!
//! let plural = result.plural.expect("indefinite entries have a plural");
//! // nouns in -er often keep their form in the plural, but not always
//! assert_eq!(plural.german.render("%d"), "%d Bauer");
//! assert!(!plural.certain);
//! assert!(advice.is_empty());
//! ```
//!
//! Transform a catalog:
//!
//! ```
//! use declension::catalog::{Catalog, CatalogOptions};
//! use declension::diagnostics::LogDiagnostics;
//!
//! let input = "msgid \"the zombie\"\nmsgstr \"der Zombie\"\n";
//! let options = CatalogOptions::default();
//!
//! let mut out = Vec::new();
//! let summary = Catalog::new(input, &options).transform(&mut out, &mut LogDiagnostics::new())?;
//!
//! assert_eq!(summary.entries, 6);
//! assert!(String::from_utf8_lossy(&out).contains("msgstr[1] \"%d Zombies\""));
//! # Ok::<(), declension::Error>(())
//! ```

use std::io;

use thiserror::Error;

pub mod catalog;
pub mod diagnostics;
pub mod lang;
pub mod paradigm;
pub mod phrase;
pub mod rule;
pub mod types;
pub(crate) mod utils;

#[derive(Error, Debug)]
#[allow(missing_docs)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    /// The options file could not be deserialized.
    #[error(transparent)]
    Options(#[from] serde_json::Error),
    #[error("line {line_number}: invalid line: {line}")]
    InvalidLine { line_number: usize, line: String },
    #[error("line {line_number}: msgstr without preceding msgid: {line}")]
    UnpairedTranslation { line_number: usize, line: String },
    #[error("line {line_number}: msgid without msgstr: {line}")]
    UnpairedSource { line_number: usize, line: String },
}
