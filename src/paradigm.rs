//! Expands one glossary entry into its forms for one [DeclensionKey].

use log::debug;

use crate::diagnostics::{Advice, Diagnostics};
use crate::lang::{de, en};
use crate::phrase::Phrase;
use crate::types::*;

/// A glossary entry: an English phrase with "the" and its German translation with "der", "die"
/// or "das", both in the nominative singular.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry<'a> {
    pub english: &'a str,
    pub german: &'a str,
}

impl<'a> Entry<'a> {
    pub fn new(english: &'a str, german: &'a str) -> Self {
        Entry { english, german }
    }
}

/// Computes all forms of `entry` for `key`.
///
/// Returns `None` for the accusative of feminine and neuter entries: these are identical to the
/// nominative, so nothing is generated for them. The German phrase is checked for consistency
/// every time, advisories go to `diagnostics`.
pub fn generate<D: Diagnostics + ?Sized>(
    entry: &Entry,
    key: DeclensionKey,
    diagnostics: &mut D,
) -> Option<ParadigmResult> {
    let german = entry.german.trim_start();
    if german.len() != entry.german.len() {
        diagnostics.advise(Advice::LeadingWhitespace(entry.german.to_string()));
    }

    let gender = Gender::from_article(german);
    if let Some(advice) = de::check_gender(german, gender) {
        diagnostics.advise(Advice::Gender(advice));
    }

    if key.case == Case::Accusative && matches!(gender, Gender::Feminine | Gender::Neuter) {
        debug!("{:?} is the same in {}, skipping", german, key);
        return None;
    }

    let english = Phrase::split(entry.english);
    let german = Phrase::split(german);

    let english_singular = en::decline_singular(english.core, key.article);
    let german_singular = de::decline_singular(german.core, gender, key.article, key.case);

    let plural = match key.article {
        Article::Definite => None,
        Article::Indefinite => {
            let german_plural = de::pluralize(german.core, gender, key.case);

            Some(PluralForms {
                english: en::pluralize(&english_singular).with_suffix(english.suffix),
                german: german_plural.form.with_suffix(german.suffix),
                certain: german_plural.certain,
            })
        }
    };

    Some(ParadigmResult {
        key,
        english: english.rejoin(english_singular),
        german: german.rejoin(german_singular),
        plural,
    })
}
