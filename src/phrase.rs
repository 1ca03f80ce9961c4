//! Splitting a trailing genitive clause ("of fire", "des Feuers") off a noun phrase.
//!
//! Only the head of a phrase is declined; the clause after the marker word stays the same in
//! every case and number, so it is detached before any transformation and reattached afterwards.

use itertools::Itertools;
use lazy_static::lazy_static;
use onig::Regex;

use crate::utils;

/// Words that start a genitive or "of" clause, English and German.
pub const SUFFIX_MARKERS: &[&str] = &["of", "von", "des", "der"];

/// A noun phrase separated into the part that is declined and an unchanged suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phrase<'a> {
    pub core: &'a str,
    /// Starts with the space in front of the marker word, or is empty.
    pub suffix: &'a str,
}

impl<'a> Phrase<'a> {
    /// Splits `text` at the first marker word that has a space on both sides and a non-space
    /// character in front of that space. A leading article like the "der" in "der Ring" can
    /// therefore never be taken for a marker.
    pub fn split(text: &'a str) -> Self {
        lazy_static! {
            static ref MARKER: Regex = utils::regex(&format!(
                "[^ ]( (?:{}) )",
                SUFFIX_MARKERS.iter().join("|")
            ));
        }

        match MARKER.captures(text).and_then(|caps| caps.pos(1)) {
            Some((start, _)) => Phrase {
                core: &text[..start],
                suffix: &text[start..],
            },
            None => Phrase {
                core: text,
                suffix: "",
            },
        }
    }

    pub fn has_suffix(&self) -> bool {
        !self.suffix.is_empty()
    }

    /// Reattaches the suffix to a transformed core.
    pub fn rejoin<S: AsRef<str>>(&self, core: S) -> String {
        format!("{}{}", core.as_ref(), self.suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_split_english_of_clause() {
        let phrase = Phrase::split("the ring of fire");

        assert_eq!(phrase.core, "the ring");
        assert_eq!(phrase.suffix, " of fire");
        assert_eq!(phrase.rejoin(phrase.core), "the ring of fire");
    }

    #[test]
    fn can_split_german_genitive() {
        assert_eq!(
            Phrase::split("der Ring des Feuers"),
            Phrase {
                core: "der Ring",
                suffix: " des Feuers"
            }
        );
        assert_eq!(
            Phrase::split("die Tochter der Königin").suffix,
            " der Königin"
        );
        assert_eq!(
            Phrase::split("der Stab von Olgreb").suffix,
            " von Olgreb"
        );
    }

    #[test]
    fn leading_article_is_not_a_marker() {
        let phrase = Phrase::split("der Zombie");

        assert_eq!(phrase.core, "der Zombie");
        assert!(!phrase.has_suffix());
    }

    #[test]
    fn marker_needs_word_boundaries() {
        assert!(!Phrase::split("the offering").has_suffix());
        assert!(!Phrase::split("der Dervish").has_suffix());
        assert!(!Phrase::split("the staff of").has_suffix());
        // a double space means there is no word directly in front of the marker
        assert!(!Phrase::split("the ring  of fire").has_suffix());
    }

    #[test]
    fn splits_at_first_marker() {
        let phrase = Phrase::split("the amulet of the lord of the dead");

        assert_eq!(phrase.core, "the amulet");
        assert_eq!(phrase.suffix, " of the lord of the dead");
    }
}
