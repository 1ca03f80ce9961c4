//! Checks the gender given by the article of a German phrase against what the noun ending suggests.
//!
//! The gender of a phrase always comes from its article ([Gender::from_article]). The ending table
//! here is only ever used to advise, it never changes the gender used for declension.

use lazy_static::lazy_static;
use std::fmt;

use crate::phrase::Phrase;
use crate::rule::{first_match, Condition, Rule, Subject};
use crate::types::Gender;

/// The gender an ending points to, and whether the ending is reliable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expectation {
    pub gender: Gender,
    pub certain: bool,
}

const fn should_be(gender: Gender) -> Expectation {
    Expectation {
        gender,
        certain: true,
    }
}

const fn probably(gender: Gender) -> Expectation {
    Expectation {
        gender,
        certain: false,
    }
}

lazy_static! {
    /// Noun endings and the gender they imply. Exceptions come right before the rule they override.
    static ref ENDING_RULES: Vec<Rule<Expectation>> = vec![
        Rule::new(
            "diminutive",
            Condition::EndsWith(&["lein", "chen", "ment", "tel"]),
            should_be(Gender::Neuter),
        ),
        Rule::new(
            "masculine -um/-sel",
            Condition::EndsWithIgnoreCase(&["irrtum", "konsum", "reichtum", "baum", "streusel"]),
            should_be(Gender::Masculine),
        ),
        Rule::new(
            "Firma",
            Condition::EndsWithIgnoreCase(&["firma"]),
            should_be(Gender::Feminine),
        ),
        Rule::new(
            "-um/-sel/-ma",
            Condition::EndsWith(&["um", "sel", "ma"]),
            should_be(Gender::Neuter),
        ),
        Rule::new(
            "feminine suffix",
            Condition::EndsWith(&[
                "ung", "tion", "heit", "keit", "schaft", "enz", "anz", "ik", "tät", "itis",
                "sis", "ade", "age", "ere", "ine", "isse", "ive", "ei",
            ]),
            should_be(Gender::Feminine),
        ),
        Rule::new(
            "Zombie",
            Condition::EndsWithIgnoreCase(&["zombie"]),
            should_be(Gender::Masculine),
        ),
        Rule::new("-ie", Condition::EndsWith(&["ie"]), should_be(Gender::Feminine)),
        Rule::new(
            "masculine suffix",
            Condition::EndsWith(&["ant", "ast", "ich", "ig", "ling", "ismus"]),
            should_be(Gender::Masculine),
        ),
        Rule::new("-ist", Condition::EndsWith(&["ist"]), probably(Gender::Masculine)),
        Rule::new(
            "Labor",
            Condition::EndsWithIgnoreCase(&["labor"]),
            should_be(Gender::Neuter),
        ),
        Rule::new("-or", Condition::EndsWith(&["or"]), should_be(Gender::Masculine)),
        Rule::new(
            "Maus",
            Condition::EndsWithIgnoreCase(&["maus"]),
            should_be(Gender::Feminine),
        ),
        Rule::new(
            "Haus",
            Condition::EndsWithIgnoreCase(&["haus"]),
            should_be(Gender::Neuter),
        ),
        Rule::new("-us", Condition::EndsWith(&["us"]), probably(Gender::Masculine)),
    ];
}

/// The gender suggested by the ending of `noun`, if any rule knows the ending.
pub fn expected_gender(noun: &str) -> Option<Expectation> {
    first_match(ENDING_RULES.as_slice(), &Subject::text(noun)).map(|rule| rule.outcome)
}

/// A mismatch between the article and the ending of a phrase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenderAdvice {
    /// The complete phrase, including any genitive suffix.
    pub phrase: String,
    pub actual: Gender,
    pub expected: Expectation,
}

impl fmt::Display for GenderAdvice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.expected.certain {
            write!(f, "Should be {}: \"{}\"", self.expected.gender, self.phrase)
        } else {
            write!(
                f,
                "Probably should be {}: \"{}\"",
                self.expected.gender, self.phrase
            )
        }
    }
}

/// Compares `gender` with the gender the ending of `phrase` suggests. A genitive suffix is
/// ignored, so "der Ring der Macht" is judged by "Ring".
pub fn check(phrase: &str, gender: Gender) -> Option<GenderAdvice> {
    let core = Phrase::split(phrase).core;

    match expected_gender(core) {
        Some(expected) if expected.gender != gender => Some(GenderAdvice {
            phrase: phrase.to_string(),
            actual: gender,
            expected,
        }),
        _ => None,
    }
}
