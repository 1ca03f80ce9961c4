//! English: indefinite articles and plurals.

use lazy_static::lazy_static;

use crate::rule::{first_match, Condition, Rule, Subject, Transform};
use crate::types::{Article, PluralForm};
use crate::utils;

/// Articles that are replaced by a count in the plural.
const ARTICLES: &[&str] = &["the", "a", "an"];

lazy_static! {
    /// Plural rules, most specific first. Mostly creature names from the glossary which
    /// the regular orthographic rules at the bottom get wrong.
    static ref PLURAL_RULES: Vec<Rule<Transform>> = vec![
        Rule::new(
            "invariant",
            Condition::EndsWith(&[
                "gold", "fish", "folk", "spawn", "tengu", "sheep", "swine", "efreet",
                "jiangshi", "raiju", "meliai",
            ]),
            Transform::Keep,
        ),
        Rule::new("catoblepas", Condition::EndsWith(&["catoblepas"]), Transform::ReplaceSuffix("s", "e")),
        Rule::new("cyclops", Condition::EndsWith(&["cyclops"]), Transform::ReplaceSuffix("s", "es")),
        Rule::new("mage", Condition::EndsWith(&["mage"]), Transform::ReplaceSuffix("e", "i")),
        Rule::new("simulacrum", Condition::EndsWith(&["simulacrum"]), Transform::ReplaceSuffix("um", "a")),
        Rule::new("eidolon", Condition::EndsWith(&["eidolon"]), Transform::ReplaceSuffix("on", "a")),
        Rule::new("djinni", Condition::EndsWith(&["djinni"]), Transform::ReplaceSuffix("i", "")),
        Rule::new("foot", Condition::EndsWith(&["foot"]), Transform::ReplaceSuffix("oot", "eet")),
        Rule::new("hebrew -im", Condition::EndsWith(&["ophan", "cherub", "seraph"]), Transform::Append("im")),
        Rule::new("barachi", Condition::EndsWith(&["arachi"]), Transform::Append("m")),
        Rule::new("ushabti", Condition::EndsWith(&["ushabti"]), Transform::Append("u")),
        Rule::new("tzitzimitl", Condition::EndsWith(&["zitzimitl"]), Transform::ReplaceSuffix("tl", "meh")),
        // but not gecko -> geckoes
        Rule::new("mosquito", Condition::EndsWith(&["mosquito"]), Transform::Append("es")),
        Rule::new("latin -ae", Condition::EndsWith(&["larva", "antenna", "hypha"]), Transform::Append("e")),
        Rule::new("staff", Condition::EndsWith(&["staff"]), Transform::ReplaceSuffix("ff", "ves")),
        // elf -> elves, but not hippogriff -> hippogrives
        Rule::new("-f", Condition::pattern("[^f]f$"), Transform::ReplaceSuffix("f", "ves")),
        Rule::new("-fe", Condition::EndsWith(&["fe"]), Transform::ReplaceSuffix("fe", "ves")),
        Rule::new("-ex", Condition::EndsWith(&["ex"]), Transform::ReplaceSuffix("ex", "ices")),
        Rule::new("-us +es", Condition::EndsWith(&["lotus", "status"]), Transform::Append("es")),
        Rule::new("-us", Condition::EndsWith(&["us"]), Transform::ReplaceSuffix("us", "i")),
        Rule::new("-y", Condition::pattern("[^aeiou]y$"), Transform::ReplaceSuffix("y", "ies")),
        Rule::new("sibilant", Condition::EndsWith(&["s", "sh", "ch", "x", "z"]), Transform::Append("es")),
        Rule::new("default", Condition::Always, Transform::Append("s")),
    ];
}

/// Declines an English singular. "the" does not change with case, so the only thing to do
/// is to swap it for "a" or "an" if an indefinite article is requested.
pub fn decline_singular(phrase: &str, article: Article) -> String {
    match article {
        Article::Definite => phrase.to_string(),
        Article::Indefinite => match phrase.strip_prefix("the ") {
            Some(rest) if utils::starts_with_vowel(rest) => format!("an {}", rest),
            Some(rest) if !rest.is_empty() => format!("a {}", rest),
            _ => phrase.to_string(),
        },
    }
}

/// Computes the plural of an English singular. A leading article is dropped and the
/// returned form is marked as needing a count in its place.
pub fn pluralize(singular: &str) -> PluralForm {
    let (article, noun) = utils::split_article(singular, ARTICLES);

    let plural = match first_match(PLURAL_RULES.as_slice(), &Subject::text(noun)) {
        Some(rule) => rule.outcome.apply(noun),
        None => noun.to_string(),
    };

    PluralForm::new(plural, article.is_some())
}
