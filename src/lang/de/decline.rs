//! Declension of German singular noun phrases.
//!
//! A phrase is declined in three strictly sequential steps, each working on the output of the
//! previous one:
//! 1. the article is replaced by the form for the requested case and article,
//! 2. adjectives in front of the noun get the matching ending,
//! 3. weak masculine nouns (n-declension) get their -n / -en suffix.

use lazy_static::lazy_static;

use super::ARTICLES;
use crate::rule::{first_match, Condition, Rule, Subject, Transform};
use crate::types::{Article, Case, Gender};
use crate::utils;

lazy_static! {
    /// Weak nouns. Only consulted outside the nominative.
    static ref WEAK_NOUN_RULES: Vec<Rule<Transform>> = {
        use Gender::{Masculine, Neuter};

        vec![
            Rule::new(
                "irregular",
                Condition::gendered(Masculine, Condition::EndsWithIgnoreCase(&["herr", "bauer"])),
                Transform::Append("n"),
            ),
            Rule::new(
                "strong -e",
                Condition::gendered(
                    Masculine,
                    Condition::EndsWithIgnoreCase(&["see", "käse", "deutsche", "zombie", "gargoyle"]),
                ),
                Transform::Keep,
            ),
            Rule::new(
                "-e",
                Condition::gendered(Masculine, Condition::EndsWith(&["e"])),
                Transform::Append("n"),
            ),
            Rule::new(
                "-en suffix",
                Condition::gendered(
                    Masculine,
                    Condition::EndsWithIgnoreCase(&[
                        "at", "ant", "ent", "ist", "oph", "bär", "mensch", "prinz", "narr",
                    ]),
                ),
                Transform::Append("en"),
            ),
            Rule::new(
                "Herz",
                Condition::All(vec![
                    Condition::Gender(Neuter),
                    Condition::Case(Case::Dative),
                    Condition::EndsWithIgnoreCase(&["herz"]),
                ]),
                Transform::Append("en"),
            ),
        ]
    };
}

/// The definite article for a gender and case, `None` if the gender is unknown.
pub fn definite_article(gender: Gender, case: Case) -> Option<&'static str> {
    Some(match (gender, case) {
        (Gender::Unknown, _) => return None,
        (Gender::Masculine, Case::Nominative) => "der",
        (Gender::Masculine, Case::Accusative) => "den",
        (Gender::Masculine, Case::Dative) | (Gender::Neuter, Case::Dative) => "dem",
        (Gender::Feminine, Case::Dative) => "der",
        (Gender::Feminine, _) => "die",
        (Gender::Neuter, _) => "das",
    })
}

/// The indefinite article for a gender and case, `None` if the gender is unknown.
pub fn indefinite_article(gender: Gender, case: Case) -> Option<&'static str> {
    Some(match (gender, case) {
        (Gender::Unknown, _) => return None,
        (Gender::Masculine, Case::Accusative) => "einen",
        (Gender::Masculine, Case::Dative) | (Gender::Neuter, Case::Dative) => "einem",
        (Gender::Masculine, Case::Nominative) | (Gender::Neuter, _) => "ein",
        (Gender::Feminine, Case::Dative) => "einer",
        (Gender::Feminine, _) => "eine",
    })
}

/// The ending an attributive adjective takes after the given article, `None` if it keeps
/// the "-e" of the nominative with definite article.
pub fn adjective_ending(article: Article, gender: Gender, case: Case) -> Option<&'static str> {
    match (article, gender, case) {
        (_, _, Case::Dative) | (_, Gender::Masculine, Case::Accusative) => Some("en"),
        (Article::Indefinite, Gender::Masculine, _) => Some("er"),
        (Article::Indefinite, Gender::Neuter, _) => Some("es"),
        _ => None,
    }
}

/// Appends the n-declension suffix to a weak noun at the end of `body`, if there is one.
pub fn weak_noun(body: &str, gender: Gender, case: Case) -> String {
    if case == Case::Nominative {
        return body.to_string();
    }

    match first_match(WEAK_NOUN_RULES.as_slice(), &Subject::new(body, gender, case)) {
        Some(rule) => rule.outcome.apply(body),
        None => body.to_string(),
    }
}

/// Declines a German singular with definite article (nominative, as it appears in the catalog)
/// into `case` with the requested article. `gender` is the gender derived from the article.
///
/// A phrase without a recognized article keeps its words; only adjectives and weak nouns change.
pub fn decline_singular(phrase: &str, gender: Gender, article: Article, case: Case) -> String {
    let (definite, body) = utils::split_article(phrase, ARTICLES);

    let determiner = match article {
        Article::Definite => definite_article(gender, case),
        Article::Indefinite => indefinite_article(gender, case),
    }
    .or(definite);

    let body = match adjective_ending(article, gender, case) {
        Some(ending) => body.replace("e ", &format!("{} ", ending)),
        None => body.to_string(),
    };

    let body = weak_noun(&body, gender, case);

    match determiner {
        Some(determiner) => format!("{} {}", determiner, body),
        None => body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decline(phrase: &str, article: Article, case: Case) -> String {
        decline_singular(phrase, Gender::from_article(phrase), article, case)
    }

    #[test]
    fn definite_articles() {
        use Article::Definite;

        assert_eq!(decline("der Ork", Definite, Case::Nominative), "der Ork");
        assert_eq!(decline("der Ork", Definite, Case::Accusative), "den Ork");
        assert_eq!(decline("der Ork", Definite, Case::Dative), "dem Ork");
        assert_eq!(decline("das Schwert", Definite, Case::Dative), "dem Schwert");
        assert_eq!(decline("die Axt", Definite, Case::Accusative), "die Axt");
        assert_eq!(decline("die Axt", Definite, Case::Dative), "der Axt");
    }

    #[test]
    fn indefinite_articles() {
        use Article::Indefinite;

        assert_eq!(decline("der Zombie", Indefinite, Case::Nominative), "ein Zombie");
        assert_eq!(decline("der Ork", Indefinite, Case::Accusative), "einen Ork");
        assert_eq!(decline("der Ork", Indefinite, Case::Dative), "einem Ork");
        assert_eq!(decline("das Schwert", Indefinite, Case::Accusative), "ein Schwert");
        assert_eq!(decline("das Schwert", Indefinite, Case::Dative), "einem Schwert");
        assert_eq!(decline("die Einladung", Indefinite, Case::Nominative), "eine Einladung");
        assert_eq!(decline("die Einladung", Indefinite, Case::Dative), "einer Einladung");
    }

    #[test]
    fn adjective_agreement() {
        use Article::*;

        assert_eq!(decline("der große Ork", Definite, Case::Nominative), "der große Ork");
        assert_eq!(decline("der große Ork", Definite, Case::Accusative), "den großen Ork");
        assert_eq!(decline("die große Spinne", Definite, Case::Accusative), "die große Spinne");
        assert_eq!(decline("die große Spinne", Definite, Case::Dative), "der großen Spinne");
        assert_eq!(decline("der große Ork", Indefinite, Case::Nominative), "ein großer Ork");
        assert_eq!(decline("der große Ork", Indefinite, Case::Accusative), "einen großen Ork");
        assert_eq!(decline("das kleine Schwert", Indefinite, Case::Nominative), "ein kleines Schwert");
        assert_eq!(decline("das kleine Schwert", Indefinite, Case::Accusative), "ein kleines Schwert");
        assert_eq!(decline("das kleine Schwert", Indefinite, Case::Dative), "einem kleinen Schwert");
        assert_eq!(decline("die große Spinne", Indefinite, Case::Nominative), "eine große Spinne");
        assert_eq!(decline("die große Spinne", Indefinite, Case::Dative), "einer großen Spinne");
    }

    #[test]
    fn weak_nouns() {
        use Article::*;

        assert_eq!(decline("der Bauer", Indefinite, Case::Accusative), "einen Bauern");
        assert_eq!(decline("der Herr", Definite, Case::Dative), "dem Herrn");
        assert_eq!(decline("der Drache", Definite, Case::Accusative), "den Drachen");
        assert_eq!(decline("der Soldat", Indefinite, Case::Dative), "einem Soldaten");
        assert_eq!(decline("der Bär", Definite, Case::Accusative), "den Bären");
        assert_eq!(decline("der Mensch", Definite, Case::Dative), "dem Menschen");
        assert_eq!(decline("der Drache", Definite, Case::Nominative), "der Drache");
    }

    #[test]
    fn strong_nouns_ending_in_e() {
        use Article::*;

        assert_eq!(decline("der Zombie", Indefinite, Case::Accusative), "einen Zombie");
        assert_eq!(decline("der Käse", Definite, Case::Dative), "dem Käse");
        assert_eq!(decline("der Gargoyle", Definite, Case::Accusative), "den Gargoyle");
    }

    #[test]
    fn herz_only_in_dative() {
        use Article::*;

        assert_eq!(decline("das Herz", Definite, Case::Dative), "dem Herzen");
        assert_eq!(decline("das Herz", Definite, Case::Accusative), "das Herz");
    }

    #[test]
    fn unknown_gender_keeps_words() {
        assert_eq!(
            decline("Sigmund", Article::Indefinite, Case::Accusative),
            "Sigmund"
        );
        assert_eq!(
            decline("alte Sigmund", Article::Definite, Case::Dative),
            "alten Sigmund"
        );
    }
}
