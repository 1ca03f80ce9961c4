//! German plurals.
//!
//! German plural formation is not predictable from the singular alone, so every rule records
//! whether its result can be trusted. Exact exceptions and fully regular endings (e. g. feminine
//! -ung -> -ungen) are certain, broad guesses (e. g. -us -> -en) are not.
//!
//! References:
//! - https://www.vistawide.com/german/grammar/german_nouns02.htm
//! - https://www.germanveryeasy.com/plural

use lazy_static::lazy_static;

use super::ARTICLES;
use crate::rule::{first_match, Condition, Rule, Subject, Transform};
use crate::types::{Case, Gender, GermanPlural, PluralForm};
use crate::utils;

#[derive(Debug, Clone, Copy)]
struct Plural {
    transform: Transform,
    certain: bool,
}

const fn certain(transform: Transform) -> Plural {
    Plural {
        transform,
        certain: true,
    }
}

const fn guess(transform: Transform) -> Plural {
    Plural {
        transform,
        certain: false,
    }
}

lazy_static! {
    static ref RULES: Vec<Rule<Plural>> = {
        use Gender::Feminine;
        use Transform::*;

        vec![
            Rule::new(
                "borrowed",
                Condition::Any(vec![
                    Condition::EndsWithIgnoreCase(&["zombie", "goblin", "wyvern", "spriggan", "klown", "gargoyle"]),
                    Condition::EndsWith(&["Lich"]),
                ]),
                certain(Append("s")),
            ),
            Rule::new("Baum", Condition::EndsWith(&["Baum", "baum"]), certain(ReplaceSuffix("aum", "äume"))),
            Rule::new("unchanged", Condition::EndsWithIgnoreCase(&["kolben", "schatten"]), certain(Keep)),
            Rule::new("Geist", Condition::EndsWithIgnoreCase(&["geist"]), certain(Append("er"))),
            Rule::new("Segment", Condition::EndsWithIgnoreCase(&["segment"]), certain(Append("e"))),
            // nouns ending in -e normally add -n, always so if they are feminine
            Rule::new("feminine -e", Condition::gendered(Feminine, Condition::EndsWith(&["e"])), certain(Append("n"))),
            Rule::new("-e", Condition::EndsWith(&["e"]), guess(Append("n"))),
            Rule::new(
                "-a -> -en",
                Condition::EndsWithIgnoreCase(&["hydra", "prisma", "tarantella"]),
                guess(ReplaceSuffix("a", "en")),
            ),
            // other vowels normally add -s
            Rule::new("vowel", Condition::pattern("[aoiuy]$"), guess(Append("s"))),
            Rule::new("diminutive", Condition::EndsWith(&["chen", "lein"]), certain(Keep)),
            Rule::new("feminine -el/-er", Condition::gendered(Feminine, Condition::EndsWith(&["el", "er"])), guess(Append("n"))),
            Rule::new("Tier", Condition::EndsWith(&["Tier", "tier"]), guess(Append("e"))),
            Rule::new("-el/-er", Condition::EndsWith(&["el", "er"]), guess(Keep)),
            Rule::new("feminine -aus", Condition::gendered(Feminine, Condition::EndsWith(&["aus"])), certain(ReplaceSuffix("aus", "äuse"))),
            Rule::new("Ufetubus", Condition::EndsWith(&["Ufetubus"]), certain(ReplaceSuffix("us", "i"))),
            Rule::new("-us", Condition::EndsWith(&["us"]), guess(ReplaceSuffix("us", "en"))),
            Rule::new("-um", Condition::EndsWith(&["um"]), guess(ReplaceSuffix("um", "en"))),
            Rule::new("-nis", Condition::EndsWith(&["nis"]), certain(Append("se"))),
            Rule::new("always -e", Condition::EndsWith(&["eur", "ich", "ig", "ling"]), certain(Append("e"))),
            Rule::new("probably -e", Condition::EndsWith(&["ör", "är", "ar"]), guess(Append("e"))),
            Rule::new("always -en", Condition::EndsWith(&["at", "ant", "ent", "ist"]), certain(Append("en"))),
            Rule::new("-in", Condition::gendered(Feminine, Condition::EndsWith(&["in"])), certain(Append("nen"))),
            Rule::new("-itis", Condition::gendered(Feminine, Condition::EndsWith(&["itis"])), certain(ReplaceSuffix("itis", "iden"))),
            Rule::new("-xis", Condition::gendered(Feminine, Condition::EndsWith(&["xis"])), certain(ReplaceSuffix("xis", "xien"))),
            Rule::new("-sis", Condition::gendered(Feminine, Condition::EndsWith(&["sis"])), certain(ReplaceSuffix("sis", "sen"))),
            Rule::new(
                "feminine suffix",
                Condition::gendered(Feminine, Condition::EndsWith(&["ung", "tion", "heit", "keit", "schaft", "tät", "ei"])),
                certain(Append("en")),
            ),
            Rule::new("feminine", Condition::Gender(Feminine), guess(Append("en"))),
            Rule::new("default", Condition::Always, guess(Append("e"))),
        ]
    };
}

/// Computes the plural of a German singular phrase with definite article.
///
/// The article is dropped and the form is marked as needing a count instead. Adjectives in
/// front of the noun are carried over unchanged, except in the dative (see [dative_plural]).
pub fn pluralize(singular: &str, gender: Gender, case: Case) -> GermanPlural {
    let (article, body) = utils::split_article(singular, ARTICLES);

    let (mut plural, certain) = match first_match(RULES.as_slice(), &Subject::new(body, gender, case)) {
        Some(rule) => (rule.outcome.transform.apply(body), rule.outcome.certain),
        None => (body.to_string(), false),
    };

    if case == Case::Dative {
        plural = dative_plural(&plural);
    }

    GermanPlural {
        form: PluralForm::new(plural, article.is_some()),
        certain,
    }
}

/// Turns a nominative plural into the dative plural: the noun gets an extra -n unless it already
/// ends in -n, -s or -i, and attached adjectives take the ending -en.
pub fn dative_plural(plural: &str) -> String {
    let mut plural = plural.to_string();

    if !plural.ends_with(|c| matches!(c, 'n' | 's' | 'i')) {
        plural.push('n');
    }

    plural.replace("e ", "en ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plural(singular: &str, case: Case) -> (String, bool) {
        let plural = pluralize(singular, Gender::from_article(singular), case);
        (plural.form.render("%d"), plural.certain)
    }

    fn nominative(singular: &str) -> (String, bool) {
        plural(singular, Case::Nominative)
    }

    #[test]
    fn certain_plurals() {
        assert_eq!(nominative("der Zombie"), ("%d Zombies".to_string(), true));
        assert_eq!(nominative("der Lich"), ("%d Lichs".to_string(), true));
        assert_eq!(nominative("der Baum"), ("%d Bäume".to_string(), true));
        assert_eq!(nominative("der Schatten"), ("%d Schatten".to_string(), true));
        assert_eq!(nominative("der Geist"), ("%d Geister".to_string(), true));
        assert_eq!(nominative("die große Spinne"), ("%d große Spinnen".to_string(), true));
        assert_eq!(nominative("das Kätzchen"), ("%d Kätzchen".to_string(), true));
        assert_eq!(nominative("die Fledermaus"), ("%d Fledermäuse".to_string(), true));
        assert_eq!(nominative("das Hindernis"), ("%d Hindernisse".to_string(), true));
        assert_eq!(nominative("der Käfig"), ("%d Käfige".to_string(), true));
        assert_eq!(nominative("der Soldat"), ("%d Soldaten".to_string(), true));
        assert_eq!(nominative("die Königin"), ("%d Königinnen".to_string(), true));
        assert_eq!(nominative("die Arthritis"), ("%d Arthriden".to_string(), true));
        assert_eq!(nominative("die Einladung"), ("%d Einladungen".to_string(), true));
    }

    #[test]
    fn guessed_plurals() {
        assert_eq!(nominative("der Drache"), ("%d Drachen".to_string(), false));
        assert_eq!(nominative("die Hydra"), ("%d Hydren".to_string(), false));
        assert_eq!(nominative("das Sofa"), ("%d Sofas".to_string(), false));
        assert_eq!(nominative("die Kugel"), ("%d Kugeln".to_string(), false));
        assert_eq!(nominative("das Tier"), ("%d Tiere".to_string(), false));
        assert_eq!(nominative("der Adler"), ("%d Adler".to_string(), false));
        assert_eq!(nominative("der Kaktus"), ("%d Kakten".to_string(), false));
        assert_eq!(nominative("das Museum"), ("%d Museen".to_string(), false));
        assert_eq!(nominative("der Bär"), ("%d Bäre".to_string(), false));
        assert_eq!(nominative("die Hand"), ("%d Handen".to_string(), false));
        assert_eq!(nominative("der Ork"), ("%d Orke".to_string(), false));
    }

    #[test]
    fn dative_adds_n_and_adjective_ending() {
        assert_eq!(plural("der Ork", Case::Dative), ("%d Orken".to_string(), false));
        assert_eq!(plural("der Zombie", Case::Dative), ("%d Zombies".to_string(), true));
        assert_eq!(
            plural("die große Spinne", Case::Dative),
            ("%d großen Spinnen".to_string(), true)
        );
        assert_eq!(
            plural("die Einladung", Case::Dative),
            ("%d Einladungen".to_string(), true)
        );
    }

    #[test]
    fn accusative_is_like_nominative() {
        assert_eq!(plural("der Ork", Case::Accusative), nominative("der Ork"));
    }
}
