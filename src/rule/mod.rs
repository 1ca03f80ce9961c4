//! Ordered rule tables. A table is a list of [Rule]s evaluated top to bottom; the first rule
//! whose [Condition] holds decides the outcome.

use crate::types::{Case, Gender};
use crate::utils;
use onig::Regex;

/// The word (or phrase) a rule is tested against, together with the grammatical
/// information some conditions depend on.
#[derive(Debug, Clone, Copy)]
pub struct Subject<'a> {
    pub text: &'a str,
    pub gender: Gender,
    pub case: Case,
}

impl<'a> Subject<'a> {
    pub fn new(text: &'a str, gender: Gender, case: Case) -> Self {
        Subject { text, gender, case }
    }

    /// A subject where only the text matters.
    pub fn text(text: &'a str) -> Self {
        Subject::new(text, Gender::Unknown, Case::Nominative)
    }
}

#[derive(Debug)]
pub enum Condition {
    Always,
    /// The text ends with one of the suffixes (case-sensitive).
    EndsWith(&'static [&'static str]),
    /// The text ends with one of the suffixes, ignoring case.
    EndsWithIgnoreCase(&'static [&'static str]),
    Matches(Regex),
    Gender(Gender),
    Case(Case),
    All(Vec<Condition>),
    Any(Vec<Condition>),
}

impl Condition {
    pub fn is_match(&self, subject: &Subject) -> bool {
        match self {
            Condition::Always => true,
            Condition::EndsWith(suffixes) => suffixes.iter().any(|x| subject.text.ends_with(x)),
            Condition::EndsWithIgnoreCase(suffixes) => suffixes
                .iter()
                .any(|x| utils::ends_with_ignore_case(subject.text, x)),
            Condition::Matches(regex) => regex.is_match(subject.text),
            Condition::Gender(gender) => subject.gender == *gender,
            Condition::Case(case) => subject.case == *case,
            Condition::All(conditions) => conditions.iter().all(|x| x.is_match(subject)),
            Condition::Any(conditions) => conditions.iter().any(|x| x.is_match(subject)),
        }
    }

    /// Shorthand for a condition that additionally requires a gender.
    pub fn gendered(gender: Gender, condition: Condition) -> Self {
        Condition::All(vec![Condition::Gender(gender), condition])
    }

    /// A condition on a suffix that needs a character class, e. g. `[^aeiou]y$`.
    pub fn pattern(pattern: &str) -> Self {
        Condition::Matches(utils::regex(pattern))
    }
}

/// A rewrite of the end of a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    Keep,
    Append(&'static str),
    /// Replaces the first string at the end of the text with the second one.
    /// Leaves the text unchanged if it does not end with the first string.
    ReplaceSuffix(&'static str, &'static str),
}

impl Transform {
    pub fn apply(&self, text: &str) -> String {
        match self {
            Transform::Keep => text.to_string(),
            Transform::Append(ending) => format!("{}{}", text, ending),
            Transform::ReplaceSuffix(from, to) => match text.strip_suffix(from) {
                Some(stem) => format!("{}{}", stem, to),
                None => text.to_string(),
            },
        }
    }
}

#[derive(Debug)]
pub struct Rule<T> {
    /// A short human-readable name, used in logs and tests.
    pub id: &'static str,
    pub condition: Condition,
    pub outcome: T,
}

impl<T> Rule<T> {
    pub fn new(id: &'static str, condition: Condition, outcome: T) -> Self {
        Rule {
            id,
            condition,
            outcome,
        }
    }
}

/// Returns the first rule in `rules` whose condition holds for `subject`.
pub fn first_match<'r, T>(rules: &'r [Rule<T>], subject: &Subject) -> Option<&'r Rule<T>> {
    rules.iter().find(|rule| rule.condition.is_match(subject))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transforms_rewrite_the_end() {
        assert_eq!(Transform::Keep.apply("sheep"), "sheep");
        assert_eq!(Transform::Append("s").apply("zombie"), "zombies");
        assert_eq!(Transform::ReplaceSuffix("oot", "eet").apply("foot"), "feet");
        assert_eq!(Transform::ReplaceSuffix("um", "a").apply("golem"), "golem");
    }

    #[test]
    fn first_rule_wins() {
        let rules = vec![
            Rule::new("exception", Condition::EndsWithIgnoreCase(&["maus"]), 1),
            Rule::new("us", Condition::EndsWith(&["us"]), 2),
            Rule::new("default", Condition::Always, 3),
        ];

        let id = |text| first_match(&rules, &Subject::text(text)).map(|x| x.outcome);

        assert_eq!(id("Fledermaus"), Some(1));
        assert_eq!(id("Globus"), Some(2));
        assert_eq!(id("Tisch"), Some(3));
    }

    #[test]
    fn conditions_can_depend_on_gender_and_case() {
        let condition = Condition::All(vec![
            Condition::gendered(Gender::Neuter, Condition::EndsWith(&["Herz"])),
            Condition::Case(Case::Dative),
        ]);

        assert!(condition.is_match(&Subject::new("Herz", Gender::Neuter, Case::Dative)));
        assert!(!condition.is_match(&Subject::new("Herz", Gender::Neuter, Case::Accusative)));
        assert!(!condition.is_match(&Subject::new("Herz", Gender::Masculine, Case::Dative)));
    }

    #[test]
    fn patterns_match_character_classes() {
        let condition = Condition::pattern("[^aeiou]y$");

        assert!(condition.is_match(&Subject::text("the fairy")));
        assert!(!condition.is_match(&Subject::text("the monkey")));
        assert!(!Condition::Any(vec![]).is_match(&Subject::text("anything")));
    }
}
