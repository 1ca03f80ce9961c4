use onig::Regex;

/// Compiles a pattern that is part of the crate itself, i. e. known to be valid.
pub(crate) fn regex(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|error| panic!("invalid pattern {:?}: {}", pattern, error))
}

/// Splits a leading article off a phrase if its first token is one of `articles`.
/// Returns the article and the remainder without the separating space.
pub(crate) fn split_article<'a>(phrase: &'a str, articles: &[&str]) -> (Option<&'a str>, &'a str) {
    if let Some(index) = phrase.find(' ') {
        let (head, tail) = phrase.split_at(index);
        if articles.contains(&head) {
            return (Some(head), &tail[1..]);
        }
    }

    (None, phrase)
}

pub(crate) fn ends_with_ignore_case(text: &str, suffix: &str) -> bool {
    text.to_lowercase().ends_with(&suffix.to_lowercase())
}

pub(crate) fn starts_with_vowel(text: &str) -> bool {
    matches!(
        text.chars().next(),
        Some('a' | 'e' | 'i' | 'o' | 'u' | 'A' | 'E' | 'I' | 'O' | 'U')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_split_article() {
        let articles = ["der", "die", "das"];

        assert_eq!(
            split_article("die große Spinne", &articles),
            (Some("die"), "große Spinne")
        );
        assert_eq!(split_article("Spinne", &articles), (None, "Spinne"));
        assert_eq!(split_article("dieser Mann", &articles), (None, "dieser Mann"));
    }

    #[test]
    fn compares_suffixes_without_case() {
        assert!(ends_with_ignore_case("der Zombie", "zombie"));
        assert!(ends_with_ignore_case("Fledermaus", "MAUS"));
        assert!(!ends_with_ignore_case("Maus", "haus"));
    }
}
