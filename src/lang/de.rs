//! German: gender, singular declension and plurals.

pub mod decline;
pub mod gender;
pub mod plural;

pub use decline::decline_singular;
pub use gender::{check as check_gender, GenderAdvice};
pub use plural::pluralize;

/// The definite articles a catalog phrase can start with.
pub(crate) const ARTICLES: &[&str] = &["der", "die", "das"];
