//! Linguistic advisories. These never stop processing; they point a translator at entries
//! that are probably wrong in the input.

use log::warn;
use std::fmt;

use crate::lang::de::GenderAdvice;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advice {
    /// The article of a German phrase disagrees with its ending.
    Gender(GenderAdvice),
    /// A German phrase started with whitespace, which was removed.
    LeadingWhitespace(String),
}

impl fmt::Display for Advice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advice::Gender(advice) => fmt::Display::fmt(advice, f),
            Advice::LeadingWhitespace(phrase) => {
                write!(f, "Blank space at start of: \"{}\"", phrase)
            }
        }
    }
}

/// A sink for advisories.
pub trait Diagnostics {
    fn advise(&mut self, advice: Advice);
}

/// Collects advisories, e. g. for tests.
impl Diagnostics for Vec<Advice> {
    fn advise(&mut self, advice: Advice) {
        self.push(advice);
    }
}

/// Writes every advisory as a warning to the log and counts them.
#[derive(Debug, Default)]
pub struct LogDiagnostics {
    count: usize,
}

impl LogDiagnostics {
    pub fn new() -> Self {
        LogDiagnostics::default()
    }

    /// The number of advisories seen so far.
    pub fn count(&self) -> usize {
        self.count
    }
}

impl Diagnostics for LogDiagnostics {
    fn advise(&mut self, advice: Advice) {
        warn!("{}", advice);
        self.count += 1;
    }
}
