//! Reading and writing gettext catalogs.
//!
//! The input is a `.po` file whose entries hold the English phrase with "the" in `msgid` and the
//! German nominative with definite article in `msgstr`. The output repeats the catalog once per
//! [DeclensionKey], each pass in its own section with a `msgctxt` naming the case.

use fs_err as fs;
use log::info;
use serde::{Deserialize, Serialize};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::diagnostics::{Diagnostics, LogDiagnostics};
use crate::paradigm::{self, Entry};
use crate::types::*;
use crate::Error;

/// The comment written below plurals that should be checked by hand.
pub const REVIEW_COMMENT: &str = "# check plural above";

/// Options for transforming a catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CatalogOptions {
    /// The passes to write, in order.
    pub passes: Vec<DeclensionKey>,
    /// Put in front of plural forms in place of the article, to be replaced by a count at runtime.
    pub quantity_placeholder: String,
    /// Whether to write [REVIEW_COMMENT] below uncertain plurals.
    pub mark_uncertain_plurals: bool,
}

impl Default for CatalogOptions {
    fn default() -> Self {
        CatalogOptions {
            passes: DeclensionKey::all(),
            quantity_placeholder: "%d".to_string(),
            mark_uncertain_plurals: true,
        }
    }
}

impl CatalogOptions {
    /// Reads options from a JSON file. Missing fields take their default value.
    pub fn from_file<P: AsRef<Path>>(p: P) -> Result<Self, Error> {
        let json = fs::read_to_string(p.as_ref())?;
        Ok(serde_json::from_str(&json)?)
    }
}

/// One line of a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// A comment or a blank line, copied as is.
    Verbatim(&'a str),
    /// `msgctxt`. Contexts are regenerated, so these are dropped.
    Context,
    /// `msgid`, with the text between the quotes.
    Source(&'a str),
    /// `msgstr`, with the text between the quotes.
    Translation(&'a str),
    /// A string continuing the previous line, only allowed in the header.
    Continuation(&'a str),
}

impl<'a> Line<'a> {
    /// Classifies a line. Surrounding whitespace is ignored.
    pub fn parse(line: &'a str) -> Option<Self> {
        let line = line.trim();

        Some(if line.is_empty() || line.starts_with('#') {
            Line::Verbatim(line)
        } else if line.contains("msgctxt") {
            Line::Context
        } else if line.starts_with("msgid_plural") {
            return None;
        } else if line.starts_with("msgid") {
            Line::Source(extract_text(line)?)
        } else if line.starts_with("msgstr") {
            Line::Translation(extract_text(line)?)
        } else if line.starts_with('"') {
            Line::Continuation(line)
        } else {
            return None;
        })
    }
}

/// The text between the first and the last quote of a line.
pub fn extract_text(line: &str) -> Option<&str> {
    let start = line.find('"')? + 1;
    let end = line.rfind('"')?;

    if end >= start {
        Some(&line[start..end])
    } else {
        None
    }
}

/// Counts of what a transform produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Entries written, summed over all passes.
    pub entries: usize,
    /// Entries not written because they are the same as the nominative.
    pub skipped: usize,
    /// Plurals marked for review, summed over all passes.
    pub uncertain_plurals: usize,
}

/// Where in an entry the reader of a pass currently is.
enum State<'a> {
    Idle,
    /// A `msgid` was read and waits for its `msgstr`.
    Pending { english: &'a str, line_number: usize },
    /// Inside the header entry (`msgid ""`).
    Header,
}

/// Transforms a catalog with declined phrases.
pub struct Catalog<'a> {
    input: &'a str,
    options: &'a CatalogOptions,
}

impl<'a> Catalog<'a> {
    pub fn new(input: &'a str, options: &'a CatalogOptions) -> Self {
        Catalog { input, options }
    }

    /// Writes all passes to `out`, advisories go to `diagnostics`.
    ///
    /// # Errors
    /// - If the input is not a well-formed catalog. Nothing after the offending line is written.
    /// - If writing fails.
    pub fn transform<W: Write, D: Diagnostics + ?Sized>(
        &self,
        out: &mut W,
        diagnostics: &mut D,
    ) -> Result<Summary, Error> {
        let mut summary = Summary::default();

        for (i, key) in self.options.passes.iter().enumerate() {
            info!("Processing {} {}...", key.article, key.case);
            self.write_pass(*key, i == 0, out, diagnostics, &mut summary)?;
        }

        Ok(summary)
    }

    fn write_pass<W: Write, D: Diagnostics + ?Sized>(
        &self,
        key: DeclensionKey,
        with_header: bool,
        out: &mut W,
        diagnostics: &mut D,
        summary: &mut Summary,
    ) -> Result<(), Error> {
        writeln!(out)?;
        writeln!(out, "################################")?;
        writeln!(out, "# {}", key)?;
        writeln!(out, "################################")?;

        let mut state = State::Idle;

        for (i, raw) in self.input.lines().enumerate() {
            let line_number = i + 1;
            let line = Line::parse(raw).ok_or_else(|| Error::InvalidLine {
                line_number,
                line: raw.to_string(),
            })?;

            state = match (state, line) {
                (State::Header, Line::Translation(_)) | (State::Header, Line::Continuation(_)) => {
                    if with_header {
                        writeln!(out, "{}", raw.trim())?;
                    }
                    State::Header
                }
                (State::Idle, Line::Source("")) => {
                    if with_header {
                        writeln!(out, "{}", raw.trim())?;
                    }
                    State::Header
                }
                (State::Pending { line_number, .. }, Line::Source(_)) => {
                    return Err(Error::UnpairedSource {
                        line_number,
                        line: self.line(line_number),
                    })
                }
                (_, Line::Source(english)) => State::Pending {
                    english,
                    line_number,
                },
                (State::Pending { english, .. }, Line::Translation(german)) => {
                    let entry = Entry::new(english, german);

                    match paradigm::generate(&entry, key, diagnostics) {
                        Some(result) => {
                            self.write_entry(&result, out, summary)?;
                        }
                        None => summary.skipped += 1,
                    }
                    State::Idle
                }
                (_, Line::Translation(_)) => {
                    return Err(Error::UnpairedTranslation {
                        line_number,
                        line: raw.to_string(),
                    })
                }
                (_, Line::Continuation(_)) => {
                    return Err(Error::InvalidLine {
                        line_number,
                        line: raw.to_string(),
                    })
                }
                (state, Line::Context) => state,
                (state, Line::Verbatim(text)) => {
                    writeln!(out, "{}", text)?;
                    match state {
                        State::Header => State::Idle,
                        state => state,
                    }
                }
            };
        }

        if let State::Pending { line_number, .. } = state {
            return Err(Error::UnpairedSource {
                line_number,
                line: self.line(line_number),
            });
        }

        Ok(())
    }

    fn write_entry<W: Write>(
        &self,
        result: &ParadigmResult,
        out: &mut W,
        summary: &mut Summary,
    ) -> Result<(), Error> {
        let placeholder = &self.options.quantity_placeholder;

        writeln!(out)?;
        if result.key.case == Case::Nominative {
            // the nominative is the default context
            writeln!(out, "#msgctxt \"{}\"", result.key.case.context())?;
        } else {
            writeln!(out, "msgctxt \"{}\"", result.key.case.context())?;
        }

        match &result.plural {
            None => {
                writeln!(out, "msgid \"{}\"", result.english)?;
                writeln!(out, "msgstr \"{}\"", result.german)?;
            }
            Some(plural) => {
                writeln!(out, "msgid \"{}\"", result.english)?;
                writeln!(out, "msgid_plural \"{}\"", plural.english.render(placeholder))?;
                writeln!(out, "msgstr[0] \"{}\"", result.german)?;
                writeln!(out, "msgstr[1] \"{}\"", plural.german.render(placeholder))?;

                if !plural.certain {
                    summary.uncertain_plurals += 1;
                    if self.options.mark_uncertain_plurals {
                        writeln!(out, "{}", REVIEW_COMMENT)?;
                    }
                }
            }
        }

        summary.entries += 1;
        Ok(())
    }

    fn line(&self, line_number: usize) -> String {
        self.input
            .lines()
            .nth(line_number - 1)
            .unwrap_or_default()
            .to_string()
    }
}

/// Reads the catalog at `input`, writes the declined catalog to `output` and logs advisories.
pub fn transform_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    options: &CatalogOptions,
) -> Result<Summary, Error> {
    let text = fs::read_to_string(input.as_ref())?;

    info!("Writing output to {}...", output.as_ref().display());
    let mut out = BufWriter::new(fs::File::create(output.as_ref())?);
    let mut diagnostics = LogDiagnostics::new();

    let summary = Catalog::new(&text, options).transform(&mut out, &mut diagnostics)?;
    out.flush()?;

    info!(
        "Wrote {} entries ({} skipped as same as nominative), {} plurals to check, {} advisories.",
        summary.entries,
        summary.skipped,
        summary.uncertain_plurals,
        diagnostics.count()
    );

    Ok(summary)
}
