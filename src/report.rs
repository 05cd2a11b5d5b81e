//! Formats the two query responses into the fixed line protocol of §6: the
//! PARSE-mode classification line and the SAT-mode verdict line.

use crate::syntax::{self, Category};
use crate::tableau::Verdict;

/// Which query mode(s) are active for a run, read off the first input line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Mode {
    pub parse: bool,
    pub sat: bool,
}

impl Mode {
    /// A header line enables PARSE mode if it contains the substring
    /// `PARSE`, SAT mode if it contains `SAT`; both may be present at once.
    pub fn from_header(header: &str) -> Mode {
        Mode {
            parse: header.contains("PARSE"),
            sat: header.contains("SAT"),
        }
    }
}

/// `<formula> is <category-phrase>.`, with the left/connective/right triple
/// appended for the two binary categories.
pub fn parse_line(formula: &str) -> String {
    let cat = syntax::classify(formula);
    let phrase = syntax::category_phrase(cat);
    if syntax::is_binary(cat) {
        format!(
            "{formula} is {phrase}. Its left hand side is {}, its connective is {}, and its right hand side is {}.",
            syntax::lhs(formula),
            syntax::con(formula),
            syntax::rhs(formula),
        )
    } else {
        format!("{formula} is {phrase}.")
    }
}

/// `<formula> is not a formula.` if invalid, else `<formula> <verdict-phrase>.`
pub fn sat_line(formula: &str) -> String {
    match syntax::parse(formula) {
        Err(_) => format!("{formula} is not a formula."),
        Ok(f) => {
            let verdict = crate::tableau::decide(f);
            format!("{formula} {}.", verdict_phrase(verdict))
        }
    }
}

fn verdict_phrase(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Unsatisfiable => "is not satisfiable",
        Verdict::Satisfiable => "is satisfiable",
        Verdict::Undetermined => "may or may not be satisfiable",
    }
}

/// Formats every response line a single input formula produces under `mode`,
/// in PARSE-then-SAT order when both are active.
pub fn respond(mode: Mode, formula: &str) -> Vec<String> {
    let mut lines = Vec::new();
    if mode.parse {
        lines.push(parse_line(formula));
    }
    if mode.sat {
        lines.push(sat_line(formula));
    }
    lines
}
