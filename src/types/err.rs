/*
Names of the error enums --- for the most part --- overlap with their corresponding modules.

So, intended use is to namespace errors via the module.

For example:
- use crate::types::err::{self};
- ...
- err::Parse::Whitespace
*/

/// Reasons a string failed to parse as a formula of the fragment.
///
/// [crate::syntax::classify] never lets this escape --- any [Parse] error is
/// collapsed to [crate::syntax::Category::NotAFormula] at that boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parse {
    /// The input line was empty.
    Empty,
    /// The input contained whitespace, which is never part of the surface syntax.
    Whitespace,
    /// The input did not match either the propositional or the first-order grammar.
    Malformed,
}

impl std::fmt::Display for Parse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "formula is empty"),
            Self::Whitespace => write!(f, "formula contains whitespace"),
            Self::Malformed => write!(f, "formula is not a formula of the fragment"),
        }
    }
}

impl std::error::Error for Parse {}

/// CLI-level I/O failures. The tableau fragment has no file-based input of
/// its own; this exists only because the CLI driver offers reading formulas
/// from a file as an alternative to standard input.
#[derive(Debug)]
pub enum Io {
    OpenFile {
        path: std::path::PathBuf,
        source: std::io::Error,
    },
}

impl std::fmt::Display for Io {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OpenFile { path, source } => {
                write!(f, "failed to open {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for Io {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::OpenFile { source, .. } => Some(source),
        }
    }
}
