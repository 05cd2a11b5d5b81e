//! Configuration details.
//!
//! The fragment's own termination guard (the witness cap, [tableau::MAX_CONSTANTS](crate::tableau::MAX_CONSTANTS))
//! is fixed and is deliberately not a field here: §6 of the specification this
//! crate implements requires it not be configurable via any external interface.
//! `Config` carries only the ambient knobs the CLI driver needs.

/// Ambient configuration for the command-line driver.
///
/// Distinct from the per-formula query modes (PARSE / SAT), which are read
/// off the first line of input rather than configured --- see
/// [crate::report::Mode].
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// How much diagnostic detail (branch and witness counts) the CLI prints
    /// to stderr after a verdict. `0` prints nothing beyond the verdict line.
    pub detail: u8,
}

impl Default for Config {
    fn default() -> Self {
        Config { detail: 0 }
    }
}
