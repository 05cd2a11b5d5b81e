//! Miscellaneous items related to [logging](log).
//!
//! Calls to the log macro are made throughout the library, at rule-firing
//! granularity: one per parse, substitution, branch lifecycle event, and
//! tableau step.
//!
//! Note, no log implementation is provided. The CLI optionally initialises
//! [env_logger] behind the `log` feature. For more details, see [log].

/// Targets to be used within a [log] macro.
pub mod targets {
    pub const CLASSIFY: &str = "classify";
    pub const SUBST: &str = "subst";
    pub const BRANCH: &str = "branch";
    pub const SEARCH: &str = "search";
}
