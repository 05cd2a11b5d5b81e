//! A library for deciding satisfiability of formulas written in a restricted
//! fragment of first-order logic by an analytic tableau (semantic tree)
//! procedure, together with a syntax classifier for the same fragment.
//!
//! # The fragment
//!
//! - Propositional atoms `p q r s`, combined with `~`, `&`, `\/`, `->`.
//! - First-order atoms `P(t,u)` for predicates `P Q R S` over binary
//!   argument pairs, where each argument is a variable from `x y z w` or a
//!   witness constant `c<digits>`, combined with `~`, `&`, `\/`, `->`, and
//!   the quantifiers `A` (universal) and `E` (existential).
//!
//! No equality, no function symbols, no predicates of other arities.
//!
//! # The pieces
//!
//! - [syntax] parses a formula once into a tagged [syntax::Formula] tree,
//!   classifies it by [syntax::Category], and exposes the `lhs`/`con`/`rhs`
//!   accessors for binary formulas.
//! - [subst] performs capture-avoiding substitution of a constant for a
//!   bound variable.
//! - [tableau] is the branch/expansion state machine: the search driver that
//!   decides [tableau::Verdict::Satisfiable], [tableau::Verdict::Unsatisfiable],
//!   or [tableau::Verdict::Undetermined].
//! - [report] formats the two query responses (parse classification, SAT
//!   verdict) in the fixed line protocol consumed by the CLI.
//!
//! Private items are documented.

pub mod config;
pub mod report;
pub mod subst;
pub mod syntax;
pub mod tableau;

pub mod types;

pub mod misc;
