//! The analytic tableau search driver: branch state, the α/β/γ/δ expansion
//! rules, and the top-level [decide] entry point.

use std::collections::{HashMap, HashSet};

use crate::misc::log::targets;
use crate::subst::subst;
use crate::syntax::{Conn, Formula, Quantifier, Var};

/// The sole termination guard. Fixed, not configurable --- see
/// [crate::config].
pub const MAX_CONSTANTS: usize = 10;

/// An open path through the tableau: ⟨F, K, n, X, U⟩.
#[derive(Debug, Clone)]
struct Branch {
    /// F: the current formula list, in processing order.
    formulas: Vec<Formula>,
    /// K: witness constants already in play on this branch.
    constants: Vec<String>,
    /// n: witnesses introduced on this branch so far. `n <= MAX_CONSTANTS`.
    introduced: usize,
    /// X: formulas already fully decomposed on this branch.
    expanded: HashSet<Formula>,
    /// U: per-universal instantiation ledger.
    ledger: HashMap<Formula, HashSet<String>>,
}

impl Branch {
    fn initial(formula: Formula) -> Self {
        Branch {
            formulas: vec![formula],
            constants: Vec::new(),
            introduced: 0,
            expanded: HashSet::new(),
            ledger: HashMap::new(),
        }
    }

    /// `fresh(K, n)`: the first name `c<i>` (`i` starting at `n + 1`) not
    /// already in K. Returns `None` once the witness cap is hit.
    fn fresh_constant(&mut self) -> Option<String> {
        if self.introduced >= MAX_CONSTANTS {
            return None;
        }
        let mut i = self.introduced + 1;
        loop {
            let candidate = format!("c{i}");
            if !self.constants.contains(&candidate) {
                self.constants.push(candidate.clone());
                self.introduced += 1;
                log::trace!(target: targets::BRANCH, "introduced witness {candidate}");
                return Some(candidate);
            }
            i += 1;
        }
    }

    /// The witness reset event: drop universally-quantified formulas and
    /// `~Eν.ψ`-shaped formulas from X. U is untouched.
    fn witness_reset(&mut self) {
        self.expanded.retain(|f| {
            !matches!(f, Formula::Quant(Quantifier::Forall, ..))
                && !matches!(f, Formula::FolNeg(inner) if matches!(**inner, Formula::Quant(Quantifier::Exists, ..)))
        });
    }

    fn is_closed(&self) -> bool {
        for f in &self.formulas {
            let complement = negate_literal_wise(f);
            if self.formulas.contains(&complement) {
                return true;
            }
        }
        false
    }

    /// The first formula that is neither a literal nor already expanded, if any.
    fn next_candidate(&self) -> Option<Formula> {
        self.formulas
            .iter()
            .find(|f| !f.is_literal() && !self.expanded.contains(*f))
            .cloned()
    }
}

/// The syntactic complement of `f`, used by [Branch::is_closed]. Formulas
/// are compared structurally, so `~~ψ` is never treated as the complement
/// of `ψ` --- double negation must first be reduced by the α-rule.
fn negate_literal_wise(f: &Formula) -> Formula {
    match f {
        Formula::PropAtom(_) => Formula::PropNeg(Box::new(f.clone())),
        Formula::PropNeg(inner) => (**inner).clone(),
        Formula::FolAtom(..) => Formula::FolNeg(Box::new(f.clone())),
        Formula::FolNeg(inner) => (**inner).clone(),
        other => Formula::FolNeg(Box::new(other.clone())),
    }
}

/// Outcome of a single search step, used internally to drive the scan loop.
enum StepOutcome {
    /// A rule fired in place; keep scanning this branch.
    Fired,
    /// A β-split pushed two children and the current branch is discarded.
    Forked,
}

/// The three-valued verdict returned by [decide].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Satisfiable,
    Unsatisfiable,
    Undetermined,
}

/// Search-wide counters accumulated over a run of [decide_with_stats], for
/// the CLI's `--detail` diagnostic output (§10.5 of the expanded spec).
/// Purely observational: nothing here feeds back into the verdict.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    /// Branches popped off the tableau stack for saturation, initial branch included.
    pub branches_explored: usize,
    /// Of those, the ones that closed on a complementary pair.
    pub branches_closed: usize,
    /// Fresh witnesses allocated across every branch in the run (δ-steps and
    /// universal bootstraps alike).
    pub witnesses_allocated: usize,
}

/// The verdict paired with the [Stats] gathered while reaching it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub verdict: Verdict,
    pub stats: Stats,
}

/// Runs the tableau search on `formula` to a verdict, discarding the
/// [Stats] gathered along the way. See [decide_with_stats].
pub fn decide(formula: Formula) -> Verdict {
    decide_with_stats(formula).verdict
}

/// Runs the tableau search on `formula`, returning both the verdict and the
/// [Stats] accumulated while reaching it.
///
/// The driver is depth-first over a stack of open branches, following §4.4:
/// saturate the top branch in place, splitting into two children on a
/// β-rule, until a branch is found open and saturated (SAT), or the stack
/// empties (UNSAT, or UNDETERMINED if any branch was curtailed by the
/// witness cap along the way).
pub fn decide_with_stats(formula: Formula) -> Outcome {
    let mut stack = vec![Branch::initial(formula)];
    let mut undetermined = false;
    let mut stats = Stats::default();

    while let Some(mut branch) = stack.pop() {
        stats.branches_explored += 1;
        log::trace!(target: targets::SEARCH, "popped branch with {} formulas", branch.formulas.len());
        loop {
            if branch.is_closed() {
                stats.branches_closed += 1;
                log::trace!(target: targets::BRANCH, "branch closed");
                break;
            }
            let Some(candidate) = branch.next_candidate() else {
                log::trace!(target: targets::SEARCH, "branch open and saturated: SAT");
                return Outcome {
                    verdict: Verdict::Satisfiable,
                    stats,
                };
            };
            match step(&mut branch, &candidate, &mut stack, &mut undetermined, &mut stats) {
                StepOutcome::Fired => continue,
                StepOutcome::Forked => break,
            }
        }
    }

    let verdict = if undetermined {
        Verdict::Undetermined
    } else {
        Verdict::Unsatisfiable
    };
    Outcome { verdict, stats }
}

/// Applies the rule for `f`, the current candidate formula on `branch`.
/// Pushes any children produced by a β-split onto `stack` and discards the
/// current branch in that case (the caller's loop then breaks).
fn step(
    branch: &mut Branch,
    f: &Formula,
    stack: &mut Vec<Branch>,
    undetermined: &mut bool,
    stats: &mut Stats,
) -> StepOutcome {
    match f {
        Formula::PropNeg(inner) => match &**inner {
            Formula::PropNeg(psi) => {
                // double negation (α)
                branch.formulas.push((**psi).clone());
                branch.expanded.insert(f.clone());
                StepOutcome::Fired
            }
            Formula::PropAtom(_) => unreachable!("literals never reach step"),
            Formula::PropBin(phi, conn, psi) => {
                negated_binary(branch, f, phi, *conn, psi, stack)
            }
            _ => unreachable!("PropNeg only ever wraps a propositional formula"),
        },

        Formula::FolNeg(inner) => match &**inner {
            Formula::FolNeg(psi) => {
                branch.formulas.push((**psi).clone());
                branch.expanded.insert(f.clone());
                StepOutcome::Fired
            }
            Formula::FolAtom(..) => unreachable!("literals never reach step"),
            Formula::FolBin(phi, conn, psi) => negated_binary(branch, f, phi, *conn, psi, stack),
            Formula::Quant(Quantifier::Forall, v, psi) => {
                // ~Aνψ -> Eν(~ψ)
                let rewritten = Formula::Quant(
                    Quantifier::Exists,
                    *v,
                    Box::new(Formula::FolNeg(psi.clone())),
                );
                branch.formulas.push(rewritten);
                branch.expanded.insert(f.clone());
                StepOutcome::Fired
            }
            Formula::Quant(Quantifier::Exists, v, psi) => {
                // ~Eνψ -> Aν(~ψ)
                let rewritten = Formula::Quant(
                    Quantifier::Forall,
                    *v,
                    Box::new(Formula::FolNeg(psi.clone())),
                );
                branch.formulas.push(rewritten);
                branch.expanded.insert(f.clone());
                StepOutcome::Fired
            }
            _ => unreachable!("FolNeg only ever wraps a first-order formula"),
        },

        Formula::PropBin(phi, conn, psi) => binary(branch, f, phi, *conn, psi, stack),
        Formula::FolBin(phi, conn, psi) => binary(branch, f, phi, *conn, psi, stack),

        Formula::Quant(Quantifier::Exists, v, psi) => {
            existential(branch, f, *v, psi, undetermined, stats);
            StepOutcome::Fired
        }
        Formula::Quant(Quantifier::Forall, v, psi) => {
            universal(branch, f, *v, psi, undetermined, stats);
            StepOutcome::Fired
        }

        Formula::PropAtom(_) | Formula::FolAtom(..) => {
            unreachable!("literals never reach step")
        }
    }
}

/// `~(φ∘ψ)`. Conjunction negates to a β-split; disjunction and implication
/// negate to an α-decomposition.
fn negated_binary(
    branch: &mut Branch,
    f: &Formula,
    phi: &Formula,
    conn: Conn,
    psi: &Formula,
    stack: &mut Vec<Branch>,
) -> StepOutcome {
    branch.expanded.insert(f.clone());
    match conn {
        Conn::And => {
            let mut left = branch.clone();
            left.formulas.push(negate(phi));
            let mut right = branch.clone();
            right.formulas.push(negate(psi));
            stack.push(left);
            stack.push(right);
            StepOutcome::Forked
        }
        Conn::Or => {
            branch.formulas.push(negate(phi));
            branch.formulas.push(negate(psi));
            StepOutcome::Fired
        }
        Conn::Imp => {
            branch.formulas.push(phi.clone());
            branch.formulas.push(negate(psi));
            StepOutcome::Fired
        }
    }
}

/// `(φ∘ψ)`. Conjunction decomposes in place; disjunction and implication β-split.
fn binary(
    branch: &mut Branch,
    f: &Formula,
    phi: &Formula,
    conn: Conn,
    psi: &Formula,
    stack: &mut Vec<Branch>,
) -> StepOutcome {
    match conn {
        Conn::And => {
            branch.formulas.push(phi.clone());
            branch.formulas.push(psi.clone());
            branch.expanded.insert(f.clone());
            StepOutcome::Fired
        }
        Conn::Or => {
            branch.expanded.insert(f.clone());
            let mut left = branch.clone();
            left.formulas.push(phi.clone());
            let mut right = branch.clone();
            right.formulas.push(psi.clone());
            stack.push(left);
            stack.push(right);
            StepOutcome::Forked
        }
        Conn::Imp => {
            branch.expanded.insert(f.clone());
            let mut left = branch.clone();
            left.formulas.push(negate(phi));
            let mut right = branch.clone();
            right.formulas.push(psi.clone());
            stack.push(left);
            stack.push(right);
            StepOutcome::Forked
        }
    }
}

fn negate(f: &Formula) -> Formula {
    match f {
        Formula::PropAtom(_) | Formula::PropNeg(_) | Formula::PropBin(..) => {
            Formula::PropNeg(Box::new(f.clone()))
        }
        _ => Formula::FolNeg(Box::new(f.clone())),
    }
}

/// δ-rule: `Eνψ`. Out of budget, mark expanded and flip the undetermined
/// flag without expanding; otherwise allocate a fresh witness, substitute,
/// and perform the witness reset.
fn existential(
    branch: &mut Branch,
    f: &Formula,
    v: Var,
    psi: &Formula,
    undetermined: &mut bool,
    stats: &mut Stats,
) {
    branch.expanded.insert(f.clone());
    let Some(witness) = branch.fresh_constant() else {
        log::trace!(target: targets::SEARCH, "witness cap hit at existential");
        *undetermined = true;
        return;
    };
    stats.witnesses_allocated += 1;
    let instance = subst(psi, v, &witness);
    branch.formulas.push(instance);
    branch.witness_reset();
}

/// γ-rule: `Aνψ`. Bootstraps a witness if the branch has none yet, then
/// instantiates against every constant in K not already in this
/// universal's ledger entry.
///
/// Marked expanded only once a pass produces no new instance (`used = K`):
/// that is the saturation check's "requeued implicitly" condition from the
/// formula's own ledger entry rather than a separate flag. A later witness
/// reopens it by growing K past what the ledger covers; the witness reset
/// also drops it from X so a pass that previously found it exhausted scans
/// it again instead of trusting a stale membership test.
fn universal(
    branch: &mut Branch,
    f: &Formula,
    v: Var,
    psi: &Formula,
    undetermined: &mut bool,
    stats: &mut Stats,
) {
    if branch.constants.is_empty() {
        let Some(_witness) = branch.fresh_constant() else {
            log::trace!(target: targets::SEARCH, "witness cap hit bootstrapping universal");
            *undetermined = true;
            branch.expanded.insert(f.clone());
            return;
        };
        stats.witnesses_allocated += 1;
        branch.witness_reset();
    }

    let used = branch.ledger.entry(f.clone()).or_default();
    let pending: Vec<String> = branch
        .constants
        .iter()
        .filter(|c| !used.contains(*c))
        .cloned()
        .collect();

    if pending.is_empty() {
        branch.expanded.insert(f.clone());
        return;
    }

    for c in pending {
        branch.ledger.get_mut(f).unwrap().insert(c.clone());
        let instance = subst(psi, v, &c);
        branch.formulas.push(instance);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::parse;

    fn run(src: &str) -> Verdict {
        decide(parse(src).unwrap())
    }

    #[test]
    fn single_proposition_is_satisfiable() {
        assert_eq!(run("p"), Verdict::Satisfiable);
    }

    #[test]
    fn contradiction_is_unsatisfiable() {
        assert_eq!(run("(p&~p)"), Verdict::Unsatisfiable);
    }

    #[test]
    fn implication_tautology_like_split_is_satisfiable() {
        assert_eq!(run("(p->p)"), Verdict::Satisfiable);
    }

    #[test]
    fn double_negation_then_split_is_satisfiable() {
        assert_eq!(run("~~(p\\/q)"), Verdict::Satisfiable);
    }

    #[test]
    fn universal_bootstrap_is_satisfiable() {
        assert_eq!(run("AxP(x,x)"), Verdict::Satisfiable);
    }

    #[test]
    fn universal_against_explicit_constant_is_unsatisfiable() {
        assert_eq!(run("(AxP(x,x)&~P(c1,c1))"), Verdict::Unsatisfiable);
    }

    #[test]
    fn existential_then_universal_is_satisfiable() {
        assert_eq!(run("ExAyP(x,y)"), Verdict::Satisfiable);
    }

    /// Ten nested existentials (distinct bound variables, so none shadow one
    /// another) must be fully unpacked, one fresh witness apiece, before an
    /// eleventh existential sibling is even reached --- exhausting
    /// MAX_CONSTANTS exactly there. The branch still goes on to close on an
    /// unrelated, witness-independent contradiction (`S(c1,c1)` against its
    /// own negation), so this is not a branch a completed search would ever
    /// leave open; it is the cap having been hit along the way that forces
    /// undetermined instead of unsatisfiable.
    const WITNESS_EXHAUSTING_CLOSED_BRANCH: &str =
        "ExEyEzEwExEyEzEwExEy(ExP(x,x)&(S(c1,c1)&~S(c1,c1)))";

    #[test]
    fn witness_cap_exhaustion_is_undetermined() {
        assert_eq!(
            run(WITNESS_EXHAUSTING_CLOSED_BRANCH),
            Verdict::Undetermined
        );
    }

    #[test]
    fn witness_cap_exhaustion_allocates_exactly_the_cap() {
        let outcome = decide_with_stats(parse(WITNESS_EXHAUSTING_CLOSED_BRANCH).unwrap());
        assert_eq!(outcome.verdict, Verdict::Undetermined);
        assert_eq!(outcome.stats.witnesses_allocated, MAX_CONSTANTS);
    }
}
