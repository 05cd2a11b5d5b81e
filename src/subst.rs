//! Capture-avoiding substitution of a bound variable by a witness constant.

use crate::misc::log::targets;
use crate::syntax::{Formula, Term, Var};

/// Replaces every free occurrence of `var` in `formula` with the constant
/// `name`, respecting quantifier shadowing: a quantifier rebinding `var`
/// stops the substitution from reaching its body.
pub fn subst(formula: &Formula, var: Var, name: &str) -> Formula {
    log::trace!(target: targets::SUBST, "subst({formula}, {var}, {name})");
    subst_inner(formula, var, name)
}

fn subst_inner(formula: &Formula, var: Var, name: &str) -> Formula {
    match formula {
        Formula::PropAtom(_) => formula.clone(),
        Formula::PropNeg(inner) => Formula::PropNeg(Box::new(subst_inner(inner, var, name))),
        Formula::PropBin(l, c, r) => Formula::PropBin(
            Box::new(subst_inner(l, var, name)),
            *c,
            Box::new(subst_inner(r, var, name)),
        ),

        Formula::FolAtom(p, t1, t2) => {
            Formula::FolAtom(*p, subst_term(t1, var, name), subst_term(t2, var, name))
        }
        Formula::FolNeg(inner) => Formula::FolNeg(Box::new(subst_inner(inner, var, name))),
        Formula::Quant(q, bound, body) => {
            if *bound == var {
                formula.clone()
            } else {
                Formula::Quant(*q, *bound, Box::new(subst_inner(body, var, name)))
            }
        }
        Formula::FolBin(l, c, r) => Formula::FolBin(
            Box::new(subst_inner(l, var, name)),
            *c,
            Box::new(subst_inner(r, var, name)),
        ),
    }
}

fn subst_term(term: &Term, var: Var, name: &str) -> Term {
    match term {
        Term::Var(v) if *v == var => Term::Const(name.to_string()),
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::parse;

    #[test]
    fn replaces_matching_atom_arguments() {
        let f = parse("P(x,y)").unwrap();
        let out = subst(&f, Var('x'), "c1");
        assert_eq!(out.to_string(), "P(c1,y)");
    }

    #[test]
    fn shadowed_quantifier_blocks_substitution() {
        let f = parse("AxP(x,x)").unwrap();
        let out = subst(&f, Var('x'), "c1");
        assert_eq!(out, f);
    }

    #[test]
    fn recurses_through_unrelated_quantifier() {
        let f = parse("AyP(x,y)").unwrap();
        let out = subst(&f, Var('x'), "c1");
        assert_eq!(out.to_string(), "AyP(c1,y)");
    }

    #[test]
    fn commutes_with_binary_structure() {
        let f = parse("(P(x,y)&Q(x,y))").unwrap();
        let out = subst(&f, Var('x'), "c1");
        assert_eq!(out.to_string(), "(P(c1,y)&Q(c1,y))");
    }

    #[test]
    fn idempotent_once_variable_is_gone() {
        let f = parse("P(x,y)").unwrap();
        let once = subst(&f, Var('x'), "c1");
        let twice = subst(&once, Var('x'), "c1");
        assert_eq!(once, twice);
    }
}
