use semantic_tableau::report::{self, Mode};
use semantic_tableau::syntax::{self, Category};
use semantic_tableau::tableau::{self, Verdict};

fn decide(src: &str) -> Verdict {
    tableau::decide(syntax::parse(src).unwrap())
}

mod classifier {
    use super::*;

    #[test]
    fn propositional_atoms() {
        for a in ["p", "q", "r", "s"] {
            assert_eq!(syntax::classify(a), Category::PropAtom);
        }
    }

    #[test]
    fn rejects_whitespace_unbalanced_parens_and_bad_terms() {
        for bad in ["p q", "(p&q", "P(a,x)", "(p&q&r)", ""] {
            assert_eq!(syntax::classify(bad), Category::NotAFormula, "{bad:?}");
        }
    }

    #[test]
    fn binary_accessors_round_trip() {
        for src in ["(p&q)", "(P(x,y)\\/Q(c1,z))"] {
            let rebuilt = format!(
                "({}{}{})",
                syntax::lhs(src),
                syntax::con(src),
                syntax::rhs(src)
            );
            assert_eq!(rebuilt, src);
        }
    }
}

mod search {
    use super::*;

    #[test]
    fn single_proposition_is_satisfiable() {
        assert_eq!(decide("p"), Verdict::Satisfiable);
    }

    #[test]
    fn direct_contradiction_is_unsatisfiable() {
        assert_eq!(decide("(p&~p)"), Verdict::Unsatisfiable);
    }

    #[test]
    fn implication_beta_split_is_satisfiable() {
        assert_eq!(decide("(p->p)"), Verdict::Satisfiable);
    }

    #[test]
    fn double_negation_then_split_is_satisfiable() {
        assert_eq!(decide("~~(p\\/q)"), Verdict::Satisfiable);
    }

    #[test]
    fn universal_bootstrap_is_satisfiable() {
        assert_eq!(decide("AxP(x,x)"), Verdict::Satisfiable);
    }

    #[test]
    fn universal_against_explicit_witness_closes() {
        assert_eq!(decide("(AxP(x,x)&~P(c1,c1))"), Verdict::Unsatisfiable);
    }

    #[test]
    fn existential_then_universal_is_satisfiable() {
        assert_eq!(decide("ExAyP(x,y)"), Verdict::Satisfiable);
    }

    #[test]
    fn universal_over_a_disjunctive_body_is_satisfiable() {
        assert_eq!(decide("Ax(P(x,x)\\/Q(x,x))"), Verdict::Satisfiable);
    }

    #[test]
    fn witness_cap_exhaustion_is_undetermined() {
        // Ten nested existentials (distinct bound variables) consume one
        // fresh witness each before an eleventh, sibling existential is
        // reached and exhausts MAX_CONSTANTS. The branch still closes
        // afterward on a witness-independent contradiction, so only the
        // cap hit along the way distinguishes this from unsatisfiable.
        let src = "ExEyEzEwExEyEzEwExEy(ExP(x,x)&(S(c1,c1)&~S(c1,c1)))";
        assert_eq!(decide(src), Verdict::Undetermined);
    }
}

mod protocol {
    use super::*;

    #[test]
    fn parse_mode_only() {
        let mode = Mode::from_header("PARSE");
        assert_eq!(
            report::respond(mode, "p"),
            vec!["p is a proposition.".to_string()]
        );
    }

    #[test]
    fn sat_mode_only() {
        let mode = Mode::from_header("SAT");
        assert_eq!(
            report::respond(mode, "(p&~p)"),
            vec!["(p&~p) is not satisfiable.".to_string()]
        );
    }

    #[test]
    fn both_modes_emit_two_lines_in_order() {
        let mode = Mode::from_header("PARSE SAT");
        let lines = report::respond(mode, "p");
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("p is a proposition"));
        assert!(lines[1].starts_with("p is satisfiable"));
    }

    #[test]
    fn invalid_formula_reported_the_same_way_in_both_modes() {
        let mode = Mode::from_header("SAT");
        assert_eq!(
            report::respond(mode, "p q"),
            vec!["p q is not a formula.".to_string()]
        );
    }
}
