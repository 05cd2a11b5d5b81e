use super::ast::Formula;
use super::parser;
use crate::misc::log::targets;

/// The nine syntactic categories a string can fall into, in the order the
/// specification's phrase table lists them (§6), not the order the grammar
/// happens to be described in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    NotAFormula,
    FOLAtom,
    FOLNegation,
    Universal,
    Existential,
    FOLBinary,
    PropAtom,
    PropNegation,
    PropBinary,
}

/// Classifies a surface-syntax string by its outermost category. A parse
/// failure of any kind collapses to [Category::NotAFormula]; the typed parse
/// error never escapes past this boundary (see the error handling notes).
pub fn classify(input: &str) -> Category {
    log::trace!(target: targets::CLASSIFY, "classifying {input:?}");
    match parser::parse(input) {
        Ok(f) => category_of(&f),
        Err(_) => Category::NotAFormula,
    }
}

fn category_of(f: &Formula) -> Category {
    match f {
        Formula::PropAtom(_) => Category::PropAtom,
        Formula::PropNeg(_) => Category::PropNegation,
        Formula::PropBin(..) => Category::PropBinary,
        Formula::FolAtom(..) => Category::FOLAtom,
        Formula::FolNeg(_) => Category::FOLNegation,
        Formula::Quant(q, ..) => match q {
            super::ast::Quantifier::Forall => Category::Universal,
            super::ast::Quantifier::Exists => Category::Existential,
        },
        Formula::FolBin(..) => Category::FOLBinary,
    }
}

/// The phrase a [Category] is reported as in PARSE-mode output (§6).
pub fn category_phrase(cat: Category) -> &'static str {
    match cat {
        Category::NotAFormula => "not a formula",
        Category::FOLAtom => "an atom",
        Category::FOLNegation => "a negation of a first order logic formula",
        Category::Universal => "a universally quantified formula",
        Category::Existential => "an existentially quantified formula",
        Category::FOLBinary => "a binary connective first order formula",
        Category::PropAtom => "a proposition",
        Category::PropNegation => "a negation of a propositional formula",
        Category::PropBinary => "a binary connective propositional formula",
    }
}

/// True for the two categories whose PARSE-mode output line is extended
/// with the left/connective/right triple.
pub fn is_binary(cat: Category) -> bool {
    matches!(cat, Category::FOLBinary | Category::PropBinary)
}

/// Left operand of a binary formula, re-serialised to surface syntax.
/// Empty string for any non-binary input.
pub fn lhs(input: &str) -> String {
    match parser::parse(input) {
        Ok(Formula::PropBin(l, ..)) => l.to_string(),
        Ok(Formula::FolBin(l, ..)) => l.to_string(),
        _ => String::new(),
    }
}

/// Main connective symbol of a binary formula. Empty string for any
/// non-binary input.
pub fn con(input: &str) -> String {
    match parser::parse(input) {
        Ok(Formula::PropBin(_, c, _)) => c.to_string(),
        Ok(Formula::FolBin(_, c, _)) => c.to_string(),
        _ => String::new(),
    }
}

/// Right operand of a binary formula, re-serialised to surface syntax.
/// Empty string for any non-binary input.
pub fn rhs(input: &str) -> String {
    match parser::parse(input) {
        Ok(Formula::PropBin(.., r)) => r.to_string(),
        Ok(Formula::FolBin(.., r)) => r.to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prop_atoms_classify() {
        for a in ["p", "q", "r", "s"] {
            assert_eq!(classify(a), Category::PropAtom);
        }
    }

    #[test]
    fn not_a_formula_on_garbage() {
        assert_eq!(classify("p q"), Category::NotAFormula);
        assert_eq!(classify(""), Category::NotAFormula);
        assert_eq!(classify("(p&q&r)"), Category::NotAFormula);
    }

    #[test]
    fn binary_round_trip_via_accessors() {
        let f = "(P(x,y)&~Q(c1,z))";
        assert_eq!(classify(f), Category::FOLBinary);
        let rebuilt = format!("({}{}{})", lhs(f), con(f), rhs(f));
        assert_eq!(rebuilt, f);
    }

    #[test]
    fn quantifiers_classify() {
        assert_eq!(classify("AxP(x,x)"), Category::Universal);
        assert_eq!(classify("EyQ(y,c2)"), Category::Existential);
    }

    #[test]
    fn non_binary_accessors_are_empty() {
        assert_eq!(lhs("p"), "");
        assert_eq!(con("p"), "");
        assert_eq!(rhs("p"), "");
    }
}
