use super::ast::{Conn, Formula, Pred, Quantifier, Term, Var};
use crate::types::err;

const PROP_ATOMS: &str = "pqrs";
const FOL_VARS: &str = "xyzw";
const PREDICATES: &str = "PQRS";

/// Parses a complete formula string into a [Formula].
///
/// Tries the propositional grammar first; if that fails, the first-order
/// grammar; the two are mutually exclusive at the top level so trying both
/// never produces ambiguity. Whitespace is rejected outright: the surface
/// syntax never tolerates it.
pub fn parse(input: &str) -> Result<Formula, err::Parse> {
    if input.is_empty() {
        return Err(err::Parse::Empty);
    }
    if input.bytes().any(|b| b.is_ascii_whitespace()) {
        return Err(err::Parse::Whitespace);
    }
    if let Some(f) = parse_prop(input) {
        return Ok(f);
    }
    if let Some(f) = parse_fol(input) {
        return Ok(f);
    }
    Err(err::Parse::Malformed)
}

/// Finds the depth-1 occurrence of `&`, `\/`, or `->` in a `(...)`-wrapped
/// string. Returns the byte offset and the width of the connective token.
/// All characters in the fragment's alphabet are ASCII, so byte indexing
/// never crosses a char boundary.
fn main_connective(s: &str) -> Option<(usize, Conn, usize)> {
    let bytes = s.as_bytes();
    let mut depth: i32 = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'(' => {
                depth += 1;
                i += 1;
            }
            b')' => {
                depth -= 1;
                i += 1;
            }
            b'&' if depth == 1 => return Some((i, Conn::And, 1)),
            b'\\' if depth == 1 && bytes.get(i + 1) == Some(&b'/') => {
                return Some((i, Conn::Or, 2))
            }
            b'-' if depth == 1 && bytes.get(i + 1) == Some(&b'>') => {
                return Some((i, Conn::Imp, 2))
            }
            _ => i += 1,
        }
    }
    None
}

/// Splits a `(...)`-wrapped binary formula into its left and right operand
/// substrings and connective, using [main_connective] --- the same locator
/// the classifier and the `lhs`/`con`/`rhs` accessors rely on.
fn split_binary(s: &str) -> Option<(&str, Conn, &str)> {
    if !(s.starts_with('(') && s.ends_with(')') && s.len() >= 2) {
        return None;
    }
    let (pos, conn, width) = main_connective(s)?;
    let left = &s[1..pos];
    let right = &s[pos + width..s.len() - 1];
    Some((left, conn, right))
}

fn parse_prop(s: &str) -> Option<Formula> {
    if s.len() == 1 && PROP_ATOMS.contains(s) {
        return Some(Formula::PropAtom(s.chars().next().unwrap()));
    }
    if let Some(rest) = s.strip_prefix('~') {
        let inner = parse_prop(rest)?;
        return Some(Formula::PropNeg(Box::new(inner)));
    }
    let (left, conn, right) = split_binary(s)?;
    let l = parse_prop(left)?;
    let r = parse_prop(right)?;
    Some(Formula::PropBin(Box::new(l), conn, Box::new(r)))
}

fn parse_fol(s: &str) -> Option<Formula> {
    if let Some(f) = parse_fol_atom(s) {
        return Some(f);
    }
    if let Some(rest) = s.strip_prefix('~') {
        let inner = parse_fol(rest)?;
        return Some(Formula::FolNeg(Box::new(inner)));
    }
    let first = s.as_bytes()[0] as char;
    if first == 'A' || first == 'E' {
        if s.len() < 2 {
            return None;
        }
        let var = s.as_bytes()[1] as char;
        if !FOL_VARS.contains(var) {
            return None;
        }
        let sub = parse_fol(&s[2..])?;
        let quant = if first == 'A' {
            Quantifier::Forall
        } else {
            Quantifier::Exists
        };
        return Some(Formula::Quant(quant, Var(var), Box::new(sub)));
    }
    let (left, conn, right) = split_binary(s)?;
    let l = parse_fol(left)?;
    let r = parse_fol(right)?;
    Some(Formula::FolBin(Box::new(l), conn, Box::new(r)))
}

fn parse_fol_atom(s: &str) -> Option<Formula> {
    let bytes = s.as_bytes();
    if bytes.len() < 6 {
        // Shortest well-formed atom: P(x,y)
        return None;
    }
    let pred = bytes[0] as char;
    if !PREDICATES.contains(pred) {
        return None;
    }
    if bytes[1] != b'(' || *bytes.last().unwrap() != b')' {
        return None;
    }
    let inner = &s[2..s.len() - 1];
    let comma = inner.find(',')?;
    let (left, right) = (&inner[..comma], &inner[comma + 1..]);
    let t1 = parse_term(left)?;
    let t2 = parse_term(right)?;
    Some(Formula::FolAtom(Pred(pred), t1, t2))
}

/// A term is a single alphanumeric token: a variable from `x y z w`, or a
/// witness constant matching `c<digits>`. This is the strict reading of
/// §4.1; see the note there on the looser multi-character check the source
/// this fragment is modelled on used but never actually exercised.
fn parse_term(tok: &str) -> Option<Term> {
    if tok.is_empty() {
        return None;
    }
    if tok.len() == 1 {
        let c = tok.chars().next().unwrap();
        if FOL_VARS.contains(c) {
            return Some(Term::Var(Var(c)));
        }
    }
    let rest = tok.strip_prefix('c')?;
    if !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()) {
        return Some(Term::Const(tok.to_string()));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_whitespace() {
        assert_eq!(parse("p q"), Err(err::Parse::Whitespace));
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(parse(""), Err(err::Parse::Empty));
    }

    #[test]
    fn rejects_unbalanced_parens() {
        assert_eq!(parse("(p&q"), Err(err::Parse::Malformed));
    }

    #[test]
    fn rejects_bad_term() {
        // 'a' is neither a variable nor a witness constant.
        assert_eq!(parse("P(a,x)"), Err(err::Parse::Malformed));
    }

    #[test]
    fn rejects_lone_c() {
        assert_eq!(parse("P(c,x)"), Err(err::Parse::Malformed));
    }

    #[test]
    fn accepts_witness_constant() {
        assert!(parse("P(c12,x)").is_ok());
    }

    #[test]
    fn rejects_extra_depth1_connective() {
        // Two depth-1 connectives: the leftmost governs but the operands don't parse.
        assert_eq!(parse("(p&q&r)"), Err(err::Parse::Malformed));
    }
}
