use std::fmt;

/// A first-order variable, one of `x y z w`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Var(pub char);

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A binary predicate symbol, one of `P Q R S`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pred(pub char);

impl fmt::Display for Pred {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An argument to a predicate: either a variable or a witness constant.
///
/// Witness constants are always of the reserved form `c<digits>`; no other
/// constant-producing path exists in the fragment (see [crate::tableau]).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Term {
    Var(Var),
    Const(String),
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Var(v) => write!(f, "{v}"),
            Term::Const(name) => write!(f, "{name}"),
        }
    }
}

/// A binary connective, shared between the propositional and first-order grammars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Conn {
    And,
    Or,
    Imp,
}

impl fmt::Display for Conn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Conn::And => write!(f, "&"),
            Conn::Or => write!(f, "\\/"),
            Conn::Imp => write!(f, "->"),
        }
    }
}

/// A quantifier prefix, `A` (universal) or `E` (existential).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quantifier {
    Forall,
    Exists,
}

impl fmt::Display for Quantifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantifier::Forall => write!(f, "A"),
            Quantifier::Exists => write!(f, "E"),
        }
    }
}

/// A formula of the fragment, parsed once into this tagged tree.
///
/// The propositional and first-order variants are kept structurally
/// distinct (`PropNeg` vs `FolNeg`, `PropBin` vs `FolBin`) because the two
/// grammars never mix: a propositional subformula is never the operand of a
/// first-order connective and vice versa. This makes every recursive match
/// over a negation or binary node exhaustive without a fallback arm.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Formula {
    PropAtom(char),
    PropNeg(Box<Formula>),
    PropBin(Box<Formula>, Conn, Box<Formula>),

    FolAtom(Pred, Term, Term),
    FolNeg(Box<Formula>),
    Quant(Quantifier, Var, Box<Formula>),
    FolBin(Box<Formula>, Conn, Box<Formula>),
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Formula::PropAtom(c) => write!(f, "{c}"),
            Formula::PropNeg(inner) => write!(f, "~{inner}"),
            Formula::PropBin(l, c, r) => write!(f, "({l}{c}{r})"),

            Formula::FolAtom(p, t1, t2) => write!(f, "{p}({t1},{t2})"),
            Formula::FolNeg(inner) => write!(f, "~{inner}"),
            Formula::Quant(q, v, body) => write!(f, "{q}{v}{body}"),
            Formula::FolBin(l, c, r) => write!(f, "({l}{c}{r})"),
        }
    }
}

impl Formula {
    /// An atom or the negation of an atom --- see the literal check in
    /// `tableau::branch`, which mirrors this definition exactly.
    pub fn is_literal(&self) -> bool {
        match self {
            Formula::PropAtom(_) | Formula::FolAtom(..) => true,
            Formula::PropNeg(inner) => matches!(**inner, Formula::PropAtom(_)),
            Formula::FolNeg(inner) => matches!(**inner, Formula::FolAtom(..)),
            _ => false,
        }
    }
}
