/*!
Atoms and literals.

An [Atom] is a predicate applied to an ordered sequence of terms — the non-negated form of a [Literal].
A literal pairs an atom with a polarity; negation flips the polarity rather than wrapping the atom in a
further [Not](super::formula::FormulaNode::Not) node, which is what makes literals convenient keys during
resolution and subsumption.

Literals order by atom first and polarity second, with `false` ordered before `true`.
*/

use std::collections::BTreeSet;
use std::fmt;

use super::term::Term;
use super::Name;

/// A predicate applied to an ordered sequence of terms.
#[derive(Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Atom {
    /// The predicate symbol.
    pub predicate: Name,

    /// The ordered arguments of the predicate.
    pub args: Vec<Term>,
}

impl Atom {
    /// A fresh atom.
    pub fn new(predicate: impl AsRef<str>, args: Vec<Term>) -> Self {
        Atom {
            predicate: super::name(predicate),
            args,
        }
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.args.is_empty() {
            write!(f, "{}", self.predicate)
        } else {
            write!(f, "{}(", self.predicate)?;
            for (i, arg) in self.args.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{arg}")?;
            }
            write!(f, ")")
        }
    }
}

/// A signed atom: either an atom, or its negation.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Literal {
    polarity: bool,
    atom: Atom,
}

impl Literal {
    /// A fresh literal, pairing an atom with a polarity.
    pub fn new(polarity: bool, atom: Atom) -> Self {
        Literal { polarity, atom }
    }

    /// A positive literal.
    pub fn positive(atom: Atom) -> Self {
        Literal::new(true, atom)
    }

    /// A negative literal.
    pub fn negative(atom: Atom) -> Self {
        Literal::new(false, atom)
    }

    /// The polarity of the literal.
    pub fn polarity(&self) -> bool {
        self.polarity
    }

    /// The atom of the literal.
    pub fn atom(&self) -> &Atom {
        &self.atom
    }

    /// The complement of the literal: same atom, flipped polarity.
    pub fn negate(&self) -> Literal {
        Literal::new(!self.polarity, self.atom.clone())
    }

    /// True if `self` and `other` are complementary: same atom, opposite polarity.
    pub fn is_complement_of(&self, other: &Literal) -> bool {
        self.polarity != other.polarity && self.atom == other.atom
    }

    /// The names of every variable occurring (at any depth) in the literal's arguments.
    pub fn free_vars(&self) -> BTreeSet<Name> {
        let mut vars = BTreeSet::new();
        for arg in &self.atom.args {
            collect_term_vars(arg, &mut vars);
        }
        vars
    }
}

fn collect_term_vars(term: &Term, vars: &mut BTreeSet<Name>) {
    match term.as_var() {
        Some(name) => {
            vars.insert(name.clone());
        }
        None => {
            for arg in term.args().unwrap_or(&[]) {
                collect_term_vars(arg, vars);
            }
        }
    }
}

impl PartialOrd for Literal {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Literal {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.atom
            .cmp(&other.atom)
            .then_with(|| self.polarity.cmp(&other.polarity))
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.polarity {
            true => write!(f, "{}", self.atom),
            false => write!(f, "¬{}", self.atom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negate_flips_polarity_only() {
        let atom = Atom::new("P", vec![Term::var("x")]);
        let lit = Literal::positive(atom.clone());
        let neg = lit.negate();
        assert!(!neg.polarity());
        assert_eq!(neg.atom(), &atom);
        assert!(lit.is_complement_of(&neg));
    }

    #[test]
    fn ordering_orders_false_before_true() {
        let atom = Atom::new("P", vec![]);
        let neg = Literal::negative(atom.clone());
        let pos = Literal::positive(atom);
        assert!(neg < pos);
    }
}
