/*!
Clauses: disjunctions of literals, implicitly universally quantified over their free variables.

The empty clause (⊥) signals a refutation. Every clause also carries its provenance — how it came to be,
either as a normalised input formula or as the output of an inference rule — which [crate::proof] later walks
to reconstruct a derivation.

Clauses are keyed by a small, `Copy`, totally-ordered [ClauseId] assigned at insertion into a
[ClauseDB](crate::db::ClauseDB), rather than addressed by a bare, reused index.
*/

use std::collections::BTreeSet;
use std::fmt;
use std::rc::Rc;

use crate::substitution::Substitution;

use super::literal::Literal;
use super::Name;

/// The index of a clause within a [ClauseDB](crate::db::ClauseDB).
///
/// Assigned once, in insertion order, and never reused; this is what makes the FIFO tie-break of
/// [clause selection](crate::resolution) well-defined (smaller id, earlier insertion).
pub type ClauseId = u64;

/// How a clause came to exist.
#[derive(Clone, Debug)]
pub enum ClauseSource {
    /// The clause is one conjunct of the clausification of an input formula (an axiom, a lemma, or the
    /// negated goal). The string names which formula, for diagnostics.
    Input(Rc<str>),

    /// The clause is the resolvent of `left` and `right` under `substitution`.
    Resolution {
        left: ClauseId,
        right: ClauseId,
        substitution: Substitution,
    },

    /// The clause is a factor of `parent` under `substitution`.
    Factor {
        parent: ClauseId,
        substitution: Substitution,
    },
}

impl fmt::Display for ClauseSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClauseSource::Input(label) => write!(f, "input({label})"),
            ClauseSource::Resolution { left, right, .. } => {
                write!(f, "resolution({left}, {right})")
            }
            ClauseSource::Factor { parent, .. } => write!(f, "factor({parent})"),
        }
    }
}

/// A disjunction of literals, implicitly universally quantified over its free variables.
#[derive(Clone, Debug)]
pub struct Clause {
    /// The stable identifier of the clause within its database.
    pub id: ClauseId,

    /// The literals of the clause. An empty vector is the empty clause, ⊥.
    pub literals: Vec<Literal>,

    /// How the clause was derived.
    pub source: ClauseSource,
}

impl Clause {
    /// A fresh clause.
    pub fn new(id: ClauseId, literals: Vec<Literal>, source: ClauseSource) -> Self {
        Clause {
            id,
            literals,
            source,
        }
    }

    /// True iff the clause is the empty clause, ⊥.
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// The number of literals in the clause.
    pub fn size(&self) -> usize {
        self.literals.len()
    }

    /// A rough measure of the clause's weight for the purpose of [given-clause selection](crate::resolution):
    /// the number of literals, plus the total number of symbol occurrences across those literals.
    pub fn weight(&self) -> usize {
        self.size() + self.literals.iter().map(literal_symbol_count).sum::<usize>()
    }

    /// True iff the clause contains both polarities of some atom — it is valid regardless of the model and
    /// carries no information for refutation.
    pub fn is_tautology(&self) -> bool {
        for (i, a) in self.literals.iter().enumerate() {
            for b in &self.literals[i + 1..] {
                if a.is_complement_of(b) {
                    return true;
                }
            }
        }
        false
    }

    /// The names of every free variable in the clause (all variables in a clause are free; the universal
    /// quantification over them is implicit, per §3 invariant 4).
    pub fn free_vars(&self) -> BTreeSet<Name> {
        let mut vars = BTreeSet::new();
        for literal in &self.literals {
            vars.extend(literal.free_vars());
        }
        vars
    }
}

fn literal_symbol_count(literal: &Literal) -> usize {
    fn term_symbols(term: &super::term::Term) -> usize {
        1 + term
            .args()
            .unwrap_or(&[])
            .iter()
            .map(term_symbols)
            .sum::<usize>()
    }
    1 + literal.atom().args.iter().map(term_symbols).sum::<usize>()
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.literals.is_empty() {
            return write!(f, "⊥");
        }
        for (i, literal) in self.literals.iter().enumerate() {
            if i > 0 {
                write!(f, " ∨ ")?;
            }
            write!(f, "{literal}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::literal::Atom;

    #[test]
    fn empty_clause_displays_as_falsum() {
        let c = Clause::new(0, vec![], ClauseSource::Input(Rc::from("goal")));
        assert!(c.is_empty());
        assert_eq!(c.to_string(), "⊥");
    }

    #[test]
    fn tautology_detection() {
        let atom = Atom::new("P", vec![]);
        let c = Clause::new(
            0,
            vec![Literal::positive(atom.clone()), Literal::negative(atom)],
            ClauseSource::Input(Rc::from("axiom")),
        );
        assert!(c.is_tautology());
    }
}
