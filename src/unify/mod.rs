/*!
Robinson unification: computing a most general unifier (MGU) for two terms, atoms, or literals.

Unification failure is an ordinary value, not a control-flow exception — callers branch on `Result` the way
any fallible, expected-to-sometimes-fail computation is handled, and [UnifyError] never escapes into
[crate::types::err::ErrorKind] (contrast [crate::normalise], whose failures are genuine build errors).

The algorithm is the standard recursive decomposition with an occurs-check: a small `_rec` worker carries the
accumulated substitution downward so each step applies it to drive instantiated variables out of later
comparisons before they are compared.
*/

use std::fmt;

use crate::structures::literal::{Atom, Literal};
use crate::structures::term::{Term, TermNode};
use crate::structures::Name;
use crate::substitution::Substitution;

/// Why unification failed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum UnifyError {
    /// The two terms have different function symbols or arities, and neither is a variable.
    Clash(Term, Term),

    /// Binding a variable to a term would make the term contain itself.
    Occurs(Name, Term),

    /// The two atoms have different predicate symbols or arities.
    PredicateMismatch(Atom, Atom),

    /// The two literals have different polarity.
    PolarityMismatch(Literal, Literal),
}

impl fmt::Display for UnifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnifyError::Clash(a, b) => write!(f, "cannot unify {a} with {b}"),
            UnifyError::Occurs(var, term) => write!(f, "{var} occurs in {term}"),
            UnifyError::PredicateMismatch(a, b) => {
                write!(f, "predicate mismatch: {a} vs {b}")
            }
            UnifyError::PolarityMismatch(a, b) => {
                write!(f, "polarity mismatch: {a} vs {b}")
            }
        }
    }
}

/// Computes the most general unifier of two terms, if one exists.
pub fn unify(a: &Term, b: &Term) -> Result<Substitution, UnifyError> {
    unify_rec(a, b, Substitution::empty())
}

fn unify_rec(a: &Term, b: &Term, acc: Substitution) -> Result<Substitution, UnifyError> {
    let a = acc.apply_term(a);
    let b = acc.apply_term(b);

    match (a.node(), b.node()) {
        (TermNode::Var(x), TermNode::Var(y)) if x == y => Ok(acc),
        (TermNode::Var(x), _) => bind(x.clone(), b.clone(), acc),
        (_, TermNode::Var(y)) => bind(y.clone(), a.clone(), acc),
        (TermNode::Fun(f, fargs), TermNode::Fun(g, gargs)) => {
            if f != g || fargs.len() != gargs.len() {
                return Err(UnifyError::Clash(a.clone(), b.clone()));
            }
            let mut acc = acc;
            for (x, y) in fargs.iter().zip(gargs.iter()) {
                acc = unify_rec(x, y, acc)?;
            }
            Ok(acc)
        }
    }
}

fn bind(var: Name, term: Term, mut acc: Substitution) -> Result<Substitution, UnifyError> {
    if let TermNode::Var(name) = term.node() {
        if *name == var {
            return Ok(acc);
        }
    }
    if occurs(&var, &term) {
        return Err(UnifyError::Occurs(var, term));
    }

    let step = Substitution::singleton(var.clone(), term.clone());
    let mut renewed = Substitution::empty();
    for (v, t) in acc.iter() {
        renewed.insert(v.clone(), step.apply_term(t));
    }
    renewed.insert(var, term);
    acc = renewed;
    Ok(acc)
}

fn occurs(var: &Name, term: &Term) -> bool {
    match term.node() {
        TermNode::Var(name) => name == var,
        TermNode::Fun(_, args) => args.iter().any(|a| occurs(var, a)),
    }
}

/// Computes the most general unifier of two atoms, requiring the same predicate and arity.
pub fn unify_atoms(a: &Atom, b: &Atom) -> Result<Substitution, UnifyError> {
    if a.predicate != b.predicate || a.args.len() != b.args.len() {
        return Err(UnifyError::PredicateMismatch(a.clone(), b.clone()));
    }
    let mut acc = Substitution::empty();
    for (x, y) in a.args.iter().zip(b.args.iter()) {
        acc = unify_rec(x, y, acc)?;
    }
    Ok(acc)
}

/// Computes the most general unifier of two literals, requiring opposite polarity (the case resolution
/// needs) and unifiable atoms.
pub fn unify_complementary(a: &Literal, b: &Literal) -> Result<Substitution, UnifyError> {
    if a.polarity() == b.polarity() {
        return Err(UnifyError::PolarityMismatch(a.clone(), b.clone()));
    }
    unify_atoms(a.atom(), b.atom())
}

/// Computes the most general unifier of two literals of the *same* polarity (the case factoring needs).
pub fn unify_literals(a: &Literal, b: &Literal) -> Result<Substitution, UnifyError> {
    if a.polarity() != b.polarity() {
        return Err(UnifyError::PolarityMismatch(a.clone(), b.clone()));
    }
    unify_atoms(a.atom(), b.atom())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unifies_variable_with_constant() {
        let x = Term::var("x");
        let a = Term::fun("a", vec![]);
        let mgu = unify(&x, &a).unwrap();
        assert_eq!(mgu.apply_term(&x), a);
    }

    #[test]
    fn unifies_nested_function_terms() {
        let t1 = Term::fun("f", vec![Term::var("x"), Term::fun("a", vec![])]);
        let t2 = Term::fun("f", vec![Term::fun("b", vec![]), Term::var("y")]);
        let mgu = unify(&t1, &t2).unwrap();
        assert_eq!(mgu.apply_term(&t1), mgu.apply_term(&t2));
    }

    #[test]
    fn clash_on_different_function_symbols() {
        let t1 = Term::fun("f", vec![Term::var("x")]);
        let t2 = Term::fun("g", vec![Term::var("x")]);
        assert!(matches!(unify(&t1, &t2), Err(UnifyError::Clash(..))));
    }

    #[test]
    fn occurs_check_rejects_self_reference() {
        let x = Term::var("x");
        let t = Term::fun("f", vec![x.clone()]);
        assert!(matches!(unify(&x, &t), Err(UnifyError::Occurs(..))));
    }

    #[test]
    fn unify_complementary_requires_opposite_polarity() {
        let atom = Atom::new("P", vec![Term::var("x")]);
        let pos = Literal::positive(atom.clone());
        let neg = Literal::negative(atom);
        assert!(unify_complementary(&pos, &neg).is_ok());
        assert!(unify_complementary(&pos, &pos).is_err());
    }
}
