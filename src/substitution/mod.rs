/*!
Substitutions: finite maps from variables to terms, and their application to every other structure in
[crate::structures].

A substitution is represented as a [BTreeMap] rather than a [HashMap] so that iterating its bindings — for
display, or when composing two substitutions — visits them in a fixed order, which matters wherever the
engine must behave deterministically (§ "Tie-breaking and determinism").

Applying a substitution to a quantified [Formula] is the one place a substitution can, in principle, capture
a bound variable. In practice this cannot happen by the time [crate::normalise] calls it: the
standardize-apart pass has already made every bound variable name unique across a formula, and the only
substitutions [crate::normalise::skolem] applies bind a variable to a Skolem term built from the very
variables that remain bound around it. The rename-on-capture branch below exists as a safety net for that
theoretical case, not as a load-bearing part of the pipeline.
*/

use std::collections::BTreeMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::structures::formula::{Formula, FormulaNode};
use crate::structures::literal::{Atom, Literal};
use crate::structures::term::{Term, TermNode};
use crate::structures::Name;

static CAPTURE_RENAME_COUNTER: AtomicU64 = AtomicU64::new(0);

/// A finite map from variables to terms.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Substitution {
    bindings: BTreeMap<Name, Term>,
}

impl Substitution {
    /// The empty substitution, the identity of [Substitution::compose].
    pub fn empty() -> Self {
        Substitution::default()
    }

    /// A substitution binding a single variable.
    pub fn singleton(var: Name, term: Term) -> Self {
        let mut bindings = BTreeMap::new();
        bindings.insert(var, term);
        Substitution { bindings }
    }

    /// True if the substitution binds nothing.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// The term bound to `var`, if any.
    pub fn get(&self, var: &Name) -> Option<&Term> {
        self.bindings.get(var)
    }

    /// Binds `var` to `term`, overwriting any existing binding.
    pub fn insert(&mut self, var: Name, term: Term) {
        self.bindings.insert(var, term);
    }

    /// Iterates the bindings in variable-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&Name, &Term)> {
        self.bindings.iter()
    }

    /// Applies the substitution to a term.
    pub fn apply_term(&self, term: &Term) -> Term {
        match term.node() {
            TermNode::Var(name) => match self.bindings.get(name) {
                Some(replacement) => replacement.clone(),
                None => term.clone(),
            },
            TermNode::Fun(name, args) => {
                let applied: Vec<Term> = args.iter().map(|a| self.apply_term(a)).collect();
                Term::fun(name.as_ref(), applied)
            }
        }
    }

    /// Applies the substitution to an atom.
    pub fn apply_atom(&self, atom: &Atom) -> Atom {
        Atom::new(
            atom.predicate.as_ref(),
            atom.args.iter().map(|a| self.apply_term(a)).collect(),
        )
    }

    /// Applies the substitution to a literal.
    pub fn apply_literal(&self, literal: &Literal) -> Literal {
        Literal::new(literal.polarity(), self.apply_atom(literal.atom()))
    }

    /// Applies the substitution to a formula.
    ///
    /// Free variable occurrences are replaced by their bound term; bound variables are left alone unless
    /// a substituted term would otherwise capture them, in which case the quantifier is renamed apart first.
    pub fn apply_formula(&self, formula: &Formula) -> Formula {
        match formula.node() {
            FormulaNode::Pred(name, args) => {
                Formula::pred(name.as_ref(), args.iter().map(|a| self.apply_term(a)).collect())
            }
            FormulaNode::Not(a) => Formula::not(self.apply_formula(a)),
            FormulaNode::And(a, b) => Formula::and(self.apply_formula(a), self.apply_formula(b)),
            FormulaNode::Or(a, b) => Formula::or(self.apply_formula(a), self.apply_formula(b)),
            FormulaNode::Implies(a, b) => {
                Formula::implies(self.apply_formula(a), self.apply_formula(b))
            }
            FormulaNode::ForAll(var, body) => self.apply_to_binder(var, body, Formula::forall),
            FormulaNode::Exists(var, body) => self.apply_to_binder(var, body, Formula::exists),
        }
    }

    fn apply_to_binder(
        &self,
        var: &Name,
        body: &Formula,
        rebuild: impl Fn(&str, Formula) -> Formula,
    ) -> Formula {
        if self.would_capture(var) {
            let fresh = fresh_capture_avoiding_name(var);
            let rename = Substitution::singleton(var.clone(), Term::var(fresh.as_ref()));
            let renamed_body = rename.apply_formula(body);
            rebuild(fresh.as_ref(), self.apply_formula(&renamed_body))
        } else {
            let mut inner = self.clone();
            inner.bindings.remove(var);
            rebuild(var.as_ref(), inner.apply_formula(body))
        }
    }

    fn would_capture(&self, bound: &Name) -> bool {
        self.bindings
            .values()
            .any(|term| term_contains_var(term, bound))
    }

    /// Composes two substitutions so that `compose(s1, s2).apply(t) == s1.apply(s2.apply(t))`.
    pub fn compose(&self, other: &Substitution) -> Substitution {
        let mut bindings = BTreeMap::new();
        for (var, term) in other.bindings.iter() {
            bindings.insert(var.clone(), self.apply_term(term));
        }
        for (var, term) in self.bindings.iter() {
            bindings.entry(var.clone()).or_insert_with(|| term.clone());
        }
        Substitution { bindings }
    }
}

fn term_contains_var(term: &Term, name: &Name) -> bool {
    match term.node() {
        TermNode::Var(v) => v == name,
        TermNode::Fun(_, args) => args.iter().any(|a| term_contains_var(a, name)),
    }
}

fn fresh_capture_avoiding_name(base: &Name) -> Name {
    let n = CAPTURE_RENAME_COUNTER.fetch_add(1, Ordering::Relaxed);
    crate::structures::name(format!("{base}__cap{n}"))
}

impl fmt::Display for Substitution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (var, term)) in self.bindings.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{var} ↦ {term}")?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_term_substitutes_free_variable() {
        let sub = Substitution::singleton(crate::structures::name("x"), Term::fun("a", vec![]));
        let t = Term::fun("f", vec![Term::var("x"), Term::var("y")]);
        assert_eq!(sub.apply_term(&t).to_string(), "f(a, y)");
    }

    #[test]
    fn compose_matches_sequential_application() {
        let s1 = Substitution::singleton(crate::structures::name("y"), Term::fun("a", vec![]));
        let s2 = Substitution::singleton(crate::structures::name("x"), Term::var("y"));
        let composed = s1.compose(&s2);

        let t = Term::var("x");
        let via_compose = composed.apply_term(&t);
        let via_sequence = s1.apply_term(&s2.apply_term(&t));
        assert_eq!(via_compose, via_sequence);
    }

    #[test]
    fn apply_formula_leaves_bound_variable_alone() {
        let sub = Substitution::singleton(crate::structures::name("x"), Term::fun("a", vec![]));
        let body = Formula::pred("P", vec![Term::var("x")]);
        let f = Formula::forall("x", body);
        assert_eq!(sub.apply_formula(&f).to_string(), "∀x. P(x)");
    }

    #[test]
    fn apply_formula_substitutes_free_occurrence_under_unrelated_binder() {
        let sub = Substitution::singleton(crate::structures::name("y"), Term::fun("a", vec![]));
        let body = Formula::pred("R", vec![Term::var("x"), Term::var("y")]);
        let f = Formula::forall("x", body);
        assert_eq!(sub.apply_formula(&f).to_string(), "∀x. R(x, a)");
    }
}
