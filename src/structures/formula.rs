/*!
First-order formulae.

A formula is either an atomic [predicate](FormulaNode::Pred), a propositional connective, or a quantifier
binding a variable over a subformula. Bound positions are always syntactically a [variable term](super::term::Term::is_var);
[crate::builder] enforces this at construction time for any collaborator assembling formulae programmatically.

As with [terms](super::term::Term), formulae are wrapped in an [Rc](std::rc::Rc) so that, e.g., negating a
formula shares rather than clones the negated subformula.
*/

use std::fmt;
use std::rc::Rc;

use super::term::Term;
use super::Name;

/// A first-order formula.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Formula(Rc<FormulaNode>);

/// The shape of a [Formula].
#[derive(Debug, Eq, PartialEq, Hash)]
pub enum FormulaNode {
    /// An atomic predicate applied to an ordered sequence of terms.
    Pred(Name, Vec<Term>),

    /// Negation.
    Not(Formula),

    /// Conjunction.
    And(Formula, Formula),

    /// Disjunction.
    Or(Formula, Formula),

    /// Material implication.
    Implies(Formula, Formula),

    /// Universal quantification. The bound variable is named directly rather than via a [Term],
    /// since the binder is always a variable (§3 invariant 2) and never a general term.
    ForAll(Name, Formula),

    /// Existential quantification.
    Exists(Name, Formula),
}

impl Formula {
    /// An atomic predicate.
    pub fn pred(name: impl AsRef<str>, args: Vec<Term>) -> Self {
        Formula(Rc::new(FormulaNode::Pred(super::name(name), args)))
    }

    /// Negation.
    pub fn not(f: Formula) -> Self {
        Formula(Rc::new(FormulaNode::Not(f)))
    }

    /// Conjunction.
    pub fn and(a: Formula, b: Formula) -> Self {
        Formula(Rc::new(FormulaNode::And(a, b)))
    }

    /// Disjunction.
    pub fn or(a: Formula, b: Formula) -> Self {
        Formula(Rc::new(FormulaNode::Or(a, b)))
    }

    /// Material implication.
    pub fn implies(a: Formula, b: Formula) -> Self {
        Formula(Rc::new(FormulaNode::Implies(a, b)))
    }

    /// Universal quantification.
    pub fn forall(var: impl AsRef<str>, body: Formula) -> Self {
        Formula(Rc::new(FormulaNode::ForAll(super::name(var), body)))
    }

    /// Existential quantification.
    pub fn exists(var: impl AsRef<str>, body: Formula) -> Self {
        Formula(Rc::new(FormulaNode::Exists(super::name(var), body)))
    }

    /// The underlying shape of the formula.
    pub fn node(&self) -> &FormulaNode {
        &self.0
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.as_ref() {
            FormulaNode::Pred(name, args) if args.is_empty() => write!(f, "{name}"),
            FormulaNode::Pred(name, args) => {
                write!(f, "{name}(")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                write!(f, ")")
            }
            FormulaNode::Not(a) => write!(f, "¬{a}"),
            FormulaNode::And(a, b) => write!(f, "({a} ∧ {b})"),
            FormulaNode::Or(a, b) => write!(f, "({a} ∨ {b})"),
            FormulaNode::Implies(a, b) => write!(f, "({a} → {b})"),
            FormulaNode::ForAll(v, body) => write!(f, "∀{v}. {body}"),
            FormulaNode::Exists(v, body) => write!(f, "∃{v}. {body}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_surface_precedence() {
        let p = Formula::pred("P", vec![Term::var("x")]);
        let q = Formula::pred("Q", vec![Term::var("x")]);
        let f = Formula::forall("x", Formula::implies(p, q));
        assert_eq!(f.to_string(), "∀x. (P(x) → Q(x))");
    }
}
