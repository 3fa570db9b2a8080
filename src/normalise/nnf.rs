/*!
Implication elimination and negation normal form.

Two independent rewrites, run in sequence: first `a → b` becomes `¬a ∨ b` everywhere, leaving a formula built
from only ¬, ∧, ∨, ∀, ∃; then negation is pushed inward past connectives and quantifiers (De Morgan, double
negation elimination, quantifier-swap-on-negation) until it applies only to atoms.
*/

use crate::structures::formula::{Formula, FormulaNode};

/// Rewrites every `Implies(a, b)` node to `Or(Not(a), b)`.
pub fn eliminate_implications(formula: &Formula) -> Formula {
    match formula.node() {
        FormulaNode::Pred(name, args) => Formula::pred(name.as_ref(), args.clone()),
        FormulaNode::Not(a) => Formula::not(eliminate_implications(a)),
        FormulaNode::And(a, b) => {
            Formula::and(eliminate_implications(a), eliminate_implications(b))
        }
        FormulaNode::Or(a, b) => Formula::or(eliminate_implications(a), eliminate_implications(b)),
        FormulaNode::Implies(a, b) => Formula::or(
            Formula::not(eliminate_implications(a)),
            eliminate_implications(b),
        ),
        FormulaNode::ForAll(var, body) => Formula::forall(var.as_ref(), eliminate_implications(body)),
        FormulaNode::Exists(var, body) => Formula::exists(var.as_ref(), eliminate_implications(body)),
    }
}

/// Pushes negation inward until it applies only to atomic predicates.
///
/// Assumes implications have already been eliminated by [eliminate_implications]; it does not handle
/// `Implies` nodes itself.
pub fn to_nnf(formula: &Formula) -> Formula {
    match formula.node() {
        FormulaNode::Pred(..) => formula.clone(),
        FormulaNode::Not(inner) => push_negation(inner),
        FormulaNode::And(a, b) => Formula::and(to_nnf(a), to_nnf(b)),
        FormulaNode::Or(a, b) => Formula::or(to_nnf(a), to_nnf(b)),
        FormulaNode::Implies(..) => {
            unreachable!("to_nnf requires eliminate_implications to have run first")
        }
        FormulaNode::ForAll(var, body) => Formula::forall(var.as_ref(), to_nnf(body)),
        FormulaNode::Exists(var, body) => Formula::exists(var.as_ref(), to_nnf(body)),
    }
}

/// Pushes a negation that sits directly above `formula` inward by one or more layers.
fn push_negation(formula: &Formula) -> Formula {
    match formula.node() {
        FormulaNode::Pred(..) => Formula::not(formula.clone()),
        FormulaNode::Not(inner) => to_nnf(inner),
        FormulaNode::And(a, b) => Formula::or(push_negation(a), push_negation(b)),
        FormulaNode::Or(a, b) => Formula::and(push_negation(a), push_negation(b)),
        FormulaNode::Implies(..) => {
            unreachable!("to_nnf requires eliminate_implications to have run first")
        }
        FormulaNode::ForAll(var, body) => Formula::exists(var.as_ref(), push_negation(body)),
        FormulaNode::Exists(var, body) => Formula::forall(var.as_ref(), push_negation(body)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::term::Term;

    #[test]
    fn eliminates_top_level_implication() {
        let p = Formula::pred("P", vec![]);
        let q = Formula::pred("Q", vec![]);
        let f = Formula::implies(p, q);
        assert_eq!(eliminate_implications(&f).to_string(), "(¬P ∨ Q)");
    }

    #[test]
    fn pushes_negation_through_conjunction() {
        let p = Formula::pred("P", vec![]);
        let q = Formula::pred("Q", vec![]);
        let f = Formula::not(Formula::and(p, q));
        assert_eq!(to_nnf(&f).to_string(), "(¬P ∨ ¬Q)");
    }

    #[test]
    fn negated_forall_becomes_exists() {
        let p = Formula::pred("P", vec![Term::var("x")]);
        let f = Formula::not(Formula::forall("x", p));
        assert_eq!(to_nnf(&f).to_string(), "∃x. ¬P(x)");
    }

    #[test]
    fn double_negation_is_eliminated() {
        let p = Formula::pred("P", vec![]);
        let f = Formula::not(Formula::not(p.clone()));
        assert_eq!(to_nnf(&f), p);
    }
}
