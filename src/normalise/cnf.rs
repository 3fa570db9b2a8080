/*!
The last leg of clausification: distributing ∨ over ∧, then reading the resulting conjunction of
disjunctions off as a list of clauses.

By the time [distribute] runs, a formula is already free of quantifiers and implications, and negation
applies only to atoms (NNF) — the three connectives left are ¬, ∧, and ∨.
*/

use crate::structures::formula::{Formula, FormulaNode};
use crate::structures::literal::{Atom, Literal};

/// Rewrites a formula so that ∨ never has a conjunction as either argument, by repeated application of
/// `(a ∧ b) ∨ c == (a ∨ c) ∧ (b ∨ c)`.
pub fn distribute(formula: &Formula) -> Formula {
    match formula.node() {
        FormulaNode::And(a, b) => Formula::and(distribute(a), distribute(b)),
        FormulaNode::Or(a, b) => distribute_or(&distribute(a), &distribute(b)),
        _ => formula.clone(),
    }
}

fn distribute_or(a: &Formula, b: &Formula) -> Formula {
    match a.node() {
        FormulaNode::And(a1, a2) => Formula::and(distribute_or(a1, b), distribute_or(a2, b)),
        _ => match b.node() {
            FormulaNode::And(b1, b2) => Formula::and(distribute_or(a, b1), distribute_or(a, b2)),
            _ => Formula::or(a.clone(), b.clone()),
        },
    }
}

/// Reads the literal sets of a distributed, quantifier-free formula off as a list of clauses, one per
/// conjunct, discarding any conjunct that is a tautology (§4.3 step 7).
pub fn extract_clauses(formula: &Formula) -> Vec<Vec<Literal>> {
    let mut conjuncts = Vec::new();
    flatten_conjuncts(formula, &mut conjuncts);

    conjuncts
        .into_iter()
        .map(|conjunct| {
            let mut literals = Vec::new();
            flatten_disjuncts(&conjunct, &mut literals);
            literals
        })
        .filter(|literals| !is_tautology(literals))
        .collect()
}

fn flatten_conjuncts(formula: &Formula, out: &mut Vec<Formula>) {
    match formula.node() {
        FormulaNode::And(a, b) => {
            flatten_conjuncts(a, out);
            flatten_conjuncts(b, out);
        }
        _ => out.push(formula.clone()),
    }
}

fn flatten_disjuncts(formula: &Formula, out: &mut Vec<Literal>) {
    match formula.node() {
        FormulaNode::Or(a, b) => {
            flatten_disjuncts(a, out);
            flatten_disjuncts(b, out);
        }
        FormulaNode::Pred(name, args) => {
            out.push(Literal::positive(Atom::new(name.as_ref(), args.clone())))
        }
        FormulaNode::Not(inner) => match inner.node() {
            FormulaNode::Pred(name, args) => {
                out.push(Literal::negative(Atom::new(name.as_ref(), args.clone())))
            }
            _ => unreachable!("negation normal form keeps ¬ only over atoms"),
        },
        FormulaNode::And(..) => unreachable!("distribute removes ∧ beneath ∨"),
        FormulaNode::Implies(..) | FormulaNode::ForAll(..) | FormulaNode::Exists(..) => {
            unreachable!("clausification removes implications and quantifiers before this step")
        }
    }
}

fn is_tautology(literals: &[Literal]) -> bool {
    for (i, a) in literals.iter().enumerate() {
        for b in &literals[i + 1..] {
            if a.is_complement_of(b) {
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::term::Term;

    #[test]
    fn distributes_or_over_and() {
        let a = Formula::pred("A", vec![]);
        let b = Formula::pred("B", vec![]);
        let c = Formula::pred("C", vec![]);
        let f = Formula::or(Formula::and(a, b), c);
        assert_eq!(distribute(&f).to_string(), "((A ∨ C) ∧ (B ∨ C))");
    }

    #[test]
    fn extracts_two_clauses_from_a_conjunction() {
        let a = Formula::pred("A", vec![Term::var("x")]);
        let b = Formula::pred("B", vec![Term::var("x")]);
        let f = Formula::and(a, b);
        let clauses = extract_clauses(&f);
        assert_eq!(clauses.len(), 2);
        assert_eq!(clauses[0].len(), 1);
        assert_eq!(clauses[1].len(), 1);
    }

    #[test]
    fn tautological_clause_is_discarded() {
        let atom = Formula::pred("A", vec![]);
        let f = Formula::or(atom.clone(), Formula::not(atom));
        assert!(extract_clauses(&f).is_empty());
    }
}
