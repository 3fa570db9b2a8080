/*!
Skolemization: replacing existentially-quantified variables with Skolem terms built from the universal
variables in whose scope they sit, then dropping the now-redundant universal quantifiers (what remains once
every formula is a clause is all universal, so the quantifiers carry no further information — §4.3 step 5).
*/

use std::collections::BTreeMap;

use crate::structures::formula::{Formula, FormulaNode};
use crate::structures::term::{Term, TermNode};
use crate::structures::Name;

use super::fresh::FreshSupply;

/// Eliminates every existential quantifier from a formula already in negation normal form with bound
/// variables standardized apart, and strips the remaining universal quantifiers.
pub fn skolemize(formula: &Formula, supply: &mut FreshSupply) -> Formula {
    skolemize_rec(formula, &mut Vec::new(), &BTreeMap::new(), supply)
}

fn skolemize_rec(
    formula: &Formula,
    universals: &mut Vec<Name>,
    env: &BTreeMap<Name, Term>,
    supply: &mut FreshSupply,
) -> Formula {
    match formula.node() {
        FormulaNode::Pred(name, args) => {
            Formula::pred(name.as_ref(), args.iter().map(|a| subst_term(a, env)).collect())
        }
        FormulaNode::Not(a) => Formula::not(skolemize_rec(a, universals, env, supply)),
        FormulaNode::And(a, b) => Formula::and(
            skolemize_rec(a, universals, env, supply),
            skolemize_rec(b, universals, env, supply),
        ),
        FormulaNode::Or(a, b) => Formula::or(
            skolemize_rec(a, universals, env, supply),
            skolemize_rec(b, universals, env, supply),
        ),
        FormulaNode::Implies(..) => {
            unreachable!("skolemize requires eliminate_implications to have run first")
        }
        FormulaNode::ForAll(var, body) => {
            universals.push(var.clone());
            let result = skolemize_rec(body, universals, env, supply);
            universals.pop();
            result
        }
        FormulaNode::Exists(var, body) => {
            let skolem_term = if universals.is_empty() {
                Term::fun(supply.fresh_skolem().as_ref(), vec![])
            } else {
                let args = universals.iter().map(|v| Term::var(v.as_ref())).collect();
                Term::fun(supply.fresh_skolem().as_ref(), args)
            };
            let mut inner_env = env.clone();
            inner_env.insert(var.clone(), skolem_term);
            skolemize_rec(body, universals, &inner_env, supply)
        }
    }
}

fn subst_term(term: &Term, env: &BTreeMap<Name, Term>) -> Term {
    match term.node() {
        TermNode::Var(name) => match env.get(name) {
            Some(replacement) => replacement.clone(),
            None => term.clone(),
        },
        TermNode::Fun(name, args) => {
            Term::fun(name.as_ref(), args.iter().map(|a| subst_term(a, env)).collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn existential_with_no_enclosing_universal_becomes_constant() {
        let mut supply = FreshSupply::new();
        let f = Formula::exists("y", Formula::pred("P", vec![Term::var("y")]));
        let skolemized = skolemize(&f, &mut supply);
        match skolemized.node() {
            FormulaNode::Pred(_, args) => {
                assert_eq!(args.len(), 1);
                assert!(args[0].args().unwrap().is_empty());
            }
            _ => panic!("expected a bare predicate"),
        }
    }

    #[test]
    fn existential_under_universal_depends_on_it() {
        let mut supply = FreshSupply::new();
        let inner = Formula::pred("Loves", vec![Term::var("x"), Term::var("y")]);
        let f = Formula::forall("x", Formula::exists("y", inner));
        let skolemized = skolemize(&f, &mut supply);

        match skolemized.node() {
            FormulaNode::Pred(_, args) => {
                let skolem_arg = &args[1];
                assert_eq!(skolem_arg.args().unwrap().len(), 1);
                assert_eq!(skolem_arg.args().unwrap()[0], Term::var("x"));
            }
            _ => panic!("expected a bare predicate with the universal quantifier stripped"),
        }
    }
}
