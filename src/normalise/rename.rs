/*!
Standardizing apart: renaming every quantifier's bound variable to a name used nowhere else in the formula.

Running this before Skolemization is what lets Skolemization name each Skolem function's arguments directly
after the enclosing universal variables without ever risking a name clash, and is what lets
[crate::substitution] treat quantifier-capture as a case that cannot arise in practice (see its module docs).
*/

use std::collections::BTreeMap;

use crate::structures::formula::{Formula, FormulaNode};
use crate::structures::term::{Term, TermNode};
use crate::structures::Name;

use super::fresh::FreshSupply;

/// Renames every bound variable in `formula` to a supply-minted fresh name.
pub fn standardize_apart(formula: &Formula, supply: &mut FreshSupply) -> Formula {
    rename_rec(formula, &BTreeMap::new(), supply)
}

fn rename_rec(formula: &Formula, env: &BTreeMap<Name, Name>, supply: &mut FreshSupply) -> Formula {
    match formula.node() {
        FormulaNode::Pred(name, args) => {
            Formula::pred(name.as_ref(), args.iter().map(|a| rename_term(a, env)).collect())
        }
        FormulaNode::Not(a) => Formula::not(rename_rec(a, env, supply)),
        FormulaNode::And(a, b) => Formula::and(rename_rec(a, env, supply), rename_rec(b, env, supply)),
        FormulaNode::Or(a, b) => Formula::or(rename_rec(a, env, supply), rename_rec(b, env, supply)),
        FormulaNode::Implies(a, b) => {
            Formula::implies(rename_rec(a, env, supply), rename_rec(b, env, supply))
        }
        FormulaNode::ForAll(var, body) => {
            let fresh = supply.fresh_var(var);
            let mut inner_env = env.clone();
            inner_env.insert(var.clone(), fresh.clone());
            Formula::forall(fresh.as_ref(), rename_rec(body, &inner_env, supply))
        }
        FormulaNode::Exists(var, body) => {
            let fresh = supply.fresh_var(var);
            let mut inner_env = env.clone();
            inner_env.insert(var.clone(), fresh.clone());
            Formula::exists(fresh.as_ref(), rename_rec(body, &inner_env, supply))
        }
    }
}

fn rename_term(term: &Term, env: &BTreeMap<Name, Name>) -> Term {
    match term.node() {
        TermNode::Var(name) => match env.get(name) {
            Some(fresh) => Term::var(fresh.as_ref()),
            None => term.clone(),
        },
        TermNode::Fun(name, args) => {
            Term::fun(name.as_ref(), args.iter().map(|a| rename_term(a, env)).collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renames_bound_variables_to_distinct_names() {
        let mut supply = FreshSupply::new();
        let inner = Formula::pred("P", vec![Term::var("x")]);
        let f = Formula::forall("x", Formula::exists("x", inner));
        let renamed = standardize_apart(&f, &mut supply);

        match renamed.node() {
            FormulaNode::ForAll(outer, body) => match body.node() {
                FormulaNode::Exists(inner_var, _) => assert_ne!(outer, inner_var),
                _ => panic!("expected nested Exists"),
            },
            _ => panic!("expected outer ForAll"),
        }
    }

    #[test]
    fn leaves_free_variables_alone() {
        let mut supply = FreshSupply::new();
        let f = Formula::pred("P", vec![Term::var("y")]);
        let renamed = standardize_apart(&f, &mut supply);
        assert_eq!(renamed.to_string(), "P(y)");
    }
}
