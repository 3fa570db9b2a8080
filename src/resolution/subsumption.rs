/*!
Clause subsumption: `C` subsumes `D` iff some substitution of `C`'s variables (only) yields a subset of `D`'s
literals.

This is a one-directional *match*, not a unification: only `C`'s variables may be bound, and `D`'s terms are
treated as ground from the matcher's point of view. Matching does not track which of `D`'s literals a given
literal of `C` consumed, so two distinct literals of `C` may bind to the same literal of `D` — harmless here
since a clause is a disjunctive set of literals, not a multiset, so multiplicity carries no meaning to track.
The search is the usual backtracking literal-by-literal match; it is sound and non-length-increasing, though
— as §4.4 notes — not complete for subsumption in general (a literal of `C` might match several literals of
`D`, and the wrong early choice can fail a match that a different choice would complete only after
backtracking further than this implementation pursues in pathological cases).
*/

use std::collections::BTreeMap;

use crate::structures::clause::Clause;
use crate::structures::literal::Literal;
use crate::structures::term::{Term, TermNode};
use crate::structures::Name;

/// True if `subsumer` subsumes `target`: some substitution of `subsumer`'s variables makes every one of
/// its literals appear among `target`'s.
pub fn subsumes(subsumer: &Clause, target: &Clause) -> bool {
    if subsumer.literals.len() > target.literals.len() {
        return false;
    }
    subsumes_rec(&subsumer.literals, target, &BTreeMap::new())
}

fn subsumes_rec(remaining: &[Literal], target: &Clause, bound: &BTreeMap<Name, Term>) -> bool {
    let Some((first, rest)) = remaining.split_first() else {
        return true;
    };

    for candidate in &target.literals {
        if first.polarity() != candidate.polarity()
            || first.atom().predicate != candidate.atom().predicate
            || first.atom().args.len() != candidate.atom().args.len()
        {
            continue;
        }

        let mut trial = bound.clone();
        if match_args(&first.atom().args, &candidate.atom().args, &mut trial)
            && subsumes_rec(rest, target, &trial)
        {
            return true;
        }
    }

    false
}

fn match_args(pattern: &[Term], instance: &[Term], bound: &mut BTreeMap<Name, Term>) -> bool {
    pattern
        .iter()
        .zip(instance.iter())
        .all(|(p, i)| match_term(p, i, bound))
}

fn match_term(pattern: &Term, instance: &Term, bound: &mut BTreeMap<Name, Term>) -> bool {
    match pattern.node() {
        TermNode::Var(name) => match bound.get(name) {
            Some(existing) => existing == instance,
            None => {
                bound.insert(name.clone(), instance.clone());
                true
            }
        },
        TermNode::Fun(pname, pargs) => match instance.node() {
            TermNode::Fun(iname, iargs) if pname == iname && pargs.len() == iargs.len() => {
                match_args(pargs, iargs, bound)
            }
            _ => false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::clause::ClauseSource;
    use crate::structures::literal::Atom;
    use std::rc::Rc;

    fn input(literals: Vec<Literal>) -> Clause {
        Clause::new(0, literals, ClauseSource::Input(Rc::from("test")))
    }

    #[test]
    fn unit_clause_subsumes_a_longer_clause_containing_its_instance() {
        let subsumer = input(vec![Literal::positive(Atom::new("P", vec![Term::var("x")]))]);
        let target = input(vec![
            Literal::positive(Atom::new("P", vec![Term::fun("a", vec![])])),
            Literal::negative(Atom::new("Q", vec![])),
        ]);
        assert!(subsumes(&subsumer, &target));
    }

    #[test]
    fn mismatched_polarity_does_not_subsume() {
        let subsumer = input(vec![Literal::negative(Atom::new("P", vec![Term::var("x")]))]);
        let target = input(vec![Literal::positive(Atom::new(
            "P",
            vec![Term::fun("a", vec![])],
        ))]);
        assert!(!subsumes(&subsumer, &target));
    }

    #[test]
    fn longer_clause_never_subsumes_a_shorter_one() {
        let subsumer = input(vec![
            Literal::positive(Atom::new("P", vec![])),
            Literal::positive(Atom::new("Q", vec![])),
        ]);
        let target = input(vec![Literal::positive(Atom::new("P", vec![]))]);
        assert!(!subsumes(&subsumer, &target));
    }
}
