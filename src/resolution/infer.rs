/*!
The two inference rules of §4.4: binary resolution and factoring.

Both rules return every resolvent/factor a pair of literal positions admits, together with the most general
unifier used to produce it — the caller ([crate::resolution::saturate]) is responsible for inserting
survivors into a [ClauseDB](crate::db::ClauseDB) with the right [ClauseSource](crate::structures::clause::ClauseSource).
*/

use crate::structures::clause::Clause;
use crate::structures::literal::Literal;
use crate::structures::term::Term;
use crate::substitution::Substitution;
use crate::unify::{unify_complementary, unify_literals};

/// Renames every free variable of `clause` apart by appending `suffix`, so that resolving or factoring it
/// against another clause cannot accidentally identify two logically distinct variables.
pub fn rename_apart(clause: &Clause, suffix: &str) -> Clause {
    let mut sub = Substitution::empty();
    for var in clause.free_vars() {
        sub.insert(var.clone(), Term::var(format!("{var}#{suffix}")));
    }
    let literals = clause.literals.iter().map(|l| sub.apply_literal(l)).collect();
    Clause::new(clause.id, literals, clause.source.clone())
}

/// Every binary resolvent of `left` and `right`: for each complementary pair of literals, the MGU of their
/// atoms applied to the remainder of both clauses, minus the two resolved-upon literals.
///
/// `right` is renamed apart (under a suffix derived from its own id) before unification is attempted, per
/// §4.4's "renamed apart so no variables are shared".
pub fn resolvents(left: &Clause, right: &Clause) -> Vec<(Vec<Literal>, Substitution)> {
    resolvents_selective(left, right, &|_| true, &|_| true)
}

/// As [resolvents], but a literal may only be resolved upon if its position passes the corresponding
/// eligibility predicate. Ineligible literals still appear in the remainder of a resolvent that resolves
/// on a *different* position — eligibility narrows which pair is tried, not what survives.
///
/// This is how [crate::config::LiteralSelection::MaximalWeightOnly] is enforced: the caller passes a
/// predicate true only at a clause's maximal-weight positions.
pub fn resolvents_selective(
    left: &Clause,
    right: &Clause,
    left_eligible: &dyn Fn(usize) -> bool,
    right_eligible: &dyn Fn(usize) -> bool,
) -> Vec<(Vec<Literal>, Substitution)> {
    let right = rename_apart(right, &format!("r{}", right.id));
    let mut out = Vec::new();

    for (i, l) in left.literals.iter().enumerate() {
        if !left_eligible(i) {
            continue;
        }
        for (j, m) in right.literals.iter().enumerate() {
            if !right_eligible(j) {
                continue;
            }
            let Ok(mgu) = unify_complementary(l, m) else {
                continue;
            };

            let mut literals = Vec::with_capacity(left.literals.len() + right.literals.len() - 2);
            for (k, lit) in left.literals.iter().enumerate() {
                if k != i {
                    literals.push(mgu.apply_literal(lit));
                }
            }
            for (k, lit) in right.literals.iter().enumerate() {
                if k != j {
                    literals.push(mgu.apply_literal(lit));
                }
            }
            out.push((literals, mgu));
        }
    }

    out
}

/// Every factor of `clause`: for each pair of same-polarity literals, the MGU of their atoms applied to
/// the clause with the second of the pair removed.
pub fn factors(clause: &Clause) -> Vec<(Vec<Literal>, Substitution)> {
    factors_selective(clause, &|_| true)
}

/// As [factors], but a literal may only participate in a factoring pair if it passes `eligible`.
pub fn factors_selective(
    clause: &Clause,
    eligible: &dyn Fn(usize) -> bool,
) -> Vec<(Vec<Literal>, Substitution)> {
    let mut out = Vec::new();

    for i in 0..clause.literals.len() {
        if !eligible(i) {
            continue;
        }
        for j in (i + 1)..clause.literals.len() {
            if !eligible(j) {
                continue;
            }
            let Ok(mgu) = unify_literals(&clause.literals[i], &clause.literals[j]) else {
                continue;
            };

            let literals = clause
                .literals
                .iter()
                .enumerate()
                .filter(|(k, _)| *k != j)
                .map(|(_, lit)| mgu.apply_literal(lit))
                .collect();
            out.push((literals, mgu));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::clause::ClauseSource;
    use crate::structures::literal::Atom;
    use std::rc::Rc;

    fn input(id: u64, literals: Vec<Literal>) -> Clause {
        Clause::new(id, literals, ClauseSource::Input(Rc::from("test")))
    }

    #[test]
    fn resolving_p_and_not_p_yields_the_empty_clause() {
        let p = input(0, vec![Literal::positive(Atom::new("P", vec![]))]);
        let not_p = input(1, vec![Literal::negative(Atom::new("P", vec![]))]);
        let resolvents = resolvents(&p, &not_p);
        assert_eq!(resolvents.len(), 1);
        assert!(resolvents[0].0.is_empty());
    }

    #[test]
    fn factoring_identical_literals_removes_the_duplicate() {
        let atom = Atom::new("P", vec![Term::var("x")]);
        let c = input(0, vec![Literal::positive(atom.clone()), Literal::positive(atom)]);
        let factors = factors(&c);
        assert_eq!(factors.len(), 1);
        assert_eq!(factors[0].0.len(), 1);
    }

    #[test]
    fn no_factor_between_opposite_polarity_literals() {
        let atom = Atom::new("P", vec![Term::var("x")]);
        let c = input(0, vec![Literal::positive(atom.clone()), Literal::negative(atom)]);
        assert!(factors(&c).is_empty());
    }
}
