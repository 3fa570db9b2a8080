/*!
The given-clause saturation loop (§4.4): repeatedly select a clause from `passive`, resolve and factor it
against everything already in `active`, and move it into `active` — until the empty clause is derived,
`passive` runs dry, or a [budget](crate::config::Config) trips.

Two clause collections, a fair selection policy backed by [IndexHeap](crate::generic::index_heap::IndexHeap),
a per-iteration budget check, and a single [Counters] tally of what happened.
*/

pub mod infer;
pub mod priority;
pub mod subsumption;

use std::time::Instant;

use log::{debug, trace};

use crate::config::{Config, LiteralSelection};
use crate::db::ClauseDB;
use crate::misc::log::targets;
use crate::structures::clause::{ClauseId, ClauseSource};
use crate::structures::literal::Literal;

/// Why the saturation loop stopped.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SaturationOutcome {
    /// The empty clause was derived; the search ends in refutation.
    Proved(ClauseId),

    /// `passive` was exhausted without deriving the empty clause: the input is saturated and consistent.
    Exhausted,

    /// A resource bound in [Config] was hit before either of the above.
    BudgetExceeded,
}

/// Diagnostic tallies kept across a saturation run.
#[derive(Clone, Copy, Debug, Default)]
pub struct Counters {
    pub iterations: usize,
    pub clauses_generated: usize,
    pub clauses_subsumed: usize,
    pub clauses_retained: usize,
}

/// Runs the saturation loop to completion against `db`, which is assumed to already hold the input clauses
/// in `passive`.
pub fn saturate(db: &mut ClauseDB, config: &Config) -> (SaturationOutcome, Counters) {
    let start = Instant::now();
    let mut counters = Counters::default();

    loop {
        if db.len() > config.max_clauses.value {
            debug!(target: targets::RESOLUTION, "clause budget exceeded: {} clauses", db.len());
            return (SaturationOutcome::BudgetExceeded, counters);
        }
        if counters.iterations >= config.max_iterations.value {
            debug!(target: targets::RESOLUTION, "iteration budget exceeded: {} iterations", counters.iterations);
            return (SaturationOutcome::BudgetExceeded, counters);
        }
        if start.elapsed() >= config.time_limit.value {
            debug!(target: targets::RESOLUTION, "time budget exceeded after {:?}", start.elapsed());
            return (SaturationOutcome::BudgetExceeded, counters);
        }

        let Some(given_id) = db.pop_passive() else {
            return (SaturationOutcome::Exhausted, counters);
        };
        counters.iterations += 1;

        let given = db.get(given_id).clone();
        trace!(target: targets::RESOLUTION, "given clause #{given_id}: {given}");

        if config.subsumption_enabled.value {
            let subsumed_by_active = db
                .active_ids()
                .any(|active_id| subsumption::subsumes(db.get(active_id), &given));
            if subsumed_by_active {
                counters.clauses_subsumed += 1;
                trace!(target: targets::SUBSUMPTION, "clause #{given_id} subsumed, discarding");
                continue;
            }

            let now_subsumed: Vec<ClauseId> = db
                .active_ids()
                .filter(|&active_id| subsumption::subsumes(&given, db.get(active_id)))
                .collect();
            for id in now_subsumed {
                counters.clauses_subsumed += 1;
                trace!(target: targets::SUBSUMPTION, "clause #{id} subsumed by #{given_id}, retiring");
                db.deactivate(id);
            }
        }

        if given.is_empty() {
            return (SaturationOutcome::Proved(given_id), counters);
        }

        let mut newly_generated: Vec<(Vec<Literal>, ClauseSource)> = Vec::new();

        for active_id in db.active_ids().collect::<Vec<_>>() {
            let active = db.get(active_id).clone();
            for (literals, substitution) in selected_resolvents(&given, &active, config.literal_selection)
            {
                newly_generated.push((
                    literals,
                    ClauseSource::Resolution {
                        left: given_id,
                        right: active_id,
                        substitution,
                    },
                ));
            }
        }

        for (literals, substitution) in selected_factors(&given, config.literal_selection) {
            newly_generated.push((
                literals,
                ClauseSource::Factor {
                    parent: given_id,
                    substitution,
                },
            ));
        }

        db.activate(given_id);

        for (literals, source) in newly_generated {
            if is_tautology(&literals) {
                continue;
            }
            counters.clauses_generated += 1;

            if config.subsumption_enabled.value && !literals.is_empty() {
                let candidate = crate::structures::clause::Clause::new(0, literals.clone(), source.clone());
                let subsumed = db
                    .active_ids()
                    .any(|active_id| subsumption::subsumes(db.get(active_id), &candidate));
                if subsumed {
                    counters.clauses_subsumed += 1;
                    trace!(target: targets::SUBSUMPTION, "generated clause subsumed before insertion, discarding");
                    continue;
                }
            }

            let is_empty = literals.is_empty();
            let new_id = db.insert(literals, source);
            counters.clauses_retained += 1;
            trace!(target: targets::RESOLUTION, "generated clause #{new_id}");
            if is_empty {
                return (SaturationOutcome::Proved(new_id), counters);
            }
        }
    }
}

fn selected_resolvents(
    given: &crate::structures::clause::Clause,
    other: &crate::structures::clause::Clause,
    selection: LiteralSelection,
) -> Vec<(Vec<Literal>, crate::substitution::Substitution)> {
    match selection {
        LiteralSelection::Unrestricted => infer::resolvents(given, other),
        LiteralSelection::MaximalWeightOnly => {
            let given_mask = maximal_weight_mask(given);
            let other_mask = maximal_weight_mask(other);
            infer::resolvents_selective(
                given,
                other,
                &|i| given_mask[i],
                &|j| other_mask[j],
            )
        }
    }
}

fn selected_factors(
    clause: &crate::structures::clause::Clause,
    selection: LiteralSelection,
) -> Vec<(Vec<Literal>, crate::substitution::Substitution)> {
    match selection {
        LiteralSelection::Unrestricted => infer::factors(clause),
        LiteralSelection::MaximalWeightOnly => {
            let mask = maximal_weight_mask(clause);
            infer::factors_selective(clause, &|i| mask[i])
        }
    }
}

fn maximal_weight_mask(clause: &crate::structures::clause::Clause) -> Vec<bool> {
    fn term_weight(term: &crate::structures::term::Term) -> usize {
        1 + term
            .args()
            .unwrap_or(&[])
            .iter()
            .map(term_weight)
            .sum::<usize>()
    }
    let weights: Vec<usize> = clause
        .literals
        .iter()
        .map(|l| 1 + l.atom().args.iter().map(term_weight).sum::<usize>())
        .collect();
    let max = weights.iter().copied().max().unwrap_or(0);
    weights.into_iter().map(|w| w == max).collect()
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
    use crate::structures::literal::Atom;
    use crate::structures::term::Term;
    use std::rc::Rc;

    #[test]
    fn refutes_p_and_not_p() {
        let mut db = ClauseDB::new();
        db.insert(
            vec![Literal::positive(Atom::new("P", vec![]))],
            ClauseSource::Input(Rc::from("p")),
        );
        db.insert(
            vec![Literal::negative(Atom::new("P", vec![]))],
            ClauseSource::Input(Rc::from("not_p")),
        );

        let (outcome, _) = saturate(&mut db, &Config::default());
        assert!(matches!(outcome, SaturationOutcome::Proved(_)));
    }

    #[test]
    fn exhausts_on_a_satisfiable_clause_set() {
        let mut db = ClauseDB::new();
        db.insert(
            vec![Literal::positive(Atom::new("P", vec![Term::var("x")]))],
            ClauseSource::Input(Rc::from("p")),
        );

        let (outcome, _) = saturate(&mut db, &Config::default());
        assert_eq!(outcome, SaturationOutcome::Exhausted);
    }
}
