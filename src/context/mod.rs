/*!
The context: a proof session to which formulae are added and within which a goal is proved.

Holds the clause database and configuration a single proof attempt needs, rather than threading them as
loose parameters through every call.

# Example
```rust
# use otter_fol::context::Context;
# use otter_fol::config::Config;
# use otter_fol::structures::formula::Formula;
let mut context = Context::from_config(Config::default());
context.add_formula("p", &Formula::pred("P", vec![])).unwrap();
context.add_formula("p_implies_q", &Formula::implies(
    Formula::pred("P", vec![]),
    Formula::pred("Q", vec![]),
)).unwrap();

let outcome = context.prove(&Formula::pred("Q", vec![]));
assert!(outcome.proven);
```
*/

use std::collections::HashSet;
use std::rc::Rc;

use crate::db::ClauseDB;
use crate::normalise::{self, FreshSupply};
use crate::proof::{self, Step};
use crate::resolution::{self, Counters, SaturationOutcome};
use crate::structures::clause::ClauseSource;
use crate::structures::formula::Formula;
use crate::types::err::{BuildError, ErrorKind};

use crate::config::Config;

/// Why a proof attempt concluded.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ProofStatus {
    /// The empty clause was derived: the goal follows from the context.
    Proved,

    /// The budget was exhausted, or the search space ran dry, without deriving the empty clause.
    UnprovableWithinBudget,
}

/// The result of a call to [Context::prove] or [prove_formula].
#[derive(Clone, Debug)]
pub struct ProofOutcome {
    pub status: ProofStatus,

    /// True iff `status` is [ProofStatus::Proved].
    pub proven: bool,

    /// The derivation, in an order where every clause follows its parents. Empty unless `proven`.
    pub proof: Vec<Step>,

    /// Diagnostic tallies from the saturation run.
    pub counters: Counters,
}

/// A proof session: owns the clause database accumulated from every formula added to it.
pub struct Context {
    config: Config,
    db: ClauseDB,
    supply: FreshSupply,
    labels: HashSet<Rc<str>>,
}

impl Context {
    /// A fresh, empty context configured by `config`.
    pub fn from_config(config: Config) -> Self {
        Context {
            config,
            db: ClauseDB::new(),
            supply: FreshSupply::new(),
            labels: HashSet::new(),
        }
    }

    /// Clausifies `formula` and adds its clauses to the context, tagged with `label` for provenance.
    ///
    /// Fails if `label` has already been used in this context.
    pub fn add_formula(&mut self, label: impl AsRef<str>, formula: &Formula) -> Result<(), ErrorKind> {
        let label: Rc<str> = Rc::from(label.as_ref());
        if !self.labels.insert(label.clone()) {
            return Err(BuildError::DuplicateLabel(label).into());
        }

        for literals in normalise::clausify(formula, &mut self.supply) {
            self.db.insert(literals, ClauseSource::Input(label.clone()));
        }
        Ok(())
    }

    /// Attempts to prove `goal` from every formula added so far, by refutation: the clauses of `goal`'s
    /// negation are added under a reserved label, and the saturation loop of §4.4 runs to completion.
    pub fn prove(&mut self, goal: &Formula) -> ProofOutcome {
        let negated_goal = Formula::not(goal.clone());
        for literals in normalise::clausify(&negated_goal, &mut self.supply) {
            self.db
                .insert(literals, ClauseSource::Input(Rc::from("negated_goal")));
        }

        let (outcome, counters) = resolution::saturate(&mut self.db, &self.config);

        match outcome {
            SaturationOutcome::Proved(empty_id) => ProofOutcome {
                status: ProofStatus::Proved,
                proven: true,
                proof: proof::reconstruct(&self.db, empty_id),
                counters,
            },
            SaturationOutcome::Exhausted | SaturationOutcome::BudgetExceeded => ProofOutcome {
                status: ProofStatus::UnprovableWithinBudget,
                proven: false,
                proof: Vec::new(),
                counters,
            },
        }
    }
}

/// Attempts to prove `goal` from `context` within `config`'s budget.
///
/// Equivalent to building a fresh [Context], adding every formula of `context` under a generated label (in
/// a canonical, sorted-by-display order, so that two calls with an equal but differently-hash-ordered
/// `HashSet` produce byte-identical [ProofOutcome]s), and calling [Context::prove].
pub fn prove_formula(context: &HashSet<Formula>, goal: &Formula, config: Config) -> ProofOutcome {
    let mut formulas: Vec<&Formula> = context.iter().collect();
    formulas.sort_by_key(|f| f.to_string());

    let mut session = Context::from_config(config);
    for (i, formula) in formulas.into_iter().enumerate() {
        session
            .add_formula(format!("axiom_{i}"), formula)
            .expect("generated labels are unique within a single call");
    }

    session.prove(goal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::term::Term;

    #[test]
    fn duplicate_label_is_rejected() {
        let mut context = Context::from_config(Config::default());
        let p = Formula::pred("P", vec![]);
        context.add_formula("p", &p).unwrap();
        let err = context.add_formula("p", &p).unwrap_err();
        assert!(matches!(err, ErrorKind::Build(BuildError::DuplicateLabel(_))));
    }

    #[test]
    fn modus_ponens_is_proven() {
        let mut context = HashSet::new();
        let p = Formula::pred("P", vec![]);
        let q = Formula::pred("Q", vec![]);
        context.insert(p.clone());
        context.insert(Formula::implies(p, q.clone()));

        let outcome = prove_formula(&context, &q, Config::default());
        assert!(outcome.proven);
        assert!(!outcome.proof.is_empty());
    }

    #[test]
    fn unrelated_goal_is_not_proven() {
        let mut context = HashSet::new();
        context.insert(Formula::pred("P", vec![Term::fun("a", vec![])]));

        let goal = Formula::pred("P", vec![Term::fun("b", vec![])]);
        let outcome = prove_formula(&context, &goal, Config::default());
        assert!(!outcome.proven);
        assert!(outcome.proof.is_empty());
    }
}
