/*!
Reconstructing a derivation from a refutation: walking a clause's [ClauseSource](crate::structures::clause::ClauseSource)
parents transitively back to the input clauses, and laying the result out as an ordered list of steps (§4.5).
*/

use std::collections::BTreeSet;
use std::fmt;

use crate::db::ClauseDB;
use crate::structures::clause::{ClauseId, ClauseSource};
use crate::substitution::Substitution;

/// One step of a derivation: the clause produced, and how.
#[derive(Clone, Debug)]
pub struct Step {
    pub clause_id: ClauseId,
    pub clause_text: String,
    pub derivation: Derivation,
}

/// How a [Step]'s clause was obtained, with parent ids already resolved to the order they appear earlier
/// in the same derivation.
#[derive(Clone, Debug)]
pub enum Derivation {
    Input(String),
    Resolution {
        left: ClauseId,
        right: ClauseId,
        substitution: Substitution,
    },
    Factor {
        parent: ClauseId,
        substitution: Substitution,
    },
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.derivation {
            Derivation::Input(label) => {
                write!(f, "#{}: {} [input: {}]", self.clause_id, self.clause_text, label)
            }
            Derivation::Resolution {
                left,
                right,
                substitution,
            } => write!(
                f,
                "#{}: {} [resolution #{}, #{}, σ = {}]",
                self.clause_id, self.clause_text, left, right, substitution
            ),
            Derivation::Factor {
                parent,
                substitution,
            } => write!(
                f,
                "#{}: {} [factor #{}, σ = {}]",
                self.clause_id, self.clause_text, parent, substitution
            ),
        }
    }
}

/// Walks backward from `root` (expected to be the empty clause) through its ancestry in `db`, returning
/// the steps of the derivation in an order where every clause is listed after its parents.
pub fn reconstruct(db: &ClauseDB, root: ClauseId) -> Vec<Step> {
    let mut seen = BTreeSet::new();
    let mut order = Vec::new();
    visit(db, root, &mut seen, &mut order);

    order
        .into_iter()
        .map(|id| {
            let clause = db.get(id);
            let derivation = match &clause.source {
                ClauseSource::Input(label) => Derivation::Input(label.to_string()),
                ClauseSource::Resolution {
                    left,
                    right,
                    substitution,
                } => Derivation::Resolution {
                    left: *left,
                    right: *right,
                    substitution: substitution.clone(),
                },
                ClauseSource::Factor {
                    parent,
                    substitution,
                } => Derivation::Factor {
                    parent: *parent,
                    substitution: substitution.clone(),
                },
            };
            Step {
                clause_id: id,
                clause_text: clause.to_string(),
                derivation,
            }
        })
        .collect()
}

fn visit(db: &ClauseDB, id: ClauseId, seen: &mut BTreeSet<ClauseId>, order: &mut Vec<ClauseId>) {
    if !seen.insert(id) {
        return;
    }
    match &db.get(id).source {
        ClauseSource::Input(_) => {}
        ClauseSource::Resolution { left, right, .. } => {
            visit(db, *left, seen, order);
            visit(db, *right, seen, order);
        }
        ClauseSource::Factor { parent, .. } => {
            visit(db, *parent, seen, order);
        }
    }
    order.push(id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::literal::{Atom, Literal};
    use std::rc::Rc;

    #[test]
    fn reconstructs_a_two_step_refutation() {
        let mut db = ClauseDB::new();
        let p = db.insert(
            vec![Literal::positive(Atom::new("P", vec![]))],
            ClauseSource::Input(Rc::from("p")),
        );
        let not_p = db.insert(
            vec![Literal::negative(Atom::new("P", vec![]))],
            ClauseSource::Input(Rc::from("not_p")),
        );
        let empty = db.insert(
            vec![],
            ClauseSource::Resolution {
                left: p,
                right: not_p,
                substitution: Substitution::empty(),
            },
        );

        let steps = reconstruct(&db, empty);
        assert_eq!(steps.len(), 3);
        assert_eq!(steps.last().unwrap().clause_id, empty);
    }
}
