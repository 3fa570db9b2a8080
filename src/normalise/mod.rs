/*!
Clausification: turning an arbitrary first-order [Formula] into an equisatisfiable set of clauses.

The pipeline runs the stages documented in order (§4.3):
eliminate implications → negation normal form → standardize bound variables apart → Skolemize (which
also drops the now-redundant universal quantifiers) → distribute ∨ over ∧ → read off clauses, discarding
tautologies.

```text
Formula
  │ eliminate_implications
  │ to_nnf
  │ standardize_apart
  │ skolemize
  │ distribute
  ▼
quantifier-free formula, ∧ of ∨ of literals
  │ extract_clauses
  ▼
Vec<Vec<Literal>>
```

Every stage is total: a [Formula] built through [crate::builder] is always well-formed (a bound position is
always a variable, by construction), so clausification of an in-memory formula cannot fail. It is exposed
here as an ordinary function rather than one returning a `Result` for that reason; [crate::context] is the
layer that turns "no clauses could be produced because the input was empty" and similar caller-visible
conditions into [BuildError](crate::types::err::BuildError) where that is actually possible. This area still
declares [NormaliseError] to keep [ErrorKind](crate::types::err::ErrorKind)'s per-area layering complete;
see that type's documentation for why nothing in this crate ever constructs one.
*/

pub mod cnf;
pub mod err;
pub mod fresh;
pub mod nnf;
pub mod rename;
pub mod skolem;

use crate::structures::formula::Formula;
use crate::structures::literal::Literal;

pub use err::NormaliseError;
pub use fresh::FreshSupply;

/// Runs the full clausification pipeline on a single formula, producing zero or more clauses (as raw
/// literal vectors — [crate::db::ClauseDB] is responsible for wrapping each in a [Clause](crate::structures::clause::Clause)
/// with an assigned [ClauseId](crate::structures::clause::ClauseId)).
pub fn clausify(formula: &Formula, supply: &mut FreshSupply) -> Vec<Vec<Literal>> {
    let no_implications = nnf::eliminate_implications(formula);
    let in_nnf = nnf::to_nnf(&no_implications);
    let standardized = rename::standardize_apart(&in_nnf, supply);
    let skolemized = skolem::skolemize(&standardized, supply);
    let distributed = cnf::distribute(&skolemized);
    cnf::extract_clauses(&distributed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::term::Term;

    #[test]
    fn clausifies_a_simple_implication() {
        let mut supply = FreshSupply::new();
        let p = Formula::pred("P", vec![Term::var("x")]);
        let q = Formula::pred("Q", vec![Term::var("x")]);
        let f = Formula::forall("x", Formula::implies(p, q));

        let clauses = clausify(&f, &mut supply);
        assert_eq!(clauses.len(), 1);
        assert_eq!(clauses[0].len(), 2);
    }

    #[test]
    fn clausifies_existential_into_a_skolem_constant() {
        let mut supply = FreshSupply::new();
        let f = Formula::exists("y", Formula::pred("Loves", vec![Term::var("y")]));
        let clauses = clausify(&f, &mut supply);
        assert_eq!(clauses.len(), 1);
        assert_eq!(clauses[0].len(), 1);
        assert!(clauses[0][0].atom().args[0].args().unwrap().is_empty());
    }

    #[test]
    fn drinker_paradox_shape_clausifies_without_panicking() {
        let mut supply = FreshSupply::new();
        let drinks = |t: Term| Formula::pred("Drinks", vec![t]);
        let body = Formula::implies(drinks(Term::var("x")), drinks(Term::var("y")));
        let f = Formula::exists("x", Formula::forall("y", body));
        let clauses = clausify(&f, &mut supply);
        assert!(!clauses.is_empty());
    }
}
