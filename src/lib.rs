/*!
A library for determining the provability of first-order logic formulae by clausal resolution.

Given a set of axioms and a goal, [context::prove_formula] decides (within a resource budget) whether the
goal is a logical consequence of the axioms, by refutation: negate the goal, clausify everything, and search
for the empty clause.

# Pipeline

```text
Formula (axioms, negated goal)
  │ normalise::clausify
  ▼
Clauses
  │ resolution::saturate
  ▼
⊥ (proven) or passive exhausted / budget exceeded (unprovable within budget)
  │ proof::reconstruct
  ▼
Ordered derivation
```

# Example

```rust
use otter_fol::builder::*;
use otter_fol::config::Config;
use otter_fol::context::prove_formula;
use std::collections::HashSet;

let mut axioms = HashSet::new();
axioms.insert(forall("x", implies(pred("Man", vec![var("x")]), pred("Mortal", vec![var("x")]))));
axioms.insert(pred("Man", vec![func("socrates", vec![])]));

let goal = pred("Mortal", vec![func("socrates", vec![])]);
let outcome = prove_formula(&axioms, &goal, Config::default());
assert!(outcome.proven);
```
*/

pub mod builder;
pub mod config;
pub mod context;
pub mod db;
pub mod generic;
pub mod misc;
pub mod normalise;
pub mod proof;
pub mod resolution;
pub mod structures;
pub mod substitution;
pub mod types;
pub mod unify;
