use std::collections::HashSet;

use otter_fol::builder::*;
use otter_fol::config::Config;
use otter_fol::context::prove_formula;
use otter_fol::structures::formula::Formula;

fn axioms(fs: Vec<Formula>) -> HashSet<Formula> {
    fs.into_iter().collect()
}

#[test]
fn chained_implication_is_proven() {
    let context = axioms(vec![
        implies(pred("P", vec![]), pred("Q", vec![])),
        implies(pred("Q", vec![]), pred("R", vec![])),
        pred("P", vec![]),
    ]);
    let outcome = prove_formula(&context, &pred("R", vec![]), Config::default());
    assert!(outcome.proven);
    assert!(!outcome.proof.is_empty());
}

#[test]
fn socrates_is_mortal() {
    let context = axioms(vec![
        forall("x", implies(pred("Man", vec![var("x")]), pred("Mortal", vec![var("x")]))),
        pred("Man", vec![func("socrates", vec![])]),
    ]);
    let goal = pred("Mortal", vec![func("socrates", vec![])]);
    let outcome = prove_formula(&context, &goal, Config::default());
    assert!(outcome.proven);
}

#[test]
fn disjunctive_syllogism_over_a_quantified_domain() {
    let context = axioms(vec![
        forall("x", or_(pred("P", vec![var("x")]), pred("Q", vec![var("x")]))),
        forall("x", not(pred("P", vec![var("x")]))),
    ]);
    let goal = forall("x", pred("Q", vec![var("x")]));
    let outcome = prove_formula(&context, &goal, Config::default());
    assert!(outcome.proven);
}

#[test]
fn existential_of_universal_implies_universal_of_existential() {
    let context = axioms(vec![exists(
        "x",
        forall("y", pred("Loves", vec![var("x"), var("y")])),
    )]);
    let goal = forall("y", exists("x", pred("Loves", vec![var("x"), var("y")])));
    let outcome = prove_formula(&context, &goal, Config::default());
    assert!(outcome.proven);
}

#[test]
fn law_of_the_excluded_middle_needs_no_axioms() {
    let context = axioms(vec![]);
    let goal = or_(pred("P", vec![]), not(pred("P", vec![])));
    let outcome = prove_formula(&context, &goal, Config::default());
    assert!(outcome.proven);
}

#[test]
fn unrelated_constants_are_not_conflated() {
    let context = axioms(vec![pred("P", vec![func("a", vec![])])]);
    let goal = pred("P", vec![func("b", vec![])]);
    let outcome = prove_formula(&context, &goal, Config::default());
    assert!(!outcome.proven);
    assert!(outcome.proof.is_empty());
}

#[test]
fn proving_the_same_goal_twice_is_deterministic() {
    let context = axioms(vec![
        forall("x", implies(pred("Man", vec![var("x")]), pred("Mortal", vec![var("x")]))),
        pred("Man", vec![func("socrates", vec![])]),
    ]);
    let goal = pred("Mortal", vec![func("socrates", vec![])]);

    let first = prove_formula(&context, &goal, Config::default());
    let second = prove_formula(&context, &goal, Config::default());

    assert_eq!(first.proven, second.proven);
    assert_eq!(first.proof.len(), second.proof.len());
    for (a, b) in first.proof.iter().zip(second.proof.iter()) {
        assert_eq!(a.clause_text, b.clause_text);
    }
}
