use std::collections::HashSet;

use otter_fol::builder::*;
use otter_fol::config::Config;
use otter_fol::context::prove_formula;
use otter_fol::structures::formula::Formula;

fn main() {
    let man_implies_mortal = forall(
        "x",
        implies(pred("Man", vec![var("x")]), pred("Mortal", vec![var("x")])),
    );
    let socrates_is_a_man = pred("Man", vec![func("socrates", vec![])]);

    println!("Axioms:");
    println!("  {man_implies_mortal}");
    println!("  {socrates_is_a_man}");

    let mut axioms: HashSet<Formula> = HashSet::new();
    axioms.insert(man_implies_mortal);
    axioms.insert(socrates_is_a_man);

    let goal = pred("Mortal", vec![func("socrates", vec![])]);
    println!("Goal:\n  {goal}\n");

    let outcome = prove_formula(&axioms, &goal, Config::default());

    println!("proven: {}", outcome.proven);
    assert!(outcome.proven);

    println!("Derivation:");
    for step in &outcome.proof {
        println!("  {step}");
    }
}
