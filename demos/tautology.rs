use std::collections::HashSet;

use otter_fol::builder::*;
use otter_fol::config::Config;
use otter_fol::context::prove_formula;
use otter_fol::structures::formula::Formula;

fn main() {
    let axioms: HashSet<Formula> = HashSet::new();
    let goal = or_(pred("P", vec![]), not(pred("P", vec![])));

    println!("No axioms are supplied.");
    println!("Goal:\n  {goal}\n");

    let outcome = prove_formula(&axioms, &goal, Config::default());
    println!("proven: {}", outcome.proven);
    assert!(outcome.proven, "the law of the excluded middle is a tautology");

    println!("Derivation:");
    for step in &outcome.proof {
        println!("  {step}");
    }

    println!();
    println!("A goal that does not follow from its axioms is reported unprovable, not an error:");
    let mut unrelated_axioms: HashSet<Formula> = HashSet::new();
    unrelated_axioms.insert(pred("P", vec![func("a", vec![])]));
    let unrelated_goal = pred("P", vec![func("b", vec![])]);
    let unrelated_outcome = prove_formula(&unrelated_axioms, &unrelated_goal, Config::default());
    println!("proven: {}", unrelated_outcome.proven);
    assert!(!unrelated_outcome.proven);
}
