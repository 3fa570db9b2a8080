/*!
A small CLI that runs the worked scenarios of this library's test suite and prints whether each goal is
provable from its axioms, with the derivation when it is.

# Use

```sh
otter_fol_cli [--option(=value)]*
```

No input file is read — the scenarios are built in, with the problem set baked in rather than read from a
file, since no file format is in scope here (§6).
*/

use std::collections::HashSet;

use otter_fol::builder::*;
use otter_fol::config::Config;
use otter_fol::context::prove_formula;
use otter_fol::structures::formula::Formula;

mod parse_args;
use parse_args::parse_args;

struct Scenario {
    name: &'static str,
    axioms: Vec<Formula>,
    goal: Formula,
    expected_proven: bool,
}

fn scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            name: "chained implication",
            axioms: vec![
                implies(pred("P", vec![]), pred("Q", vec![])),
                implies(pred("Q", vec![]), pred("R", vec![])),
                pred("P", vec![]),
            ],
            goal: pred("R", vec![]),
            expected_proven: true,
        },
        Scenario {
            name: "socrates is mortal",
            axioms: vec![
                forall("x", implies(pred("Man", vec![var("x")]), pred("Mortal", vec![var("x")]))),
                pred("Man", vec![func("socrates", vec![])]),
            ],
            goal: pred("Mortal", vec![func("socrates", vec![])]),
            expected_proven: true,
        },
        Scenario {
            name: "disjunctive syllogism, quantified",
            axioms: vec![
                forall("x", or_(pred("P", vec![var("x")]), pred("Q", vec![var("x")]))),
                forall("x", not(pred("P", vec![var("x")]))),
            ],
            goal: forall("x", pred("Q", vec![var("x")])),
            expected_proven: true,
        },
        Scenario {
            name: "drinker-shaped quantifier swap",
            axioms: vec![exists(
                "x",
                forall("y", pred("Loves", vec![var("x"), var("y")])),
            )],
            goal: forall("y", exists("x", pred("Loves", vec![var("x"), var("y")]))),
            expected_proven: true,
        },
        Scenario {
            name: "law of the excluded middle",
            axioms: vec![],
            goal: or_(pred("P", vec![]), not(pred("P", vec![]))),
            expected_proven: true,
        },
        Scenario {
            name: "unrelated constants",
            axioms: vec![pred("P", vec![func("a", vec![])])],
            goal: pred("P", vec![func("b", vec![])]),
            expected_proven: false,
        },
    ]
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let mut config = Config::default();
    parse_args(&args, &mut config);

    let mut failures = 0;

    for scenario in scenarios() {
        let axioms: HashSet<Formula> = scenario.axioms.into_iter().collect();
        let outcome = prove_formula(&axioms, &scenario.goal, config.clone());

        let status = if outcome.proven { "proven" } else { "unprovable" };
        println!("s {} -> {status}", scenario.name);

        if outcome.proven != scenario.expected_proven {
            failures += 1;
            println!("c unexpected result for {:?}", scenario.name);
        }

        for step in &outcome.proof {
            println!("  {step}");
        }
    }

    if failures > 0 {
        std::process::exit(1);
    }
}
