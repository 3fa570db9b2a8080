/*!
Ergonomic constructors for building formulae and terms by hand.

A collaborator assembling formulae programmatically (the out-of-scope surface parser described in §6, or a
test) can call [Formula]/[Term] constructors directly, but the short names here read closer to the surface
grammar's `not`/`and`/`or`/`implies`/`forall`/`exists` keywords.

# Example

```rust
# use otter_fol::builder::*;
let socrates_is_mortal = forall("x", implies(
    pred("Man", vec![var("x")]),
    pred("Mortal", vec![var("x")]),
));
assert_eq!(socrates_is_mortal.to_string(), "∀x. (Man(x) → Mortal(x))");
```
*/

use crate::structures::formula::Formula;
use crate::structures::term::Term;

/// A variable term.
pub fn var(name: impl AsRef<str>) -> Term {
    Term::var(name)
}

/// A function (or, with no arguments, constant) term.
pub fn func(name: impl AsRef<str>, args: Vec<Term>) -> Term {
    Term::fun(name, args)
}

/// An atomic predicate formula.
pub fn pred(name: impl AsRef<str>, args: Vec<Term>) -> Formula {
    Formula::pred(name, args)
}

/// Negation.
pub fn not(f: Formula) -> Formula {
    Formula::not(f)
}

/// Conjunction.
pub fn and_(a: Formula, b: Formula) -> Formula {
    Formula::and(a, b)
}

/// Disjunction.
pub fn or_(a: Formula, b: Formula) -> Formula {
    Formula::or(a, b)
}

/// Material implication.
pub fn implies(a: Formula, b: Formula) -> Formula {
    Formula::implies(a, b)
}

/// Universal quantification.
pub fn forall(var: impl AsRef<str>, body: Formula) -> Formula {
    Formula::forall(var, body)
}

/// Existential quantification.
pub fn exists(var: impl AsRef<str>, body: Formula) -> Formula {
    Formula::exists(var, body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_a_quantified_implication() {
        let f = forall("x", implies(pred("P", vec![var("x")]), pred("Q", vec![var("x")])));
        assert_eq!(f.to_string(), "∀x. (P(x) → Q(x))");
    }

    #[test]
    fn builds_a_function_term() {
        let t = func("f", vec![var("x"), func("a", vec![])]);
        assert_eq!(t.to_string(), "f(x, a)");
    }
}
