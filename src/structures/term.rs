/*!
First-order terms.

A term is either a [variable](TermNode::Var) or a [function symbol](TermNode::Fun) applied to an ordered
sequence of argument terms. A zero-arity function is a constant. Skolem functions are ordinary function
symbols drawn from a reserved naming class (the `sk_` prefix, see [crate::normalise::skolem]) so that they
never collide with a symbol a caller supplies.

# Examples

```rust
# use otter_fol::structures::term::Term;
let socrates = Term::fun("socrates", vec![]);
let x = Term::var("x");
let loves = Term::fun("loves", vec![x.clone(), socrates.clone()]);

assert!(x.is_var());
assert!(!loves.is_var());
assert_eq!(loves.args().unwrap().len(), 2);
```
*/

use std::fmt;
use std::rc::Rc;

use super::Name;

/// A first-order term.
///
/// Wraps a [TermNode] in an [Rc] so subterms may be shared between formulae, clauses, and substitutions
/// without cloning the tree beneath them.
#[derive(Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Term(Rc<TermNode>);

/// The shape of a [Term].
#[derive(Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum TermNode {
    /// A logical variable.
    Var(Name),

    /// A function symbol applied to an ordered sequence of terms (a constant, when the sequence is empty).
    Fun(Name, Vec<Term>),
}

impl Term {
    /// A fresh variable term.
    pub fn var(name: impl AsRef<str>) -> Self {
        Term(Rc::new(TermNode::Var(super::name(name))))
    }

    /// A function (or constant, when `args` is empty) term.
    pub fn fun(name: impl AsRef<str>, args: Vec<Term>) -> Self {
        Term(Rc::new(TermNode::Fun(super::name(name), args)))
    }

    /// The underlying shape of the term.
    pub fn node(&self) -> &TermNode {
        &self.0
    }

    /// True if the term is a variable.
    pub fn is_var(&self) -> bool {
        matches!(self.0.as_ref(), TermNode::Var(_))
    }

    /// The name of the term, whether a variable or function symbol.
    pub fn name(&self) -> &Name {
        match self.0.as_ref() {
            TermNode::Var(name) => name,
            TermNode::Fun(name, _) => name,
        }
    }

    /// The variable this term names, if it is a variable.
    pub fn as_var(&self) -> Option<&Name> {
        match self.0.as_ref() {
            TermNode::Var(name) => Some(name),
            TermNode::Fun(..) => None,
        }
    }

    /// The arguments of a function term, or `None` for a variable.
    pub fn args(&self) -> Option<&[Term]> {
        match self.0.as_ref() {
            TermNode::Var(_) => None,
            TermNode::Fun(_, args) => Some(args),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.as_ref() {
            TermNode::Var(name) => write!(f, "{name}"),
            TermNode::Fun(name, args) if args.is_empty() => write!(f, "{name}"),
            TermNode::Fun(name, args) => {
                write!(f, "{name}(")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                write!(f, ")")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_constant_and_function() {
        let a = Term::fun("a", vec![]);
        assert_eq!(a.to_string(), "a");

        let f = Term::fun("f", vec![Term::var("x"), a]);
        assert_eq!(f.to_string(), "f(x, a)");
    }

    #[test]
    fn var_accessors() {
        let x = Term::var("x");
        assert!(x.is_var());
        assert_eq!(x.as_var().unwrap().as_ref(), "x");
        assert!(x.args().is_none());
    }
}
