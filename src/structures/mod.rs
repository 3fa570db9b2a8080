/*!
The abstract elements of a proof: [terms](term), [formulae](formula), [literals](literal) and [clauses](clause).

Each of these is a finite, immutable value tree.
Terms and formulae are wrapped in an [Rc](std::rc::Rc) so that sharing a subterm or subformula (for example, when a
clause is copied from `active` into a resolvent) is a pointer copy rather than a deep clone.

A [Name] is used throughout for variable, function, and predicate symbols.
*/

pub mod clause;
pub mod formula;
pub mod literal;
pub mod term;

use std::rc::Rc;

/// A variable, function, or predicate symbol.
pub type Name = Rc<str>;

/// Converts any string-like value into a [Name].
pub fn name(s: impl AsRef<str>) -> Name {
    Rc::from(s.as_ref())
}
