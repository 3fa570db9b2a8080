/*! The `normalise` area's error type, completing the per-area layering [crate::types::err::ErrorKind] uses. */

use std::fmt;

/// A failure normalisation could in principle report.
///
/// No code path in this crate constructs one: [FormulaNode::ForAll](crate::structures::formula::FormulaNode::ForAll)
/// and [FormulaNode::Exists](crate::structures::formula::FormulaNode::Exists) bind a
/// [Name](crate::structures::Name), not a general [Term](crate::structures::term::Term), so the one
/// precondition [crate::normalise::clausify] needs (§3 invariant 2: a quantifier's bound position is a
/// variable) is enforced by the type itself rather than checked at normalisation time. The variant exists so
/// this area has somewhere to report failure if that type-level guarantee is ever relaxed, and so
/// [ErrorKind](crate::types::err::ErrorKind) layers area-for-area with [crate::unify::UnifyError] and
/// [crate::types::err::BuildError] rather than leaving `normalise` as the one area with no error type at all.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum NormaliseError {
    /// A quantifier's bound position was not a variable.
    NonVariableBinder,
}

impl fmt::Display for NormaliseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NormaliseError::NonVariableBinder => write!(f, "quantifier binder is not a variable"),
        }
    }
}

impl std::error::Error for NormaliseError {}
