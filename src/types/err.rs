/*!
Error types used in the library.

Most failures an engine user can actually trigger happen while assembling a [Context](crate::context::Context)
from its input formulae — everything downstream of that (unification, clausification, saturation) is total
or resolves exhaustion of its resource budget to an ordinary [ProofStatus](crate::context::ProofStatus),
not an error. `ErrorKind` is layered per area, one variant per sub-error enum, so a new failure-reporting
area can be added without disturbing existing callers' `match` arms.
*/

use std::rc::Rc;

use crate::normalise::NormaliseError;

/// A union of the library's error kinds.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// An error while building a context from its input formulae.
    Build(BuildError),

    /// An error while normalising a formula to clausal form. See [NormaliseError] for why this variant is
    /// never actually constructed in this crate.
    Normalise(NormaliseError),
}

impl From<BuildError> for ErrorKind {
    fn from(e: BuildError) -> Self {
        ErrorKind::Build(e)
    }
}

impl From<NormaliseError> for ErrorKind {
    fn from(e: NormaliseError) -> Self {
        ErrorKind::Normalise(e)
    }
}

/// Errors raised while assembling a [Context](crate::context::Context).
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BuildError {
    /// Two input formulae were given the same label; labels must be unique so a proof can cite one
    /// unambiguously.
    DuplicateLabel(Rc<str>),
}

impl std::fmt::Display for BuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildError::DuplicateLabel(label) => write!(f, "duplicate formula label: {label}"),
        }
    }
}

impl std::error::Error for BuildError {}
