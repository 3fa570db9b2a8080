/*! A source of globally-unique names, threaded through a single clausification run. */

use crate::structures::Name;

/// Hands out variable and Skolem function names guaranteed not to collide with anything already in use
/// during one run of [crate::normalise::clausify].
///
/// Unlike [crate::substitution]'s capture-avoidance counter (a process-wide safety net that should never
/// actually fire), this counter is the normal, load-bearing mechanism the standardize-apart and
/// Skolemization passes use to mint new symbols — so it is threaded explicitly rather than hidden behind
/// a static.
#[derive(Debug, Default)]
pub struct FreshSupply {
    next: u64,
}

impl FreshSupply {
    pub fn new() -> Self {
        FreshSupply { next: 0 }
    }

    /// A fresh variable name derived from `base`.
    pub fn fresh_var(&mut self, base: &Name) -> Name {
        let n = self.next;
        self.next += 1;
        crate::structures::name(format!("{base}_{n}"))
    }

    /// A fresh Skolem function symbol. Skolem symbols carry the `sk_` prefix reserved for this purpose
    /// (see [crate::structures::term]), so a caller's own function symbols can never collide with one.
    pub fn fresh_skolem(&mut self) -> Name {
        let n = self.next;
        self.next += 1;
        crate::structures::name(format!("sk_{n}"))
    }
}
