/*!
Miscellaneous items related to [logging](log).

Calls to the log macro are made throughout the library, to provide useful information when extending the
library or tracking down a surprising proof (or non-proof). No log implementation is provided — pick a
backend as a binary crate, as [crate::cli] does with `env_logger`.
*/

/// Targets to be used within a [log] macro.
pub mod targets {
    /// Logs related to [unification](crate::unify).
    pub const UNIFY: &str = "unify";

    /// Logs related to [clausification](crate::normalise).
    pub const NORMALISE: &str = "normalise";

    /// Logs related to the [saturation loop](crate::resolution).
    pub const RESOLUTION: &str = "resolution";

    /// Logs related to [subsumption](crate::resolution::subsumption).
    pub const SUBSUMPTION: &str = "subsumption";

    /// Logs related to [proof reconstruction](crate::proof).
    pub const PROOF: &str = "proof";
}
