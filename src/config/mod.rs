/*!
Configuration of a proof session.

A [Config] bundles the resource knobs a saturation run is bounded by, each wrapped in a [ConfigOption],
together with the switches that choose among sound variants of inference (whether subsumption runs, which
literals of a clause are eligible for resolution).
A session is configured once, at construction, and not reconfigured mid-proof.
*/

mod config_option;
pub use config_option::ConfigOption;

use std::time::Duration;

/// Which literals of a clause may participate in resolution and factoring.
///
/// Restricting eligibility to a subset of a clause's literals (a *selection function*, in the resolution
/// literature) cuts the branching factor of the saturation loop; [LiteralSelection::Unrestricted] is the
/// baseline the rest of §4.4 describes, [LiteralSelection::MaximalWeightOnly] is an optional stronger
/// restriction available to a caller willing to trade completeness-within-budget for speed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LiteralSelection {
    /// Every literal of a clause is eligible.
    Unrestricted,

    /// Only a clause's literals of maximal weight (symbol count) are eligible.
    MaximalWeightOnly,
}

/// The primary configuration structure for a [Context](crate::context::Context).
#[derive(Clone, Debug)]
pub struct Config {
    /// The maximum number of clauses the saturation loop may generate before giving up.
    pub max_clauses: ConfigOption<usize>,

    /// The maximum number of outer-loop iterations before giving up.
    pub max_iterations: ConfigOption<usize>,

    /// An optional wall-clock deadline for the saturation loop, checked once per iteration.
    pub time_limit: ConfigOption<Duration>,

    /// Whether forward and backward subsumption run during saturation.
    pub subsumption_enabled: ConfigOption<bool>,

    /// Which literals of a clause are eligible for resolution and factoring.
    pub literal_selection: LiteralSelection,
}

impl Default for Config {
    /// Defaults large enough to dispatch textbook examples: 10,000 generated clauses, 100,000
    /// iterations, a five second wall-clock deadline, subsumption on, no literal-selection restriction.
    fn default() -> Self {
        Config {
            max_clauses: ConfigOption {
                name: "max_clauses",
                min: 1,
                max: usize::MAX,
                value: 10_000,
            },
            max_iterations: ConfigOption {
                name: "max_iterations",
                min: 1,
                max: usize::MAX,
                value: 100_000,
            },
            time_limit: ConfigOption {
                name: "time_limit",
                min: Duration::from_secs(0),
                max: Duration::MAX,
                value: Duration::from_secs(5),
            },
            subsumption_enabled: ConfigOption {
                name: "subsumption_enabled",
                min: false,
                max: true,
                value: true,
            },
            literal_selection: LiteralSelection::Unrestricted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_budget_is_in_bounds() {
        let config = Config::default();
        assert!(config.max_clauses.in_bounds());
        assert!(config.max_iterations.in_bounds());
        assert!(config.time_limit.in_bounds());
        assert!(config.subsumption_enabled.in_bounds());
    }
}
