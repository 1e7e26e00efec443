use serde::{Deserialize, Serialize};

/// Edge count from which [`ComplexityModel::StirlingThreshold`] switches to
/// the `m ln m` approximation.
pub const STIRLING_THRESHOLD: usize = 100;

/// How a field's edge count is turned into its complexity scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComplexityModel {
    /// `ln(m!)` for every edge count, summed term by term.
    #[default]
    LogFactorial,
    /// `ln(m!)` below [`STIRLING_THRESHOLD`] edges, `m ln m` from there on.
    /// Matches records produced by the legacy miner.
    StirlingThreshold,
}

impl ComplexityModel {
    /// Complexity of a field with `edge_count` edges. Zero edges yield zero.
    pub fn field_complexity(self, edge_count: usize) -> f64 {
        if edge_count == 0 {
            return 0.0;
        }
        match self {
            ComplexityModel::LogFactorial => ln_factorial(edge_count),
            ComplexityModel::StirlingThreshold if edge_count < STIRLING_THRESHOLD => {
                ln_factorial(edge_count)
            }
            ComplexityModel::StirlingThreshold => {
                let m = edge_count as f64;
                m * m.ln()
            }
        }
    }
}

/// Natural logarithm of `m!` computed as `ln 2 + ln 3 + ... + ln m`.
///
/// The factorial itself is never materialised.
pub fn ln_factorial(m: usize) -> f64 {
    (2..=m).map(|i| (i as f64).ln()).sum()
}

/// Field complexity under the default [`ComplexityModel::LogFactorial`] model.
pub fn field_complexity(edge_count: usize) -> f64 {
    ComplexityModel::LogFactorial.field_complexity(edge_count)
}
