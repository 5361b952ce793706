//! # Framing Correction Factors
//!
//! Multipliers approximating the heat-loss increase from thermal bridging
//! through structural framing. Applied to the assembly's uncorrected
//! transmittance (1 / RTotal) before the code comparison.
//!
//! ## Default-value policy
//!
//! Unrecognized framing kinds resolve to the neutral factor 1.0. This is a
//! documented default, not an error: requests with framing the table does
//! not model are evaluated as if framing had no thermal-bridging effect.

use std::collections::HashMap;

/// Standard correction factors (framing kind, multiplier)
const STANDARD_FRAMING_FACTORS: [(&str, f64); 2] = [
    ("wood", 1.0),
    ("metal", 1.2), // assume 20% performance loss
];

/// Static mapping from framing kind to multiplicative correction factor.
/// Immutable for the process lifetime; lookups are exact-match.
#[derive(Debug, Clone)]
pub struct FramingCorrectionTable {
    factors: HashMap<&'static str, f64>,
}

impl FramingCorrectionTable {
    /// Factor applied when the framing kind is not in the table
    pub const NEUTRAL_FACTOR: f64 = 1.0;

    /// Build the standard framing table
    pub fn standard() -> Self {
        Self {
            factors: STANDARD_FRAMING_FACTORS.into_iter().collect(),
        }
    }

    /// Correction factor for a framing kind.
    ///
    /// Unrecognized kinds return [`NEUTRAL_FACTOR`](Self::NEUTRAL_FACTOR);
    /// this lookup never fails.
    pub fn factor(&self, framing: &str) -> f64 {
        self.factors
            .get(framing)
            .copied()
            .unwrap_or(Self::NEUTRAL_FACTOR)
    }
}
