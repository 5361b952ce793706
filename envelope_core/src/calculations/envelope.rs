//! # Envelope Thermal Performance Calculation
//!
//! Evaluates a layered wall assembly against an energy-code maximum U-value.
//!
//! ## Assumptions
//!
//! - One-dimensional, steady-state heat flow through the layer stack
//! - Layer resistances act in series: R = thickness / k per layer
//! - Framing effects are approximated by a single multiplicative correction
//! - Condensation risk is a fixed-threshold screen, not a hygrothermal simulation
//!
//! ## Example
//!
//! ```rust
//! use envelope_core::calculations::envelope::{calculate, EnvelopeInput};
//! use envelope_core::materials::MaterialLayer;
//! use envelope_core::tables::ReferenceTables;
//!
//! let input = EnvelopeInput {
//!     climate_zone: "5A".to_string(),
//!     building_type: "wood-framed wall".to_string(),
//!     layers: vec![
//!         MaterialLayer::new("Air Film (Inside)", 1.0),
//!         MaterialLayer::new("Gypsum", 0.5),
//!         MaterialLayer::new("Mineral Fiber", 3.5),
//!         MaterialLayer::new("Fiber Cement Panel", 0.3125),
//!         MaterialLayer::new("Air Film (Outside)", 1.0),
//!     ],
//!     framing: "wood".to_string(),
//!     code: "IECC2021".to_string(),
//! };
//!
//! let result = calculate(&input, ReferenceTables::standard()).unwrap();
//!
//! println!("R-total: {:.2}", result.r_total);
//! println!("U-value: {:.3} (max {:.3})", result.u_value, result.code_max_u);
//! println!("Compliant: {}", result.compliance);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{EvalError, EvalResult};
use crate::materials::MaterialLayer;
use crate::tables::ReferenceTables;

/// Total R-value above which the assembly is screened as low condensation risk
const LOW_RISK_R_THRESHOLD: f64 = 15.0;

/// Compliance margin (percent) below which the condensation advisory is issued
const ADVISORY_MARGIN_PERCENT: f64 = 10.0;

/// Recommendation when the assembly exceeds its code maximum U-value
const REC_ADD_INSULATION: &str = "Add continuous insulation to reduce U-value";

/// Recommendation when compliant but inside the advisory margin band
const REC_CONSIDER_CI: &str = "Consider CI to improve condensation resistance";

/// Input parameters for an envelope thermal evaluation.
///
/// String fields key into the reference tables; layer order does not affect
/// the result. All values use US customary units to match the reference
/// tables (thickness in inches, conductivity in Btu·in/hr·ft²·°F).
///
/// ## JSON Example
///
/// ```json
/// {
///   "climateZone": "5A",
///   "buildingType": "wood-framed wall",
///   "layers": [
///     { "material": "Gypsum", "thicknessInches": 0.5 },
///     { "material": "Mineral Fiber", "thicknessInches": 3.5 }
///   ],
///   "framing": "wood",
///   "code": "IECC2021"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvelopeInput {
    /// Climate zone designation (e.g., "5A")
    pub climate_zone: String,

    /// Assembly type the code table keys on (e.g., "wood-framed wall")
    pub building_type: String,

    /// Material layers of the assembly; at least one is required
    pub layers: Vec<MaterialLayer>,

    /// Framing kind for the thermal-bridging correction ("wood", "metal");
    /// unrecognized kinds evaluate with the neutral factor 1.0
    pub framing: String,

    /// Energy code edition (e.g., "IECC2021")
    pub code: String,
}

impl EnvelopeInput {
    /// Validate input parameters.
    ///
    /// A non-empty layer list with positive, finite thicknesses guarantees
    /// RTotal > 0, so the U-value derivation cannot divide by zero.
    pub fn validate(&self) -> EvalResult<()> {
        if self.layers.is_empty() {
            return Err(EvalError::invalid_input(
                "layers",
                "[]",
                "At least one material layer is required",
            ));
        }
        for layer in &self.layers {
            if !layer.thickness_in.is_finite() || layer.thickness_in <= 0.0 {
                return Err(EvalError::invalid_input(
                    "thicknessInches",
                    layer.thickness_in.to_string(),
                    "Layer thickness must be a positive number",
                ));
            }
        }
        Ok(())
    }
}

/// Condensation risk screen based on total assembly R-value.
///
/// A fixed-threshold heuristic standing in for a full hygrothermal analysis:
/// assemblies with RTotal above the threshold screen as `Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CondensationRisk {
    Low,
    Moderate,
}

impl std::fmt::Display for CondensationRisk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CondensationRisk::Low => write!(f, "Low"),
            CondensationRisk::Moderate => write!(f, "Moderate"),
        }
    }
}

/// Results from an envelope thermal evaluation.
///
/// Rounding is applied only at this output boundary: `u_value` is derived
/// from the unrounded resistance sum, and `r_total` is reported rounded
/// independently of the value used internally.
///
/// ## JSON Example
///
/// ```json
/// {
///   "RTotal": 22.38,
///   "UValue": 0.045,
///   "codeMaxU": 0.06,
///   "compliance": true,
///   "margin": 25.0,
///   "condensationRisk": "Low",
///   "recommendations": []
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvelopeResult {
    /// Total thermal resistance (hr·ft²·°F/Btu), rounded to 2 decimals
    #[serde(rename = "RTotal")]
    pub r_total: f64,

    /// Framing-corrected thermal transmittance, rounded to 3 decimals
    #[serde(rename = "UValue")]
    pub u_value: f64,

    /// Code maximum U-value for the requested code/zone/building type
    pub code_max_u: f64,

    /// Whether the corrected U-value meets the code maximum
    pub compliance: bool,

    /// Signed compliance margin in percent, rounded to 2 decimals;
    /// negative when non-compliant
    pub margin: f64,

    /// Fixed-threshold condensation risk screen
    pub condensation_risk: CondensationRisk,

    /// Advisories, in priority order; at most one is ever produced
    pub recommendations: Vec<String>,
}

/// Round to a fixed number of decimal places at the output boundary
fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

/// Evaluate the thermal performance of an envelope assembly.
///
/// This is a pure function: no side effects, no hidden state. Identical
/// inputs against the same tables yield identical outputs.
///
/// # Arguments
///
/// * `input` - Assembly description (layers, framing, code targeting)
/// * `tables` - Immutable reference tables (conductivity, code maxima, framing)
///
/// # Returns
///
/// * `Ok(EnvelopeResult)` - Assessment with compliance verdict and advisories
/// * `Err(EvalError)` - Structured error if the request is invalid
///
/// # Example
///
/// ```rust
/// use envelope_core::calculations::envelope::{calculate, EnvelopeInput};
/// use envelope_core::materials::MaterialLayer;
/// use envelope_core::tables::ReferenceTables;
///
/// let input = EnvelopeInput {
///     climate_zone: "5A".to_string(),
///     building_type: "wood-framed wall".to_string(),
///     layers: vec![MaterialLayer::new("Gypsum", 0.5)],
///     framing: "wood".to_string(),
///     code: "IECC2021".to_string(),
/// };
///
/// let result = calculate(&input, ReferenceTables::standard()).unwrap();
/// assert!(!result.compliance);
/// ```
pub fn calculate(input: &EnvelopeInput, tables: &ReferenceTables) -> EvalResult<EnvelopeResult> {
    // Validate inputs; rejects the degenerate RTotal = 0 case up front
    input.validate()?;

    // === Total Resistance ===
    // Layers act in series; each contributes R = thickness / k. An unknown
    // material aborts immediately with no partial result.
    let mut r_total = 0.0;
    for layer in &input.layers {
        let k = tables.conductivity.conductivity(&layer.material)?;
        r_total += layer.thickness_in / k;
    }

    // === Framing Correction ===
    let correction_factor = tables.framing.factor(&input.framing);

    // The rounded U-value is what gets compared against the code maximum
    // and fed into the margin, matching the reported numbers exactly.
    let u_value = round_to(1.0 / r_total * correction_factor, 3);

    // === Code Comparison ===
    // Raised after the U-value derivation: an unsupported combination is an
    // error even though RTotal and UValue were computable.
    let code_max_u =
        tables
            .codes
            .require_max_u(&input.code, &input.climate_zone, &input.building_type)?;

    let compliance = u_value <= code_max_u;
    let margin = round_to((code_max_u - u_value) / code_max_u * 100.0, 2);

    // === Condensation Screen ===
    let condensation_risk = if r_total > LOW_RISK_R_THRESHOLD {
        CondensationRisk::Low
    } else {
        CondensationRisk::Moderate
    };

    // === Recommendations ===
    // At most one advisory; non-compliance takes priority over the margin band.
    let mut recommendations = Vec::new();
    if !compliance {
        recommendations.push(REC_ADD_INSULATION.to_string());
    } else if margin < ADVISORY_MARGIN_PERCENT {
        recommendations.push(REC_CONSIDER_CI.to_string());
    }

    Ok(EnvelopeResult {
        r_total: round_to(r_total, 2),
        u_value,
        code_max_u,
        compliance,
        margin,
        condensation_risk,
        recommendations,
    })
}
