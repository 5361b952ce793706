//! # Code Maximum U-Values
//!
//! Regulatory ceilings on assembly U-value, keyed by code edition, climate
//! zone, and building type. Compliance requires the computed U-value not
//! exceed the configured maximum.
//!
//! The table is a fixed reference set; a lookup that misses at any level
//! means the combination is not supported, not that the request is malformed.

use std::collections::HashMap;

use crate::errors::{EvalError, EvalResult};

/// Standard maxima (code edition, climate zone, building type, max U-value)
const STANDARD_CODE_MAXIMA: [(&str, &str, &str, f64); 2] = [
    ("IECC2021", "5A", "wood-framed wall", 0.060),
    ("IECC2021", "5A", "metal-framed wall", 0.064),
];

/// Static nested mapping: code edition → climate zone → building type →
/// maximum allowed U-value. Immutable for the process lifetime.
#[derive(Debug, Clone)]
pub struct CodeTable {
    entries: HashMap<&'static str, HashMap<&'static str, HashMap<&'static str, f64>>>,
}

impl CodeTable {
    /// Build the standard code table
    pub fn standard() -> Self {
        let mut entries: HashMap<&'static str, HashMap<&'static str, HashMap<&'static str, f64>>> =
            HashMap::new();
        for (code, zone, building_type, max_u) in STANDARD_CODE_MAXIMA {
            entries
                .entry(code)
                .or_default()
                .entry(zone)
                .or_default()
                .insert(building_type, max_u);
        }
        Self { entries }
    }

    /// Maximum allowed U-value for a (code, climate zone, building type)
    /// triple, or `None` when any level of the lookup is missing.
    pub fn max_u(&self, code: &str, climate_zone: &str, building_type: &str) -> Option<f64> {
        self.entries
            .get(code)?
            .get(climate_zone)?
            .get(building_type)
            .copied()
    }

    /// Like [`max_u`](Self::max_u), failing with
    /// [`EvalError::UnsupportedCodeCombination`] on a miss.
    pub fn require_max_u(
        &self,
        code: &str,
        climate_zone: &str,
        building_type: &str,
    ) -> EvalResult<f64> {
        self.max_u(code, climate_zone, building_type).ok_or_else(|| {
            EvalError::unsupported_code_combination(code, climate_zone, building_type)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_lookups() {
        let table = CodeTable::standard();
        assert_eq!(
            table.max_u("IECC2021", "5A", "wood-framed wall"),
            Some(0.060)
        );
        assert_eq!(
            table.max_u("IECC2021", "5A", "metal-framed wall"),
            Some(0.064)
        );
    }

    #[test]
    fn test_miss_at_each_level() {
        let table = CodeTable::standard();
        assert_eq!(table.max_u("IECC2018", "5A", "wood-framed wall"), None);
        assert_eq!(table.max_u("IECC2021", "4C", "wood-framed wall"), None);
        assert_eq!(table.max_u("IECC2021", "5A", "mass wall"), None);
    }

    #[test]
    fn test_require_max_u_error_carries_triple() {
        let table = CodeTable::standard();
        let err = table
            .require_max_u("IECC2018", "4C", "mass wall")
            .unwrap_err();
        assert_eq!(
            err,
            EvalError::UnsupportedCodeCombination {
                code: "IECC2018".to_string(),
                climate_zone: "4C".to_string(),
                building_type: "mass wall".to_string(),
            }
        );
    }
}
