//! # Material Conductivity Database
//!
//! Thermal conductivity reference values for envelope materials, and the
//! layer type that requests are built from.
//!
//! Conductivity k is in Btu·in/hr·ft²·°F; a layer's thermal resistance is
//! its thickness in inches divided by k. The material set is fixed: it is a
//! reference database, not a user-extensible catalog.
//!
//! ## Example
//!
//! ```rust
//! use envelope_core::materials::ConductivityTable;
//!
//! let table = ConductivityTable::standard();
//! let k = table.conductivity("Gypsum").unwrap();
//! assert_eq!(k, 1.1);
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::{EvalError, EvalResult};

/// Standard conductivity values (material name, k in Btu·in/hr·ft²·°F)
const STANDARD_CONDUCTIVITIES: [(&str, f64); 5] = [
    ("Gypsum", 1.1),
    ("Mineral Fiber", 0.24),
    ("Fiber Cement Panel", 1.7),
    ("Air Film (Inside)", 0.68),
    ("Air Film (Outside)", 0.17),
];

/// A single material layer in an envelope assembly.
///
/// Ephemeral, supplied per request. The material name must match a key in
/// the conductivity table exactly; thickness must be positive.
///
/// ## JSON Example
///
/// ```json
/// { "material": "Gypsum", "thicknessInches": 0.5 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialLayer {
    /// Material name, a key into the conductivity table (e.g., "Gypsum")
    pub material: String,

    /// Layer thickness in inches
    #[serde(rename = "thicknessInches")]
    pub thickness_in: f64,
}

impl MaterialLayer {
    pub fn new(material: impl Into<String>, thickness_in: f64) -> Self {
        Self {
            material: material.into(),
            thickness_in,
        }
    }
}

/// Static mapping from material name to thermal conductivity k.
///
/// Immutable for the process lifetime; lookups are exact-match on the
/// canonical material names.
#[derive(Debug, Clone)]
pub struct ConductivityTable {
    values: HashMap<&'static str, f64>,
}

impl ConductivityTable {
    /// Build the standard material database
    pub fn standard() -> Self {
        Self {
            values: STANDARD_CONDUCTIVITIES.into_iter().collect(),
        }
    }

    /// Look up conductivity k for a material name.
    ///
    /// Fails with [`EvalError::UnknownMaterial`] carrying the offending name
    /// when the material is not in the database.
    pub fn conductivity(&self, material: &str) -> EvalResult<f64> {
        self.values
            .get(material)
            .copied()
            .ok_or_else(|| EvalError::unknown_material(material))
    }

    /// Whether a material name is in the database
    pub fn contains(&self, material: &str) -> bool {
        self.values.contains_key(material)
    }

    /// Canonical material names, for listings and diagnostics
    pub fn material_names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.values.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_lookups() {
        let table = ConductivityTable::standard();
        assert_eq!(table.conductivity("Gypsum").unwrap(), 1.1);
        assert_eq!(table.conductivity("Mineral Fiber").unwrap(), 0.24);
        assert_eq!(table.conductivity("Fiber Cement Panel").unwrap(), 1.7);
        assert_eq!(table.conductivity("Air Film (Inside)").unwrap(), 0.68);
        assert_eq!(table.conductivity("Air Film (Outside)").unwrap(), 0.17);
    }

    #[test]
    fn test_unknown_material() {
        let table = ConductivityTable::standard();
        let err = table.conductivity("Brick").unwrap_err();
        assert_eq!(
            err,
            EvalError::UnknownMaterial {
                material_name: "Brick".to_string()
            }
        );
    }

    #[test]
    fn test_lookup_is_exact_match() {
        let table = ConductivityTable::standard();
        assert!(table.contains("Gypsum"));
        assert!(!table.contains("gypsum"));
        assert!(!table.contains("GYPSUM"));
    }

    #[test]
    fn test_material_names() {
        let table = ConductivityTable::standard();
        let names = table.material_names();
        assert_eq!(names.len(), 5);
        assert!(names.contains(&"Mineral Fiber"));
    }

    #[test]
    fn test_all_conductivities_positive() {
        let table = ConductivityTable::standard();
        for name in table.material_names() {
            assert!(table.conductivity(name).unwrap() > 0.0);
        }
    }

    #[test]
    fn test_layer_serialization() {
        let layer = MaterialLayer::new("Gypsum", 0.5);
        let json = serde_json::to_string(&layer).unwrap();
        assert_eq!(json, r#"{"material":"Gypsum","thicknessInches":0.5}"#);

        let roundtrip: MaterialLayer = serde_json::from_str(&json).unwrap();
        assert_eq!(layer, roundtrip);
    }
}
