//! # Reference Tables
//!
//! The three immutable lookup tables the evaluator depends on, aggregated so
//! they can be passed by reference into every evaluation. The standard set is
//! built once per process; there is no mutable global state and no locking.

use once_cell::sync::Lazy;

use crate::codes::CodeTable;
use crate::framing::FramingCorrectionTable;
use crate::materials::ConductivityTable;

static STANDARD_TABLES: Lazy<ReferenceTables> = Lazy::new(ReferenceTables::build_standard);

/// The reference data consumed by [`calculate`](crate::calculations::envelope::calculate):
/// material conductivities, code maximum U-values, and framing corrections.
#[derive(Debug, Clone)]
pub struct ReferenceTables {
    /// Material name → thermal conductivity k
    pub conductivity: ConductivityTable,
    /// Code edition → climate zone → building type → maximum U-value
    pub codes: CodeTable,
    /// Framing kind → correction factor
    pub framing: FramingCorrectionTable,
}

impl ReferenceTables {
    /// The process-wide standard reference set, initialized on first use.
    pub fn standard() -> &'static ReferenceTables {
        &STANDARD_TABLES
    }

    fn build_standard() -> Self {
        Self {
            conductivity: ConductivityTable::standard(),
            codes: CodeTable::standard(),
            framing: FramingCorrectionTable::standard(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_is_shared() {
        let a = ReferenceTables::standard() as *const ReferenceTables;
        let b = ReferenceTables::standard() as *const ReferenceTables;
        assert_eq!(a, b);
    }

    #[test]
    fn test_aggregated_lookups() {
        let tables = ReferenceTables::standard();
        assert_eq!(tables.conductivity.conductivity("Gypsum").unwrap(), 1.1);
        assert_eq!(
            tables.codes.max_u("IECC2021", "5A", "wood-framed wall"),
            Some(0.060)
        );
        assert_eq!(tables.framing.factor("metal"), 1.2);
    }
}
