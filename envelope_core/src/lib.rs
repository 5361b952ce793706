//! # envelope_core - Envelope Thermal Performance Engine
//!
//! `envelope_core` evaluates building-envelope assemblies (layered walls)
//! against energy-code maximum U-values. It is the computational heart of the
//! envelope evaluation service, with a clean, JSON-first API.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Immutable Reference Data**: Conductivity, code, and framing tables are
//!   built once and passed by reference into every evaluation
//!
//! ## Quick Start
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
//!         MaterialLayer::new("Gypsum", 0.5),
//!         MaterialLayer::new("Mineral Fiber", 3.5),
//!     ],
//!     framing: "wood".to_string(),
//!     code: "IECC2021".to_string(),
//! };
//!
//! let result = calculate(&input, ReferenceTables::standard()).unwrap();
//! println!("U = {:.3}, compliant: {}", result.u_value, result.compliance);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The envelope thermal evaluation
//! - [`materials`] - Material layers and the conductivity database
//! - [`codes`] - Code maximum U-values by edition, zone, and building type
//! - [`framing`] - Framing thermal-bridging correction factors
//! - [`tables`] - Aggregated immutable reference tables
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod codes;
pub mod errors;
pub mod framing;
pub mod materials;
pub mod tables;

// Re-export commonly used types at crate root for convenience
pub use calculations::envelope::{calculate, CondensationRisk, EnvelopeInput, EnvelopeResult};
pub use errors::{EvalError, EvalResult};
pub use materials::MaterialLayer;
pub use tables::ReferenceTables;
