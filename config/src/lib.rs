//! # Config Crate
//!
//! Centralized configuration constants for the LDraw mesh pipeline.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON, LDU_TO_METERS};
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 0.00000000001; // 1e-11, smaller than EPSILON (1e-10)
//! let is_zero = value.abs() < EPSILON;
//! assert!(is_zero);
//!
//! // Convert LDraw units to output units
//! let brick_width_ldu = 20.0;
//! let brick_width_m = brick_width_ldu * LDU_TO_METERS;
//! assert!((brick_width_m - 0.008).abs() < EPSILON);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **LDraw Compatible**: Units and conventions match the LDraw file format
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

#[cfg(test)]
mod tests;
