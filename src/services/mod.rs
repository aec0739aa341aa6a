//! Service layer containing parsing, arithmetic and output helpers.
//!
//! ## Service map
//! - `parser.rs` — query count and per-line shape parsing.
//! - `geometry.rs` — closed-form area formulas.
//! - `output.rs` — fixed-precision formatting and JSON/text output.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Only `output.rs` writes to stdout.

pub mod geometry;
pub mod output;
pub mod parser;
