//! Command handler layer.
//!
//! ## Files
//! - `area.rs` — read queries, compute areas, print results.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate parsing and arithmetic to `services/*`.
//! - Keep output schema stable.

pub mod area;

pub use area::handle_area_command;
