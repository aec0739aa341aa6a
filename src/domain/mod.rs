//! Shared data model layer (structs only).
//!
//! ## Files
//! - `models.rs` — shape values, per-query results and the JSON envelope.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no I/O.
//!
//! ## Compatibility note
//! `AreaResult` and `JsonOut` define the `--json` output schema.

pub mod models;
