//! Repository methods on `ConductorDb`, one module per table.
//!
//! Inserts are single `INSERT ... RETURNING id` statements; each commits on
//! its own because the connection never opens a transaction.

pub mod artifact;
pub mod project;
pub mod spec;
