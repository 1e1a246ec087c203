//! # conductor-core
//!
//! Core types for Conductor spec persistence.
//!
//! This crate provides the types shared by the config, database, and CLI crates:
//! - Entity structs for the three persisted rows (project, spec, artifact)
//! - Status and type enums stored as `snake_case` text
//! - The receipt returned after a spec has been saved

pub mod entities;
pub mod enums;
pub mod responses;
