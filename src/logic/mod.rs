//! Logic modules: translate catalog requests into concrete actions.
//!
//! # Modules
//!
//! - `resolver`: installation order over declared dependencies
//! - `environment`: environment-variable composition for subprocesses

pub mod environment;
pub mod resolver;
