//! Core application primitives (engines, orchestrators)

pub mod coordinator;

pub use coordinator::*;
