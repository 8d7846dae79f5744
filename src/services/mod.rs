//! Boundary traits for external collaborators plus in-memory stand-ins.

pub mod tally;
pub mod weight_store;

pub use tally::{InMemoryTallyProvider, TallyProvider};
pub use weight_store::{CategoryWeightStore, InMemoryWeightStore};
