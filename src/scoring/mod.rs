//! Score computation primitives.

pub mod engagement;
pub mod ranking;
pub mod scorer;

pub use engagement::*;
pub use ranking::*;
pub use scorer::*;
