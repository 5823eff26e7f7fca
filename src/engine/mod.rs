//! The progress and alert engine: pure, stateless building blocks composed
//! by the services layer. Safe to call concurrently; nothing here touches
//! I/O or shared state.

pub mod calculator;
pub mod classifier;
pub mod composer;
pub mod overlap;

pub use calculator::{compute, ProgressFigures};
pub use classifier::classify;
pub use composer::{compose, EnglishMessages, MessageResolver};
pub use overlap::has_overlap;
