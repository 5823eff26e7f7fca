#![doc(test(attr(deny(warnings))))]

//! Progress Core computes budget and saving-goal progress for a personal
//! finance tracker: usage ratios, time-weighted status classification,
//! alert messages, and the no-overlapping-intervals rule.

pub mod config;
pub mod core;
pub mod domain;
pub mod engine;
pub mod errors;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Progress Core tracing initialized.");
    });
}
