pub mod bundle;
pub mod classifiers;
pub mod config;
pub mod core;
pub mod ensemble;
pub mod input;
pub mod logging;
pub mod preprocessing;
pub mod report;
pub mod tasks;
pub mod utils;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;
