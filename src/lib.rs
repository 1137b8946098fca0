pub mod classifiers;
pub mod core;
pub mod inference;
pub mod store;
pub mod tasks;
pub mod ui;
pub mod utils;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;
