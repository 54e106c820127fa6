pub mod driver;
pub mod error;
pub mod pricing;
pub mod report;
pub mod ride;
pub mod rider;
pub mod runner;
pub mod scenario;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;
