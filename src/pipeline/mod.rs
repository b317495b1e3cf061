//! Per-(app, feature) pipeline and the parallel batch driver.
//!
//! A unit reads every trace of every action of one app, extracts one
//! feature, reduces to means and builds the app's comparison table.

pub mod batch;
pub mod unit;

pub use batch::{run_batch, UnitOutcome};
pub use unit::{run_unit, AppInput};
