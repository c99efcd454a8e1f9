//! Data models module
//!
//! Defines the plan document and its passage structures.
//! Includes Reference, Passage, PlanDate, Day, Plan.

pub mod passage;
pub mod plan;

pub use passage::{Passage, Reference};
pub use plan::{Day, Plan, PlanDate};
