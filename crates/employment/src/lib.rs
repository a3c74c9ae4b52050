//! Employment module (jobs and their compensation).
//!
//! Pure domain logic only: income computation and raises. A job has no
//! identity of its own; it belongs to whichever person holds it.

pub mod job;

pub use job::{Compensation, DEFAULT_HOURS_PER_YEAR, Job};
