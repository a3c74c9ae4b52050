//! Household module (people, marriage and families).
//!
//! This crate holds the eligibility rules for people: who may hold a job, who
//! may be married, and when a family may grow. Everything here is deterministic,
//! single-threaded domain logic (no IO, no storage).
//!
//! People are shared through [`PersonRef`] handles so a family and any outside
//! holder see the same person. Spouse links are non-owning.

pub mod family;
pub mod person;
pub mod snapshot;

pub use family::{Family, MIN_PARENT_AGE};
pub use person::{MIN_MARRIAGE_AGE, MIN_WORKING_AGE, Person, PersonRef};
pub use snapshot::{FamilySnapshot, PersonSnapshot, SpouseSnapshot};
