//! Plain-data views of people and families.
//!
//! `PersonRef` handles cannot be serialized directly (the spouse link is a
//! non-owning pointer), so reports go through these owned copies instead.

use serde::{Deserialize, Serialize};

use hearth_core::{FamilyId, PersonId};
use hearth_employment::Job;

/// The spouse side of a [`PersonSnapshot`], by reference rather than by value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpouseSnapshot {
    pub id: PersonId,
    pub first_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonSnapshot {
    pub id: PersonId,
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    pub job: Option<Job>,
    pub spouse: Option<SpouseSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FamilySnapshot {
    pub id: FamilyId,
    /// Founders first, then children in the order they joined.
    pub members: Vec<PersonSnapshot>,
    pub household_income: i64,
}
