use hearth_core::{DomainError, DomainResult, Entity, FamilyId};

use crate::person::PersonRef;
use crate::snapshot::FamilySnapshot;

/// At least one founder must be this old before a child can join.
pub const MIN_PARENT_AGE: u32 = 21;

/// A household: two founding spouses followed by any children.
///
/// Members are only ever appended. `members[0]` and `members[1]` are always
/// the founders.
#[derive(Debug)]
pub struct Family {
    id: FamilyId,
    members: Vec<PersonRef>,
}

impl Family {
    /// Marry `spouse1` and `spouse2` and found a household with them.
    ///
    /// Fails with [`DomainError::AlreadyMarried`] if either already has a
    /// spouse. Each side's link goes through the age-gated setter, so a
    /// founder under the marriage age ends up with no link on their own side.
    pub fn new(spouse1: PersonRef, spouse2: PersonRef) -> DomainResult<Self> {
        if spouse1.borrow().is_married() || spouse2.borrow().is_married() {
            tracing::warn!("family rejected: a founder is already married");
            return Err(DomainError::already_married());
        }

        spouse1.borrow_mut().set_spouse(Some(&spouse2));
        spouse2.borrow_mut().set_spouse(Some(&spouse1));

        let family = Self {
            id: FamilyId::new(),
            members: vec![spouse1, spouse2],
        };
        tracing::debug!(family = %family.id, "family founded");
        Ok(family)
    }

    pub fn with_id(mut self, id: FamilyId) -> Self {
        self.id = id;
        self
    }

    pub fn members(&self) -> &[PersonRef] {
        &self.members
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    pub fn founders(&self) -> (&PersonRef, &PersonRef) {
        (&self.members[0], &self.members[1])
    }

    pub fn children(&self) -> &[PersonRef] {
        &self.members[2..]
    }

    /// Add a child if either founder is at least [`MIN_PARENT_AGE`].
    ///
    /// Returns whether the child was added.
    pub fn have_child(&mut self, child: PersonRef) -> bool {
        let (first, second) = self.founders();
        let eligible =
            first.borrow().age() >= MIN_PARENT_AGE || second.borrow().age() >= MIN_PARENT_AGE;

        if !eligible {
            tracing::debug!(family = %self.id, "child refused: no founder is old enough");
            return false;
        }

        self.members.push(child);
        true
    }

    /// Sum of the default annual income of every member holding a job.
    ///
    /// Saturates at the `i64` bounds.
    pub fn household_income(&self) -> i64 {
        self.members
            .iter()
            .filter_map(|member| member.borrow().job().map(|job| job.annual_income()))
            .fold(0i64, i64::saturating_add)
    }

    pub fn snapshot(&self) -> FamilySnapshot {
        FamilySnapshot {
            id: self.id,
            members: self
                .members
                .iter()
                .map(|member| member.borrow().snapshot())
                .collect(),
            household_income: self.household_income(),
        }
    }
}

impl Entity for Family {
    type Id = FamilyId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
