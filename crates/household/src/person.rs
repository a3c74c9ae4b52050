use std::cell::RefCell;
use std::rc::Rc;

use hearth_core::{Entity, PersonId};
use hearth_employment::{Compensation, Job};

use crate::snapshot::{PersonSnapshot, SpouseSnapshot};

/// Youngest age at which a person may hold a job.
pub const MIN_WORKING_AGE: u32 = 16;

/// Youngest age at which a person may have a spouse.
pub const MIN_MARRIAGE_AGE: u32 = 18;

/// Shared handle to a person.
///
/// Families and callers hold the same person through clones of this handle.
pub type PersonRef = Rc<RefCell<Person>>;

/// A person, with an optional job and an optional spouse.
///
/// `job` and `spouse` are only ever written through [`Person::set_job`] and
/// [`Person::set_spouse`], which apply the age gates on every assignment.
/// Changing `age` afterwards does not re-check links that are already set.
///
/// The spouse link is a strong handle. A married couple therefore forms a
/// reference cycle that lives until one side calls `set_spouse(None)`.
pub struct Person {
    id: PersonId,
    first_name: String,
    last_name: String,
    age: u32,
    job: Option<Job>,
    spouse: Option<PersonRef>,
}

impl Person {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>, age: u32) -> Self {
        Self {
            id: PersonId::new(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            age,
            job: None,
            spouse: None,
        }
    }

    pub fn with_id(mut self, id: PersonId) -> Self {
        self.id = id;
        self
    }

    /// Builder form of [`Person::set_job`]; the age gate still applies.
    pub fn with_job(mut self, job: Job) -> Self {
        self.set_job(Some(job));
        self
    }

    /// Builder form of [`Person::set_spouse`]; the age gate still applies.
    pub fn with_spouse(mut self, spouse: &PersonRef) -> Self {
        self.set_spouse(Some(spouse));
        self
    }

    pub fn into_ref(self) -> PersonRef {
        Rc::new(RefCell::new(self))
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn set_first_name(&mut self, first_name: impl Into<String>) {
        self.first_name = first_name.into();
    }

    pub fn set_last_name(&mut self, last_name: impl Into<String>) {
        self.last_name = last_name.into();
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    /// Update the age. Existing job and spouse links are left as they are.
    pub fn set_age(&mut self, age: u32) {
        self.age = age;
    }

    pub fn job(&self) -> Option<&Job> {
        self.job.as_ref()
    }

    pub fn job_mut(&mut self) -> Option<&mut Job> {
        self.job.as_mut()
    }

    /// Assign (or clear) the job.
    ///
    /// Under [`MIN_WORKING_AGE`] the field is reset to empty whatever is passed.
    pub fn set_job(&mut self, job: Option<Job>) {
        if self.age < MIN_WORKING_AGE {
            if job.is_some() {
                tracing::debug!(
                    person = %self.id,
                    age = self.age,
                    "job discarded: below working age"
                );
            }
            self.job = None;
            return;
        }
        self.job = job;
    }

    /// The linked spouse, if any.
    pub fn spouse(&self) -> Option<PersonRef> {
        self.spouse.clone()
    }

    pub fn is_married(&self) -> bool {
        self.spouse.is_some()
    }

    /// Link (or unlink) a spouse. Only this side of the relation is written.
    ///
    /// The link holds until it is overwritten here; dropping every other
    /// handle to the spouse does not end the marriage.
    ///
    /// Under [`MIN_MARRIAGE_AGE`] the field is reset to empty whatever is passed.
    pub fn set_spouse(&mut self, spouse: Option<&PersonRef>) {
        if self.age < MIN_MARRIAGE_AGE {
            if spouse.is_some() {
                tracing::debug!(
                    person = %self.id,
                    age = self.age,
                    "spouse discarded: below marriage age"
                );
            }
            self.spouse = None;
            return;
        }
        self.spouse = spouse.cloned();
    }

    /// Spouse id and first name.
    ///
    /// A person linked to themselves may already be mutably borrowed through
    /// their own handle, so that case reads from `self` instead of the cell.
    fn spouse_summary(&self) -> Option<(PersonId, String)> {
        let spouse = self.spouse.as_ref()?;
        if std::ptr::eq(spouse.as_ptr(), self) {
            return Some((self.id, self.first_name.clone()));
        }
        let spouse = spouse.borrow();
        Some((spouse.id, spouse.first_name.clone()))
    }

    /// One-line summary of the person.
    ///
    /// `[Person: firstName:Ted lastName:Neward age:45 job:Salary(1000) spouse:Charlotte]`
    pub fn describe(&self) -> String {
        let job = match self.job.as_ref().map(Job::compensation) {
            Some(Compensation::Hourly(rate)) => format!("Hourly({})", rate as i64),
            Some(Compensation::Salary(amount)) => format!("Salary({amount})"),
            None => "nil".to_string(),
        };
        let spouse = self
            .spouse_summary()
            .map(|(_, name)| name)
            .unwrap_or_else(|| "nil".to_string());

        format!(
            "[Person: firstName:{} lastName:{} age:{} job:{} spouse:{}]",
            self.first_name, self.last_name, self.age, job, spouse
        )
    }

    pub fn snapshot(&self) -> PersonSnapshot {
        PersonSnapshot {
            id: self.id,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            age: self.age,
            job: self.job.clone(),
            spouse: self
                .spouse_summary()
                .map(|(id, first_name)| SpouseSnapshot { id, first_name }),
        }
    }
}

impl Entity for Person {
    type Id = PersonId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

// Hand-written so a married couple's cycle prints the spouse by id only.
impl core::fmt::Debug for Person {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let spouse = self.spouse.as_ref().map(|spouse| {
            if std::ptr::eq(spouse.as_ptr(), self) {
                Some(self.id)
            } else {
                spouse.try_borrow().ok().map(|spouse| spouse.id)
            }
        });
        f.debug_struct("Person")
            .field("id", &self.id)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("age", &self.age)
            .field("job", &self.job)
            .field("spouse", &spouse)
            .finish()
    }
}

impl core::fmt::Display for Person {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.describe())
    }
}
