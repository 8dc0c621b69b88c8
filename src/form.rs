//! Form reconciliation.
//!
//! Two concerns live here: the gender/role cross-field derivation (two role
//! labels are gender-exclusive, and picking one side force-corrects the
//! other) and the submit-time decision of whether an edited draft is a
//! create, an update, or an attach of a remote-listed candidate.

use jiff::civil::Date;

use crate::error::{Result, WardbookError};
use crate::types::{Gender, Role, UserRecord};
use crate::validate;

/// A strongly-typed form submission
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileDraft {
    pub id: Option<i64>,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub avatar: String,
    pub gender: Option<Gender>,
    pub role: Option<Role>,
    pub dob: Option<Date>,
    pub university: Option<String>,
    pub workplace: Option<String>,
    pub job_description: Option<String>,
}

impl ProfileDraft {
    /// Prefill a draft from an existing record (the edit-form reset).
    pub fn from_record(record: &UserRecord) -> Self {
        Self {
            id: Some(record.id),
            email: record.email.clone(),
            first_name: record.first_name.clone(),
            last_name: record.last_name.clone(),
            avatar: record.avatar.clone(),
            gender: record.gender,
            role: record.role,
            dob: record.dob,
            university: record.university.clone(),
            workplace: record.workplace.clone(),
            job_description: record.job_description.clone(),
        }
    }

    /// Materialize the draft as a record under the given id.
    pub fn into_record(self, id: i64) -> UserRecord {
        UserRecord {
            id,
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
            avatar: self.avatar,
            gender: self.gender,
            role: self.role,
            dob: self.dob,
            university: self.university,
            workplace: self.workplace,
            job_description: self.job_description,
        }
    }
}

/// Which rule set a submission must pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitKind {
    /// The bare "add user" flow: identity fields only
    Basic,
    /// The full profile flow: identity plus gender, role, and birth date
    Profile,
}

/// Apply a gender choice, force-correcting a conflicting nurse role.
///
/// Symmetric with [`apply_role`] and idempotent: applying the same value
/// twice leaves the draft exactly as after the first application.
pub fn apply_gender(draft: &mut ProfileDraft, gender: Gender) {
    draft.gender = Some(gender);
    if let Some(role) = draft.role
        && let Some(exclusive) = role.exclusive_gender()
        && exclusive != gender
    {
        draft.role = Some(Role::nurse_for(gender));
    }
}

/// Apply a role choice, force-correcting gender for gender-exclusive roles.
pub fn apply_role(draft: &mut ProfileDraft, role: Role) {
    draft.role = Some(role);
    if let Some(gender) = role.exclusive_gender() {
        draft.gender = Some(gender);
    }
}

/// Validate a draft against the rule set for its flow.
///
/// The first violation wins; a failing validation blocks the submission
/// entirely, before any resolution or remote call.
pub fn validate(draft: &ProfileDraft, kind: SubmitKind, today: Date) -> Result<()> {
    validate::validate_email(&draft.email)?;
    validate::validate_required("first name", &draft.first_name)?;
    validate::validate_required("last name", &draft.last_name)?;
    validate::validate_required("avatar", &draft.avatar)?;
    if let Some(text) = &draft.job_description {
        validate::validate_free_text("job description", text)?;
    }

    if kind == SubmitKind::Profile {
        let gender = draft
            .gender
            .ok_or_else(|| WardbookError::Validation("gender is required".to_string()))?;
        let role = draft
            .role
            .ok_or_else(|| WardbookError::Validation("role is required".to_string()))?;
        if let Some(exclusive) = role.exclusive_gender()
            && exclusive != gender
        {
            return Err(WardbookError::Validation(format!(
                "role '{role}' requires gender '{exclusive}'"
            )));
        }

        let dob = draft
            .dob
            .ok_or_else(|| WardbookError::Validation("date of birth is required".to_string()))?;
        validate::validate_adult(dob, today)?;
    }

    Ok(())
}

/// The committed side of a submit decision
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitPlan {
    /// New record, appended locally (id generated when the draft had none)
    Create(UserRecord),
    /// Existing record replaced; gated on the remote update call
    Update(UserRecord),
    /// Remote-listed candidate adopted as-is; no remote call
    Attach(UserRecord),
}

impl SubmitPlan {
    pub fn record(&self) -> &UserRecord {
        match self {
            SubmitPlan::Create(r) | SubmitPlan::Update(r) | SubmitPlan::Attach(r) => r,
        }
    }
}

/// Decide what a validated submission means against the current collection.
///
/// - empty collection, or no id → create (generating an id when absent)
/// - id present in the collection → update
/// - id absent from a non-empty collection → attach (the draft came from a
///   remote listing and is already authoritative)
pub fn resolve(draft: ProfileDraft, records: &[UserRecord]) -> SubmitPlan {
    match draft.id {
        Some(id) if records.iter().any(|r| r.id == id) => SubmitPlan::Update(draft.into_record(id)),
        Some(id) if !records.is_empty() => SubmitPlan::Attach(draft.into_record(id)),
        Some(id) => SubmitPlan::Create(draft.into_record(id)),
        None => {
            let id = generate_id(records);
            SubmitPlan::Create(draft.into_record(id))
        }
    }
}

/// Generate a local identifier: milliseconds since the epoch, bumped past
/// any colliding id so uniqueness holds for same-millisecond submissions.
pub fn generate_id(records: &[UserRecord]) -> i64 {
    let mut id = jiff::Timestamp::now().as_millisecond();
    while records.iter().any(|r| r.id == id) {
        id += 1;
    }
    id
}
