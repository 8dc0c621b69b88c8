use crate::commands::{finish, open_directory};
use crate::config::Config;
use crate::directory::SubmitOutcome;
use crate::error::{Result, WardbookError};
use crate::form::{self, ProfileDraft, SubmitKind};
use crate::types::{Gender, Role};

/// Field inputs for the full-profile submit flow
#[derive(Debug, Default)]
pub struct EditOptions {
    pub id: Option<i64>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub avatar: Option<String>,
    pub gender: Option<Gender>,
    pub role: Option<Role>,
    pub dob: Option<String>,
    pub university: Option<String>,
    pub workplace: Option<String>,
    pub job_description: Option<String>,
}

/// Submit a full profile: update the targeted record, or create/attach one
///
/// The draft starts from the targeted record when it exists (the edit-form
/// prefill), with the given fields layered on top. Gender and role go
/// through the cross-field derivation, so picking one side of an exclusive
/// pair corrects the other.
pub async fn cmd_edit(opts: EditOptions) -> Result<()> {
    let config = Config::load()?;
    let mut directory = open_directory(&config)?;

    let target = opts.id.or(directory.current_id());
    let mut draft = match target.and_then(|id| directory.records().iter().find(|r| r.id == id)) {
        Some(record) => ProfileDraft::from_record(record),
        None => ProfileDraft {
            id: target,
            ..Default::default()
        },
    };

    if let Some(email) = opts.email {
        draft.email = email;
    }
    if let Some(first_name) = opts.first_name {
        draft.first_name = first_name;
    }
    if let Some(last_name) = opts.last_name {
        draft.last_name = last_name;
    }
    if let Some(avatar) = opts.avatar {
        draft.avatar = avatar;
    }
    if let Some(dob) = opts.dob {
        let date = dob.parse().map_err(|_| {
            WardbookError::InvalidInput(format!("invalid date '{dob}', expected YYYY-MM-DD"))
        })?;
        draft.dob = Some(date);
    }
    if let Some(university) = opts.university {
        draft.university = Some(university);
    }
    if let Some(workplace) = opts.workplace {
        draft.workplace = Some(workplace);
    }
    if let Some(job_description) = opts.job_description {
        draft.job_description = Some(job_description);
    }

    if let Some(gender) = opts.gender {
        form::apply_gender(&mut draft, gender);
    }
    if let Some(role) = opts.role {
        form::apply_role(&mut draft, role);
    }

    let result = directory.submit(draft, SubmitKind::Profile).await;
    finish(&mut directory)?;

    match result? {
        SubmitOutcome::Created(id) => println!("Created user {id}"),
        SubmitOutcome::Updated(id) => println!("Updated user {id}"),
        SubmitOutcome::Attached(id) => println!("Attached user {id}"),
    }
    Ok(())
}
