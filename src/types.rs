use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::WardbookError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
        }
    }
}

impl FromStr for Gender {
    type Err = WardbookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            _ => Err(WardbookError::InvalidGender(s.to_string())),
        }
    }
}

pub const VALID_GENDERS: &[&str] = &["male", "female"];

/// Staff role. `MaleNurse` and `FemaleNurse` are gender-exclusive labels;
/// `Doctor` and `Admin` carry no gender constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    MaleNurse,
    FemaleNurse,
    Doctor,
    Admin,
}

impl Role {
    /// The gender this role is exclusive to, if any.
    pub fn exclusive_gender(&self) -> Option<Gender> {
        match self {
            Role::MaleNurse => Some(Gender::Male),
            Role::FemaleNurse => Some(Gender::Female),
            Role::Doctor | Role::Admin => None,
        }
    }

    /// The nurse label corresponding to a gender.
    pub fn nurse_for(gender: Gender) -> Role {
        match gender {
            Gender::Male => Role::MaleNurse,
            Gender::Female => Role::FemaleNurse,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::MaleNurse => write!(f, "male_nurse"),
            Role::FemaleNurse => write!(f, "female_nurse"),
            Role::Doctor => write!(f, "doctor"),
            Role::Admin => write!(f, "admin"),
        }
    }
}

impl FromStr for Role {
    type Err = WardbookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male_nurse" => Ok(Role::MaleNurse),
            "female_nurse" => Ok(Role::FemaleNurse),
            "doctor" => Ok(Role::Doctor),
            "admin" => Ok(Role::Admin),
            _ => Err(WardbookError::InvalidRole(s.to_string())),
        }
    }
}

pub const VALID_ROLES: &[&str] = &["male_nurse", "female_nurse", "doctor", "admin"];

/// A staff record in the local directory.
///
/// Field names match the remote service's wire format (`first_name`,
/// `last_name`, `avatar`); the profile extension fields are absent for
/// records freshly adopted from a remote listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub avatar: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dob: Option<jiff::civil::Date>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub university: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub workplace: Option<String>,

    #[serde(rename = "jobDescription", skip_serializing_if = "Option::is_none")]
    pub job_description: Option<String>,
}

impl UserRecord {
    /// Short display label, e.g. "Holt J." for Jennifer Holt.
    pub fn short_label(&self) -> String {
        match self.first_name.chars().next() {
            Some(initial) => format!("{} {}.", self.last_name, initial),
            None => self.last_name.clone(),
        }
    }
}

/// Read-only projection of a user returned by the remote listing endpoint.
///
/// Carries no profile-extension fields; those appear only after the
/// candidate is adopted into the local directory and edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteCandidate {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub avatar: String,
}

impl RemoteCandidate {
    pub fn short_label(&self) -> String {
        match self.first_name.chars().next() {
            Some(initial) => format!("{} {}.", self.last_name, initial),
            None => self.last_name.clone(),
        }
    }
}

impl From<RemoteCandidate> for UserRecord {
    fn from(c: RemoteCandidate) -> Self {
        UserRecord {
            id: c.id,
            email: c.email,
            first_name: c.first_name,
            last_name: c.last_name,
            avatar: c.avatar,
            gender: None,
            role: None,
            dob: None,
            university: None,
            workplace: None,
            job_description: None,
        }
    }
}

/// One page of remote candidates, mirroring the listing response body.
#[derive(Debug, Clone, Deserialize)]
pub struct CandidatePage {
    pub data: Vec<RemoteCandidate>,
    pub total_pages: u32,
}
