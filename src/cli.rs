use clap::{Parser, Subcommand};
use std::str::FromStr;

use crate::types::{Gender, Role, VALID_GENDERS, VALID_ROLES};

#[derive(Parser)]
#[command(name = "wardbook")]
#[command(about = "Clinic staff directory with remote sync")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List directory records
    Ls {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Register a new user remotely and add it to the directory
    Add {
        /// Email address
        #[arg(long)]
        email: String,

        /// First name
        #[arg(long = "first-name")]
        first_name: String,

        /// Last name
        #[arg(long = "last-name")]
        last_name: String,

        /// Avatar image URL
        #[arg(long)]
        avatar: String,
    },

    /// Submit a full profile: update the selected record, or create/attach
    Edit {
        /// Record id (defaults to the current selection)
        #[arg(long)]
        id: Option<i64>,

        /// Email address
        #[arg(long)]
        email: Option<String>,

        /// First name
        #[arg(long = "first-name")]
        first_name: Option<String>,

        /// Last name
        #[arg(long = "last-name")]
        last_name: Option<String>,

        /// Avatar image URL
        #[arg(long)]
        avatar: Option<String>,

        /// Gender: male, female
        #[arg(long, value_parser = parse_gender)]
        gender: Option<Gender>,

        /// Role: male_nurse, female_nurse, doctor, admin
        #[arg(long, value_parser = parse_role)]
        role: Option<Role>,

        /// Date of birth (YYYY-MM-DD)
        #[arg(long)]
        dob: Option<String>,

        /// University
        #[arg(long)]
        university: Option<String>,

        /// Workplace
        #[arg(long)]
        workplace: Option<String>,

        /// Job description
        #[arg(long = "job-description")]
        job_description: Option<String>,
    },

    /// Remove a record remotely, then from the directory
    Rm {
        /// Record id
        id: i64,
    },

    /// Set the current selection
    Select {
        /// Record id
        id: i64,
    },

    /// Browse the remote listing and optionally attach a candidate
    Lookup {
        /// Number of pages to fetch (default: all)
        #[arg(long)]
        pages: Option<u32>,

        /// Attach the candidate with this id to the directory
        #[arg(long)]
        attach: Option<i64>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Set a configuration value
    Set {
        /// Configuration key (api.url, api.per_page, api.key, remote_timeout)
        key: String,
        /// Value to set
        value: String,
    },
    /// Get a configuration value
    Get {
        /// Configuration key (api.url, api.per_page, api.key, remote_timeout)
        key: String,
    },
}

fn parse_gender(s: &str) -> Result<Gender, String> {
    Gender::from_str(s).map_err(|_| {
        format!(
            "Invalid gender. Must be one of: {}",
            VALID_GENDERS.join(", ")
        )
    })
}

fn parse_role(s: &str) -> Result<Role, String> {
    Role::from_str(s).map_err(|_| format!("Invalid role. Must be one of: {}", VALID_ROLES.join(", ")))
}
