use crate::commands::{finish, open_directory};
use crate::config::Config;
use crate::error::Result;
use crate::form::ProfileDraft;

/// Register a new user remotely and add it to the directory
pub async fn cmd_add(
    email: String,
    first_name: String,
    last_name: String,
    avatar: String,
) -> Result<()> {
    let config = Config::load()?;
    let mut directory = open_directory(&config)?;

    let draft = ProfileDraft {
        email,
        first_name,
        last_name,
        avatar,
        ..Default::default()
    };

    let result = directory.register(draft).await;
    finish(&mut directory)?;

    let id = result?;
    println!("Added user {id}");
    Ok(())
}
