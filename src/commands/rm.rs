use crate::commands::{finish, open_directory};
use crate::config::Config;
use crate::error::Result;

/// Remove a record remotely, then from the directory
pub async fn cmd_rm(id: i64) -> Result<()> {
    let config = Config::load()?;
    let mut directory = open_directory(&config)?;

    let result = directory.delete(id).await;
    finish(&mut directory)?;

    result?;
    println!("Removed user {id}");
    Ok(())
}
