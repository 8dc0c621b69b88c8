use crate::config::Config;
use crate::error::Result;

/// Show current configuration (secrets redacted)
pub fn cmd_config_show() -> Result<()> {
    let config = Config::load()?;
    println!("{config:#?}");
    Ok(())
}

/// Set a configuration value
pub fn cmd_config_set(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load()?;
    config.set_value(key, value)?;
    config.save()?;
    println!("Set {key}");
    Ok(())
}

/// Get a configuration value
pub fn cmd_config_get(key: &str) -> Result<()> {
    let config = Config::load()?;
    println!("{}", config.get_value(key)?);
    Ok(())
}
