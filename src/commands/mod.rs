pub mod add;
pub mod config;
pub mod edit;
pub mod lookup;
pub mod ls;
pub mod rm;
pub mod select;

pub use add::cmd_add;
pub use config::{cmd_config_get, cmd_config_set, cmd_config_show};
pub use edit::{EditOptions, cmd_edit};
pub use lookup::cmd_lookup;
pub use ls::cmd_ls;
pub use rm::cmd_rm;
pub use select::cmd_select;

use std::fs;

use crate::config::Config;
use crate::directory::Directory;
use crate::error::Result;
use crate::paths;
use crate::remote::{HttpUserGateway, UserGateway};
use crate::store::RecordStore;

/// Open a directory session: load the store, build the gateway, and restore
/// the persisted selection pointer. A pointer whose record is gone is
/// dropped silently.
pub(crate) fn open_directory(config: &Config) -> Result<Directory<HttpUserGateway>> {
    let gateway = HttpUserGateway::from_config(config)?;
    let mut directory = Directory::new(RecordStore::open(), gateway);
    if let Some(id) = load_selection() {
        directory.select(id);
    }
    Ok(directory)
}

/// Read the persisted selection pointer, if any.
pub(crate) fn load_selection() -> Option<i64> {
    let content = fs::read_to_string(paths::selection_file()).ok()?;
    serde_json::from_str(&content).ok()?
}

/// Persist the selection pointer for the next invocation.
pub(crate) fn save_selection(current: Option<i64>) -> Result<()> {
    let path = paths::selection_file();
    if let Some(parent) = path.parent()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, serde_json::to_string(&current)?)?;
    Ok(())
}

/// Flush a session: print its notices to stderr and persist the selection.
pub(crate) fn finish<G: UserGateway>(directory: &mut Directory<G>) -> Result<()> {
    for notice in directory.take_notices() {
        eprintln!("{notice}");
    }
    save_selection(directory.current_id())
}
