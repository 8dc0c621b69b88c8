use std::path::PathBuf;

/// Returns the root wardbook state directory.
///
/// Resolution order:
/// 1. `WARDBOOK_HOME` environment variable (if set)
/// 2. Current working directory + `.wardbook`
pub fn wardbook_home() -> PathBuf {
    if let Ok(home) = std::env::var("WARDBOOK_HOME") {
        PathBuf::from(home)
    } else {
        PathBuf::from(".wardbook")
    }
}

/// Path to the durable key holding the serialized directory collection.
pub fn users_file() -> PathBuf {
    wardbook_home().join("users.json")
}

/// Path to the durable key holding the last-known remote page count.
pub fn total_pages_file() -> PathBuf {
    wardbook_home().join("total_pages.json")
}

/// Path to the durable key holding the current selection, kept by the CLI
/// host so the pointer survives between invocations.
pub fn selection_file() -> PathBuf {
    wardbook_home().join("selection.json")
}

/// Path to the configuration file.
pub fn config_file() -> PathBuf {
    wardbook_home().join("config.yaml")
}
