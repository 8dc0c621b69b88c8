use crate::commands::{load_selection, save_selection};
use crate::error::{Result, WardbookError};
use crate::selection::SelectionController;
use crate::store::RecordStore;

/// Point the current selection at a directory record
pub fn cmd_select(id: i64) -> Result<()> {
    let store = RecordStore::open();

    let mut selection = SelectionController::default();
    if let Some(current) = load_selection() {
        selection.select(store.records(), current);
    }

    selection.select(store.records(), id);
    if selection.current_id() != Some(id) {
        return Err(WardbookError::RecordNotFound(id));
    }

    save_selection(selection.current_id())?;
    println!("Selected user {id}");
    Ok(())
}
