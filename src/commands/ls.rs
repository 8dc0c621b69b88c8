use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::commands::load_selection;
use crate::error::Result;
use crate::store::RecordStore;

/// A row in the directory listing table
#[derive(Tabled)]
struct UserRow {
    #[tabled(rename = "")]
    marker: &'static str,
    #[tabled(rename = "Id")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Role")]
    role: String,
    #[tabled(rename = "Workplace")]
    workplace: String,
}

/// List the local directory, marking the current selection
pub fn cmd_ls(output_json: bool) -> Result<()> {
    let store = RecordStore::open();
    let current = load_selection().filter(|id| store.contains(*id));

    if output_json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "users": store.records(),
                "current": current,
            }))?
        );
        return Ok(());
    }

    if store.records().is_empty() {
        println!("No users in the directory.");
        return Ok(());
    }

    let rows: Vec<UserRow> = store
        .records()
        .iter()
        .map(|r| UserRow {
            marker: if current == Some(r.id) { "*" } else { "" },
            id: r.id,
            name: format!("{} {}", r.first_name, r.last_name),
            email: r.email.clone(),
            role: r.role.map(|role| role.to_string()).unwrap_or_default(),
            workplace: r.workplace.clone().unwrap_or_default(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");

    Ok(())
}
