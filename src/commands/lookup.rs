use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::commands::{finish, open_directory};
use crate::config::Config;
use crate::error::{Result, WardbookError};
use crate::lookup::{FetchOutcome, LookupPager};
use crate::notice::Notice;
use crate::remote::HttpUserGateway;

/// A row in the remote-candidate table
#[derive(Tabled)]
struct CandidateRow {
    #[tabled(rename = "Id")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "In directory")]
    attached: &'static str,
}

/// Browse the remote listing, optionally attaching a candidate
///
/// Opening the lookup starts a fresh pager session; pages are then fetched
/// incrementally until the listing is exhausted (or the requested page
/// count is reached), the same event sequence a scrolling host produces.
pub async fn cmd_lookup(pages: Option<u32>, attach: Option<i64>, output_json: bool) -> Result<()> {
    let config = Config::load()?;
    let gateway = HttpUserGateway::from_config(&config)?;
    let pager = LookupPager::new(gateway, config.per_page());

    pager.reset();

    let mut fetched = 0u32;
    while pages.is_none_or(|limit| fetched < limit) {
        match pager.fetch_next().await {
            Ok(FetchOutcome::Fetched { .. }) => fetched += 1,
            Ok(_) => break,
            Err(e) => {
                eprintln!("{}", Notice::error(format!("Failed to load user list: {e}")));
                return Err(e);
            }
        }
    }

    let mut directory = open_directory(&config)?;
    directory.store().store_total_pages(pager.total_pages())?;
    let annotated = pager.annotate(directory.records());

    if output_json {
        let candidates: Vec<serde_json::Value> = annotated
            .iter()
            .map(|c| {
                serde_json::json!({
                    "id": c.candidate.id,
                    "email": c.candidate.email,
                    "first_name": c.candidate.first_name,
                    "last_name": c.candidate.last_name,
                    "avatar": c.candidate.avatar,
                    "attached": c.attached,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&candidates)?);
    } else if annotated.is_empty() {
        println!("No remote users found.");
    } else {
        let rows: Vec<CandidateRow> = annotated
            .iter()
            .map(|c| CandidateRow {
                id: c.candidate.id,
                name: c.candidate.short_label(),
                email: c.candidate.email.clone(),
                attached: if c.attached { "yes" } else { "" },
            })
            .collect();
        let mut table = Table::new(rows);
        table.with(Style::rounded());
        println!("{table}");
    }

    if let Some(id) = attach {
        let Some(entry) = annotated.iter().find(|c| c.candidate.id == id) else {
            return Err(WardbookError::RecordNotFound(id));
        };
        if entry.attached {
            return Err(WardbookError::DuplicateId(id));
        }

        let result = directory.attach_candidate(entry.candidate.clone());
        finish(&mut directory)?;
        let id = result?;
        println!("Attached user {id}");
    }

    Ok(())
}
