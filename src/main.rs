use clap::Parser;
use std::process::ExitCode;

use wardbook::cli::{Cli, Commands, ConfigAction};
use wardbook::commands::{
    EditOptions, cmd_add, cmd_config_get, cmd_config_set, cmd_config_show, cmd_edit, cmd_lookup,
    cmd_ls, cmd_rm, cmd_select,
};

fn init_logging() {
    let env_filter =
        std::env::var("RUST_LOG").unwrap_or_else(|_| "wardbook=warn".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Ls { json } => cmd_ls(json),

        Commands::Add {
            email,
            first_name,
            last_name,
            avatar,
        } => cmd_add(email, first_name, last_name, avatar).await,

        Commands::Edit {
            id,
            email,
            first_name,
            last_name,
            avatar,
            gender,
            role,
            dob,
            university,
            workplace,
            job_description,
        } => {
            cmd_edit(EditOptions {
                id,
                email,
                first_name,
                last_name,
                avatar,
                gender,
                role,
                dob,
                university,
                workplace,
                job_description,
            })
            .await
        }

        Commands::Rm { id } => cmd_rm(id).await,

        Commands::Select { id } => cmd_select(id),

        Commands::Lookup {
            pages,
            attach,
            json,
        } => cmd_lookup(pages, attach, json).await,

        Commands::Config { action } => match action {
            ConfigAction::Show => cmd_config_show(),
            ConfigAction::Set { key, value } => cmd_config_set(&key, &value),
            ConfigAction::Get { key } => cmd_config_get(&key),
        },
    };

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
