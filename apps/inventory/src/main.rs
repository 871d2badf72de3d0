use std::io::{self, Write};

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use client_core::{InventoryClient, InventoryPage};
use shared::domain::{placeholder_records, RecordColumn};
use tracing::info;

mod prompt;
mod render;

use prompt::{run_add_dialog, DialogOutcome};
use render::render_table;

#[derive(Parser, Debug)]
#[command(about = "Inventory table backed by a spreadsheet")]
struct Args {
    #[arg(long, env = "INVENTORY_SERVER_URL", default_value = "http://127.0.0.1:3000")]
    server_url: String,
    /// Sheet to read and write; the server's default when omitted.
    #[arg(long, env = "SHEET_ID")]
    sheet_id: Option<String>,
    /// Work on the built-in sample records without contacting the server.
    #[arg(long)]
    offline: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the table.
    List {
        #[arg(long)]
        search: Option<String>,
        /// Column header to click; repeat to click again.
        #[arg(long)]
        sort: Vec<RecordColumn>,
    },
    /// Open the add dialog.
    Add,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .with_writer(io::stderr)
        .init();
    let args = Args::parse();

    let client = (!args.offline).then(|| InventoryClient::new(args.server_url.clone()));
    let sheet_id = args.sheet_id.as_deref();

    let records = match &client {
        Some(client) => client
            .fetch_records(sheet_id)
            .await
            .with_context(|| format!("failed to load records from {}", args.server_url))?,
        None => placeholder_records(),
    };
    let mut page = InventoryPage::new(records);

    match args.command {
        Command::List { search, sort } => {
            let table = page.table_mut();
            if let Some(term) = search {
                table.set_search_term(term);
            }
            for column in sort {
                table.toggle_sort(column);
            }
        }
        Command::Add => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut out = io::stdout();
            let today = Utc::now().date_naive();
            match run_add_dialog(&mut page, &mut input, &mut out, today)? {
                DialogOutcome::Saved(record) => {
                    if let Some(client) = &client {
                        let resp = client
                            .update_records(sheet_id, page.table().records())
                            .await
                            .context("record added locally but the sheet was not updated")?;
                        info!(id = %record.id, message = %resp.message, "sheet updated");
                    }
                }
                DialogOutcome::Cancelled => writeln!(out, "Cancelled")?,
            }
        }
    }

    let table = page.table();
    print!("{}", render_table(&table.view(), table.sort()));
    Ok(())
}
