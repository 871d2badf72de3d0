use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use shared::domain::placeholder_records;
use sheets::{SheetsClient, SheetsConfig, SheetsCredential, DEFAULT_BASE_URL};

#[derive(Parser, Debug)]
struct Cli {
    #[arg(long, env = "SHEET_ID")]
    sheet_id: String,
    #[arg(long, env = "GOOGLE_SHEETS_API_KEY")]
    api_key: Option<String>,
    /// OAuth access token; wins over the API key when both are set.
    #[arg(long, env = "GOOGLE_SHEETS_ACCESS_TOKEN")]
    access_token: Option<String>,
    #[arg(long, env = "SHEETS_API_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every record in the sheet as JSON.
    Dump,
    /// Overwrite the sheet with the sample records.
    Seed,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    let credential = match (cli.access_token, cli.api_key) {
        (Some(token), _) => Some(SheetsCredential::BearerToken(token)),
        (None, Some(key)) => Some(SheetsCredential::ApiKey(key)),
        (None, None) => None,
    };
    let client = SheetsClient::new(SheetsConfig {
        base_url: cli.base_url,
        credential,
        ..SheetsConfig::default()
    });

    match cli.command {
        Command::Dump => {
            let records = client
                .try_fetch_records(&cli.sheet_id)
                .await
                .with_context(|| format!("failed to read sheet {}", cli.sheet_id))?;
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
        Command::Seed => {
            let records = placeholder_records();
            let summary = client
                .try_update_records(&cli.sheet_id, &records)
                .await
                .with_context(|| format!("failed to write sheet {}", cli.sheet_id))?;
            println!(
                "seeded {} records ({} cells updated)",
                records.len(),
                summary.updated_cells
            );
        }
    }

    Ok(())
}
