//! hzs - command-line front-end for the HZS library API

mod cli;
mod commands;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::{AuthorsCommand, BooksCommand, Cli, Command, InvoicesCommand, RentalsCommand};
use hzs_library_client::{config::AppConfig, LibraryClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load()?;

    // Initialize tracing; stdout is reserved for command output
    let level = cli.log_level.clone().unwrap_or_else(|| config.logging.level.clone());
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("hzs_library_client={},hzs={}", level, level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    tracing::debug!("hzs v{} using {}", env!("CARGO_PKG_VERSION"), config.api.base_url);

    let client = LibraryClient::new(config)?;
    let output = cli.output;

    match cli.command {
        Command::Login { email, password } => commands::cmd_login(&client, &email, password.as_deref()).await,
        Command::Logout => commands::cmd_logout(&client),
        Command::Whoami => commands::cmd_whoami(&client, output),
        Command::Check { path } => commands::cmd_check(&client, &path),
        Command::Books(cmd) => match cmd {
            BooksCommand::List => commands::cmd_books_list(&client, output).await,
            BooksCommand::Get { id } => commands::cmd_books_get(&client, id, output).await,
            BooksCommand::Delete { id } => commands::cmd_books_delete(&client, id).await,
            BooksCommand::Copies { id } => commands::cmd_books_copies(&client, id, output).await,
            BooksCommand::AddCopy { id, status } => {
                commands::cmd_books_add_copy(&client, id, status, output).await
            }
        },
        Command::Authors(cmd) => match cmd {
            AuthorsCommand::List => commands::cmd_authors_list(&client, output).await,
            AuthorsCommand::Get { id } => commands::cmd_authors_get(&client, id, output).await,
        },
        Command::Rentals(RentalsCommand::Mine { customer_id }) => {
            commands::cmd_rentals_mine(&client, customer_id, output).await
        }
        Command::Invoices(cmd) => match cmd {
            InvoicesCommand::Unpaid => commands::cmd_invoices_unpaid(&client, output).await,
            InvoicesCommand::Pay {
                invoice_id,
                method,
                first_name,
                last_name,
            } => {
                commands::cmd_invoices_pay(&client, invoice_id, method, first_name, last_name, output)
                    .await
            }
        },
    }
}
