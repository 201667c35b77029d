use clap::{Parser, Subcommand, ValueEnum};
use hzs_library_client::models::{book::CopyStatus, invoice::PaymentMethod};

#[derive(Parser, Debug)]
#[command(
    name = "hzs",
    about = "Command-line front-end for the HZS library API",
    version = env!("CARGO_PKG_VERSION"),
)]
pub struct Cli {
    /// Log level override (takes precedence over configuration)
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    /// Output format
    #[arg(short, long, default_value = "table", global = true)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format for CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table (default)
    Table,
    /// Raw JSON from the API
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Log in and store the session
    Login {
        /// Account email
        email: String,
        #[arg(long, env = "HZS_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Forget the stored session
    Logout,

    /// Show who the stored session belongs to
    Whoami,

    /// Show what navigating to a page would do with the current session
    Check {
        /// Page path, e.g. /books/3
        path: String,
    },

    /// Books and their copies
    #[command(subcommand)]
    Books(BooksCommand),

    /// Authors
    #[command(subcommand)]
    Authors(AuthorsCommand),

    /// Rentals
    #[command(subcommand)]
    Rentals(RentalsCommand),

    /// Invoices and payments
    #[command(subcommand)]
    Invoices(InvoicesCommand),
}

#[derive(Subcommand, Debug)]
pub enum BooksCommand {
    /// List all books
    List,
    /// Show one book
    Get { id: i64 },
    /// Delete a book
    Delete { id: i64 },
    /// List the copies of a book
    Copies { id: i64 },
    /// Add a copy to a book
    AddCopy {
        id: i64,
        #[arg(long, default_value = "AVAILABLE")]
        status: CopyStatus,
    },
}

#[derive(Subcommand, Debug)]
pub enum AuthorsCommand {
    /// List all authors
    List,
    /// Show one author
    Get { id: i64 },
}

#[derive(Subcommand, Debug)]
pub enum RentalsCommand {
    /// Rentals of a customer
    Mine { customer_id: i64 },
}

#[derive(Subcommand, Debug)]
pub enum InvoicesCommand {
    /// List unpaid invoices
    Unpaid,
    /// Pay an invoice
    Pay {
        invoice_id: i64,
        /// CASH, CREDIT, DEBIT or PAYPAL
        #[arg(long)]
        method: PaymentMethod,
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
    },
}
