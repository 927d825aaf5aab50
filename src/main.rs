//! rosterbook: local roster keeper over flat CSV files
//!
//! Contacts and team matchups live as CSV tables under a data directory;
//! this binary drives the same store layer the GUI shell embeds.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;
mod store;

#[derive(Parser)]
#[command(name = "rosterbook")]
#[command(about = "Local roster keeper: contacts and team matchups in CSV", long_about = None)]
#[command(version)]
struct Cli {
    /// Data directory holding the CSV tables
    #[arg(short, long, global = true, default_value = config::DEFAULT_DATA_DIR)]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new contact
    Add {
        /// Contact name
        name: String,

        /// Email address
        #[arg(long, default_value = "")]
        email: String,

        /// Phone number
        #[arg(long, default_value = "")]
        phone: String,

        /// Free-form notes
        #[arg(long, default_value = "")]
        notes: String,
    },

    /// List contacts
    List {
        /// Only show contacts matching this substring (any field)
        #[arg(long, short)]
        filter: Option<String>,

        /// Limit number of results
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Update fields of an existing contact
    Update {
        /// Contact ID
        id: u64,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New email address
        #[arg(long)]
        email: Option<String>,

        /// New phone number
        #[arg(long)]
        phone: Option<String>,

        /// New notes
        #[arg(long)]
        notes: Option<String>,
    },

    /// Delete a contact by ID
    Delete {
        /// Contact ID
        id: u64,

        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Delete every contact and reset the ID counter
    Clear {
        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Show record counts and file details for the data directory
    Stats,

    /// Show the saved team board (teams and matchups)
    Teams,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let data_dir = cli.data_dir;
    config::ensure_data_dir(&data_dir)?;

    match cli.command {
        Commands::Add {
            name,
            email,
            phone,
            notes,
        } => {
            commands::add::execute(&data_dir, &name, &email, &phone, &notes)?;
        }

        Commands::List { filter, limit } => {
            let options = commands::list::ListOptions { filter, limit };
            let output = commands::list::execute(&data_dir, options)?;
            println!("{}", output);
        }

        Commands::Update {
            id,
            name,
            email,
            phone,
            notes,
        } => {
            let fields = commands::update::UpdateFields {
                name,
                email,
                phone,
                notes,
            };
            commands::update::execute(&data_dir, id, fields)?;
        }

        Commands::Delete { id, yes } => {
            commands::delete::execute(&data_dir, id, yes)?;
        }

        Commands::Clear { yes } => {
            commands::clear::execute(&data_dir, yes)?;
        }

        Commands::Stats => {
            commands::stats::execute(&data_dir)?;
        }

        Commands::Teams => {
            let output = commands::teams::execute(&data_dir)?;
            println!("{}", output);
        }
    }

    Ok(())
}
