mod cli;
mod shell;

use std::io;

use anyhow::bail;
use clap::Parser;
use inventory_store::report::{render_details, render_table};
use inventory_store::{Inventory, NewRecord, RecordPatch};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};
use crate::shell::Shell;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never mix with reports on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("inventory_store=warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let options = cli.store.options()?;
    let mut inventory = Inventory::open(options)?;

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Add {
            name,
            category,
            quantity,
            price,
            supplier,
        } => {
            let record = inventory.create(NewRecord {
                name,
                category,
                quantity,
                price,
                supplier,
            })?;
            println!("Item created with ID: {}", record.id);
        }
        Commands::Update {
            id,
            name,
            category,
            quantity,
            price,
            supplier,
        } => {
            let patch = RecordPatch {
                name,
                category,
                quantity,
                price,
                supplier,
            };
            if patch.is_empty() {
                bail!("nothing to update: pass at least one of --name, --category, --quantity, --price, --supplier");
            }
            let record = inventory.update(id, &patch)?;
            println!("Item updated: {record}");
        }
        Commands::Delete { id } => {
            let record = inventory.delete(id)?;
            println!("Item deleted: {record}");
        }
        Commands::Show { id } => {
            print!("{}", render_details(inventory.require(id)?));
        }
        Commands::List { sort, algorithm } => {
            let records = inventory.report(sort.into(), algorithm.into())?;
            print!("{}", render_table(&records));
        }
        Commands::Stats => {
            println!("{}", inventory.stats());
        }
        Commands::Shell => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            Shell::new(&mut inventory, stdin.lock(), stdout.lock()).run()?;
        }
    }
    Ok(())
}
