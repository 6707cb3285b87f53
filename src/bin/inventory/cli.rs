//! CLI argument definitions for the inventory binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use inventory_store::collections::Algorithm;
use inventory_store::persist::SyncMode;
use inventory_store::store::options::{DEFAULT_DATA_DIR, DEFAULT_FILE_NAME};
use inventory_store::{BackendKind, ItemId, Options, SortKey};

/// In-memory container for records
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Backend {
    /// Binary search tree keyed by id (default)
    Tree,
    /// Dynamic array, scanned by id
    List,
}

impl From<Backend> for BackendKind {
    fn from(backend: Backend) -> Self {
        match backend {
            Backend::Tree => BackendKind::Tree,
            Backend::List => BackendKind::List,
        }
    }
}

/// Report ordering
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Sort {
    Id,
    Name,
    /// Category, then name
    Category,
    Quantity,
    Price,
    Supplier,
}

impl From<Sort> for SortKey {
    fn from(sort: Sort) -> Self {
        match sort {
            Sort::Id => SortKey::Id,
            Sort::Name => SortKey::Name,
            Sort::Category => SortKey::Category,
            Sort::Quantity => SortKey::Quantity,
            Sort::Price => SortKey::Price,
            Sort::Supplier => SortKey::Supplier,
        }
    }
}

/// Sorting algorithm for reports
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SortAlgorithm {
    /// Stable merge sort
    Merge,
    /// In-place quick sort
    Quick,
}

impl From<SortAlgorithm> for Algorithm {
    fn from(algorithm: SortAlgorithm) -> Self {
        match algorithm {
            SortAlgorithm::Merge => Algorithm::Merge,
            SortAlgorithm::Quick => Algorithm::Quick,
        }
    }
}

/// Inventory record manager
#[derive(Parser, Debug)]
#[command(name = "inventory")]
#[command(about = "Manage inventory items stored in a CSV file")]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub store: StoreArgs,

    /// Defaults to the interactive shell
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Where and how the inventory is kept
#[derive(clap::Args, Debug)]
pub struct StoreArgs {
    /// Directory holding the inventory file
    #[arg(short = 'D', long, global = true, default_value = DEFAULT_DATA_DIR, env = "INVENTORY_DATA_DIR")]
    pub data_dir: PathBuf,

    /// Inventory file name inside the data directory
    #[arg(long, global = true, default_value = DEFAULT_FILE_NAME, env = "INVENTORY_FILE")]
    pub file: String,

    /// Container used to hold records in memory
    #[arg(short, long, global = true, value_enum, default_value_t = Backend::Tree, env = "INVENTORY_BACKEND")]
    pub backend: Backend,

    /// Starting capacity of the list backend
    #[arg(long, global = true, default_value_t = 10, allow_negative_numbers = true)]
    pub initial_capacity: i64,

    /// Flush writes without forcing them to disk
    #[arg(long, global = true)]
    pub no_fsync: bool,
}

impl StoreArgs {
    pub fn options(&self) -> inventory_store::Result<Options> {
        let mut options = Options::default()
            .with_data_dir(&self.data_dir)
            .with_backend(self.backend.into())
            .with_initial_capacity(self.initial_capacity)?;
        options.file_name = self.file.clone();
        if self.no_fsync {
            options.sync = SyncMode::Flush;
        }
        Ok(options)
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new item
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        category: String,
        #[arg(long)]
        quantity: u32,
        #[arg(long)]
        price: f64,
        #[arg(long)]
        supplier: String,
    },
    /// Change fields of an existing item
    Update {
        id: ItemId,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        quantity: Option<u32>,
        #[arg(long)]
        price: Option<f64>,
        #[arg(long)]
        supplier: Option<String>,
    },
    /// Delete an item
    Delete { id: ItemId },
    /// Show one item in detail
    Show { id: ItemId },
    /// Print a sorted report of all items
    List {
        #[arg(short, long, value_enum, default_value_t = Sort::Category)]
        sort: Sort,
        #[arg(short, long, value_enum, default_value_t = SortAlgorithm::Merge)]
        algorithm: SortAlgorithm,
    },
    /// Print totals across the inventory
    Stats,
    /// Interactive session with undo and redo
    Shell,
}
