use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "wb",
    about = "Waybill — per-world in-transit inventory ledgers",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Directory holding the save files.
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,

    /// Naming scope; files are <prefix>.<world>.save.
    #[arg(long, global = true, default_value = "Waybill")]
    pub prefix: String,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Decode and print one world's ledger
    Inspect(InspectArgs),
    /// List worlds that have a save file under the root
    Worlds,
}

#[derive(Args)]
pub struct InspectArgs {
    /// The world id (the "seed" in the save-file header).
    pub world: i32,

    /// Current game tick; entry ages are computed against it.
    #[arg(long)]
    pub tick: Option<i64>,

    /// JSON file mapping item ids to display names.
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}
