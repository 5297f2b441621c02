use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use zbrowse::inventory::{HostIdentity, Loader};
use zbrowse::model::Inventory;
use zbrowse::theme::{DEFAULT_CONFIG_PATH, Theme};
use zbrowse::tui::TuiRunOptions;

#[derive(Parser)]
#[command(name = "zbrowse")]
#[command(about = "Browse ZFS pools, datasets and snapshots", long_about = None)]
struct Cli {
    /// Theme configuration file
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Append logs to this file (filter via ZBROWSE_LOG)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Use a built-in demo inventory instead of querying ZFS
    #[arg(long, global = true)]
    demo: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive browser (default)
    Browse,

    /// Print the inventory tree and exit
    Tree {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Browse) {
        Commands::Browse => {
            if let Some(path) = &cli.log_file {
                zbrowse::logging::init_file(path)?;
            }
            let theme = Theme::load(&cli.config).context("load theme")?;
            let inventory = load_inventory(cli.demo)?;
            zbrowse::tui::run(TuiRunOptions { theme, inventory })?;
        }
        Commands::Tree { json } => {
            match &cli.log_file {
                Some(path) => zbrowse::logging::init_file(path)?,
                None => zbrowse::logging::init_stderr()?,
            }
            let inventory = load_inventory(cli.demo)?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&inventory).context("serialize inventory")?
                );
            } else {
                print_tree(&inventory);
            }
        }
    }

    Ok(())
}

fn load_inventory(demo: bool) -> Result<Inventory> {
    if demo {
        return Ok(Inventory::demo());
    }
    let zbox = Loader::system()
        .load_box(HostIdentity::detect())
        .context("load inventory")?;
    Ok(Inventory::single(zbox))
}

fn print_tree(inventory: &Inventory) {
    for zbox in &inventory.boxes {
        println!("{} host={} user={}", zbox.name, zbox.hostname, zbox.user);
        for pool in &zbox.pools {
            println!(
                "  {} health={} datasets={} snapshots={}",
                pool.name, pool.health, pool.num_datasets, pool.num_snapshots
            );
            for ds in &pool.datasets {
                println!(
                    "    {} used={} avail={} mountpoint={}",
                    ds.name, ds.used, ds.available, ds.mountpoint
                );
                for snap in &ds.snapshots {
                    println!("      {} size={} date={}", snap.name, snap.size, snap.date);
                }
            }
        }
    }
}
