use clap::Parser;
use inventory_manager::Settings;
use std::path::PathBuf;

/// Desktop inventory tracker
#[derive(Parser, Debug)]
#[command(name = "inventory_manager")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the inventory JSON file (default: inventory_manager/inventory.json in the platform data dir)
    #[arg(short, long)]
    data_file: Option<PathBuf>,
}

fn main() {
    // Initialize logger. Set RUST_LOG environment variable to control log level.
    // Examples: RUST_LOG=info, RUST_LOG=warn, RUST_LOG=inventory_manager=debug
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let settings = Settings::new(args.data_file);

    log::info!("Starting Inventory Manager");
    log::info!("Inventory file: {}", settings.data_file.display());

    if let Err(e) = inventory_manager::ui::launch_gui(settings) {
        log::error!("Application error: {e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
