mod config;
mod engine;
mod import;
mod logging;
mod models;
mod run;
mod store;
mod ui;

use anyhow::{Context, Result};

use config::Config;
use store::Store;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut config = Config::from_env()?;
    let command = config.apply_args(&args)?;

    if command.is_empty() {
        let data_dir = logging::data_dir()?;
        logging::init_file_logging(&data_dir, config.log_filter.as_deref())?;
    } else {
        logging::init_stderr_logging(config.log_filter.as_deref())?;
    }

    let mut store = build_store(&config)?;

    if command.is_empty() {
        run::as_tui(&mut store, config.reference_month())
    } else {
        run::as_cli(&command, &mut store, config.month)
    }
}

/// Demo data (unless disabled), with transactions replaced by the CSV file when one is given.
fn build_store(config: &Config) -> Result<Store> {
    let mut store = if config.demo {
        Store::with_demo_data()
    } else {
        Store::new()
    };

    if let Some(path) = &config.data_file {
        let txns = import::CsvImporter::load(path)
            .with_context(|| format!("Failed to load {}", path.display()))?;
        store.replace_transactions(txns);
    }

    tracing::debug!(
        demo = config.demo,
        transactions = store.transactions().len(),
        budgets = store.budgets().len(),
        "store ready"
    );
    Ok(store)
}
