mod args;
mod models;
mod utils;

use std::io;

use args::Args;
use clap::Parser;
use models::config::AcctConfig;
use models::outcome::report;
use utils::group_users::fetch_group_users;
use utils::logging::init_logging;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose)?;

    let config = AcctConfig::from(&args);
    tracing::debug!(?config, "resolved configuration");

    let outcome = fetch_group_users(&config);
    report(&outcome, &mut io::stdout().lock())?;

    Ok(())
}
