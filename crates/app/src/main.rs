//! Back-office Admin CLI

use std::{io, process};

use backoffice_app::context::AppContext;
use clap::Parser;

mod cli;
mod logging;

#[tokio::main]
pub async fn main() {
    let _env = dotenvy::dotenv();

    let cli = cli::Cli::parse();

    if let Err(error) = logging::init_subscriber(&cli.config.logging) {
        eprintln!("failed to initialise logging: {error}");
        process::exit(1);
    }

    let context = match AppContext::from_config(&cli.config.store) {
        Ok(context) => context,
        Err(error) => {
            eprintln!("{error}");
            process::exit(1);
        }
    };

    context.load_all().await;

    if let Err(error) = cli.run(&context, &mut io::stdout().lock()).await {
        eprintln!("{error}");
        process::exit(1);
    }
}
