//! staticscan CLI - upload, scan and report on mobile apps

use clap::Parser;
use log::debug;

use staticscan::Result;
use staticscan::cli::{self, Cli, Commands, GlobalOptions};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.debug);
    debug!("Debug mode enabled");

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Init => cli::init::run(&opts).await,
        Commands::Status => cli::status::run(&opts),
        Commands::Version => {
            println!("staticscan version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Upload { file, scan } => cli::scan::upload(&opts, &file, scan).await,
        Commands::Scan { hash } => cli::scan::trigger(&opts, &hash).await,
        Commands::Logs { hash } => cli::scan::logs(&opts, &hash).await,
        Commands::Report { hash, pdf, output } => {
            cli::report::run(&opts, &hash, pdf, output.as_deref()).await
        }
        Commands::Delete { hash, yes } => cli::scan::delete(&opts, &hash, yes).await,
        Commands::List { pagination } => cli::scan::list(&opts, &pagination).await,
    }
}

/// Log to stderr; `RUST_LOG` still wins when set
fn init_logging(debug: bool) {
    let default_level = if debug { "staticscan=debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}
