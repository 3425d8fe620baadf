use clap::{Parser, Subcommand};
use gutenlex_core::consts::DEFAULT_DB_FILE;
use gutenlex_core::store::Store;
use std::path::PathBuf;
use std::process;
use tracing::{error, info};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the SQLite database file
    #[arg(global = true, long, default_value = DEFAULT_DB_FILE)]
    db: PathBuf,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create the database and prepopulate it from the seed catalog
    Init(cmd::init::InitArgs),
    /// Look up a stored book by exact title
    Search(cmd::search::SearchArgs),
    /// Fetch a book by URL and compute its top words
    Fetch(cmd::fetch::FetchArgs),
    /// List every title in the database
    List(cmd::list::ListArgs),
    /// Interactive session (search / fetch-and-save / clear)
    Repl(cmd::repl::ReplArgs),
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    info!("📖 Opening database: {:?}", cli.db);
    let store = match Store::open(&cli.db).await {
        Ok(s) => s,
        Err(e) => {
            error!("❌ Could not open database {:?}: {}", cli.db, e);
            process::exit(1);
        }
    };

    match cli.command {
        Commands::Init(args) => cmd::init::run(args, &store).await,
        Commands::Search(args) => cmd::search::run(args, &store).await,
        Commands::Fetch(args) => cmd::fetch::run(args, &store).await,
        Commands::List(args) => cmd::list::run(args, &store).await,
        Commands::Repl(args) => cmd::repl::run(args, &store).await,
    }
}
