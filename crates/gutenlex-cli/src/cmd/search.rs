use clap::Args;
use gutenlex_core::format::{display_with_header, parse_frequencies};
use gutenlex_core::store::Store;
use tracing::error;

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    /// Exact book title (case-sensitive)
    pub title: String,

    /// Emit the ranked entries as JSON instead of the text report
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: SearchArgs, store: &Store) {
    match store.lookup(&args.title).await {
        Ok(Some(blob)) => {
            if args.json {
                // Stored blobs are always formatter output, so this parse
                // only fails on a hand-edited database.
                match parse_frequencies(&blob) {
                    Some(entries) => println!(
                        "{}",
                        serde_json::to_string_pretty(&entries)
                            .expect("ranked entries serialize cleanly")
                    ),
                    None => error!("❌ Stored entry for '{}' is corrupt.", args.title),
                }
            } else {
                println!("\n{}", display_with_header(&args.title, &blob));
            }
        }
        Ok(None) => println!("'{}' not found in the local database.", args.title),
        Err(e) => error!("{}", e),
    }
}
