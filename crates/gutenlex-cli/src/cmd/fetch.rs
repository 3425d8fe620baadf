use clap::Args;
use gutenlex_core::fetch::{title_from_url, Fetcher};
use gutenlex_core::format::display_with_header;
use gutenlex_core::importer::fetch_top_words;
use gutenlex_core::store::Store;
use gutenlex_core::Error;
use tracing::{error, info};

#[derive(Args, Debug, Clone)]
pub struct FetchArgs {
    /// URL of a plain-text book copy
    pub url: String,

    /// Persist the result under a title derived from the URL
    #[arg(long)]
    pub save: bool,
}

pub async fn run(args: FetchArgs, store: &Store) {
    let fetcher = Fetcher::new();

    let blob = match fetch_top_words(&fetcher, &args.url).await {
        Ok(b) => b,
        Err(e) => {
            error!("{}", e);
            return;
        }
    };

    let title = title_from_url(&args.url);

    if args.save {
        match store.insert_or_fail(&title, &blob).await {
            Ok(()) => info!("💾 '{}' saved to the local database.", title),
            Err(Error::DuplicateTitle(t)) => {
                println!("'{}' is already in the database.", t);
            }
            Err(e) => {
                error!("{}", e);
                return;
            }
        }
    }

    println!("\n{}", display_with_header(&title, &blob));
}
