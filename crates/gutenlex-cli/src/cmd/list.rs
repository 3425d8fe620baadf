use crate::reports;
use clap::Args;
use gutenlex_core::store::Store;
use tracing::error;

#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    /// Emit titles as a JSON array
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: ListArgs, store: &Store) {
    match store.list_titles().await {
        Ok(titles) => {
            if args.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&titles).expect("titles serialize cleanly")
                );
            } else {
                reports::print_titles(&titles);
            }
        }
        Err(e) => error!("{}", e),
    }
}
