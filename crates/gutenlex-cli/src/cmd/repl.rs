use clap::Args;
use gutenlex_core::fetch::{title_from_url, Fetcher};
use gutenlex_core::importer::fetch_top_words;
use gutenlex_core::store::Store;
use gutenlex_core::view::{ActionOutcome, Effect, ViewEvent, ViewState};
use std::io::{self, BufRead, Write};

#[derive(Args, Debug, Clone)]
pub struct ReplArgs {}

const HELP: &str = "\
Commands:
  title <text>   set the title input
  url <text>     set the URL input
  search         look up the current title in the database
  fetch          fetch the current URL and save its top words
  clear          reset inputs and display
  help           show this help
  quit           exit";

pub async fn run(_args: ReplArgs, store: &Store) {
    let fetcher = Fetcher::new();
    let mut state = ViewState::default();

    println!("Gutenberg Book Search — interactive session. Type 'help' for commands.");

    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(_) => break,
        }

        let event = match parse_line(line.trim()) {
            Input::Event(ev) => ev,
            Input::Quit => break,
            Input::Help => {
                println!("{}", HELP);
                continue;
            }
            Input::Empty => continue,
            Input::Unknown(word) => {
                println!("Unknown command '{}'. Type 'help'.", word);
                continue;
            }
        };

        let (next, effect) = state.reduce(event);
        state = next;

        if let Some(effect) = effect {
            let outcome = execute(&effect, store, &fetcher).await;
            state = state.apply_outcome(outcome);
        }

        if !state.display.is_empty() {
            println!("\n{}\n", state.display);
        }
    }
}

enum Input {
    Event(ViewEvent),
    Quit,
    Help,
    Empty,
    Unknown(String),
}

fn parse_line(line: &str) -> Input {
    if line.is_empty() {
        return Input::Empty;
    }

    let (word, rest) = match line.split_once(' ') {
        Some((w, r)) => (w, r.trim()),
        None => (line, ""),
    };

    match word {
        "title" => Input::Event(ViewEvent::SetTitle(rest.to_string())),
        "url" => Input::Event(ViewEvent::SetUrl(rest.to_string())),
        "search" => Input::Event(ViewEvent::SearchTitle),
        "fetch" => Input::Event(ViewEvent::FetchAndSave),
        "clear" => Input::Event(ViewEvent::Clear),
        "help" => Input::Help,
        "quit" | "exit" => Input::Quit,
        other => Input::Unknown(other.to_string()),
    }
}

/// Runs one requested effect against the store/network. Every error becomes
/// an outcome for the view to word; the session itself never dies on them.
async fn execute(effect: &Effect, store: &Store, fetcher: &Fetcher) -> ActionOutcome {
    match effect {
        Effect::LookupTitle(title) => match store.lookup(title).await {
            Ok(Some(blob)) => ActionOutcome::Found {
                title: title.clone(),
                blob,
            },
            Ok(None) => ActionOutcome::NotFound {
                title: title.clone(),
            },
            Err(e) => ActionOutcome::Failed(e),
        },
        Effect::FetchAndStore(url) => {
            let blob = match fetch_top_words(fetcher, url).await {
                Ok(b) => b,
                Err(e) => return ActionOutcome::Failed(e),
            };

            let title = title_from_url(url);
            match store.insert_or_fail(&title, &blob).await {
                Ok(()) => ActionOutcome::Saved { title, blob },
                Err(e) => ActionOutcome::Failed(e),
            }
        }
    }
}
