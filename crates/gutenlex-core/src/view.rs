// ===== gutenlex/crates/gutenlex-core/src/view.rs =====
//! View-model for the interactive surface.
//!
//! The reducer is a pure function of (state, event); it never performs I/O.
//! Events that need the store or the network emit an [`Effect`], the driver
//! executes it and feeds the result back through [`ViewState::apply_outcome`],
//! which owns all user-facing wording.
use crate::error::Error;
use crate::format::display_with_header;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub title_input: String,
    pub url_input: String,
    pub display: String,
}

#[derive(Debug, Clone)]
pub enum ViewEvent {
    SetTitle(String),
    SetUrl(String),
    SearchTitle,
    FetchAndSave,
    Clear,
}

/// Side effect requested by the reducer, to be executed by the driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    LookupTitle(String),
    FetchAndStore(String),
}

/// Result of executing an [`Effect`].
#[derive(Debug)]
pub enum ActionOutcome {
    Found { title: String, blob: String },
    NotFound { title: String },
    Saved { title: String, blob: String },
    Failed(Error),
}

impl ViewState {
    pub fn reduce(mut self, event: ViewEvent) -> (Self, Option<Effect>) {
        match event {
            ViewEvent::SetTitle(t) => {
                self.title_input = t;
                (self, None)
            }
            ViewEvent::SetUrl(u) => {
                self.url_input = u;
                (self, None)
            }
            ViewEvent::SearchTitle => {
                let title = self.title_input.trim().to_string();
                if title.is_empty() {
                    self.display = "Please enter a book title.".to_string();
                    return (self, None);
                }
                (self, Some(Effect::LookupTitle(title)))
            }
            ViewEvent::FetchAndSave => {
                let url = self.url_input.trim().to_string();
                if url.is_empty() {
                    self.display = "Please enter a book URL.".to_string();
                    return (self, None);
                }
                (self, Some(Effect::FetchAndStore(url)))
            }
            ViewEvent::Clear => (Self::default(), None),
        }
    }

    pub fn apply_outcome(mut self, outcome: ActionOutcome) -> Self {
        self.display = match outcome {
            ActionOutcome::Found { title, blob } => display_with_header(&title, &blob),
            ActionOutcome::NotFound { title } => {
                format!("'{}' not found in the local database.", title)
            }
            ActionOutcome::Saved { title, blob } => format!(
                "'{}' saved to the local database.\n\n{}",
                title,
                display_with_header(&title, &blob)
            ),
            ActionOutcome::Failed(e) => e.to_string(),
        };
        self
    }
}
