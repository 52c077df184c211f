use crate::app::ScoutError;
use crate::domain::{find_by_link, Listing};
use crate::export::{ArtifactKind, ExportPaths};

/// Typed at the keyword or link prompt to end the session.
pub const QUIT: &str = "quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingKeyword,
    ResultsReady,
    AwaitingDetailSelection,
    Terminal,
}

/// Answer to the "open the results?" prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenChoice {
    Open(ArtifactKind),
    Next,
    Unsupported,
}

impl From<&str> for OpenChoice {
    fn from(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "j" => OpenChoice::Open(ArtifactKind::Json),
            "c" => OpenChoice::Open(ArtifactKind::Csv),
            "next" => OpenChoice::Next,
            _ => OpenChoice::Unsupported,
        }
    }
}

/// User input, or the outcome of an effect fed back into the machine.
#[derive(Debug)]
pub enum Event {
    Keyword(String),
    SearchSucceeded {
        listings: Vec<Listing>,
        exports: ExportPaths,
    },
    SearchFailed(ScoutError),
    OpenChoice(OpenChoice),
    Opened,
    OpenFailed(ScoutError),
    Link(String),
    DetailShown,
    DetailFailed(ScoutError),
    EndOfInput,
}

/// Work the controller performs after a transition.
#[derive(Debug)]
pub enum Effect {
    None,
    Search(String),
    /// Replace the current batch; the only place the batch is written
    StoreBatch {
        listings: Vec<Listing>,
        exports: ExportPaths,
    },
    Open(ArtifactKind),
    Continue,
    ShowDetail(Listing),
    Report(ScoutError),
    Notice(&'static str),
}

#[derive(Debug)]
pub struct Transition {
    pub next: SessionState,
    pub effect: Effect,
}

impl Transition {
    fn to(next: SessionState) -> Self {
        Self {
            next,
            effect: Effect::None,
        }
    }

    fn with(next: SessionState, effect: Effect) -> Self {
        Self { next, effect }
    }
}

/// Next state and effect for `event` arriving in `state`. `batch` is the
/// current search batch, consulted for link lookups.
pub fn transition(state: SessionState, batch: &[Listing], event: Event) -> Transition {
    use SessionState::*;

    match (state, event) {
        (Terminal, _) => Transition::to(Terminal),
        (_, Event::EndOfInput) => Transition::to(Terminal),

        (AwaitingKeyword, Event::Keyword(keyword)) => {
            let keyword = keyword.trim();
            if keyword == QUIT {
                Transition::to(Terminal)
            } else if keyword.is_empty() {
                Transition::with(AwaitingKeyword, Effect::Notice("Please enter a keyword."))
            } else {
                Transition::with(AwaitingKeyword, Effect::Search(keyword.to_string()))
            }
        }
        (AwaitingKeyword, Event::SearchSucceeded { listings, exports }) => {
            Transition::with(ResultsReady, Effect::StoreBatch { listings, exports })
        }
        (AwaitingKeyword, Event::SearchFailed(err)) => {
            Transition::with(AwaitingKeyword, Effect::Report(err))
        }

        (ResultsReady, Event::OpenChoice(choice)) => match choice {
            OpenChoice::Open(kind) => Transition::with(ResultsReady, Effect::Open(kind)),
            OpenChoice::Next => Transition::with(AwaitingDetailSelection, Effect::Continue),
            OpenChoice::Unsupported => {
                Transition::with(ResultsReady, Effect::Notice("Unsupported input."))
            }
        },
        (ResultsReady, Event::Opened) => Transition::with(AwaitingDetailSelection, Effect::Continue),
        (ResultsReady, Event::OpenFailed(err)) => Transition::with(ResultsReady, Effect::Report(err)),

        (AwaitingDetailSelection, Event::Link(link)) => {
            let link = link.trim();
            if link == QUIT {
                return Transition::to(Terminal);
            }
            match find_by_link(batch, link) {
                Some(listing) => {
                    Transition::with(AwaitingDetailSelection, Effect::ShowDetail(listing.clone()))
                }
                None => Transition::with(
                    AwaitingDetailSelection,
                    Effect::Report(ScoutError::Lookup(link.to_string())),
                ),
            }
        }
        (AwaitingDetailSelection, Event::DetailShown) => Transition::to(AwaitingKeyword),
        (AwaitingDetailSelection, Event::DetailFailed(err)) => {
            Transition::with(AwaitingDetailSelection, Effect::Report(err))
        }

        (state, event) => {
            tracing::debug!(?state, ?event, "Ignoring event");
            Transition::to(state)
        }
    }
}
