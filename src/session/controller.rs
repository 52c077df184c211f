use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use crate::app::{AppContext, Result, ScoutError};
use crate::console::{Console, Tone};
use crate::domain::{DetailInfo, Listing};
use crate::export::{ArtifactKind, ExportPaths};
use crate::fetcher::search_url;
use crate::opener::Opener;
use crate::session::state::{transition, Effect, Event, OpenChoice, SessionState, Transition};

const KEYWORD_PROMPT: &str = "Enter the game keyword you want to search (or 'quit' to exit): ";
const OPEN_PROMPT: &str =
    "Do you want to open the results? (Type 'J' to open JSON, 'C' to open CSV, or 'next' to move on): ";
const NEXT_PROMPT: &str = "Type 'next' to move on: ";
const LINK_PROMPT: &str =
    "Enter the link of the game from your JSON/CSV file for additional details (or 'quit' to exit): ";
const SYSREQ_PROMPT: &str = "\nDo you want to see system requirements? (yes/no): ";

/// Owns the session state and the current batch, and runs the effects the
/// state machine asks for.
pub struct SessionController {
    ctx: Arc<AppContext>,
    console: Box<dyn Console>,
    opener: Box<dyn Opener>,
    state: SessionState,
    batch: Vec<Listing>,
    exports: Option<ExportPaths>,
}

impl SessionController {
    pub fn new(ctx: Arc<AppContext>, console: Box<dyn Console>, opener: Box<dyn Opener>) -> Self {
        Self {
            ctx,
            console,
            opener,
            state: SessionState::AwaitingKeyword,
            batch: Vec::new(),
            exports: None,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn batch(&self) -> &[Listing] {
        &self.batch
    }

    /// Run until the user quits or input ends. Only fatal errors are
    /// returned; everything else is reported and the loop carries on.
    pub async fn run(&mut self) -> Result<()> {
        while self.state != SessionState::Terminal {
            self.step().await?;
        }
        tracing::info!("Session ended");
        Ok(())
    }

    /// Prompt once for the current state and process the answer.
    pub async fn step(&mut self) -> Result<()> {
        let event = self.read_input().await;
        self.handle(event).await
    }

    /// Feed an event through the state machine, following up on effect
    /// outcomes until the machine settles.
    pub async fn handle(&mut self, event: Event) -> Result<()> {
        let mut pending = Some(event);

        while let Some(event) = pending.take() {
            let Transition { next, effect } = transition(self.state, &self.batch, event);
            if next != self.state {
                tracing::debug!(from = ?self.state, to = ?next, "State change");
            }
            self.state = next;
            pending = self.apply(effect).await?;
        }

        Ok(())
    }

    async fn read_input(&mut self) -> Event {
        let message = match self.state {
            SessionState::AwaitingKeyword => KEYWORD_PROMPT,
            SessionState::ResultsReady => OPEN_PROMPT,
            SessionState::AwaitingDetailSelection => LINK_PROMPT,
            SessionState::Terminal => return Event::EndOfInput,
        };

        let Some(line) = self.console.prompt(message).await else {
            return Event::EndOfInput;
        };
        let line = line.trim().to_string();

        match self.state {
            SessionState::AwaitingKeyword => Event::Keyword(line),
            SessionState::ResultsReady => Event::OpenChoice(OpenChoice::from(line.as_str())),
            _ => Event::Link(line),
        }
    }

    async fn apply(&mut self, effect: Effect) -> Result<Option<Event>> {
        match effect {
            Effect::None => Ok(None),
            Effect::Search(keyword) => self.search(&keyword).await,
            Effect::StoreBatch { listings, exports } => {
                self.console.say(
                    Tone::Plain,
                    &format!("Found {} games.", listings.len()),
                );
                self.console
                    .say(Tone::Success, "JSON and CSV files created successfully.");
                self.batch = listings;
                self.exports = Some(exports);
                Ok(None)
            }
            Effect::Open(kind) => Ok(Some(self.open(kind).await)),
            Effect::Continue => {
                self.console
                    .say(Tone::Plain, "Moving on to the next operation.");
                Ok(None)
            }
            Effect::ShowDetail(listing) => Ok(Some(self.show_detail(&listing).await)),
            Effect::Report(err) => {
                tracing::warn!(error = %err, kind = ?err.kind(), "Recoverable error");
                self.console.say(Tone::Error, &format!("Error: {}", err));
                Ok(None)
            }
            Effect::Notice(message) => {
                self.console.say(Tone::Plain, message);
                Ok(None)
            }
        }
    }

    /// Fetch, extract and export. Export failures are fatal; fetch failures
    /// come back as [`Event::SearchFailed`].
    async fn search(&mut self, keyword: &str) -> Result<Option<Event>> {
        let listings = match self.fetch_listings(keyword).await {
            Ok(listings) => listings,
            Err(err) if err.is_fatal() => return Err(err),
            Err(err) => return Ok(Some(Event::SearchFailed(err))),
        };

        let exports = self.ctx.exporter.export(&listings)?;
        Ok(Some(Event::SearchSucceeded { listings, exports }))
    }

    async fn fetch_listings(&self, keyword: &str) -> Result<Vec<Listing>> {
        let url = search_url(&self.ctx.config.store.host, keyword)?;
        tracing::info!(keyword, url = %url, "Searching store");

        let body = self.fetch(&url, None).await?;
        let listings = self
            .ctx
            .extractors
            .listings
            .extract_html(&body, &self.ctx.catalog);

        tracing::info!(count = listings.len(), "Extracted listings");
        Ok(listings)
    }

    /// One request, abandoned if the user presses Ctrl-C.
    async fn fetch(&self, url: &str, cookie: Option<&str>) -> Result<String> {
        tokio::select! {
            result = self.ctx.fetcher.fetch(url, cookie) => result,
            _ = tokio::signal::ctrl_c() => Err(ScoutError::Cancelled(url.to_string())),
        }
    }

    async fn open(&mut self, kind: ArtifactKind) -> Event {
        let path = match &self.exports {
            Some(exports) => exports.get(kind).to_path_buf(),
            None => {
                return Event::OpenFailed(ScoutError::Open {
                    path: PathBuf::new(),
                    source: io::Error::new(io::ErrorKind::NotFound, "nothing has been exported"),
                })
            }
        };

        if let Err(err) = self.opener.open(&path) {
            return Event::OpenFailed(err);
        }
        self.console.say(Tone::Success, "File opened successfully.");

        loop {
            match self.console.prompt(NEXT_PROMPT).await {
                Some(line) if line.trim().eq_ignore_ascii_case("next") => return Event::Opened,
                Some(_) => continue,
                None => return Event::EndOfInput,
            }
        }
    }

    async fn show_detail(&mut self, listing: &Listing) -> Event {
        self.console.say(
            Tone::Plain,
            &format!("Scraping additional details from: {}", listing.link),
        );

        let cookie = self.ctx.config.store.bypass_cookie();
        let body = match self.fetch(&listing.link, Some(cookie.as_str())).await {
            Ok(body) => body,
            Err(err) => return Event::DetailFailed(err),
        };

        let info = self.ctx.extractors.details.extract_html(&body);
        tracing::info!(title = listing.display_title(), "Extracted details");

        match self.present(&info).await {
            Some(()) => Event::DetailShown,
            None => Event::EndOfInput,
        }
    }

    /// Print the details and offer the system requirements. `None` when
    /// input ended at the yes/no prompt.
    async fn present(&mut self, info: &DetailInfo) -> Option<()> {
        for (heading, value) in [
            ("\nDeveloper:", &info.developer),
            ("\nPublisher:", &info.publisher),
            ("\nDescription:", &info.description),
        ] {
            self.console.say(Tone::Heading, heading);
            self.console.say(Tone::Plain, value);
        }

        let answer = self.console.prompt(SYSREQ_PROMPT).await?;
        if !answer.trim().eq_ignore_ascii_case("yes") {
            return Some(());
        }

        match &info.system_requirements {
            Some(requirements) => {
                self.console.say(Tone::Heading, "\nSystem Requirements:");
                self.console.say(Tone::Plain, requirements);
                self.console.say(Tone::Plain, "");
            }
            None => self
                .console
                .say(Tone::Plain, "\nSystem requirements not found."),
        }
        Some(())
    }
}
