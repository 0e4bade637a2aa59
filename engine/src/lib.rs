//! Core engine for Opportunity Finder - screen state machine and simulated loading.
//!
//! This crate contains the App state machine without TUI dependencies.
//!
//! ```text
//! Search(SearchForm) --search(q)--> Results(ResultsView) --new_search(q)--> Results (re-keyed)
//!        ^                                   |
//!        +------------back_to_search()-------+
//! ```

use std::time::{Duration, Instant};

mod clipboard;
mod config;
mod results;
mod search;
mod session;
mod source;

pub use clipboard::{Clipboard, NullClipboard};
pub use config::{AppConfig, ConfigError, FinderConfig, LoadingConfig};
pub use results::{ResultsFocus, ResultsView};
pub use search::{SearchFocus, SearchForm};
pub use session::{LoadingSession, LoadingTimings};
pub use source::{MockOpportunities, OpportunitySource};

pub use finder_types::ui::{DraftInput, UiOptions};
pub use finder_types::{
    EmptyQueryError, LOADING_STAGES, LoadingStage, Metrics, Opportunity, OpportunityId,
    QUICK_SECTOR_COUNT, Query, Sector, SessionId,
};

use finder_types::ui::IntervalTimer;

/// Cadence of the decorative tick counter (loading dots), independent of render FPS.
const UI_TICK: Duration = Duration::from_millis(100);

/// What a screen asks the controller to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Search(Query),
    NewSearch(Query),
    Back,
    Copy(OpportunityId),
    Quit,
}

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenKind {
    Search,
    Results,
}

/// The active screen together with its local state.
///
/// The query lives inside `Results`; there is no query while searching.
#[derive(Debug)]
pub enum Screen {
    Search(SearchForm),
    Results(ResultsView),
}

impl Default for Screen {
    fn default() -> Self {
        Screen::Search(SearchForm::default())
    }
}

impl Screen {
    #[must_use]
    pub fn kind(&self) -> ScreenKind {
        match self {
            Screen::Search(_) => ScreenKind::Search,
            Screen::Results(_) => ScreenKind::Results,
        }
    }
}

pub struct App {
    screen: Screen,
    source: Box<dyn OpportunitySource>,
    clipboard: Box<dyn Clipboard>,
    timings: LoadingTimings,
    ui_options: UiOptions,
    last_session: SessionId,
    last_frame: Instant,
    ui_timer: IntervalTimer,
    tick: usize,
    should_quit: bool,
}

impl App {
    /// Build the app from optional config, backed by the mock data source.
    pub fn new(config: Option<&FinderConfig>, clipboard: Box<dyn Clipboard>) -> Self {
        Self::with_parts(
            FinderConfig::ui_options(config),
            FinderConfig::loading_timings(config),
            Box::new(MockOpportunities),
            clipboard,
        )
    }

    pub fn with_parts(
        ui_options: UiOptions,
        timings: LoadingTimings,
        source: Box<dyn OpportunitySource>,
        clipboard: Box<dyn Clipboard>,
    ) -> Self {
        Self {
            screen: Screen::default(),
            source,
            clipboard,
            timings,
            ui_options,
            last_session: SessionId::default(),
            last_frame: Instant::now(),
            ui_timer: IntervalTimer::new(UI_TICK),
            tick: 0,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn ui_options(&self) -> UiOptions {
        self.ui_options
    }

    pub fn timings(&self) -> LoadingTimings {
        self.timings
    }

    pub fn tick_count(&self) -> usize {
        self.tick
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> &mut Screen {
        &mut self.screen
    }

    pub fn screen_kind(&self) -> ScreenKind {
        self.screen.kind()
    }

    /// The active query, or `""` on the search screen.
    pub fn query(&self) -> &str {
        match &self.screen {
            Screen::Search(_) => "",
            Screen::Results(view) => view.query().as_str(),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(&self.screen, Screen::Results(view) if view.is_loading())
    }

    // ========================================================================
    // Controller operations
    // ========================================================================

    /// Show results for `query` with a fresh loading session.
    pub fn search(&mut self, query: Query) {
        tracing::info!(query = %query, "Search submitted");
        let session = self.start_session(query);
        self.screen = Screen::Results(ResultsView::new(session));
    }

    /// Search again without leaving the results screen.
    ///
    /// Loading restarts only when the query value actually changes.
    pub fn new_search(&mut self, query: Query) {
        let Screen::Results(view) = &self.screen else {
            tracing::debug!(query = %query, "New search ignored outside results screen");
            return;
        };
        if view.query() == &query {
            tracing::debug!(query = %query, "New search matches active query; keeping session");
            return;
        }

        tracing::info!(query = %query, "New search submitted");
        let session = self.start_session(query);
        if let Screen::Results(view) = &mut self.screen {
            view.restart(session);
        }
    }

    /// Return to an empty search screen, cancelling any pending loading.
    pub fn back_to_search(&mut self) {
        if let Screen::Results(view) = &self.screen {
            tracing::info!(query = %view.query(), "Back to search");
        }
        self.screen = Screen::default();
    }

    /// Copy an opportunity's problem and solution to the clipboard.
    ///
    /// Fire-and-forget: the outcome is never reported back.
    pub fn copy(&mut self, id: OpportunityId) {
        let Screen::Results(view) = &self.screen else {
            return;
        };
        let Some(opportunity) = view.opportunity(id) else {
            tracing::debug!(%id, "Copy requested for unknown opportunity");
            return;
        };
        let text = opportunity.clipboard_text();
        tracing::debug!(%id, bytes = text.len(), "Copying opportunity");
        self.clipboard.write_text(text);
    }

    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Search(query) => self.search(query),
            Action::NewSearch(query) => self.new_search(query),
            Action::Back => self.back_to_search(),
            Action::Copy(id) => self.copy(id),
            Action::Quit => self.request_quit(),
        }
    }

    // ========================================================================
    // Time
    // ========================================================================

    /// Advance everything by the wall time since the previous frame.
    pub fn tick(&mut self) {
        let delta = self.frame_elapsed();
        self.advance(delta);
    }

    /// Advance timers by an explicit amount of time.
    pub fn advance(&mut self, delta: Duration) {
        self.ui_timer.advance(delta);
        while self.ui_timer.fire().is_some() {
            self.tick = self.tick.wrapping_add(1);
        }

        if let Screen::Results(view) = &mut self.screen {
            view.session_mut().advance(delta, self.source.as_ref());
        }
    }

    pub fn frame_elapsed(&mut self) -> Duration {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        elapsed
    }

    fn start_session(&mut self, query: Query) -> LoadingSession {
        self.last_session = self.last_session.next();
        LoadingSession::new(self.last_session, query, self.timings)
    }
}
