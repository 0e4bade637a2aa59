//! Results screen state.

use finder_types::ui::DraftInput;
use finder_types::{Opportunity, OpportunityId, Query};

use crate::Action;
use crate::session::LoadingSession;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultsFocus {
    /// Result cards; arrow keys move the highlight.
    #[default]
    Cards,
    /// The "try another search" field in the header.
    Input,
}

/// Results screen: the active loading session plus the header search field.
#[derive(Debug)]
pub struct ResultsView {
    session: LoadingSession,
    new_search_term: DraftInput,
    selected: usize,
    focus: ResultsFocus,
}

impl ResultsView {
    pub(crate) fn new(session: LoadingSession) -> Self {
        Self {
            session,
            new_search_term: DraftInput::default(),
            selected: 0,
            focus: ResultsFocus::default(),
        }
    }

    #[must_use]
    pub fn query(&self) -> &Query {
        self.session.query()
    }

    #[must_use]
    pub fn session(&self) -> &LoadingSession {
        &self.session
    }

    pub(crate) fn session_mut(&mut self) -> &mut LoadingSession {
        &mut self.session
    }

    /// Swap in a session for a new query. The old session, and its timers,
    /// are dropped here. The header field keeps whatever was typed.
    pub(crate) fn restart(&mut self, session: LoadingSession) {
        self.session = session;
        self.selected = 0;
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.session.is_loading()
    }

    #[must_use]
    pub fn results(&self) -> &[Opportunity] {
        self.session.results()
    }

    #[must_use]
    pub fn opportunity(&self, id: OpportunityId) -> Option<&Opportunity> {
        self.results().iter().find(|opportunity| opportunity.id == id)
    }

    #[must_use]
    pub fn new_search_term(&self) -> &DraftInput {
        &self.new_search_term
    }

    pub fn new_search_term_mut(&mut self) -> &mut DraftInput {
        &mut self.new_search_term
    }

    #[must_use]
    pub fn focus(&self) -> ResultsFocus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: ResultsFocus) {
        self.focus = focus;
    }

    /// Index of the highlighted card.
    #[must_use]
    pub fn selected(&self) -> usize {
        self.selected
    }

    #[must_use]
    pub fn selected_opportunity(&self) -> Option<&Opportunity> {
        self.results().get(self.selected)
    }

    pub fn select_next(&mut self) {
        let last = self.results().len().saturating_sub(1);
        self.selected = (self.selected + 1).min(last);
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Trimmed non-empty header text searches again; blank text does nothing.
    #[must_use]
    pub fn submit_new_search(&self) -> Option<Action> {
        let text = self.new_search_term.trimmed()?;
        Query::new(text).ok().map(Action::NewSearch)
    }

    #[must_use]
    pub fn copy_selected(&self) -> Option<Action> {
        self.selected_opportunity()
            .map(|opportunity| Action::Copy(opportunity.id))
    }
}
