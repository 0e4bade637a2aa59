//! Search screen state.

use finder_types::ui::DraftInput;
use finder_types::{QUICK_SECTOR_COUNT, Query, Sector};

use crate::Action;

/// Which control on the search screen has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchFocus {
    #[default]
    Input,
    Sector,
    Submit,
    /// Quick-access button by index into [`Sector::quick`].
    Quick(usize),
}

impl SearchFocus {
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Input => Self::Sector,
            Self::Sector => Self::Submit,
            Self::Submit => Self::Quick(0),
            Self::Quick(i) if i + 1 < QUICK_SECTOR_COUNT => Self::Quick(i + 1),
            Self::Quick(_) => Self::Input,
        }
    }

    #[must_use]
    pub fn prev(self) -> Self {
        match self {
            Self::Input => Self::Quick(QUICK_SECTOR_COUNT - 1),
            Self::Sector => Self::Input,
            Self::Submit => Self::Sector,
            Self::Quick(0) => Self::Submit,
            Self::Quick(i) => Self::Quick(i - 1),
        }
    }
}

/// Free-text sector field plus popular-sector selector.
///
/// A fresh form is created every time the search screen is shown.
#[derive(Debug, Default, Clone)]
pub struct SearchForm {
    search_term: DraftInput,
    selected_sector: Option<Sector>,
    focus: SearchFocus,
}

impl SearchForm {
    #[must_use]
    pub fn search_term(&self) -> &DraftInput {
        &self.search_term
    }

    pub fn search_term_mut(&mut self) -> &mut DraftInput {
        &mut self.search_term
    }

    #[must_use]
    pub fn selected_sector(&self) -> Option<Sector> {
        self.selected_sector
    }

    pub fn select_sector(&mut self, sector: Option<Sector>) {
        self.selected_sector = sector;
    }

    pub fn select_next_sector(&mut self) {
        self.selected_sector = Sector::cycle_next(self.selected_sector);
    }

    pub fn select_prev_sector(&mut self) {
        self.selected_sector = Sector::cycle_prev(self.selected_sector);
    }

    #[must_use]
    pub fn focus(&self) -> SearchFocus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: SearchFocus) {
        self.focus = match focus {
            SearchFocus::Quick(i) => SearchFocus::Quick(i.min(QUICK_SECTOR_COUNT - 1)),
            other => other,
        };
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Trimmed text if any, otherwise the selected sector.
    #[must_use]
    pub fn effective_query(&self) -> Option<Query> {
        match self.search_term.trimmed() {
            Some(text) => Query::new(text).ok(),
            None => self.selected_sector.map(Query::from),
        }
    }

    /// Drives the enabled state of the submit control.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.effective_query().is_some()
    }

    /// `None` when both the text field and the selector are empty.
    #[must_use]
    pub fn submit(&self) -> Option<Action> {
        self.effective_query().map(Action::Search)
    }

    /// Shortcut for one of the quick-access sectors.
    ///
    /// Fills the text field with the sector label and searches for it
    /// directly, whatever the fields currently hold.
    pub fn quick_search(&mut self, index: usize) -> Option<Action> {
        let sector = Sector::quick_at(index)?;
        self.search_term.set_text(sector.label());
        Some(Action::Search(Query::from(sector)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form_with_text(text: &str) -> SearchForm {
        let mut form = SearchForm::default();
        form.search_term_mut().set_text(text);
        form
    }

    fn searched(action: Option<Action>) -> Option<String> {
        match action {
            Some(Action::Search(query)) => Some(query.into_inner()),
            _ => None,
        }
    }

    #[test]
    fn empty_form_cannot_submit() {
        let form = SearchForm::default();
        assert!(!form.can_submit());
        assert!(form.submit().is_none());
    }

    #[test]
    fn whitespace_only_text_counts_as_empty() {
        let form = form_with_text("   ");
        assert!(form.submit().is_none());
    }

    #[test]
    fn trimmed_text_wins_over_sector() {
        let mut form = form_with_text("  pet care ");
        form.select_sector(Some(Sector::Finance));
        assert_eq!(searched(form.submit()).as_deref(), Some("pet care"));
    }

    #[test]
    fn sector_used_when_text_empty() {
        let mut form = form_with_text(" ");
        form.select_sector(Some(Sector::FoodAndBeverage));
        assert_eq!(searched(form.submit()).as_deref(), Some("Food & Beverage"));
    }

    #[test]
    fn quick_search_overrides_fields() {
        let mut form = form_with_text("crypto");
        form.select_sector(Some(Sector::Gaming));
        let action = form.quick_search(3);
        assert_eq!(searched(action).as_deref(), Some("E-commerce"));
        assert_eq!(form.search_term().text(), "E-commerce");
        assert_eq!(form.selected_sector(), Some(Sector::Gaming));
    }

    #[test]
    fn quick_search_out_of_range_does_nothing() {
        let mut form = form_with_text("crypto");
        assert!(form.quick_search(QUICK_SECTOR_COUNT).is_none());
        assert_eq!(form.search_term().text(), "crypto");
    }

    #[test]
    fn focus_cycles_through_every_control() {
        let mut focus = SearchFocus::Input;
        let mut visited = vec![focus];
        loop {
            focus = focus.next();
            if focus == SearchFocus::Input {
                break;
            }
            visited.push(focus);
        }
        assert_eq!(visited.len(), 3 + QUICK_SECTOR_COUNT);

        for window in visited.windows(2) {
            assert_eq!(window[1].prev(), window[0]);
        }
        assert_eq!(SearchFocus::Input.prev(), *visited.last().unwrap());
    }
}
