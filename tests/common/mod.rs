//! Shared test utilities and fixtures
//!
//! Common infrastructure for integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use finder_engine::{
    App, Clipboard, LoadingTimings, MockOpportunities, ResultsView, Screen, SearchForm, UiOptions,
};

/// Clipboard double that keeps every write.
#[derive(Clone, Default)]
pub struct RecordingClipboard {
    writes: Arc<Mutex<Vec<String>>>,
}

impl RecordingClipboard {
    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().unwrap().clone()
    }
}

impl Clipboard for RecordingClipboard {
    fn write_text(&mut self, text: String) {
        self.writes.lock().unwrap().push(text);
    }
}

/// App with default timings and a recording clipboard.
pub fn app() -> (App, RecordingClipboard) {
    app_with(UiOptions::default(), LoadingTimings::default())
}

pub fn app_with(options: UiOptions, timings: LoadingTimings) -> (App, RecordingClipboard) {
    let clipboard = RecordingClipboard::default();
    let app = App::with_parts(
        options,
        timings,
        Box::new(MockOpportunities),
        Box::new(clipboard.clone()),
    );
    (app, clipboard)
}

pub fn press(app: &mut App, code: KeyCode) -> bool {
    finder_tui::apply_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
}

pub fn press_alt(app: &mut App, c: char) -> bool {
    finder_tui::apply_event(app, Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::ALT)))
}

pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

/// Type into the focused field and press Enter.
pub fn submit(app: &mut App, text: &str) {
    type_text(app, text);
    press(app, KeyCode::Enter);
}

pub fn finish_loading(app: &mut App) {
    app.advance(app.timings().time_to_results());
    assert!(!app.is_loading(), "loading should be finished");
}

pub fn search_form(app: &App) -> &SearchForm {
    match app.screen() {
        Screen::Search(form) => form,
        Screen::Results(_) => panic!("expected search screen"),
    }
}

pub fn results_view(app: &App) -> &ResultsView {
    match app.screen() {
        Screen::Results(view) => view,
        Screen::Search(_) => panic!("expected results screen"),
    }
}
