//! Rendering tests using the vt100 virtual terminal.


use std::sync::{Arc, Mutex};
use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::Terminal;

use finder_engine::{
    App, Clipboard, LoadingTimings, MockOpportunities, NullClipboard, Query, UiOptions,
};
use finder_tui::{apply_event, draw};
use vt100_backend::VT100Backend;

fn app_with(options: UiOptions) -> App {
    App::with_parts(
        options,
        LoadingTimings::default(),
        Box::new(MockOpportunities),
        Box::new(NullClipboard),
    )
}

fn ascii() -> UiOptions {
    UiOptions {
        ascii_only: true,
        ..UiOptions::default()
    }
}

fn render(app: &App, width: u16, height: u16) -> Terminal<VT100Backend> {
    let mut terminal =
        Terminal::new(VT100Backend::new(width, height)).expect("failed to create terminal");
    terminal
        .draw(|frame| draw(frame, app))
        .expect("failed to draw");
    terminal
}

fn press(app: &mut App, code: KeyCode) {
    apply_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
}

fn loaded_app(options: UiOptions) -> App {
    let mut app = app_with(options);
    app.search(Query::new("Healthcare").unwrap());
    app.advance(Duration::from_secs(9));
    app
}

#[test]
fn search_screen_shows_form() {
    let app = app_with(UiOptions::default());
    let terminal = render(&app, 80, 24);
    let screen = terminal.backend().contents();

    for text in [
        "Opportunity Finder",
        "Discover business opportunities from real pain points",
        "Enter sector (e.g., healthcare, finance...)",
        "Popular Searches",
        "Find Opportunities",
        "Or try these popular sectors:",
        "© 2024 Opportunity Finder. All rights reserved.",
    ] {
        assert!(screen.contains(text), "missing {text:?} in:\n{screen}");
    }
}

#[test]
fn quick_buttons_render_in_order() {
    let app = app_with(UiOptions::default());
    let terminal = render(&app, 80, 24);
    let backend = terminal.backend();

    let row = backend.find_row("Healthcare").expect("quick row");
    let line = backend.row(row);
    let positions: Vec<usize> = [
        "Healthcare",
        "Finance",
        "Education",
        "E-commerce",
        "SaaS",
        "Real Estate",
    ]
    .iter()
    .map(|label| line.find(label).expect("label on quick row"))
    .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(!line.contains("Fitness"));
}

#[test]
fn cursor_sits_in_focused_sector_field() {
    let mut app = app_with(UiOptions::default());
    let terminal = render(&app, 80, 24);
    let backend = terminal.backend();
    let placeholder_row = backend
        .find_row("Enter sector")
        .expect("placeholder row");
    assert!(backend.cursor_visible());
    assert_eq!(backend.cursor().1, placeholder_row);
    let empty_col = backend.cursor().0;

    for c in "fintech".chars() {
        press(&mut app, KeyCode::Char(c));
    }
    let terminal = render(&app, 80, 24);
    let backend = terminal.backend();
    assert!(backend.contents().contains("fintech"));
    assert_eq!(backend.cursor(), (empty_col + 7, placeholder_row));
}

#[test]
fn selected_sector_replaces_selector_placeholder() {
    let mut app = app_with(UiOptions::default());
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    let terminal = render(&app, 80, 24);
    let backend = terminal.backend();

    assert!(backend.find_row("Popular Searches").is_none());
    let row = backend.find_row("Finance").expect("selector row");
    assert!(row < backend.find_row("Find Opportunities").expect("submit row"));
    assert!(!backend.cursor_visible());
}

#[test]
fn results_screen_shows_first_stage_while_loading() {
    let mut app = app_with(UiOptions::default());
    app.search(Query::new("Healthcare").unwrap());
    let terminal = render(&app, 100, 30);
    let screen = terminal.backend().contents();

    assert!(screen.contains("Showing results for: Healthcare"));
    assert!(screen.contains("Try another search..."));
    assert!(screen.contains("Scanning Reddit communities..."));
    assert!(screen.contains("● • •"));
    assert!(!screen.contains("Found"));
}

#[test]
fn stage_text_follows_loading_progress() {
    let mut app = app_with(UiOptions::default());
    app.search(Query::new("Finance").unwrap());
    app.advance(Duration::from_millis(4500));
    let screen = render(&app, 100, 30).backend().contents();

    assert!(screen.contains("Formulating AI solutions..."));
    assert!(!screen.contains("Analyzing pain points..."));
}

#[test]
fn reduced_motion_keeps_dots_still() {
    let options = UiOptions {
        reduced_motion: true,
        ascii_only: true,
        ..UiOptions::default()
    };
    let mut app = app_with(options);
    app.search(Query::new("Finance").unwrap());
    app.advance(Duration::from_millis(300));
    let screen = render(&app, 100, 30).backend().contents();

    assert!(screen.contains(". . ."));
    for raised in ["o . .", ". o .", ". . o"] {
        assert!(!screen.contains(raised));
    }
}

#[test]
fn loaded_results_show_cards_and_metrics() {
    let app = loaded_app(ascii());
    let screen = render(&app, 100, 40).backend().contents();

    for text in [
        "Found 3 opportunities in Healthcare",
        "Real pain points with AI-generated solutions",
        "Long wait times for specialist appointments",
        "Medical records are scattered across",
        "+ 156",
        "# 23",
        "^ 89%",
        "^ 82%",
        "^ 91%",
        "B2B",
        "Hardware",
    ] {
        assert!(screen.contains(text), "missing {text:?} in:\n{screen}");
    }
    assert_eq!(screen.matches("[c] Copy").count(), 1);
}

#[test]
fn wide_terminal_uses_two_columns() {
    let app = loaded_app(ascii());
    let terminal = render(&app, 100, 40);
    let backend = terminal.backend();

    let first = backend.find_row("Long wait times").expect("first card");
    let second = backend.find_row("Difficulty tracking").expect("second card");
    let third = backend.find_row("Medical records").expect("third card");
    assert_eq!(first, second);
    assert!(third > first);
}

#[test]
fn narrow_terminal_stacks_cards() {
    let app = loaded_app(ascii());
    let terminal = render(&app, 60, 60);
    let backend = terminal.backend();

    let first = backend.find_row("Long wait times").expect("first card");
    let second = backend.find_row("Difficulty tracking").expect("second card");
    assert!(second > first);
}

#[test]
fn selection_scrolls_cards_into_view() {
    let mut app = loaded_app(ascii());
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    let screen = render(&app, 60, 20).backend().contents();

    assert!(screen.contains("Medical records are scattered"));
    assert!(!screen.contains("Long wait times"));
    assert!(screen.contains("[c] Copy"));
}

#[test]
fn header_field_takes_the_cursor_when_focused() {
    let mut app = loaded_app(ascii());
    press(&mut app, KeyCode::Char('/'));
    for c in "Gaming".chars() {
        press(&mut app, KeyCode::Char(c));
    }
    let terminal = render(&app, 100, 40);
    let backend = terminal.backend();

    let row = backend.find_row("Gaming").expect("header field");
    assert!(row < 3);
    assert!(backend.cursor_visible());
    assert_eq!(backend.cursor().1, row);
    // Copy hint disappears while typing.
    assert!(!backend.contents().contains("[c] Copy"));
}

#[derive(Clone, Default)]
struct CountingClipboard(Arc<Mutex<usize>>);

impl Clipboard for CountingClipboard {
    fn write_text(&mut self, _text: String) {
        *self.0.lock().unwrap() += 1;
    }
}

#[test]
fn copy_from_rendered_screen_writes_once() {
    let clipboard = CountingClipboard::default();
    let mut app = App::with_parts(
        ascii(),
        LoadingTimings::default(),
        Box::new(MockOpportunities),
        Box::new(clipboard.clone()),
    );
    app.search(Query::new("Healthcare").unwrap());
    app.advance(Duration::from_secs(9));
    let _ = render(&app, 100, 40);

    press(&mut app, KeyCode::Char('y'));
    assert_eq!(*clipboard.0.lock().unwrap(), 1);
}
