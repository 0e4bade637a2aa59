//! Key-driven flows between the search and results screens.

use crossterm::event::KeyCode;
use finder_engine::{ResultsFocus, ScreenKind, SearchFocus};

use crate::common::{
    app, finish_loading, press, press_alt, results_view, search_form, submit, type_text,
};

#[test]
fn typed_sector_reaches_results_header() {
    let (mut app, _) = app();
    submit(&mut app, "  Healthcare  ");

    assert_eq!(app.screen_kind(), ScreenKind::Results);
    assert_eq!(app.query(), "Healthcare");
    assert!(app.is_loading());
}

#[test]
fn whitespace_only_text_does_not_submit() {
    let (mut app, _) = app();
    submit(&mut app, "   ");

    assert_eq!(app.screen_kind(), ScreenKind::Search);
    assert!(!search_form(&app).can_submit());
}

#[test]
fn text_takes_priority_over_selected_sector() {
    let (mut app, _) = app();
    type_text(&mut app, "Pets");
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Down);
    assert!(search_form(&app).selected_sector().is_some());

    press(&mut app, KeyCode::Tab);
    assert_eq!(search_form(&app).focus(), SearchFocus::Submit);
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.query(), "Pets");
}

#[test]
fn selector_alone_submits_its_label() {
    let (mut app, _) = app();
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Up);
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.query(), "Gaming");
}

#[test]
fn cleared_selector_disables_submit() {
    let (mut app, _) = app();
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Backspace);
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.screen_kind(), ScreenKind::Search);
    assert_eq!(search_form(&app).selected_sector(), None);
}

#[test]
fn quick_sector_ignores_field_contents() {
    let (mut app, _) = app();
    type_text(&mut app, "Something else");
    press_alt(&mut app, '6');

    assert_eq!(app.query(), "Real Estate");
}

#[test]
fn back_from_results_shows_empty_form() {
    let (mut app, _) = app();
    submit(&mut app, "Finance");
    finish_loading(&mut app);

    press(&mut app, KeyCode::Char('b'));

    assert_eq!(app.screen_kind(), ScreenKind::Search);
    assert_eq!(app.query(), "");
    let form = search_form(&app);
    assert_eq!(form.search_term().text(), "");
    assert_eq!(form.focus(), SearchFocus::Input);
}

#[test]
fn blank_new_search_is_ignored() {
    let (mut app, _) = app();
    submit(&mut app, "Finance");
    finish_loading(&mut app);

    press(&mut app, KeyCode::Char('/'));
    submit(&mut app, "   ");

    let view = results_view(&app);
    assert_eq!(view.query().as_str(), "Finance");
    assert!(!view.is_loading());
}

#[test]
fn new_search_from_header_restarts_loading() {
    let (mut app, _) = app();
    submit(&mut app, "Finance");
    finish_loading(&mut app);

    press(&mut app, KeyCode::Char('/'));
    assert_eq!(results_view(&app).focus(), ResultsFocus::Input);
    submit(&mut app, "Travel");

    let view = results_view(&app);
    assert_eq!(view.query().as_str(), "Travel");
    assert!(view.is_loading());
    assert_eq!(view.session().stage(), 0);
    assert!(view.results().is_empty());
}

#[test]
fn copy_key_copies_highlighted_card() {
    let (mut app, clipboard) = app();
    submit(&mut app, "Healthcare");
    finish_loading(&mut app);

    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Char('c'));

    assert_eq!(
        clipboard.writes(),
        ["Difficulty tracking medication adherence for elderly patients\n\nA smart pill dispenser with mobile app integration that sends reminders and tracks medication compliance."]
    );
}

#[test]
fn copy_key_does_nothing_while_loading() {
    let (mut app, clipboard) = app();
    submit(&mut app, "Healthcare");
    press(&mut app, KeyCode::Char('c'));

    assert!(clipboard.writes().is_empty());
}

#[test]
fn highlight_stops_at_last_card() {
    let (mut app, _) = app();
    submit(&mut app, "Healthcare");
    finish_loading(&mut app);

    for _ in 0..10 {
        press(&mut app, KeyCode::Char('j'));
    }
    assert_eq!(results_view(&app).selected(), 2);
    press(&mut app, KeyCode::Up);
    assert_eq!(results_view(&app).selected(), 1);
}

#[test]
fn q_quits_from_results_but_types_in_field() {
    let (mut app, _) = app();
    submit(&mut app, "Finance");
    press(&mut app, KeyCode::Char('/'));
    assert!(!press(&mut app, KeyCode::Char('q')));
    assert_eq!(results_view(&app).new_search_term().text(), "q");

    press(&mut app, KeyCode::Esc);
    assert!(press(&mut app, KeyCode::Char('q')));
}
