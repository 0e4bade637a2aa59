//! The staged loading sequence as seen through the app.

use std::time::Duration;

use finder_engine::{LOADING_STAGES, LoadingTimings, UiOptions};

use crate::common::{app, app_with, results_view, submit};

fn stage_text(app: &finder_engine::App) -> &'static str {
    results_view(app).session().current_stage().text()
}

#[test]
fn stages_follow_default_schedule() {
    let (mut app, _) = app();
    submit(&mut app, "Healthcare");
    assert_eq!(stage_text(&app), "Scanning Reddit communities...");

    let checkpoints = [
        (1499, "Scanning Reddit communities..."),
        (1, "Deep inside Reddit..."),
        (1500, "Analyzing pain points..."),
        (1500, "Formulating AI solutions..."),
        (1500, "Preparing your opportunities..."),
    ];
    for (step, expected) in checkpoints {
        app.advance(Duration::from_millis(step));
        assert_eq!(stage_text(&app), expected);
        assert!(app.is_loading());
    }

    // Final stage is held for another interval, then the settle delay.
    app.advance(Duration::from_millis(2499));
    assert!(app.is_loading());
    app.advance(Duration::from_millis(1));
    assert!(!app.is_loading());
    assert_eq!(results_view(&app).results().len(), 3);
}

#[test]
fn every_stage_is_shown_once_in_order() {
    let (mut app, _) = app();
    submit(&mut app, "Gaming");

    let mut seen = vec![stage_text(&app)];
    while app.is_loading() {
        app.advance(Duration::from_millis(100));
        if app.is_loading() && seen.last() != Some(&stage_text(&app)) {
            seen.push(stage_text(&app));
        }
    }

    let expected: Vec<&str> = LOADING_STAGES.iter().map(|stage| stage.text()).collect();
    assert_eq!(seen, expected);
}

#[test]
fn one_large_frame_lands_on_results() {
    let (mut app, _) = app();
    submit(&mut app, "Gaming");
    app.advance(Duration::from_secs(60));

    assert!(!app.is_loading());
    assert_eq!(results_view(&app).session().stage(), LOADING_STAGES.len() - 1);
}

#[test]
fn fast_timings_keep_the_same_shape() {
    let timings = LoadingTimings {
        stage_interval: Duration::from_millis(20),
        settle_delay: Duration::from_millis(5),
    };
    let (mut app, _) = app_with(UiOptions::default(), timings);
    submit(&mut app, "SaaS");

    app.advance(Duration::from_millis(80));
    assert_eq!(results_view(&app).session().stage(), 4);
    app.advance(Duration::from_millis(24));
    assert!(app.is_loading());
    app.advance(Duration::from_millis(1));
    assert!(!app.is_loading());
}
