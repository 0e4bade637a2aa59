//! Input handling for the Opportunity Finder TUI.

use anyhow::{Result, anyhow};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};
use tokio::sync::mpsc;
use tracing::debug;

use finder_engine::{
    Action, App, DraftInput, QUICK_SECTOR_COUNT, ResultsFocus, ResultsView, Screen, SearchFocus,
    SearchForm,
};

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(25); // shutdown responsiveness
const INPUT_CHANNEL_CAPACITY: usize = 1024; // bounded: no OOM
const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering
const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(2);

enum InputMsg {
    Event(Event),
    Error(String),
}

/// Reads terminal events on a blocking thread and queues them for the UI loop.
pub struct InputPump {
    rx: mpsc::Receiver<InputMsg>,
    stop: Arc<AtomicBool>,
    join: Option<tokio::task::JoinHandle<()>>,
}

impl InputPump {
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(INPUT_CHANNEL_CAPACITY);
        let stop = Arc::new(AtomicBool::new(false));
        let stop2 = stop.clone();

        let join = tokio::task::spawn_blocking(move || input_loop(stop2, tx));
        Self {
            rx,
            stop,
            join: Some(join),
        }
    }

    pub async fn shutdown(&mut self) {
        // Close the receiver first so a backpressured send in the input thread unblocks.
        self.rx.close();

        self.stop.store(true, Ordering::Release);
        if let Some(join) = self.join.take() {
            let _ = tokio::time::timeout(SHUTDOWN_TIMEOUT, join).await;
        }
    }
}

impl Default for InputPump {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for InputPump {
    fn drop(&mut self) {
        // Best-effort stop if caller exits early; do not block in Drop.
        self.rx.close();
        self.stop.store(true, Ordering::Release);
    }
}

fn input_loop(stop: Arc<AtomicBool>, tx: mpsc::Sender<InputMsg>) {
    while !stop.load(Ordering::Acquire) {
        match event::poll(INPUT_POLL_TIMEOUT) {
            Ok(true) => match event::read() {
                Ok(ev) => {
                    // Bounded queue: apply backpressure instead of dropping events.
                    if tx.blocking_send(InputMsg::Event(ev)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                    break;
                }
            },
            Ok(false) => {}
            Err(e) => {
                let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                break;
            }
        }
    }
}

/// Drain queued input and apply it. Returns `true` when the app should quit.
pub fn handle_events(app: &mut App, input: &mut InputPump) -> Result<bool> {
    let mut processed = 0;
    while processed < MAX_EVENTS_PER_FRAME {
        let ev = match input.rx.try_recv() {
            Ok(InputMsg::Event(ev)) => ev,
            Ok(InputMsg::Error(msg)) => return Err(anyhow!("input error: {msg}")),
            Err(mpsc::error::TryRecvError::Empty) => break,
            Err(mpsc::error::TryRecvError::Disconnected) => {
                return Err(anyhow!("input pump disconnected"));
            }
        };

        if apply_event(app, ev) {
            return Ok(true);
        }
        processed += 1;
    }
    Ok(app.should_quit())
}

/// Apply a single terminal event. Returns `true` when the app should quit.
pub fn apply_event(app: &mut App, event: Event) -> bool {
    match event {
        Event::Key(key) => {
            // Handle press + repeat events (ignore releases)
            if matches!(key.kind, KeyEventKind::Release) {
                return app.should_quit();
            }

            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                app.request_quit();
                return true;
            }

            let action = match app.screen_mut() {
                Screen::Search(form) => handle_search_key(form, key),
                Screen::Results(view) => handle_results_key(view, key),
            };
            if let Some(action) = action {
                debug!(?action, "Dispatching action");
                app.dispatch(action);
            }
        }
        Event::Paste(text) => {
            if let Some(draft) = focused_draft(app.screen_mut()) {
                draft.enter_text(&text);
            }
        }
        _ => {}
    }
    app.should_quit()
}

fn focused_draft(screen: &mut Screen) -> Option<&mut DraftInput> {
    match screen {
        Screen::Search(form) if form.focus() == SearchFocus::Input => {
            Some(form.search_term_mut())
        }
        Screen::Results(view) if view.focus() == ResultsFocus::Input => {
            Some(view.new_search_term_mut())
        }
        _ => None,
    }
}

fn quick_shortcut(key: KeyEvent) -> Option<usize> {
    if !key.modifiers.contains(KeyModifiers::ALT) {
        return None;
    }
    match key.code {
        KeyCode::Char(c) => c
            .to_digit(10)
            .and_then(|d| (d as usize).checked_sub(1))
            .filter(|index| *index < QUICK_SECTOR_COUNT),
        _ => None,
    }
}

fn handle_search_key(form: &mut SearchForm, key: KeyEvent) -> Option<Action> {
    if let Some(index) = quick_shortcut(key) {
        return form.quick_search(index);
    }

    match key.code {
        KeyCode::Tab => {
            form.focus_next();
            return None;
        }
        KeyCode::BackTab => {
            form.focus_prev();
            return None;
        }
        _ => {}
    }

    match form.focus() {
        SearchFocus::Input => match key.code {
            KeyCode::Enter => form.submit(),
            // Leave the text field; a second Esc quits.
            KeyCode::Esc => {
                form.set_focus(SearchFocus::Sector);
                None
            }
            _ => {
                edit_draft(form.search_term_mut(), key);
                None
            }
        },
        SearchFocus::Sector => match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                form.select_prev_sector();
                None
            }
            KeyCode::Down | KeyCode::Char('j' | ' ') => {
                form.select_next_sector();
                None
            }
            KeyCode::Backspace | KeyCode::Delete => {
                form.select_sector(None);
                None
            }
            KeyCode::Enter => form.submit(),
            KeyCode::Esc | KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        },
        SearchFocus::Submit => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => form.submit(),
            KeyCode::Esc | KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        },
        SearchFocus::Quick(index) => match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                form.set_focus(SearchFocus::Quick(index.saturating_sub(1)));
                None
            }
            KeyCode::Right | KeyCode::Char('l') => {
                form.set_focus(SearchFocus::Quick(index + 1));
                None
            }
            KeyCode::Enter | KeyCode::Char(' ') => form.quick_search(index),
            KeyCode::Esc | KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        },
    }
}

fn handle_results_key(view: &mut ResultsView, key: KeyEvent) -> Option<Action> {
    match view.focus() {
        ResultsFocus::Input => match key.code {
            KeyCode::Enter => view.submit_new_search(),
            KeyCode::Esc | KeyCode::Tab | KeyCode::BackTab => {
                view.set_focus(ResultsFocus::Cards);
                None
            }
            _ => {
                edit_draft(view.new_search_term_mut(), key);
                None
            }
        },
        ResultsFocus::Cards => match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                view.select_prev();
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                view.select_next();
                None
            }
            KeyCode::Char('c' | 'y') | KeyCode::Enter => view.copy_selected(),
            KeyCode::Char('/' | 'i') | KeyCode::Tab | KeyCode::BackTab => {
                view.set_focus(ResultsFocus::Input);
                None
            }
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Left | KeyCode::Char('b' | 'h') => {
                Some(Action::Back)
            }
            KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        },
    }
}

/// Line-editing keys shared by every text field.
fn edit_draft(draft: &mut DraftInput, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('w') if ctrl => draft.delete_word_backwards(),
        KeyCode::Char('u') if ctrl => draft.clear(),
        KeyCode::Char('a') if ctrl => draft.move_cursor_home(),
        KeyCode::Char('e') if ctrl => draft.move_cursor_end(),
        KeyCode::Char(c) if !ctrl => draft.enter_char(c),
        KeyCode::Backspace => draft.delete_char(),
        KeyCode::Delete => draft.delete_char_forward(),
        KeyCode::Left => draft.move_cursor_left(),
        KeyCode::Right => draft.move_cursor_right(),
        KeyCode::Home => draft.move_cursor_home(),
        KeyCode::End => draft.move_cursor_end(),
        _ => {}
    }
}
