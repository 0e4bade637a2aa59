//! UI state types for the TUI layer.
//!
//! Pure data types with no IO, no async, no ratatui dependency.
//! Used by both the engine (state ownership) and tui (rendering/input).

mod animation;
mod input;
mod view_state;

pub use animation::{DelayTimer, IntervalTimer};
pub use input::DraftInput;
pub use view_state::UiOptions;
