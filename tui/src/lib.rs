//! TUI rendering for Opportunity Finder using ratatui.

mod clipboard;
mod input;
mod theme;

pub use clipboard::SystemClipboard;
pub use input::{InputPump, apply_event, handle_events};
pub use theme::{Glyphs, Palette, bounce_index, glyphs, palette, styles};

use std::mem;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph},
};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use finder_engine::{
    App, DraftInput, Opportunity, ResultsFocus, ResultsView, Screen, SearchFocus, SearchForm,
    Sector, UiOptions,
};

const SEARCH_COLUMN_WIDTH: u16 = 72;
const TWO_COLUMN_MIN_WIDTH: u16 = 96;
const NEW_SEARCH_FIELD_WIDTH: u16 = 40;

const SEARCH_PLACEHOLDER: &str = "Enter sector (e.g., healthcare, finance...)";
const SECTOR_PLACEHOLDER: &str = "Popular Searches";
const NEW_SEARCH_PLACEHOLDER: &str = "Try another search...";

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);
    // Clear with background color
    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    match app.screen() {
        Screen::Search(form) => draw_search(frame, form, options, &palette, &glyphs),
        Screen::Results(view) => {
            draw_results(frame, view, app.tick_count(), options, &palette, &glyphs);
        }
    }
}

// ============================================================================
// Search screen
// ============================================================================

fn draw_search(
    frame: &mut Frame,
    form: &SearchForm,
    options: UiOptions,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let column = centered_column(frame.area(), SEARCH_COLUMN_WIDTH);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Title
            Constraint::Length(1), // Tagline
            Constraint::Length(1), // Spacer
            Constraint::Length(3), // Sector field
            Constraint::Length(3), // Popular sector selector
            Constraint::Length(3), // Submit
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Quick label
            Constraint::Length(2), // Quick buttons
            Constraint::Min(0),
            Constraint::Length(1), // Key hints
            Constraint::Length(1), // Footer
        ])
        .split(column);

    let title = Paragraph::new(Line::from(Span::styled(
        "Opportunity Finder",
        styles::title(palette),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[1]);

    let tagline = Paragraph::new(Line::from(Span::styled(
        "Discover business opportunities from real pain points",
        Style::default().fg(palette.text_secondary),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(tagline, chunks[2]);

    let input_focused = form.focus() == SearchFocus::Input;
    draw_text_field(
        frame,
        chunks[4],
        form.search_term(),
        SEARCH_PLACEHOLDER,
        input_focused,
        palette,
    );

    draw_sector_selector(
        frame,
        chunks[5],
        form.selected_sector(),
        form.focus() == SearchFocus::Sector,
        palette,
        glyphs,
    );

    let submit_focused = form.focus() == SearchFocus::Submit;
    let submit = Paragraph::new(Line::from(Span::raw("Find Opportunities")))
        .alignment(Alignment::Center)
        .style(styles::button(palette, submit_focused, form.can_submit()))
        .block(Block::default().padding(Padding::vertical(1)));
    frame.render_widget(submit, chunks[6]);

    let quick_label = Paragraph::new(Line::from(Span::styled(
        "Or try these popular sectors:",
        styles::muted(palette),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(quick_label, chunks[8]);

    let focused_quick = match form.focus() {
        SearchFocus::Quick(index) => Some(index),
        _ => None,
    };
    let quick_lines = quick_button_lines(chunks[9].width, focused_quick, palette);
    frame.render_widget(
        Paragraph::new(quick_lines).alignment(Alignment::Center),
        chunks[9],
    );

    let hints = Paragraph::new(Line::from(search_hints(form.focus(), palette)))
        .alignment(Alignment::Center);
    frame.render_widget(hints, chunks[11]);

    let copyright = if options.ascii_only { "(c)" } else { "©" };
    let footer = Paragraph::new(Line::from(Span::styled(
        format!("{copyright} 2024 Opportunity Finder. All rights reserved."),
        styles::muted(palette),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(footer, chunks[12]);
}

fn draw_sector_selector(
    frame: &mut Frame,
    area: Rect,
    selected: Option<Sector>,
    focused: bool,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let (label, label_style) = match selected {
        Some(sector) => (
            sector.label(),
            Style::default().fg(palette.text_primary),
        ),
        None => (SECTOR_PLACEHOLDER, styles::muted(palette)),
    };
    let inner_width = area.width.saturating_sub(4) as usize;
    let filler = inner_width.saturating_sub(label.width() + glyphs.dropdown.width());
    let line = Line::from(vec![
        Span::styled(label, label_style),
        Span::raw(" ".repeat(filler)),
        Span::styled(glyphs.dropdown, styles::field_border(palette, focused)),
    ]);

    let selector = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(styles::field_border(palette, focused))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(selector, area);
}

/// Quick-access buttons, wrapped onto a second line when they do not fit.
fn quick_button_lines(
    width: u16,
    focused: Option<usize>,
    palette: &Palette,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut used = 0usize;

    for (index, sector) in Sector::quick().iter().enumerate() {
        let label = format!(" {} ", sector.label());
        let label_width = label.width();
        if !spans.is_empty() && used + 1 + label_width > width as usize {
            lines.push(Line::from(mem::take(&mut spans)));
            used = 0;
        }
        if !spans.is_empty() {
            spans.push(Span::raw(" "));
            used += 1;
        }
        let style = if focused == Some(index) {
            styles::chip(palette, true)
        } else {
            styles::tag(palette)
        };
        spans.push(Span::styled(label, style));
        used += label_width;
    }
    if !spans.is_empty() {
        lines.push(Line::from(spans));
    }
    lines
}

fn search_hints(focus: SearchFocus, palette: &Palette) -> Vec<Span<'static>> {
    let mut hints = vec![
        Span::styled("Tab", styles::key_highlight(palette)),
        Span::styled(" next  ", styles::key_hint(palette)),
        Span::styled("Enter", styles::key_highlight(palette)),
        Span::styled(" search  ", styles::key_hint(palette)),
    ];
    match focus {
        SearchFocus::Sector => {
            hints.push(Span::styled("↑↓", styles::key_highlight(palette)));
            hints.push(Span::styled(" choose  ", styles::key_hint(palette)));
        }
        SearchFocus::Quick(_) => {
            hints.push(Span::styled("←→", styles::key_highlight(palette)));
            hints.push(Span::styled(" move  ", styles::key_hint(palette)));
        }
        SearchFocus::Input | SearchFocus::Submit => {
            hints.push(Span::styled("Alt+1-6", styles::key_highlight(palette)));
            hints.push(Span::styled(" quick  ", styles::key_hint(palette)));
        }
    }
    hints.push(Span::styled("Esc", styles::key_highlight(palette)));
    let esc_label = if focus == SearchFocus::Input {
        " leave field "
    } else {
        " quit "
    };
    hints.push(Span::styled(esc_label, styles::key_hint(palette)));
    hints
}

// ============================================================================
// Results screen
// ============================================================================

fn draw_results(
    frame: &mut Frame,
    view: &ResultsView,
    tick: usize,
    options: UiOptions,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(1)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(1), // Query line
            Constraint::Length(1), // Spacer
            Constraint::Min(1),    // Body
            Constraint::Length(1), // Key hints
        ])
        .split(area);

    draw_results_header(frame, view, chunks[0], palette, glyphs);

    let query_line = Paragraph::new(Line::from(vec![
        Span::styled("Showing results for: ", styles::muted(palette)),
        Span::styled(
            view.query().to_string(),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    frame.render_widget(query_line, chunks[1]);

    if view.is_loading() {
        draw_loading(frame, view, chunks[3], tick, options, palette, glyphs);
    } else {
        draw_cards(frame, view, chunks[3], palette, glyphs);
    }

    let hints = Paragraph::new(Line::from(results_hints(view, palette)));
    frame.render_widget(hints, chunks[4]);
}

fn draw_results_header(
    frame: &mut Frame,
    view: &ResultsView,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let field_width = NEW_SEARCH_FIELD_WIDTH.min(area.width.saturating_sub(12));
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(field_width)])
        .split(area);

    let back = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("{} Back", glyphs.back),
            Style::default().fg(palette.text_secondary),
        ),
        Span::styled("   Opportunity Finder", styles::title(palette)),
    ]))
    .block(Block::default().padding(Padding::vertical(1)));
    frame.render_widget(back, columns[0]);

    draw_text_field(
        frame,
        columns[1],
        view.new_search_term(),
        NEW_SEARCH_PLACEHOLDER,
        view.focus() == ResultsFocus::Input,
        palette,
    );
}

fn draw_loading(
    frame: &mut Frame,
    view: &ResultsView,
    area: Rect,
    tick: usize,
    options: UiOptions,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let raised = bounce_index(tick, options);
    let mut dots = Vec::with_capacity(5);
    for index in 0..3 {
        if index > 0 {
            dots.push(Span::raw(" "));
        }
        let (glyph, style) = if raised == Some(index) {
            (
                glyphs.dot_raised,
                Style::default()
                    .fg(palette.primary)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            (glyphs.dot, Style::default().fg(palette.primary_dim))
        };
        dots.push(Span::styled(glyph, style));
    }

    let lines = vec![
        Line::from(Span::styled(
            view.session().current_stage().text(),
            Style::default()
                .fg(palette.text_primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(dots),
    ];

    let top = area.height.saturating_sub(lines.len() as u16) / 2;
    let [_, centered] = Layout::vertical([Constraint::Length(top), Constraint::Min(0)]).areas(area);
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        centered,
    );
}

fn draw_cards(
    frame: &mut Frame,
    view: &ResultsView,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let results = view.results();
    let query = view.query().as_str();

    let heading = vec![
        Line::from(Span::styled(
            format!("Found {} opportunities in {query}", results.len()),
            styles::title(palette),
        )),
        Line::from(Span::styled(
            "Real pain points with AI-generated solutions",
            styles::muted(palette),
        )),
    ];
    let [heading_area, _, grid_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(area);
    frame.render_widget(Paragraph::new(heading), heading_area);

    if results.is_empty() || grid_area.height == 0 {
        return;
    }

    let columns = if grid_area.width >= TWO_COLUMN_MIN_WIDTH {
        2
    } else {
        1
    };
    let card_width = grid_area.width.saturating_sub(columns as u16 - 1) / columns as u16;
    let highlight = (view.focus() == ResultsFocus::Cards).then_some(view.selected());

    let cards: Vec<Vec<Line<'static>>> = results
        .iter()
        .enumerate()
        .map(|(index, opportunity)| {
            card_lines(
                opportunity,
                card_width.saturating_sub(4) as usize,
                highlight == Some(index),
                palette,
                glyphs,
            )
        })
        .collect();

    // Each grid row is as tall as its tallest card, plus borders.
    let row_heights: Vec<u16> = cards
        .chunks(columns)
        .map(|row| row.iter().map(Vec::len).max().unwrap_or(0) as u16 + 2)
        .collect();

    let first_row = first_visible_row(&row_heights, view.selected() / columns, grid_area.height);

    let mut y = grid_area.y;
    let bottom = grid_area.y + grid_area.height;
    for (row_index, row) in cards.chunks(columns).enumerate().skip(first_row) {
        if y >= bottom {
            break;
        }
        let height = row_heights[row_index].min(bottom - y);
        for (column, lines) in row.iter().enumerate() {
            let index = row_index * columns + column;
            let card_area = Rect::new(
                grid_area.x + column as u16 * (card_width + 1),
                y,
                card_width,
                height,
            );
            let selected = highlight == Some(index);
            let border_style = if selected {
                Style::default().fg(palette.primary)
            } else {
                Style::default().fg(palette.bg_border)
            };
            let card = Paragraph::new(lines.clone()).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(border_style)
                    .style(Style::default().bg(palette.bg_panel))
                    .padding(Padding::horizontal(1)),
            );
            frame.render_widget(card, card_area);
        }
        y = y.saturating_add(height);
    }
}

/// Scroll so the row holding the selection stays on screen.
fn first_visible_row(row_heights: &[u16], selected_row: usize, available: u16) -> usize {
    let mut first = 0;
    while first < selected_row {
        let span: u32 = row_heights[first..=selected_row]
            .iter()
            .map(|h| u32::from(*h))
            .sum();
        if span <= u32::from(available) {
            break;
        }
        first += 1;
    }
    first
}

fn card_lines(
    opportunity: &Opportunity,
    width: usize,
    selected: bool,
    palette: &Palette,
    glyphs: &Glyphs,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for row in wrap_words(&opportunity.problem, width) {
        lines.push(Line::from(Span::styled(row, styles::title(palette))));
    }
    lines.push(Line::from(""));
    for row in wrap_words(&opportunity.solution, width) {
        lines.push(Line::from(Span::styled(
            row,
            Style::default().fg(palette.text_secondary),
        )));
    }
    lines.push(Line::from(""));

    let mut tags = Vec::new();
    for tag in &opportunity.tags {
        if !tags.is_empty() {
            tags.push(Span::raw(" "));
        }
        tags.push(Span::styled(format!(" {tag} "), styles::tag(palette)));
    }
    lines.push(Line::from(tags));
    lines.push(Line::from(""));

    let metrics = opportunity.metrics;
    let mut footer = vec![
        Span::styled(
            format!("{} {}", glyphs.upvotes, metrics.upvotes),
            Style::default().fg(palette.red),
        ),
        Span::raw("  "),
        Span::styled(
            format!("{} {}", glyphs.comments, metrics.comments),
            Style::default().fg(palette.blue),
        ),
        Span::raw("  "),
        Span::styled(
            format!("{} {}%", glyphs.relevance, metrics.relevance_percent()),
            Style::default().fg(palette.green),
        ),
    ];
    if selected {
        footer.push(Span::raw("  "));
        footer.push(Span::styled(
            format!("{} Copy", glyphs.copy),
            styles::key_highlight(palette),
        ));
    }
    lines.push(Line::from(footer));
    lines
}

/// Greedy word wrap by display width. Words wider than `width` are split.
fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.width()
        } else {
            current.width() + 1 + word.width()
        };
        if needed <= width {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            continue;
        }
        if !current.is_empty() {
            rows.push(mem::take(&mut current));
        }
        for grapheme in word.graphemes(true) {
            if current.width() + grapheme.width() > width && !current.is_empty() {
                rows.push(mem::take(&mut current));
            }
            current.push_str(grapheme);
        }
    }
    if !current.is_empty() || rows.is_empty() {
        rows.push(current);
    }
    rows
}

fn results_hints(view: &ResultsView, palette: &Palette) -> Vec<Span<'static>> {
    let pairs: &[(&str, &str)] = match view.focus() {
        ResultsFocus::Input => &[("Enter", " search  "), ("Esc", " done ")],
        ResultsFocus::Cards if view.is_loading() => {
            &[("/", " new search  "), ("Esc", " back  "), ("q", " quit ")]
        }
        ResultsFocus::Cards => &[
            ("↑↓", " select  "),
            ("c", " copy  "),
            ("/", " new search  "),
            ("Esc", " back  "),
            ("q", " quit "),
        ],
    };
    pairs
        .iter()
        .flat_map(|(key, label)| {
            [
                Span::styled(*key, styles::key_highlight(palette)),
                Span::styled(*label, styles::key_hint(palette)),
            ]
        })
        .collect()
}

// ============================================================================
// Shared widgets
// ============================================================================

fn centered_column(area: Rect, max_width: u16) -> Rect {
    let width = area.width.saturating_sub(4).min(max_width).max(1).min(area.width);
    let x = area.x + area.width.saturating_sub(width) / 2;
    Rect::new(x, area.y, width, area.height)
}

/// Single-line bordered text field with a placeholder and a cursor when focused.
fn draw_text_field(
    frame: &mut Frame,
    area: Rect,
    draft: &DraftInput,
    placeholder: &str,
    focused: bool,
    palette: &Palette,
) {
    let inner_width = area.width.saturating_sub(4);
    let (line, cursor_col) = if draft.text().is_empty() {
        (
            Line::from(Span::styled(placeholder.to_string(), styles::muted(palette))),
            0,
        )
    } else {
        let (visible, cursor_col) = visible_field_text(draft, inner_width as usize);
        (
            Line::from(Span::styled(
                visible,
                Style::default().fg(palette.text_primary),
            )),
            cursor_col,
        )
    };

    let field = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(styles::field_border(palette, focused))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(field, area);

    if focused && area.height >= 3 && inner_width > 0 {
        let cursor_x = area.x.saturating_add(2).saturating_add(cursor_col as u16);
        let cursor_y = area.y.saturating_add(1);
        frame.set_cursor_position((cursor_x, cursor_y));
    }
}

/// Text scrolled horizontally so the cursor stays inside `width` columns.
fn visible_field_text(draft: &DraftInput, width: usize) -> (String, usize) {
    let cursor_width = draft.text_before_cursor().width();
    let skip = cursor_width.saturating_sub(width.saturating_sub(1));

    let mut skipped = 0usize;
    let mut visible = String::new();
    for grapheme in draft.text().graphemes(true) {
        if skipped < skip {
            skipped += grapheme.width();
            continue;
        }
        visible.push_str(grapheme);
    }
    (visible, cursor_width.saturating_sub(skipped))
}
