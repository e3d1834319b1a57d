//! Plain-text rendering of a [`GridLayout`].
//!
//! Each call renders from scratch: the output depends only on the layout
//! passed in. A run leader prints its title once and the rows it covers
//! print a continuation bar.

use chrono::NaiveTime;
use weekgrid_core::storage::DisplayConfig;
use weekgrid_core::{classify, CellView, Day, GridLayout, ProximityLevel, TimeSlot};

const CONTINUATION: &str = "│";
const TIME_WIDTH: usize = 5;

pub struct RenderOptions {
    pub show_time_column: bool,
    pub color_output: bool,
    pub cell_width: usize,
    pub day: Option<Day>,
    pub compact: bool,
    /// Mark the current and next slot in the time column.
    pub now: Option<NaiveTime>,
    /// Mark this day's column header.
    pub today: Option<Day>,
}

impl RenderOptions {
    pub fn from_config(display: &DisplayConfig, day: Option<Day>, compact: bool) -> Self {
        Self {
            show_time_column: display.show_time_column,
            color_output: display.color_output,
            cell_width: display.cell_width.max(1),
            day,
            compact,
            now: None,
            today: None,
        }
    }
}

pub fn render_grid(layout: &GridLayout, opts: &RenderOptions) -> String {
    let columns: Vec<_> = layout
        .columns
        .iter()
        .filter(|c| opts.day.map_or(true, |d| d == c.day))
        .collect();

    let mut out = String::new();

    if opts.show_time_column {
        out.push_str(&" ".repeat(time_column_width(opts)));
    }
    let header: Vec<String> = columns
        .iter()
        .map(|c| pad(&day_label(c.day, opts), opts.cell_width))
        .collect();
    out.push_str(header.join(" ").trim_end());
    out.push('\n');

    for (row, slot) in layout.slots.iter().enumerate() {
        let cells: Vec<&CellView> = columns.iter().map(|c| &c.cells[row]).collect();
        if opts.compact && cells.iter().all(|c| !c.has_event) {
            continue;
        }

        let mut line = String::new();
        if opts.show_time_column {
            line.push_str(&time_label(*slot, opts));
        }
        let rendered: Vec<String> = cells.iter().map(|c| render_cell(c, opts)).collect();
        line.push_str(&rendered.join(" "));
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

fn day_label(day: Day, opts: &RenderOptions) -> String {
    if opts.today == Some(day) {
        format!("*{}", day.label())
    } else {
        day.label().to_string()
    }
}

fn time_column_width(opts: &RenderOptions) -> usize {
    TIME_WIDTH + if opts.now.is_some() { 2 } else { 1 }
}

fn time_label(slot: TimeSlot, opts: &RenderOptions) -> String {
    let Some(now) = opts.now else {
        return format!("{slot} ");
    };
    let marker = match classify(now, slot) {
        ProximityLevel::Current => '*',
        ProximityLevel::Next => '>',
        _ => ' ',
    };
    format!("{slot}{marker} ")
}

fn render_cell(cell: &CellView, opts: &RenderOptions) -> String {
    if cell.suppressed {
        return pad(CONTINUATION, opts.cell_width);
    }
    let Some(title) = cell.title.as_deref() else {
        return pad("", opts.cell_width);
    };
    let text = pad(&truncate(title, opts.cell_width), opts.cell_width);
    match cell.color {
        Some(color) if opts.color_output => {
            format!("\x1b[{}m{text}\x1b[0m", color.ansi_code())
        }
        _ => text,
    }
}

fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        return s.to_string();
    }
    let mut t: String = s.chars().take(width.saturating_sub(1)).collect();
    t.push('…');
    t
}

fn pad(s: &str, width: usize) -> String {
    let len = s.chars().count();
    if len >= width {
        s.to_string()
    } else {
        format!("{s}{}", " ".repeat(width - len))
    }
}
