use chrono::Local;
use clap::Subcommand;
use weekgrid_core::proximity::today;
use weekgrid_core::{CellId, Color, Config, Day, EditOutcome};

use crate::common::{open_scheduler, print_json, CliResult};
use crate::render::{self, RenderOptions};

#[derive(Subcommand)]
pub enum GridAction {
    /// Print the weekly grid
    Show {
        /// Only this day (sun, mon, ..., sat)
        #[arg(long)]
        day: Option<Day>,
        /// Print the render layout as JSON
        #[arg(long)]
        json: bool,
        /// Skip rows with no entries
        #[arg(long)]
        compact: bool,
    },
    /// Print the entry at a cell (e.g. "mon-09:00")
    Get {
        cell: CellId,
        #[arg(long)]
        json: bool,
    },
    /// Set an entry; an empty title clears the cell
    Set {
        cell: CellId,
        title: String,
        /// Entry color (defaults to grid.default_color)
        #[arg(long)]
        color: Option<Color>,
        /// Fill the rectangle from CELL to this cell
        #[arg(long)]
        through: Option<CellId>,
    },
    /// Remove the entry at a cell
    Remove { cell: CellId },
    /// Delete every entry in the rectangle between two cells
    Delete { from: CellId, to: CellId },
    /// Write the loaded grid back to storage, dropping entries that no longer validate
    Save,
    /// Remove all entries
    Clear {
        /// Confirm clearing the whole grid
        #[arg(long)]
        yes: bool,
    },
}

pub fn run(action: GridAction) -> CliResult {
    match action {
        GridAction::Show { day, json, compact } => {
            let scheduler = open_scheduler()?;
            let layout = scheduler.layout();
            if json {
                match day {
                    Some(day) => print_json(layout.column(day))?,
                    None => print_json(&layout)?,
                }
            } else {
                let config = Config::load_or_default();
                let mut opts = RenderOptions::from_config(&config.display, day, compact);
                let now = Local::now();
                opts.now = Some(now.time());
                opts.today = Some(today(now.date_naive()));
                print!("{}", render::render_grid(&layout, &opts));
            }
        }
        GridAction::Get { cell, json } => {
            let scheduler = open_scheduler()?;
            let event = scheduler.event_at(&cell);
            if json {
                print_json(&event)?;
            } else {
                match event {
                    Some(event) => println!("{}  {} ({})", cell, event.title, event.color),
                    None => println!("{cell}  (empty)"),
                }
            }
        }
        GridAction::Set {
            cell,
            title,
            color,
            through,
        } => {
            let color = color.unwrap_or_else(|| Config::load_or_default().grid.default_color);
            let mut scheduler = open_scheduler()?;
            match through {
                Some(to) => {
                    scheduler.select_range(cell, to);
                    let filled = scheduler.fill_selection(&title, color)?;
                    println!("filled {filled} cells");
                }
                None => match scheduler.edit(cell, &title, color)? {
                    EditOutcome::Saved => println!("saved {cell}"),
                    EditOutcome::Removed => println!("removed {cell}"),
                },
            }
        }
        GridAction::Remove { cell } => {
            let mut scheduler = open_scheduler()?;
            match scheduler.remove(&cell)? {
                Some(_) => println!("removed {cell}"),
                None => println!("{cell} was already empty"),
            }
        }
        GridAction::Delete { from, to } => {
            let mut scheduler = open_scheduler()?;
            let selected = scheduler.select_range(from, to).len();
            let removed = scheduler.delete_selected()?;
            println!("deleted {removed} entries ({selected} cells selected)");
        }
        GridAction::Save => {
            let scheduler = open_scheduler()?;
            scheduler.save()?;
            println!("saved {} entries", scheduler.store().len());
        }
        GridAction::Clear { yes } => {
            if !yes {
                return Err("refusing to clear the grid without --yes".into());
            }
            let mut scheduler = open_scheduler()?;
            let removed = scheduler.clear_all()?;
            println!("cleared {removed} entries");
        }
    }
    Ok(())
}
