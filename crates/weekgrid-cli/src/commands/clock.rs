use std::time::{Duration, Instant};

use chrono::{Local, NaiveDate, NaiveTime, Timelike};
use clap::Args;
use serde::Serialize;
use weekgrid_core::proximity::{classify_all, today};
use weekgrid_core::{CellId, Config, Day, ProximityLevel, Scheduler, TimeSlot};

use crate::common::{open_scheduler, CliResult};

#[derive(Serialize)]
struct NearbySlot<'a> {
    slot: TimeSlot,
    level: ProximityLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
}

#[derive(Args)]
pub struct NowArgs {
    /// Use this wall-clock time (HH:MM) instead of now
    #[arg(long)]
    at: Option<String>,
    /// Day column to read titles from (defaults to today)
    #[arg(long)]
    day: Option<Day>,
    #[arg(long)]
    json: bool,
    /// Keep running and reprint on every tick
    #[arg(long, conflicts_with = "at")]
    watch: bool,
}

pub fn run(args: NowArgs) -> CliResult {
    let scheduler = open_scheduler()?;
    let day_for = |date: NaiveDate| args.day.unwrap_or_else(|| today(date));

    if let Some(at) = &args.at {
        let now = NaiveTime::parse_from_str(at, "%H:%M")
            .map_err(|e| format!("invalid time {at:?}: {e}"))?;
        return print_nearby(&scheduler, day_for(Local::now().date_naive()), now, args.json);
    }

    let current = Local::now();
    print_nearby(&scheduler, day_for(current.date_naive()), current.time(), args.json)?;
    if !args.watch {
        return Ok(());
    }

    let ticks = Config::load_or_default().tick_schedule();
    tracing::debug!(?ticks, "watching current time");
    let mut last_render = Instant::now();
    let mut last_second = current.time().num_seconds_from_midnight();
    loop {
        std::thread::sleep(Duration::from_millis(250));
        let current = Local::now();
        let second = current.time().num_seconds_from_midnight();
        if second == last_second {
            continue;
        }
        last_second = second;

        if last_render.elapsed() >= ticks.tick || ticks.should_refresh(current.time()) {
            last_render = Instant::now();
            println!();
            print_nearby(&scheduler, day_for(current.date_naive()), current.time(), args.json)?;
        }
    }
}

fn print_nearby(scheduler: &Scheduler, day: Day, now: NaiveTime, json: bool) -> CliResult {
    let nearby: Vec<NearbySlot<'_>> = classify_all(now)
        .into_iter()
        .filter(|(_, level)| *level != ProximityLevel::None)
        .map(|(slot, level)| NearbySlot {
            slot,
            level,
            title: scheduler
                .event_at(&CellId::new(day, slot))
                .map(|e| e.title.as_str()),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&nearby)?);
        return Ok(());
    }

    println!("{} {}", day.label(), now.format("%H:%M"));
    for entry in &nearby {
        let line = format!(
            "{}  {:<8}{}",
            entry.slot,
            entry.level.as_str(),
            entry.title.unwrap_or("")
        );
        println!("{}", line.trim_end());
    }
    Ok(())
}
