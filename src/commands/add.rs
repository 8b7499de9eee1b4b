use anyhow::{Context, Result};
use chrono::{DateTime, Duration, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use clap::Args;
use dialoguer::Input;
use eventdeck_core::config::DeckConfig;
use eventdeck_core::{EventCategory, EventType, NewEvent};
use owo_colors::OwoColorize;

use super::open_store;

const DEFAULT_DURATION: &str = "1h";

#[derive(Args)]
pub struct AddArgs {
    title: Option<String>,

    /// Start date/time (e.g. "tomorrow 6pm", "2025-03-20 15:00")
    #[arg(short, long)]
    start: Option<String>,

    /// End date/time (overrides --duration)
    #[arg(short, long)]
    end: Option<String>,

    /// Duration (e.g. "90m", "2h", "2days")
    #[arg(short, long)]
    duration: Option<String>,

    /// virtual, presential or hybrid
    #[arg(long = "type", default_value = "virtual")]
    event_type: EventType,

    #[arg(short, long, default_value = "webinar")]
    category: EventCategory,

    #[arg(long, default_value = "")]
    description: String,

    #[arg(long, default_value = "📅")]
    emoji: String,

    /// Venue for presential and hybrid events
    #[arg(short, long)]
    location: Option<String>,

    /// Join link for virtual and hybrid events
    #[arg(long)]
    url: Option<String>,

    /// Maximum number of attendees
    #[arg(long)]
    max: Option<u32>,

    /// IANA timezone (defaults to the system timezone)
    #[arg(long)]
    timezone: Option<String>,

    #[arg(long = "tag")]
    tags: Vec<String>,

    #[arg(long)]
    featured: bool,

    /// Recurrence pattern, e.g. "weekly"
    #[arg(long)]
    recurring: Option<String>,
}

pub fn run(config: &DeckConfig, args: AddArgs) -> Result<()> {
    let interactive = config.interactive && (args.title.is_none() || args.start.is_none());

    let title = match args.title {
        Some(t) => t,
        None if interactive => Input::<String>::new().with_prompt("  Title").interact_text()?,
        None => anyhow::bail!("An event title is required"),
    };

    let timezone = args.timezone.unwrap_or_else(system_timezone);
    let tz: Tz = timezone
        .parse()
        .map_err(|_| anyhow::anyhow!("Unknown timezone: \"{}\"", timezone))?;

    let start_date = match args.start {
        Some(s) => parse_datetime(&s, tz)?,
        None if interactive => prompt_with_retry("  When?", |input| parse_datetime(input, tz))?,
        None => anyhow::bail!("A start time is required (--start)"),
    };

    let end_date = match (args.end, args.duration) {
        (Some(end), _) => parse_datetime(&end, tz)?,
        (None, Some(duration)) => apply_duration(start_date, &duration)?,
        (None, None) => apply_duration(start_date, DEFAULT_DURATION)?,
    };

    if let Some(link) = &args.url {
        url::Url::parse(link).with_context(|| format!("Invalid join link: \"{}\"", link))?;
    }

    let new_event = NewEvent {
        title,
        description: args.description,
        event_type: args.event_type,
        category: args.category,
        cover_emoji: args.emoji,
        start_date,
        end_date,
        timezone,
        location: args.location.filter(|l| !l.is_empty()),
        virtual_url: args.url,
        max_attendees: args.max,
        speakers: Vec::new(),
        tags: args.tags,
        is_featured: args.featured,
        is_recurring: args.recurring.is_some(),
        recurring_pattern: args.recurring,
    };

    let mut store = open_store(config)?;
    let event = store.add_event(new_event);

    if interactive {
        println!();
    }
    println!("{}", format!("  Created: {}", event.title).green());
    println!("  {}", format!("id: {}", event.id).dimmed());

    Ok(())
}

fn system_timezone() -> String {
    iana_time_zone::get_timezone().unwrap_or_else(|_| "UTC".to_string())
}

fn prompt_with_retry<F>(prompt: &str, parse: F) -> Result<DateTime<Utc>>
where
    F: Fn(&str) -> Result<DateTime<Utc>>,
{
    loop {
        let input: String = Input::new().with_prompt(prompt).interact_text()?;
        match parse(&input) {
            Ok(result) => return Ok(result),
            Err(e) => {
                eprintln!("  {}", e.to_string().red());
            }
        }
    }
}

/// Parse a wall-clock date/time in `tz`: "YYYY-MM-DD HH:MM", RFC 3339,
/// or anything fuzzydate understands ("tomorrow 6pm").
fn parse_datetime(input: &str, tz: Tz) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.with_timezone(&Utc));
    }

    let naive = NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M"))
        .or_else(|_| fuzzydate::parse(input))
        .map_err(|_| anyhow::anyhow!("Could not parse date/time: \"{}\"", input))?;

    localize(naive, tz)
}

fn localize(naive: NaiveDateTime, tz: Tz) -> Result<DateTime<Utc>> {
    tz.from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| anyhow::anyhow!("{} does not exist in {}", naive, tz))
}

fn apply_duration(start: DateTime<Utc>, input: &str) -> Result<DateTime<Utc>> {
    let std_dur = humantime::parse_duration(input)
        .with_context(|| format!("Could not parse duration: \"{}\"", input))?;
    let chrono_dur = Duration::from_std(std_dur).context("Duration too large")?;
    Ok(start + chrono_dur)
}
