mod commands;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use eventdeck_core::config::DeckConfig;
use eventdeck_core::view::Tab;
use eventdeck_core::{EventCategory, EventType, RsvpStatus};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "eventdeck")]
#[command(about = "Browse community events and manage your RSVPs")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the dashboard: tabs, filters and event cards
    List {
        /// upcoming, my-events or featured
        #[arg(short, long, default_value = "upcoming")]
        tab: Tab,

        /// Only this event type (virtual, presential, hybrid)
        #[arg(long = "type")]
        event_type: Option<EventType>,

        /// Only this category (webinar, workshop, meetup, ...)
        #[arg(short, long)]
        category: Option<EventCategory>,
    },
    /// Show the full details of an event
    Show { id: String },
    /// Set your RSVP for an event (asks when no status is given)
    Rsvp {
        id: String,

        /// going, interested or not-going
        status: Option<RsvpStatus>,

        /// Reminder on or off; a bare --reminder means on (default: on when going)
        #[arg(long, num_args = 0..=1, default_missing_value = "true")]
        reminder: Option<bool>,
    },
    /// Cancel your registration for an event
    Cancel { id: String },
    /// Toggle the reminder for an event you RSVP'd to
    Remind { id: String },
    /// Open the join link of a virtual or hybrid event
    Join { id: String },
    /// Event counts by type, category and time window
    Stats,
    /// Create a new event
    Add(commands::add::AddArgs),
    /// Replace all events and RSVPs with the demo data
    Reset {
        /// Don't ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// Show the configuration in use
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = DeckConfig::load()?;
    init_tracing(&config);

    match cli.command {
        Commands::List {
            tab,
            event_type,
            category,
        } => commands::list::run(&config, tab, event_type, category),
        Commands::Show { id } => commands::show::run(&config, &id),
        Commands::Rsvp {
            id,
            status,
            reminder,
        } => commands::rsvp::run(&config, &id, status, reminder),
        Commands::Cancel { id } => commands::rsvp::cancel(&config, &id),
        Commands::Remind { id } => commands::remind::run(&config, &id),
        Commands::Join { id } => commands::join::run(&config, &id),
        Commands::Stats => commands::stats::run(&config),
        Commands::Add(args) => commands::add::run(&config, args),
        Commands::Reset { yes } => commands::reset::run(&config, yes),
        Commands::Config => commands::config::run(&config),
    }
}

/// Log to stderr. RUST_LOG wins over the configured level.
fn init_tracing(config: &DeckConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rsvp_args(argv: &[&str]) -> (String, Option<RsvpStatus>, Option<bool>) {
        match Cli::try_parse_from(argv).unwrap().command {
            Commands::Rsvp { id, status, reminder } => (id, status, reminder),
            _ => panic!("expected the rsvp command"),
        }
    }

    #[test]
    fn bare_reminder_flag_turns_reminder_on() {
        let (id, status, reminder) = rsvp_args(&["eventdeck", "rsvp", "evt-5", "going", "--reminder"]);
        assert_eq!(id, "evt-5");
        assert_eq!(status, Some(RsvpStatus::Going));
        assert_eq!(reminder, Some(true));
    }

    #[test]
    fn reminder_flag_accepts_explicit_value() {
        let (_, _, reminder) = rsvp_args(&["eventdeck", "rsvp", "evt-5", "going", "--reminder=false"]);
        assert_eq!(reminder, Some(false));

        let (_, _, reminder) = rsvp_args(&["eventdeck", "rsvp", "evt-5", "--reminder", "true"]);
        assert_eq!(reminder, Some(true));
    }

    #[test]
    fn reminder_defaults_to_unset() {
        let (_, status, reminder) = rsvp_args(&["eventdeck", "rsvp", "evt-5"]);
        assert_eq!(status, None);
        assert_eq!(reminder, None);
    }

    #[test]
    fn list_parses_tab_and_filters() {
        let cli = Cli::try_parse_from(["eventdeck", "list", "--tab", "my-events", "--type", "hybrid"]).unwrap();
        match cli.command {
            Commands::List { tab, event_type, category } => {
                assert_eq!(tab, Tab::MyEvents);
                assert_eq!(event_type, Some(EventType::Hybrid));
                assert_eq!(category, None);
            }
            _ => panic!("expected the list command"),
        }
    }
}
