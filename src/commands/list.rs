use anyhow::Result;
use chrono::Utc;
use eventdeck_core::config::DeckConfig;
use eventdeck_core::view::dashboard::{EMPTY_HINT, EMPTY_TITLE};
use eventdeck_core::view::{Dashboard, Tab};
use eventdeck_core::{EventCategory, EventType};
use owo_colors::OwoColorize;

use super::open_store;
use crate::render::Render;

pub fn run(
    config: &DeckConfig,
    tab: Tab,
    event_type: Option<EventType>,
    category: Option<EventCategory>,
) -> Result<()> {
    let store = open_store(config)?;
    let now = Utc::now();

    let mut dashboard = Dashboard::new();
    dashboard.set_tab(tab);
    dashboard.set_type_filter(event_type);
    dashboard.set_category_filter(category);

    let summary = dashboard.summary(&store, now);

    println!(
        "🎉 {}  {}",
        "NewCool Events".bold().green(),
        format!(
            "{} esta semana • {} este mes",
            summary.this_week, summary.this_month
        )
        .dimmed()
    );
    println!();

    let tabs: Vec<String> = dashboard.tabs(&store, now).iter().map(|t| t.render()).collect();
    println!("   {}", tabs.join("   "));
    println!();
    println!("{}", dashboard.filter_bar().render());
    println!();

    let cards = dashboard.cards(&store, now);
    if cards.is_empty() {
        println!("   📭 {}", EMPTY_TITLE);
        println!("   {}", EMPTY_HINT.dimmed());
    } else {
        for (i, card) in cards.iter().enumerate() {
            println!("{}", card.render());
            if i < cards.len() - 1 {
                println!();
            }
        }
    }

    println!();
    println!("{}", summary.render());

    Ok(())
}
