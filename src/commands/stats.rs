use anyhow::Result;
use chrono::Utc;
use eventdeck_core::config::DeckConfig;
use eventdeck_core::{EventCategory, EventType};
use owo_colors::OwoColorize;

use super::open_store;

pub fn run(config: &DeckConfig) -> Result<()> {
    let store = open_store(config)?;
    let stats = store.stats_at(Utc::now());

    println!("{}", "📊 Resumen de Eventos".bold());
    println!("   {:<14} {}", "Total", stats.total.to_string().yellow().bold());
    println!("   {:<14} {}", "Próximos", stats.upcoming);
    println!("   {:<14} {}", "Esta semana", stats.this_week.to_string().cyan());
    println!("   {:<14} {}", "Este mes", stats.this_month.to_string().green());

    println!();
    println!("{}", "Tipo".dimmed());
    for event_type in EventType::ALL {
        let info = event_type.info();
        println!("   {} {:<12} {}", info.emoji, info.label, stats.count_for_type(event_type));
    }

    println!();
    println!("{}", "Categoría".dimmed());
    for category in EventCategory::ALL {
        let info = category.info();
        let count = stats.count_for_category(category);
        let line = format!("   {} {:<13} {}", info.emoji, info.label, count);
        if count == 0 {
            println!("{}", line.dimmed());
        } else {
            println!("{}", line);
        }
    }

    Ok(())
}
