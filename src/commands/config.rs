use anyhow::Result;
use eventdeck_core::config::DeckConfig;
use eventdeck_core::notify::{HookNotifier, RsvpNotifier};
use eventdeck_core::storage::FileStorage;
use owo_colors::OwoColorize;

pub fn run(config: &DeckConfig) -> Result<()> {
    println!("{} {}", "Config file:".dimmed(), DeckConfig::config_path()?.display());

    let storage = FileStorage::in_dir(&config.data_path());
    println!("{} {}", "Snapshot:   ".dimmed(), storage.path().display());

    if let Some(command) = &config.notify_command {
        let hook = HookNotifier::new(command);
        let state = if hook.is_ready() {
            "ready".green().to_string()
        } else {
            "not found in PATH".red().to_string()
        };
        println!("{} {} ({})", "Notify hook:".dimmed(), hook.command(), state);
    }

    println!();
    print!("{}", config.to_toml()?);

    Ok(())
}
