use colored::Colorize;

use crate::cli::ConfigCommands;
use crate::config::Config;

pub fn run(command: ConfigCommands) -> anyhow::Result<()> {
    match command {
        ConfigCommands::Show => show(),
        ConfigCommands::Set { key, value } => set(&key, &value),
    }
}

fn show() -> anyhow::Result<()> {
    let path = Config::path()?;
    let config = Config::load_or_default();

    println!("{} {}", "Config file:".bold(), path.display());

    let defaults = config.defaults.unwrap_or_default();
    println!(
        "  defaults.theme      = {}",
        defaults.theme.as_deref().unwrap_or("light (default)")
    );
    println!(
        "  defaults.start_mode = {}",
        defaults.start_mode.as_deref().unwrap_or("first (default)")
    );
    Ok(())
}

fn set(key: &str, value: &str) -> anyhow::Result<()> {
    let mut config = Config::load_or_default();
    config.set(key, value)?;
    let path = config.save()?;
    println!(
        "{} {key} = {value} ({})",
        "Updated".green().bold(),
        path.display()
    );
    Ok(())
}
