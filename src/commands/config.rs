use std::path::Path;

use anyhow::Result;
use owo_colors::OwoColorize;
use tutorcal_core::config::TutorCalConfig;

pub fn run(config: &TutorCalConfig, records_path: &Path) -> Result<()> {
    let config_path = TutorCalConfig::config_path()?;

    println!("{}", "Paths".bold());
    println!("  Config:     {}", config_path.display());
    println!("  Records:    {}", records_path.display());

    println!();
    println!("{}", "Default filters".bold());
    println!("  Sessions:   {}", on_off(config.filters.sessions));
    println!("  Birthdays:  {}", on_off(config.filters.birthdays));

    Ok(())
}

fn on_off(enabled: bool) -> String {
    if enabled {
        "on".green().to_string()
    } else {
        "off".red().to_string()
    }
}
