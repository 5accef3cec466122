use clap::Subcommand;
use timetiler_core::ViewConfig;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Print the config file path
    Path,
    /// Reset configuration to defaults
    Reset,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show => {
            let config = ViewConfig::load_or_default();
            println!("{}", toml::to_string_pretty(&config)?);
        }
        ConfigAction::Path => {
            println!("{}", ViewConfig::path()?.display());
        }
        ConfigAction::Reset => {
            let config = ViewConfig::default();
            config.save()?;
            println!("configuration reset to defaults");
        }
    }
    Ok(())
}
