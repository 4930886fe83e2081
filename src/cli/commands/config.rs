use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `config` subcommand
pub fn handle(print: bool, init: bool, cfg: &Config) -> AppResult<()> {
    if init {
        let (path, created) = Config::init()?;
        if created {
            success(format!("Config file: {}", path.display()));
        } else {
            info(format!("Config file already exists: {}", path.display()));
        }
    }

    if print {
        println!("📄 Current configuration:\n");
        println!("{}", cfg.to_yaml()?);
    }

    if !print && !init {
        println!("{}", Config::config_file()?.display());
    }

    Ok(())
}
