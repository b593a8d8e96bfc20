use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Config { print_config: true }) {
        let printable = Config {
            endpoint: cfg.endpoint.clone(),
            username: cfg.username.clone(),
            password: if cfg.password.is_empty() {
                String::new()
            } else {
                "********".to_string()
            },
            write_retries: cfg.write_retries,
        };

        println!("Config file: {:?}", Config::config_file());
        let yaml = serde_yaml::to_string(&printable).map_err(|e| AppError::Config(e.to_string()))?;
        println!("{yaml}");
    }

    Ok(())
}
