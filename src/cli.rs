use clap::Parser;
use eyre::{Context, Result};

use crate::config::{self, Configuration, load_configuration, lookup_config_path};

#[derive(Debug, Parser)]
#[command(
    version,
    about,
    long_about = r#"A terminal task manager backed by a local SQLite file

Default configuration file location looks up in the following order:
    * $XDG_CONFIG_HOME/taskbook/config.toml
    * $HOME/.config/taskbook/config.toml
    * $HOME/.taskbook.toml
"#,
    disable_version_flag = true
)]
pub struct Command {
    /// Configuration file path
    #[arg(short, long, value_name = "PATH")]
    config: Option<String>,

    /// Show the version
    #[arg(short, long)]
    version: bool,
}

impl Command {
    pub fn new() -> Command {
        Self::parse()
    }

    pub fn get_config(&self) -> Result<Configuration> {
        let config_path = self.config.clone().or_else(lookup_config_path);

        match config_path {
            Some(path) => load_configuration(&path).wrap_err("loading configuration"),
            // No config file anywhere, run with the defaults
            None => Ok(Configuration::default()),
        }
    }

    pub fn version(&self) -> bool {
        self.version
    }

    pub fn print_version(&self) {
        println!("{}", config::version())
    }
}
