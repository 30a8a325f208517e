pub(crate) use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::games::tictactoe::MarkSymbols;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE: &str = "tictactoe.yaml";

pub fn get_config_manager(
    path: &str,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.display.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DisplayConfig {
    pub player_symbol: char,
    pub opponent_symbol: char,
}

impl DisplayConfig {
    pub fn symbols(&self) -> MarkSymbols {
        MarkSymbols::new(self.player_symbol, self.opponent_symbol)
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        let symbols = MarkSymbols::default();
        Self {
            player_symbol: symbols.player,
            opponent_symbol: symbols.opponent,
        }
    }
}

impl Validate for DisplayConfig {
    fn validate(&self) -> Result<(), String> {
        for (name, symbol) in [
            ("player_symbol", self.player_symbol),
            ("opponent_symbol", self.opponent_symbol),
        ] {
            if symbol.is_whitespace() || symbol.is_control() {
                return Err(format!("{} must be a visible character", name));
            }
        }
        if self.player_symbol == self.opponent_symbol {
            return Err("player_symbol and opponent_symbol must differ".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub enabled: bool,
    pub prefix: Option<String>,
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        if let Some(prefix) = &self.prefix {
            if prefix.trim().is_empty() {
                return Err("logging prefix must not be blank".to_string());
            }
        }
        Ok(())
    }
}
