use std::path::Path;

use crate::error::ConfigError;
use crate::game::{
    DEFAULT_COLUMNS, DEFAULT_ROWS, GameEngine, PieceColor, Player, WinScan,
};

/// Board geometry and win-scan strategy.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: usize,
    pub columns: usize,
    pub win_scan: WinScan,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            win_scan: WinScan::Full,
        }
    }
}

/// A player's label and palette color name.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct PlayerConfig {
    pub name: String,
    pub color: String,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub one: PlayerConfig,
    pub two: PlayerConfig,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            one: PlayerConfig {
                name: "Red".into(),
                color: "Red".into(),
            },
            two: PlayerConfig {
                name: "Yellow".into(),
                color: "Yellow".into(),
            },
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub players: PlayersConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.rows == 0 {
            return Err(ConfigError::Validation("board.rows must be > 0".into()));
        }
        if self.board.columns == 0 {
            return Err(ConfigError::Validation("board.columns must be > 0".into()));
        }

        let one = resolve_color("players.one.color", &self.players.one.color)?;
        let two = resolve_color("players.two.color", &self.players.two.color)?;
        if one == two {
            return Err(ConfigError::Validation(format!(
                "players cannot share the color '{}'",
                one.name
            )));
        }

        Ok(())
    }

    /// Build the two players described by this configuration.
    pub fn players(&self) -> Result<(Player, Player), ConfigError> {
        let one = resolve_color("players.one.color", &self.players.one.color)?;
        let two = resolve_color("players.two.color", &self.players.two.color)?;
        Ok((
            Player::new(self.players.one.name.clone(), one),
            Player::new(self.players.two.name.clone(), two),
        ))
    }

    /// Validate, then start a game with these settings.
    pub fn new_game(&self) -> Result<GameEngine, ConfigError> {
        self.validate()?;
        let (one, two) = self.players()?;
        let game = GameEngine::new(one, two, self.board.rows, self.board.columns)
            .map_err(|e| ConfigError::Validation(e.to_string()))?;
        Ok(game.with_scan(self.board.win_scan))
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
    }
}

fn resolve_color(field: &str, name: &str) -> Result<PieceColor, ConfigError> {
    PieceColor::by_name(name).ok_or_else(|| {
        ConfigError::Validation(format!("{field}: unknown color '{name}'"))
    })
}
