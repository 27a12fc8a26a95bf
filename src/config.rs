// ============================================================================
// Configuration
// ============================================================================
// Fichier TOML optionnel :
// - Linux : ~/.config/onyxtrading/config.toml
// - macOS : ~/Library/Application Support/onyxtrading/config.toml
// - Variable ONYXTRADING_CONFIG : chemin explicite
//
// Exemple :
// ```toml
// tick_rate_ms = 250
// log_filter = "onyxtrading=debug,info"
// default_timeframe = "1W"
// news_headlines = 3
//
// [[watchlist]]
// symbol = "XRP"
// name = "Ripple"
// ```
//
// Fichier absent : valeurs par défaut.
// Fichier illisible ou invalide : valeurs par défaut + erreur remontée à main
// (loggée en warning, ou affichée sur stderr si le logging a échoué).
// ============================================================================

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use crate::models::Timeframe;
use crate::screens::{ScreenSettings, WatchSeed};

/// Nom du dossier de l'application (config, logs)
pub const APP_DIR: &str = "onyxtrading";

/// Variable d'environnement pour forcer le chemin du fichier
pub const CONFIG_ENV: &str = "ONYXTRADING_CONFIG";

const CONFIG_FILENAME: &str = "config.toml";

/// Symbole de la watchlist tel qu'écrit dans le fichier
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WatchlistConfig {
    pub symbol: String,
    pub name: String,
}

/// Configuration complète de l'application
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Délai de poll des événements clavier (ms)
    pub tick_rate_ms: u64,

    /// Filtre tracing utilisé si RUST_LOG n'est pas défini
    pub log_filter: String,

    /// Période affichée au montage de l'accueil
    pub default_timeframe: Timeframe,

    /// Nombre de titres dans "Market News"
    pub news_headlines: usize,

    /// Actifs suivis au démarrage
    pub watchlist: Vec<WatchlistConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate_ms: 250,
            log_filter: "onyxtrading=debug,info".to_string(),
            default_timeframe: Timeframe::default(),
            news_headlines: 3,
            watchlist: vec![
                WatchlistConfig {
                    symbol: "XRP".to_string(),
                    name: "Ripple".to_string(),
                },
                WatchlistConfig {
                    symbol: "DOT".to_string(),
                    name: "Polkadot".to_string(),
                },
            ],
        }
    }
}

impl Config {
    /// Parse une configuration TOML
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Configuration TOML invalide")
    }

    /// Lit et parse un fichier de configuration
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Impossible de lire {}", path.display()))?;
        Self::from_toml_str(&content)
    }

    /// Charge la configuration, sans jamais échouer
    ///
    /// CONCEPT : Fallback sur les valeurs par défaut
    /// - Pas de fichier : défauts (cas normal au premier lancement)
    /// - Erreur de lecture/parse : défauts + erreur rendue à l'appelant
    ///
    /// La config est lue avant l'initialisation du logging : l'erreur est
    /// donc retournée pour être loggée une fois le subscriber en place.
    pub fn load() -> (Self, Option<anyhow::Error>) {
        Self::load_from(config_path())
    }

    /// Charge la configuration depuis un chemin donné (ou les défauts)
    pub fn load_from(path: Option<PathBuf>) -> (Self, Option<anyhow::Error>) {
        let Some(path) = path else {
            debug!("No config directory available, using defaults");
            return (Self::default(), None);
        };

        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return (Self::default(), None);
        }

        match Self::from_file(&path) {
            Ok(config) => {
                debug!(path = %path.display(), "Loaded config");
                (config, None)
            }
            Err(e) => (
                Self::default(),
                Some(e.context(format!("Config ignorée : {}", path.display()))),
            ),
        }
    }

    /// Délai de poll, jamais nul
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(1))
    }

    /// Réglages transmis aux écrans
    pub fn screen_settings(&self) -> ScreenSettings {
        ScreenSettings {
            default_timeframe: self.default_timeframe,
            news_headlines: self.news_headlines,
            watchlist: self
                .watchlist
                .iter()
                .map(|w| WatchSeed {
                    symbol: w.symbol.trim().to_uppercase(),
                    name: w.name.clone(),
                })
                .collect(),
        }
    }
}

/// Chemin du fichier de configuration
///
/// ONYXTRADING_CONFIG a priorité sur le dossier de config de l'OS.
pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file() {
        let config = Config::from_toml_str(
            r#"
            default_timeframe = "1M"
            news_headlines = 5
            "#,
        )
        .unwrap();

        assert_eq!(config.default_timeframe, Timeframe::OneMonth);
        assert_eq!(config.news_headlines, 5);
        assert_eq!(config.tick_rate_ms, 250);
        assert_eq!(config.watchlist.len(), 2);
    }

    #[test]
    fn test_watchlist_table() {
        let config = Config::from_toml_str(
            r#"
            [[watchlist]]
            symbol = " sol "
            name = "Solana"
            "#,
        )
        .unwrap();

        let settings = config.screen_settings();
        assert_eq!(settings.watchlist.len(), 1);
        assert_eq!(settings.watchlist[0].symbol, "SOL");
        assert_eq!(settings.watchlist[0].name, "Solana");
    }

    #[test]
    fn test_invalid_timeframe_is_rejected() {
        assert!(Config::from_toml_str(r#"default_timeframe = "5Y""#).is_err());
    }

    #[test]
    fn test_tick_rate_never_zero() {
        let config = Config {
            tick_rate_ms: 0,
            ..Config::default()
        };
        assert_eq!(config.tick_rate(), Duration::from_millis(1));
    }

    #[test]
    fn test_from_missing_file_fails_with_context() {
        let err = Config::from_file(Path::new("/nonexistent/onyxtrading.toml")).unwrap_err();
        assert!(err.to_string().contains("Impossible de lire"));
    }

    /// Écrit `content` dans un fichier temporaire propre au test
    fn temp_config(name: &str, content: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("onyxtrading-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_invalid_file_returns_error_and_defaults() {
        let path = temp_config("invalid.toml", r#"default_timeframe = "5Y""#);
        let (config, error) = Config::load_from(Some(path.clone()));

        assert_eq!(config, Config::default());
        let error = error.expect("invalid file must be reported");
        assert!(format!("{:#}", error).contains("Configuration TOML invalide"));
        assert!(error.to_string().contains(&path.display().to_string()));
    }

    #[test]
    fn test_load_valid_file() {
        let path = temp_config("valid.toml", r#"default_timeframe = "1Y""#);
        let (config, error) = Config::load_from(Some(path));

        assert!(error.is_none());
        assert_eq!(config.default_timeframe, Timeframe::OneYear);
    }

    #[test]
    fn test_load_missing_file_is_silent() {
        let path = std::env::temp_dir().join("onyxtrading-absent/config.toml");
        let (config, error) = Config::load_from(Some(path));

        assert!(error.is_none());
        assert_eq!(config, Config::default());
    }
}
