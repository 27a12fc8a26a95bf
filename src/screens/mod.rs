// ============================================================================
// Module : screens
// ============================================================================
// L'état de chaque écran monté par la barre d'onglets.
//
// CONCEPT RUST : Enum pour state machines
// - Screen contient l'état d'UN SEUL écran à la fois
// - Changer d'onglet remplace la valeur : l'ancien état est détruit (drop)
// - Le compilateur force à gérer les cinq écrans partout (exhaustivité)
// ============================================================================

pub mod home;
pub mod market;
pub mod modal;

use std::fmt;

use tracing::warn;

use crate::models::Timeframe;
use crate::services::{ServiceError, Services};

pub use home::{HomeAction, HomeScreen};
pub use market::MarketScreen;
pub use modal::{AddEntryModal, ModalState};

// ============================================================================
// Enum : Tab
// ============================================================================

/// Onglets de la barre de navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Home,
    Market,
    Trade,
    Wallet,
    Profile,
}

impl Tab {
    /// Onglets dans l'ordre de la barre (index 0..4)
    pub const ALL: [Tab; 5] = [Tab::Home, Tab::Market, Tab::Trade, Tab::Wallet, Tab::Profile];

    /// Retourne l'onglet à la position `index`, None si hors de 0..4
    pub fn from_index(index: usize) -> Option<Tab> {
        Tab::ALL.get(index).copied()
    }

    pub fn index(&self) -> usize {
        match self {
            Tab::Home => 0,
            Tab::Market => 1,
            Tab::Trade => 2,
            Tab::Wallet => 3,
            Tab::Profile => 4,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Market => "Market",
            Tab::Trade => "Trade",
            Tab::Wallet => "Wallet",
            Tab::Profile => "Profile",
        }
    }

    /// Onglet suivant (cycle)
    pub fn next(&self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    /// Onglet précédent (cycle)
    pub fn previous(&self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// SectionState : données chargées ou indisponibles
// ============================================================================
// CONCEPT : Dégradation par section
// - Une erreur de service n'empêche pas d'afficher le reste de l'écran
// - La section concernée affiche un panneau "unavailable"
// ============================================================================

/// Données d'une section, chargées au montage de l'écran
#[derive(Debug, Clone, PartialEq)]
pub enum SectionState<T> {
    Ready(T),
    Unavailable(String),
}

impl<T> SectionState<T> {
    /// Convertit le résultat d'un service, en journalisant l'erreur
    pub fn from_result(section: &'static str, result: Result<T, ServiceError>) -> Self {
        match result {
            Ok(value) => SectionState::Ready(value),
            Err(e) => {
                warn!(section, error = %e, "Section data unavailable");
                SectionState::Unavailable(e.to_string())
            }
        }
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            SectionState::Ready(value) => Some(value),
            SectionState::Unavailable(_) => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, SectionState::Ready(_))
    }
}

// ============================================================================
// Montage des écrans
// ============================================================================

/// Symbole suivi au démarrage (issu de la configuration)
#[derive(Debug, Clone, PartialEq)]
pub struct WatchSeed {
    pub symbol: String,
    pub name: String,
}

/// Réglages appliqués à chaque montage d'écran
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenSettings {
    pub default_timeframe: Timeframe,
    pub news_headlines: usize,
    pub watchlist: Vec<WatchSeed>,
}

impl Default for ScreenSettings {
    /// Mêmes valeurs que la configuration par défaut
    fn default() -> Self {
        crate::config::Config::default().screen_settings()
    }
}

/// L'écran actuellement monté, avec son état local
///
/// Trade, Wallet et Profile n'ont pas d'état propre.
#[derive(Debug)]
pub enum Screen {
    Home(HomeScreen),
    Market(MarketScreen),
    Trade,
    Wallet,
    Profile,
}

impl Screen {
    /// Monte l'écran de `tab` avec un état neuf
    pub fn mount(tab: Tab, services: &Services, settings: &ScreenSettings) -> Screen {
        match tab {
            Tab::Home => Screen::Home(HomeScreen::mount(services, settings)),
            Tab::Market => Screen::Market(MarketScreen::mount(services)),
            Tab::Trade => Screen::Trade,
            Tab::Wallet => Screen::Wallet,
            Tab::Profile => Screen::Profile,
        }
    }

    /// Onglet auquel l'écran appartient
    pub fn tab(&self) -> Tab {
        match self {
            Screen::Home(_) => Tab::Home,
            Screen::Market(_) => Tab::Market,
            Screen::Trade => Tab::Trade,
            Screen::Wallet => Tab::Wallet,
            Screen::Profile => Tab::Profile,
        }
    }

    /// Nom de l'écran monté ("Home", "Wallet", ...)
    pub fn name(&self) -> &'static str {
        self.tab().label()
    }
}
