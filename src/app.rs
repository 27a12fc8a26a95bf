// ============================================================================
// Structure : App (barre d'onglets)
// ============================================================================
// Gère l'état global de l'application TUI
//
// CONCEPTS RUST :
// 1. State Management : centraliser l'état dans une seule structure
// 2. Mutabilité contrôlée : &mut self pour modifier l'état
// 3. Ownership : l'écran monté appartient à App, un seul à la fois
//
// PATTERN : Cette structure suit le pattern "Application State"
// - Tous les composants de l'UI lisent depuis App
// - Toutes les modifications passent par les méthodes de App
// - Changer d'onglet détruit l'écran précédent et en monte un neuf
// ============================================================================

use tracing::{debug, info, warn};

use crate::screens::{HomeAction, HomeScreen, Screen, ScreenSettings, Tab};
use crate::services::Services;

/// État principal de l'application
pub struct App {
    /// Indique si l'application doit continuer à tourner
    pub running: bool,

    /// Indique si l'utilisateur a demandé à quitter (attend confirmation)
    /// CONCEPT : Two-step quit pour éviter les sorties accidentelles
    /// - Première pression de 'q' : confirm_quit = true
    /// - Deuxième pression de 'q' : running = false (quit réel)
    /// - N'importe quelle autre touche : confirm_quit = false (annulation)
    pub confirm_quit: bool,

    /// Onglet sélectionné (index 0..4)
    selected_tab: Tab,

    /// Écran monté pour l'onglet sélectionné
    /// CONCEPT RUST : Enum pour state management
    /// - Screen::Home(state) : l'accueil et son état local
    /// - Les autres onglets n'existent pas tant qu'ils ne sont pas montés
    screen: Screen,

    /// Collaborateurs (données, ordres, news)
    services: Services,

    /// Réglages appliqués à chaque montage
    settings: ScreenSettings,
}

impl App {
    /// Crée l'application sur l'onglet Home
    pub fn new(services: Services, settings: ScreenSettings) -> Self {
        let screen = Screen::mount(Tab::Home, &services, &settings);
        Self {
            running: true,
            confirm_quit: false,
            selected_tab: Tab::Home,
            screen,
            services,
            settings,
        }
    }

    /// App avec les services mock et les réglages par défaut
    pub fn with_mock_services() -> Self {
        Self::new(Services::mock(), ScreenSettings::default())
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Vérifie si l'application doit continuer
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn request_quit(&mut self) {
        self.confirm_quit = true;
    }

    pub fn cancel_quit(&mut self) {
        self.confirm_quit = false;
    }

    /// Vérifie si on attend la confirmation de quit
    pub fn is_awaiting_quit_confirmation(&self) -> bool {
        self.confirm_quit
    }

    // ========================================================================
    // Navigation entre onglets
    // ========================================================================

    pub fn selected_tab(&self) -> Tab {
        self.selected_tab
    }

    /// Écran actuellement monté
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Sélectionne un onglet
    ///
    /// CONCEPT : Mount / unmount
    /// - Onglet différent : l'ancien écran est remplacé (drop de son état)
    /// - Même onglet : rien ne change, l'état est conservé
    pub fn select_tab(&mut self, tab: Tab) {
        if tab == self.selected_tab {
            debug!(tab = %tab, "Tab already selected");
            return;
        }

        info!(from = %self.selected_tab, to = %tab, "Switching tab");
        self.selected_tab = tab;
        self.screen = Screen::mount(tab, &self.services, &self.settings);
    }

    /// Sélectionne un onglet par index ; un index hors de 0..4 est ignoré
    pub fn select_tab_index(&mut self, index: usize) {
        match Tab::from_index(index) {
            Some(tab) => self.select_tab(tab),
            None => warn!(index, "Ignoring out-of-range tab index"),
        }
    }

    pub fn next_tab(&mut self) {
        self.select_tab(self.selected_tab.next());
    }

    pub fn previous_tab(&mut self) {
        self.select_tab(self.selected_tab.previous());
    }

    // ========================================================================
    // Écran d'accueil
    // ========================================================================

    /// État de l'accueil s'il est monté
    pub fn home(&self) -> Option<&HomeScreen> {
        match &self.screen {
            Screen::Home(home) => Some(home),
            _ => None,
        }
    }

    /// Vérifie si on est sur l'accueil
    pub fn is_on_home(&self) -> bool {
        self.home().is_some()
    }

    /// Vérifie si le modal d'ajout est ouvert
    pub fn is_modal_open(&self) -> bool {
        self.home().is_some_and(HomeScreen::is_modal_visible)
    }

    /// Transmet une action à l'accueil ; sans effet sur un autre onglet
    pub fn dispatch_home(&mut self, action: HomeAction) {
        match &mut self.screen {
            Screen::Home(home) => {
                debug!(?action, "Home action");
                home.apply(action, self.services.orders.as_ref());
            }
            other => debug!(?action, screen = other.name(), "Home action ignored"),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::with_mock_services()
    }
}

// ============================================================================
// Tests unitaires
// ============================================================================
