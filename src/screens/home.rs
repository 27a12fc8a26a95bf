// ============================================================================
// Écran : Home
// ============================================================================
// État local de l'écran d'accueil :
// - valeur totale, positions, watchlist, news (chargées au montage)
// - période du graphique, modal d'ajout, défilement, message de statut
//
// PATTERN : Conteneur d'état explicite
// - Les sections reçoivent des données immuables (&[Holding], ...)
// - Toute modification passe par HomeScreen::apply(HomeAction)
// - Le rendu est une fonction pure de cet état (voir ui::home)
// ============================================================================

use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::models::{Headline, Holding, IdGenerator, Timeframe, WatchlistEntry};
use crate::screens::{AddEntryModal, ScreenSettings, SectionState};
use crate::services::{MarketDataProvider, OrderAction, OrderService, ServiceError, Services};

/// Nombre de sections empilées sur l'écran d'accueil
pub const SECTION_COUNT: usize = 7;

/// Montant transmis par les boutons d'action rapide (pas de saisie de montant)
const QUICK_ACTION_AMOUNT: Decimal = Decimal::ZERO;

/// Actions utilisateur sur l'écran d'accueil
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeAction {
    SelectTimeframe(Timeframe),
    NextTimeframe,
    PreviousTimeframe,
    OpenAddModal,
    CloseAddModal,
    QuickAction(OrderAction),
    ScrollUp,
    ScrollDown,
}

/// État de l'écran d'accueil
#[derive(Debug)]
pub struct HomeScreen {
    pub portfolio_value: SectionState<Decimal>,
    pub holdings: SectionState<Vec<Holding>>,
    pub watchlist: SectionState<Vec<WatchlistEntry>>,
    pub headlines: SectionState<Vec<Headline>>,

    /// Période sélectionnée dans le graphique de performance
    pub selected_timeframe: Timeframe,

    /// Modal "Add Cryptocurrency"
    pub modal: AddEntryModal,

    /// Index de la première section visible (0..SECTION_COUNT)
    pub scroll: usize,

    /// Résultat de la dernière action rapide
    pub status: Option<String>,
}

impl HomeScreen {
    /// Construit l'état à partir de données déjà chargées
    #[cfg(test)]
    pub fn new(
        portfolio_value: Decimal,
        holdings: Vec<Holding>,
        watchlist: Vec<WatchlistEntry>,
        headlines: Vec<Headline>,
    ) -> Self {
        Self {
            portfolio_value: SectionState::Ready(portfolio_value),
            holdings: SectionState::Ready(holdings),
            watchlist: SectionState::Ready(watchlist),
            headlines: SectionState::Ready(headlines),
            selected_timeframe: Timeframe::default(),
            modal: AddEntryModal::new(),
            scroll: 0,
            status: None,
        }
    }

    /// Monte l'écran : interroge chaque service une fois
    ///
    /// Un service en erreur ne bloque que sa propre section.
    pub fn mount(services: &Services, settings: &ScreenSettings) -> Self {
        let watchlist = load_watchlist(services.market.as_ref(), settings);
        let screen = Self {
            portfolio_value: SectionState::from_result("portfolio", services.portfolio.total_value()),
            holdings: SectionState::from_result("holdings", services.portfolio.list_holdings()),
            watchlist: SectionState::from_result("watchlist", watchlist),
            headlines: SectionState::from_result(
                "news",
                services.news.latest_headlines(settings.news_headlines),
            ),
            selected_timeframe: settings.default_timeframe,
            modal: AddEntryModal::new(),
            scroll: 0,
            status: None,
        };
        debug!(timeframe = %screen.selected_timeframe, "Home screen mounted");
        screen
    }

    // ========================================================================
    // Opérations
    // ========================================================================

    /// Change la période du graphique
    pub fn select_timeframe(&mut self, timeframe: Timeframe) {
        self.selected_timeframe = timeframe;
    }

    pub fn open_add_modal(&mut self) {
        self.modal.open();
    }

    pub fn close_add_modal(&mut self) {
        self.modal.dismiss();
    }

    pub fn is_modal_visible(&self) -> bool {
        self.modal.is_visible()
    }

    /// Applique une action utilisateur
    ///
    /// Point d'entrée unique des key handlers. `orders` n'est utilisé que
    /// par les actions rapides. Le statut ne survit qu'une action.
    pub fn apply(&mut self, action: HomeAction, orders: &dyn OrderService) {
        self.status = None;
        match action {
            HomeAction::SelectTimeframe(tf) => self.select_timeframe(tf),
            HomeAction::NextTimeframe => self.select_timeframe(self.selected_timeframe.next()),
            HomeAction::PreviousTimeframe => {
                self.select_timeframe(self.selected_timeframe.previous())
            }
            HomeAction::OpenAddModal => self.open_add_modal(),
            HomeAction::CloseAddModal => self.close_add_modal(),
            HomeAction::QuickAction(order) => self.submit_order(order, orders),
            HomeAction::ScrollUp => self.scroll = self.scroll.saturating_sub(1),
            HomeAction::ScrollDown => {
                self.scroll = (self.scroll + 1).min(SECTION_COUNT - 1);
            }
        }
    }

    fn submit_order(&mut self, action: OrderAction, orders: &dyn OrderService) {
        self.status = Some(match orders.submit(action, QUICK_ACTION_AMOUNT) {
            Ok(receipt) if receipt.executed => format!("{} executed", receipt.action),
            Ok(receipt) => format!("{} requested (no execution service)", receipt.action),
            Err(e) => {
                warn!(action = %action, error = %e, "Quick action failed");
                format!("{} failed: {}", action, e)
            }
        });
        info!(action = %action, "Quick action submitted");
    }
}

/// Charge la watchlist configurée auprès du fournisseur de cotations
fn load_watchlist(
    market: &dyn MarketDataProvider,
    settings: &ScreenSettings,
) -> Result<Vec<WatchlistEntry>, ServiceError> {
    let mut ids = IdGenerator::new();
    settings
        .watchlist
        .iter()
        .map(|seed| {
            let quote = market.current_price(&seed.symbol)?;
            Ok(WatchlistEntry::new(
                ids.next_id(),
                seed.name.clone(),
                seed.symbol.clone(),
                quote.price,
                quote.change_percent,
            ))
        })
        .collect()
}
