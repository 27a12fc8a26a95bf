// ============================================================================
// Module : services
// ============================================================================
// Les collaborateurs externes consommés par l'interface :
// - MarketDataProvider : prix et variations
// - PortfolioStore : positions et valeur totale
// - OrderService : achat / vente / dépôt / retrait
// - NewsFeed : derniers titres
//
// CONCEPT RUST : Traits comme ports
// - L'UI ne connaît que les traits
// - Les implémentations mock (données statiques) vivent dans `mock`
// - Une vraie source (API, base locale) peut être branchée sans toucher l'UI
// ============================================================================

pub mod error;
pub mod market_data;
pub mod mock;
pub mod news;
pub mod orders;
pub mod portfolio;

pub use error::ServiceError;
pub use market_data::{Listing, MarketDataProvider, Quote};
pub use news::NewsFeed;
pub use orders::{OrderAction, OrderReceipt, OrderService};
pub use portfolio::PortfolioStore;

/// Ensemble des collaborateurs utilisés pour monter les écrans
///
/// Possédé par l'App ; les écrans empruntent ce dont ils ont besoin.
pub struct Services {
    pub market: Box<dyn MarketDataProvider>,
    pub portfolio: Box<dyn PortfolioStore>,
    pub orders: Box<dyn OrderService>,
    pub news: Box<dyn NewsFeed>,
}

impl Services {
    /// Branche les implémentations statiques (aucun appel réseau)
    pub fn mock() -> Self {
        Self {
            market: Box::new(mock::StaticMarketData::new()),
            portfolio: Box::new(mock::StaticPortfolioStore::new()),
            orders: Box::new(mock::NoopOrderService),
            news: Box::new(mock::StaticNewsFeed::new()),
        }
    }
}
