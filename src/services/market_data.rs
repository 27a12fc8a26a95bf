// ============================================================================
// Port : MarketDataProvider
// ============================================================================

use rust_decimal::Decimal;

use crate::services::ServiceError;

/// Prix courant et variation d'un symbole
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quote {
    pub price: Decimal,
    pub change_percent: Decimal,
}

/// Un actif coté connu du fournisseur
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub symbol: String,
    pub name: String,
}

/// Fournisseur de cotations
pub trait MarketDataProvider {
    /// Prix courant et variation en pourcentage pour `symbol`
    fn current_price(&self, symbol: &str) -> Result<Quote, ServiceError>;

    /// Tous les actifs cotés, dans l'ordre d'affichage
    fn listings(&self) -> Result<Vec<Listing>, ServiceError>;
}
