// ============================================================================
// Port : PortfolioStore
// ============================================================================

use rust_decimal::Decimal;

use crate::models::Holding;
use crate::services::ServiceError;

/// Source des positions du portefeuille
pub trait PortfolioStore {
    /// Positions, dans l'ordre d'affichage
    fn list_holdings(&self) -> Result<Vec<Holding>, ServiceError>;

    /// Valeur totale du portefeuille
    fn total_value(&self) -> Result<Decimal, ServiceError>;
}
