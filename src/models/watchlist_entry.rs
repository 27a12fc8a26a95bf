// ============================================================================
// Structure : WatchlistEntry
// ============================================================================
// Représente un actif suivi mais non détenu (prix + variation)
// ============================================================================

use rust_decimal::Decimal;

use crate::models::RecordId;

/// Un actif dans la watchlist
#[derive(Debug, Clone, PartialEq)]
pub struct WatchlistEntry {
    pub id: RecordId,

    /// Nom complet (ex: "Ripple")
    pub name: String,

    /// Ticker (ex: "XRP")
    pub symbol: String,

    /// Dernier prix connu (≥ 0)
    pub price: Decimal,

    /// Variation en pourcentage (signée)
    pub change: Decimal,
}

impl WatchlistEntry {
    pub fn new(
        id: RecordId,
        name: impl Into<String>,
        symbol: impl Into<String>,
        price: Decimal,
        change: Decimal,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            symbol: symbol.into(),
            price,
            change,
        }
    }
}

