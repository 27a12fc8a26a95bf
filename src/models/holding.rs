// ============================================================================
// Structure : Holding
// ============================================================================
// Une position du portefeuille : nom, ticker, part du portefeuille,
// valeur monétaire et variation en pourcentage.
//
// CONCEPT RUST : Decimal plutôt que f64
// - rust_decimal garde la représentation exacte des montants
// - 125000.45 reste 125000.45 (pas de 125000.44999...)
// ============================================================================

use rust_decimal::Decimal;

use crate::models::RecordId;

/// Position détenue dans le portefeuille
///
/// La somme des `percentage` d'une liste est en principe ≤ 100,
/// mais rien ne l'impose.
#[derive(Debug, Clone, PartialEq)]
pub struct Holding {
    pub id: RecordId,

    /// Nom complet (ex: "Bitcoin")
    pub name: String,

    /// Ticker (ex: "BTC")
    pub symbol: String,

    /// Part du portefeuille, 0 à 100
    pub percentage: u8,

    /// Valeur de la position (≥ 0)
    pub value: Decimal,

    /// Variation en pourcentage (signée)
    pub change: Decimal,
}

impl Holding {
    /// Crée une position
    ///
    /// `percentage` est borné à 100.
    pub fn new(
        id: RecordId,
        name: impl Into<String>,
        symbol: impl Into<String>,
        percentage: u8,
        value: Decimal,
        change: Decimal,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            symbol: symbol.into(),
            percentage: percentage.min(100),
            value,
            change,
        }
    }
}
