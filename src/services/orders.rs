// ============================================================================
// Port : OrderService
// ============================================================================
// Les quatre actions rapides de l'écran d'accueil passent par ce trait.
// ============================================================================

use std::fmt;

use rust_decimal::Decimal;

use crate::services::ServiceError;

/// Action rapide disponible depuis l'écran d'accueil
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderAction {
    Buy,
    Sell,
    Deposit,
    Withdraw,
}

impl OrderAction {
    /// Ordre d'affichage des boutons
    pub const ALL: [OrderAction; 4] = [
        OrderAction::Buy,
        OrderAction::Sell,
        OrderAction::Deposit,
        OrderAction::Withdraw,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            OrderAction::Buy => "Buy",
            OrderAction::Sell => "Sell",
            OrderAction::Deposit => "Deposit",
            OrderAction::Withdraw => "Withdraw",
        }
    }

    /// Touche associée au bouton
    pub fn key(&self) -> char {
        match self {
            OrderAction::Buy => 'b',
            OrderAction::Sell => 's',
            OrderAction::Deposit => 'i',
            OrderAction::Withdraw => 'o',
        }
    }
}

impl fmt::Display for OrderAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Accusé de réception d'un ordre
#[derive(Debug, Clone, PartialEq)]
pub struct OrderReceipt {
    pub action: OrderAction,
    pub amount: Decimal,
    /// false tant qu'aucun service d'exécution réel n'est branché
    pub executed: bool,
}

/// Service d'exécution des ordres
pub trait OrderService {
    fn submit(&self, action: OrderAction, amount: Decimal) -> Result<OrderReceipt, ServiceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_are_distinct() {
        let mut keys: Vec<char> = OrderAction::ALL.iter().map(|a| a.key()).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), 4);
    }
}
