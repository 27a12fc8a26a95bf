// ============================================================================
// Implémentations mock des services
// ============================================================================
// Données statiques en mémoire : aucun appel réseau, aucune persistance.
// Les valeurs reproduisent celles de l'application mobile.
// ============================================================================

use chrono::{DateTime, Duration, TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::{debug, info};

use crate::models::{Headline, Holding, IdGenerator};
use crate::services::{
    Listing, MarketDataProvider, NewsFeed, OrderAction, OrderReceipt, OrderService,
    PortfolioStore, Quote, ServiceError,
};

// ============================================================================
// Market data
// ============================================================================

/// (symbole, nom, prix, variation %)
const MARKET: [(&str, &str, Decimal, Decimal); 6] = [
    ("BTC", "Bitcoin", dec!(54000), dec!(2.5)),
    ("ETH", "Ethereum", dec!(3150.80), dec!(-1.2)),
    ("SOL", "Solana", dec!(182.40), dec!(5.0)),
    ("ADA", "Cardano", dec!(0.78), dec!(2.3)),
    ("XRP", "Ripple", dec!(1.25), dec!(2.1)),
    ("DOT", "Polkadot", dec!(34.55), dec!(-0.8)),
];

/// Cotations figées
#[derive(Debug, Default)]
pub struct StaticMarketData;

impl StaticMarketData {
    pub fn new() -> Self {
        Self
    }
}

impl MarketDataProvider for StaticMarketData {
    fn current_price(&self, symbol: &str) -> Result<Quote, ServiceError> {
        let wanted = symbol.to_uppercase();
        MARKET
            .iter()
            .find(|(s, ..)| *s == wanted)
            .map(|&(_, _, price, change_percent)| Quote {
                price,
                change_percent,
            })
            .ok_or(ServiceError::UnknownSymbol { symbol: wanted })
    }

    fn listings(&self) -> Result<Vec<Listing>, ServiceError> {
        Ok(MARKET
            .iter()
            .map(|&(symbol, name, ..)| Listing {
                symbol: symbol.to_string(),
                name: name.to_string(),
            })
            .collect())
    }
}

// ============================================================================
// Portfolio
// ============================================================================

/// Portefeuille figé : BTC / ETH / SOL / ADA
#[derive(Debug)]
pub struct StaticPortfolioStore {
    total_value: Decimal,
}

impl StaticPortfolioStore {
    pub fn new() -> Self {
        Self {
            total_value: dec!(125000.45),
        }
    }
}

impl Default for StaticPortfolioStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PortfolioStore for StaticPortfolioStore {
    fn list_holdings(&self) -> Result<Vec<Holding>, ServiceError> {
        // Les ids sont attribués à chaque lecture, dans l'ordre d'affichage
        let mut ids = IdGenerator::new();
        Ok(vec![
            Holding::new(ids.next_id(), "Bitcoin", "BTC", 40, dec!(50000), dec!(3.5)),
            Holding::new(ids.next_id(), "Ethereum", "ETH", 30, dec!(37500), dec!(-1.2)),
            Holding::new(ids.next_id(), "Solana", "SOL", 20, dec!(25000), dec!(5.0)),
            Holding::new(ids.next_id(), "Cardano", "ADA", 10, dec!(12500), dec!(2.3)),
        ])
    }

    fn total_value(&self) -> Result<Decimal, ServiceError> {
        Ok(self.total_value)
    }
}

// ============================================================================
// Orders
// ============================================================================

/// Service d'ordres qui ne fait rien : journalise et renvoie un reçu non exécuté
#[derive(Debug, Default)]
pub struct NoopOrderService;

impl OrderService for NoopOrderService {
    fn submit(&self, action: OrderAction, amount: Decimal) -> Result<OrderReceipt, ServiceError> {
        info!(action = %action, %amount, "Order submitted to no-op service");
        Ok(OrderReceipt {
            action,
            amount,
            executed: false,
        })
    }
}

// ============================================================================
// News
// ============================================================================

/// Nombre de titres disponibles dans le flux statique
const NEWS_POOL: usize = 10;

/// Flux de news figé : "News Headline 1", "News Headline 2", ...
#[derive(Debug)]
pub struct StaticNewsFeed {
    /// Date du titre le plus récent ; les suivants reculent de 15 minutes
    latest_at: DateTime<Utc>,
}

impl StaticNewsFeed {
    pub fn new() -> Self {
        Self {
            latest_at: Utc
                .with_ymd_and_hms(2024, 11, 24, 9, 0, 0)
                .single()
                .unwrap_or_default(),
        }
    }
}

impl Default for StaticNewsFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl NewsFeed for StaticNewsFeed {
    fn latest_headlines(&self, n: usize) -> Result<Vec<Headline>, ServiceError> {
        let count = n.min(NEWS_POOL);
        debug!(requested = n, served = count, "Serving static headlines");
        Ok((0..count)
            .map(|i| {
                Headline::new(
                    format!("News Headline {}", i + 1),
                    self.latest_at - Duration::minutes(15 * i as i64),
                )
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_price_known_symbol() {
        let market = StaticMarketData::new();
        let quote = market.current_price("xrp").unwrap();
        assert_eq!(quote.price, dec!(1.25));
        assert_eq!(quote.change_percent, dec!(2.1));
    }

    #[test]
    fn test_current_price_unknown_symbol() {
        let market = StaticMarketData::new();
        let err = market.current_price("FOO").unwrap_err();
        assert_eq!(err, ServiceError::UnknownSymbol { symbol: "FOO".to_string() });
    }

    #[test]
    fn test_holdings_have_unique_ids_in_order() {
        let store = StaticPortfolioStore::new();
        let holdings = store.list_holdings().unwrap();
        let symbols: Vec<&str> = holdings.iter().map(|h| h.symbol.as_str()).collect();
        assert_eq!(symbols, ["BTC", "ETH", "SOL", "ADA"]);

        let mut ids: Vec<_> = holdings.iter().map(|h| h.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 4);
        assert_eq!(store.total_value().unwrap(), dec!(125000.45));
    }

    #[test]
    fn test_noop_order_is_not_executed() {
        let receipt = NoopOrderService.submit(OrderAction::Buy, dec!(100)).unwrap();
        assert_eq!(receipt.action, OrderAction::Buy);
        assert!(!receipt.executed);
    }

    #[test]
    fn test_latest_headlines() {
        let feed = StaticNewsFeed::new();
        let headlines = feed.latest_headlines(3).unwrap();
        assert_eq!(headlines.len(), 3);
        assert_eq!(headlines[0].title, "News Headline 1");
        assert_eq!(headlines[2].title, "News Headline 3");
        assert!(headlines[0].published_at > headlines[1].published_at);

        assert!(feed.latest_headlines(0).unwrap().is_empty());
        assert_eq!(feed.latest_headlines(50).unwrap().len(), NEWS_POOL);
    }
}
