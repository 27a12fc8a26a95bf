// ============================================================================
// Écran : Market
// ============================================================================
// Liste toutes les cotations connues du MarketDataProvider (CryptoCard)
// ============================================================================

use tracing::debug;

use crate::models::{IdGenerator, WatchlistEntry};
use crate::screens::SectionState;
use crate::services::{MarketDataProvider, ServiceError, Services};

/// État de l'écran Market
#[derive(Debug)]
pub struct MarketScreen {
    /// Une ligne par actif coté, dans l'ordre du fournisseur
    pub quotes: SectionState<Vec<WatchlistEntry>>,
}

impl MarketScreen {
    /// Charge les cotations au montage
    pub fn mount(services: &Services) -> Self {
        let quotes = SectionState::from_result("market", load_quotes(services.market.as_ref()));
        if let SectionState::Ready(rows) = &quotes {
            debug!(count = rows.len(), "Market screen mounted");
        }
        Self { quotes }
    }
}

fn load_quotes(market: &dyn MarketDataProvider) -> Result<Vec<WatchlistEntry>, ServiceError> {
    let mut ids = IdGenerator::new();
    market
        .listings()?
        .into_iter()
        .map(|listing| {
            let quote = market.current_price(&listing.symbol)?;
            Ok(WatchlistEntry::new(
                ids.next_id(),
                listing.name,
                listing.symbol,
                quote.price,
                quote.change_percent,
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{Listing, Quote};

    /// Fournisseur qui annonce un symbole qu'il ne sait pas coter
    struct BrokenMarket;

    impl MarketDataProvider for BrokenMarket {
        fn current_price(&self, symbol: &str) -> Result<Quote, ServiceError> {
            Err(ServiceError::UnknownSymbol { symbol: symbol.to_string() })
        }

        fn listings(&self) -> Result<Vec<Listing>, ServiceError> {
            Ok(vec![Listing {
                symbol: "FOO".to_string(),
                name: "Foo".to_string(),
            }])
        }
    }

    #[test]
    fn test_mount_loads_all_listings() {
        let screen = MarketScreen::mount(&Services::mock());
        let rows = screen.quotes.ready().unwrap();
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0].symbol, "BTC");
    }

    #[test]
    fn test_quote_failure_makes_section_unavailable() {
        let mut services = Services::mock();
        services.market = Box::new(BrokenMarket);

        let screen = MarketScreen::mount(&services);
        assert_eq!(
            screen.quotes,
            SectionState::Unavailable("Unknown symbol: FOO".to_string())
        );
    }
}
