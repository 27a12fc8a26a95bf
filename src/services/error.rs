// ============================================================================
// Erreurs des services
// ============================================================================
// Une erreur de service ne fait jamais tomber l'écran : la section
// concernée passe en état "unavailable" (voir screens::SectionState).
// ============================================================================

use thiserror::Error;

/// Erreurs remontées par les collaborateurs externes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("Unknown symbol: {symbol}")]
    UnknownSymbol { symbol: String },

    #[error("{service} unavailable: {reason}")]
    Unavailable { service: &'static str, reason: String },

    #[error("Order rejected: {reason}")]
    OrderRejected { reason: String },
}

impl ServiceError {
    pub fn unavailable(service: &'static str, reason: impl Into<String>) -> Self {
        Self::Unavailable {
            service,
            reason: reason.into(),
        }
    }
}
