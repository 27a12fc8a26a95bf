// ============================================================================
// Module : models
// ============================================================================
// Ce module contient toutes les structures de données de l'application
//
// CONCEPT RUST : Modules et visibilité
// - "pub mod" : déclare un sous-module publique (accessible depuis l'extérieur)
// - Sans "pub", le module serait privé au crate
// ============================================================================

pub mod id;              // Identifiants explicites (RecordId, IdGenerator)
pub mod holding;         // Position du portefeuille
pub mod watchlist_entry; // Actif suivi (non détenu)
pub mod timeframe;       // Fenêtre d'affichage du graphique de performance
pub mod headline;        // Titre de news

// Re-export des structures principales pour simplifier les imports
// Au lieu de : use onyxtrading::models::holding::Holding;
// On peut faire : use onyxtrading::models::Holding;
pub use headline::Headline;
pub use holding::Holding;
pub use id::{IdGenerator, RecordId};
pub use timeframe::Timeframe;
pub use watchlist_entry::WatchlistEntry;
