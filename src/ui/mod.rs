// ============================================================================
// Module : ui
// ============================================================================
// Gère toute l'interface utilisateur (Terminal User Interface)
// ============================================================================

pub mod events; // Gestion des événements clavier
pub mod shell;  // Barre d'onglets, routing, footer
pub mod home;   // Sections de l'écran d'accueil
pub mod market; // Écran Market + écrans placeholder
pub mod cards;  // Cartes de présentation (une ligne par enregistrement)
pub mod modal;  // Modal "Add Cryptocurrency"

#[cfg(test)]
mod test_support;

// Re-exports pour simplifier les imports
pub use events::{Event, EventHandler};
pub use shell::render;
