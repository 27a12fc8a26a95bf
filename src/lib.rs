// ============================================================================
// OnyxTrading - Library
// ============================================================================
// Expose les modules publics pour le binaire et les tests
// ============================================================================

pub mod app;      // Barre d'onglets et écran monté
pub mod config;   // Fichier de configuration TOML
pub mod format;   // Formatage des montants et variations
pub mod handler;  // Clavier -> actions
pub mod models;   // Structures de données
pub mod screens;  // État local des écrans
pub mod services; // Collaborateurs externes (mock)
pub mod ui;       // Interface utilisateur
