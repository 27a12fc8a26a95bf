// ============================================================================
// Gestion des événements
// ============================================================================
// Gère les événements clavier et les ticks de l'application
//
// CONCEPTS RUST :
// 1. Enums avec variants : représenter différents types d'événements
// 2. Error handling avec Result
// 3. Pattern matching sur KeyCode
// ============================================================================

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind};

use crate::services::OrderAction;

/// Événements de l'application
#[derive(Debug, Clone)]
pub enum Event {
    /// Touche pressée
    Key(KeyEvent),

    /// Tick régulier (aucune entrée pendant le délai de poll)
    Tick,
}

// ============================================================================
// Structure EventHandler
// ============================================================================

/// Gestionnaire d'événements
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    /// Crée un gestionnaire qui attend au plus `tick_rate` par événement
    pub fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    /// Lit le prochain événement (bloquant avec timeout)
    ///
    /// CONCEPT : Non-blocking I/O avec timeout
    /// - poll(timeout) attend au plus tick_rate
    /// - Si pas d'événement, retourne Ok(Event::Tick)
    /// - Si événement, le lit et le convertit
    pub fn next(&self) -> Result<Event> {
        if event::poll(self.tick_rate)? {
            match event::read()? {
                // Sur certains OS, on reçoit Press ET Release
                // On ne garde que Press pour éviter les doublons
                CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Ok(Event::Key(key)),

                // Resize, souris, Release : le prochain draw suffit
                _ => Ok(Event::Tick),
            }
        } else {
            Ok(Event::Tick)
        }
    }
}

// ============================================================================
// Helpers : Convertir KeyEvent en action
// ============================================================================

fn key_code(event: &Event) -> Option<KeyCode> {
    match event {
        Event::Key(key) => Some(key.code),
        Event::Tick => None,
    }
}

/// Vérifie si l'événement est la touche 'q' (quitter)
pub fn is_quit_event(event: &Event) -> bool {
    matches!(key_code(event), Some(KeyCode::Char('q') | KeyCode::Char('Q')))
}

/// Vérifie si l'événement est Échap
pub fn is_escape_event(event: &Event) -> bool {
    matches!(key_code(event), Some(KeyCode::Esc))
}

/// Vérifie si l'événement est Entrée
pub fn is_enter_event(event: &Event) -> bool {
    matches!(key_code(event), Some(KeyCode::Enter))
}

/// Vérifie si l'événement est la flèche vers le haut ou 'k' (vim)
pub fn is_up_event(event: &Event) -> bool {
    matches!(key_code(event), Some(KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K')))
}

/// Vérifie si l'événement est la flèche vers le bas ou 'j' (vim)
pub fn is_down_event(event: &Event) -> bool {
    matches!(key_code(event), Some(KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J')))
}

/// Vérifie si l'événement est 'l' ou → (période suivante)
pub fn is_next_timeframe_event(event: &Event) -> bool {
    matches!(key_code(event), Some(KeyCode::Char('l') | KeyCode::Right))
}

/// Vérifie si l'événement est 'h' ou ← (période précédente)
pub fn is_previous_timeframe_event(event: &Event) -> bool {
    matches!(key_code(event), Some(KeyCode::Char('h') | KeyCode::Left))
}

/// Vérifie si l'événement est 'a' (ouvrir le modal d'ajout)
pub fn is_add_event(event: &Event) -> bool {
    matches!(key_code(event), Some(KeyCode::Char('a') | KeyCode::Char('A')))
}

/// Vérifie si l'événement est Tab (onglet suivant)
pub fn is_next_tab_event(event: &Event) -> bool {
    matches!(key_code(event), Some(KeyCode::Tab))
}

/// Vérifie si l'événement est Shift+Tab (onglet précédent)
pub fn is_previous_tab_event(event: &Event) -> bool {
    matches!(key_code(event), Some(KeyCode::BackTab))
}

/// Touches '1' à '5' : index de l'onglet (0..4)
pub fn tab_index_from_event(event: &Event) -> Option<usize> {
    match key_code(event) {
        Some(KeyCode::Char(c @ '1'..='5')) => c.to_digit(10).map(|d| d as usize - 1),
        _ => None,
    }
}

/// Touches des actions rapides (b / s / i / o)
pub fn order_action_from_event(event: &Event) -> Option<OrderAction> {
    match key_code(event) {
        Some(KeyCode::Char(c)) => OrderAction::ALL.into_iter().find(|a| a.key() == c),
        _ => None,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::empty()))
    }

    #[test]
    fn test_is_quit_event() {
        assert!(is_quit_event(&key(KeyCode::Char('q'))));
        assert!(!is_quit_event(&key(KeyCode::Char('a'))));
        assert!(!is_quit_event(&Event::Tick));
    }

    #[test]
    fn test_tab_index_from_event() {
        assert_eq!(tab_index_from_event(&key(KeyCode::Char('1'))), Some(0));
        assert_eq!(tab_index_from_event(&key(KeyCode::Char('4'))), Some(3));
        assert_eq!(tab_index_from_event(&key(KeyCode::Char('6'))), None);
        assert_eq!(tab_index_from_event(&Event::Tick), None);
    }

    #[test]
    fn test_order_action_from_event() {
        assert_eq!(order_action_from_event(&key(KeyCode::Char('b'))), Some(OrderAction::Buy));
        assert_eq!(order_action_from_event(&key(KeyCode::Char('o'))), Some(OrderAction::Withdraw));
        assert_eq!(order_action_from_event(&key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_timeframe_keys() {
        assert!(is_next_timeframe_event(&key(KeyCode::Char('l'))));
        assert!(is_previous_timeframe_event(&key(KeyCode::Left)));
        assert!(!is_next_timeframe_event(&key(KeyCode::Char('h'))));
    }
}
