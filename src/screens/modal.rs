// ============================================================================
// Modal : AddEntryModal
// ============================================================================
// Overlay "Add Cryptocurrency" ouvert depuis la section Watchlist.
//
// CONCEPT : State machine à deux états
// - Hidden (initial) --open--> Visible
// - Visible --dismiss--> Hidden
// - Pas d'état terminal, pas de formulaire à soumettre
// ============================================================================

/// États du modal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Hidden,
    Visible,
}

/// Modal d'ajout à la watchlist
#[derive(Debug, Clone, Default)]
pub struct AddEntryModal {
    state: ModalState,
}

impl AddEntryModal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ModalState {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state == ModalState::Visible
    }

    /// Hidden -> Visible (déjà visible : reste visible)
    pub fn open(&mut self) {
        self.state = ModalState::Visible;
    }

    /// Visible -> Hidden (déjà caché : reste caché)
    pub fn dismiss(&mut self) {
        self.state = ModalState::Hidden;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_transitions() {
        let mut modal = AddEntryModal::new();
        assert_eq!(modal.state(), ModalState::Hidden);

        modal.open();
        assert_eq!(modal.state(), ModalState::Visible);
        assert!(modal.is_visible());

        modal.dismiss();
        assert_eq!(modal.state(), ModalState::Hidden);

        // Dismiss deux fois : idempotent
        modal.dismiss();
        assert_eq!(modal.state(), ModalState::Hidden);
    }

    #[test]
    fn test_modal_toggles_indefinitely() {
        let mut modal = AddEntryModal::new();
        for _ in 0..3 {
            modal.open();
            assert!(modal.is_visible());
            modal.dismiss();
            assert!(!modal.is_visible());
        }
    }
}
