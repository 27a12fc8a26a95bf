// ============================================================================
// Identifiants : RecordId et IdGenerator
// ============================================================================
// Chaque enregistrement affiché (holding, entrée de watchlist) porte un
// identifiant explicite attribué à la construction par un compteur.
//
// CONCEPT RUST : Newtype pattern
// - RecordId(u64) est un type distinct de u64
// - Impossible de confondre un identifiant avec une quantité
// ============================================================================

use std::fmt;

/// Identifiant opaque d'un enregistrement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(u64);

impl RecordId {
    /// Valeur brute (utile pour les logs)
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Compteur monotone qui distribue des RecordId uniques
///
/// Un générateur vit aussi longtemps que le propriétaire des données
/// (un écran monté, un store mock). Les ids commencent à 1.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Retourne le prochain identifiant
    pub fn next_id(&mut self) -> RecordId {
        self.last += 1;
        RecordId(self.last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique_and_ordered() {
        let mut ids = IdGenerator::new();
        let a = ids.next_id();
        let b = ids.next_id();
        let c = ids.next_id();

        assert_ne!(a, b);
        assert!(a < b && b < c);
        assert_eq!(a.get(), 1);
        assert_eq!(c.to_string(), "#3");
    }
}
