// ============================================================================
// Enum : Timeframe
// ============================================================================
// Fenêtre d'affichage du graphique de performance du portefeuille
//
// CONCEPT RUST : Enum fermé
// - Seules 4 valeurs existent : 1D, 1W, 1M, 1Y
// - Une sélection hors de cet ensemble est impossible à construire
// ============================================================================

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Période affichée par le graphique de performance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Timeframe {
    /// 1 jour
    #[serde(rename = "1D")]
    OneDay,
    /// 1 semaine
    #[serde(rename = "1W")]
    OneWeek,
    /// 1 mois
    #[serde(rename = "1M")]
    OneMonth,
    /// 1 an
    #[serde(rename = "1Y")]
    OneYear,
}

impl Timeframe {
    /// Toutes les périodes, dans l'ordre du sélecteur
    pub const ALL: [Timeframe; 4] = [
        Timeframe::OneDay,
        Timeframe::OneWeek,
        Timeframe::OneMonth,
        Timeframe::OneYear,
    ];

    /// Retourne le label pour l'affichage
    pub fn label(&self) -> &'static str {
        match self {
            Timeframe::OneDay => "1D",
            Timeframe::OneWeek => "1W",
            Timeframe::OneMonth => "1M",
            Timeframe::OneYear => "1Y",
        }
    }

    /// Position dans le sélecteur (0..4)
    pub fn index(&self) -> usize {
        match self {
            Timeframe::OneDay => 0,
            Timeframe::OneWeek => 1,
            Timeframe::OneMonth => 2,
            Timeframe::OneYear => 3,
        }
    }

    /// Retourne la période suivante (cycle)
    pub fn next(&self) -> Timeframe {
        match self {
            Timeframe::OneDay => Timeframe::OneWeek,
            Timeframe::OneWeek => Timeframe::OneMonth,
            Timeframe::OneMonth => Timeframe::OneYear,
            Timeframe::OneYear => Timeframe::OneDay, // Boucle
        }
    }

    /// Retourne la période précédente (cycle)
    pub fn previous(&self) -> Timeframe {
        match self {
            Timeframe::OneDay => Timeframe::OneYear, // Boucle
            Timeframe::OneWeek => Timeframe::OneDay,
            Timeframe::OneMonth => Timeframe::OneWeek,
            Timeframe::OneYear => Timeframe::OneMonth,
        }
    }
}

impl Default for Timeframe {
    /// Période par défaut : 1 jour
    fn default() -> Self {
        Timeframe::OneDay
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Timeframe {
    type Err = String;

    /// Parse "1D", "1w", ... (insensible à la casse)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_uppercase();
        Timeframe::ALL
            .into_iter()
            .find(|tf| tf.label() == wanted)
            .ok_or_else(|| format!("unknown timeframe '{}' (expected 1D, 1W, 1M or 1Y)", s))
    }
}
