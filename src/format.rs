// ============================================================================
// Formatage des montants et variations
// ============================================================================
// Fonctions pures utilisées par toutes les cartes et sections :
// - format_currency : "$125000.45"
// - format_signed_percent : "+2.50%", "-1.20%", "0.00%"
// - color_for_change : hausse / baisse
//
// CONCEPT RUST : Fonctions pures
// - Pas d'état, pas d'effet de bord, pas d'erreur possible
// - Même entrée => même sortie (facile à tester)
// ============================================================================

use rust_decimal::{Decimal, RoundingStrategy};

/// Symbole monétaire affiché devant les montants
pub const CURRENCY_SYMBOL: &str = "$";

/// Sens d'une variation pour le choix de couleur
///
/// Zéro est classé `Negative` : une variation nulle s'affiche comme une
/// baisse, comme dans l'application mobile d'origine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeColor {
    Positive,
    Negative,
}

/// Arrondit à 2 décimales et force l'échelle à 2 ("50000" -> "50000.00")
///
/// Un résultat nul est normalisé pour ne jamais afficher "-0.00".
fn two_decimals(value: Decimal) -> String {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        rounded = Decimal::ZERO;
    }
    rounded.rescale(2);
    rounded.to_string()
}

/// Formate un montant : symbole + 2 décimales, sans séparateur de milliers
pub fn format_currency(amount: Decimal) -> String {
    format!("{}{}", CURRENCY_SYMBOL, two_decimals(amount))
}

/// Formate une variation : "+" seulement si strictement positive
///
/// Les valeurs négatives gardent leur propre signe "-".
pub fn format_signed_percent(change: Decimal) -> String {
    let sign = if change > Decimal::ZERO { "+" } else { "" };
    format!("{}{}%", sign, two_decimals(change))
}

/// Positive si change > 0, Negative sinon (zéro compris)
pub fn color_for_change(change: Decimal) -> ChangeColor {
    if change > Decimal::ZERO {
        ChangeColor::Positive
    } else {
        ChangeColor::Negative
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(dec!(125000.45)), "$125000.45");
        assert_eq!(format_currency(dec!(50000)), "$50000.00");
        assert_eq!(format_currency(dec!(1.25)), "$1.25");
        assert_eq!(format_currency(dec!(0)), "$0.00");
    }

    #[test]
    fn test_format_currency_rounds_half_away_from_zero() {
        assert_eq!(format_currency(dec!(34.555)), "$34.56");
        assert_eq!(format_currency(dec!(34.554)), "$34.55");
    }

    #[test]
    fn test_format_signed_percent() {
        assert_eq!(format_signed_percent(dec!(2.5)), "+2.50%");
        assert_eq!(format_signed_percent(dec!(-1.2)), "-1.20%");
        assert_eq!(format_signed_percent(dec!(0)), "0.00%");
    }

    #[test]
    fn test_plus_sign_iff_strictly_positive() {
        let samples = [dec!(5.0), dec!(0.001), dec!(0), dec!(-0.001), dec!(-0.8), dec!(-100)];
        for c in samples {
            let text = format_signed_percent(c);
            assert_eq!(text.starts_with('+'), c > Decimal::ZERO, "{} -> {}", c, text);
        }
    }

    #[test]
    fn test_tiny_negative_never_renders_negative_zero() {
        assert_eq!(format_signed_percent(dec!(-0.001)), "0.00%");
    }

    #[test]
    fn test_color_for_change() {
        assert_eq!(color_for_change(dec!(2.5)), ChangeColor::Positive);
        assert_eq!(color_for_change(dec!(-1.2)), ChangeColor::Negative);
        assert_eq!(color_for_change(dec!(0)), ChangeColor::Negative);
    }
}
