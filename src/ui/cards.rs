// ============================================================================
// Cartes de présentation
// ============================================================================
// Une carte = un enregistrement rendu sur une ligne.
// Pas d'état, pas de callback, pas d'erreur possible.
//
// Format :
//   Bitcoin          BTC          $54000.00     +2.50%
// ============================================================================

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use crate::format::{color_for_change, format_currency, format_signed_percent, ChangeColor};
use crate::models::{Headline, Holding, WatchlistEntry};
use rust_decimal::Decimal;

/// Couleur ratatui d'une variation
pub fn change_style(change: Decimal) -> Style {
    match color_for_change(change) {
        ChangeColor::Positive => Style::default().fg(Color::Green),
        ChangeColor::Negative => Style::default().fg(Color::Red),
    }
}

fn name_span(name: &str) -> Span<'_> {
    Span::styled(
        format!(" {:<16}", name),
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    )
}

fn symbol_span(symbol: &str) -> Span<'static> {
    Span::styled(
        format!("{:<8}", symbol.to_uppercase()),
        Style::default().fg(Color::Gray),
    )
}

/// Carte générique : nom, ticker, prix, variation colorée
pub fn crypto_card<'a>(name: &'a str, symbol: &str, price: Decimal, change: Decimal) -> Line<'a> {
    Line::from(vec![
        name_span(name),
        symbol_span(symbol),
        Span::styled(
            format!("{:>14}", format_currency(price)),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("{:>10}", format_signed_percent(change)), change_style(change)),
    ])
}

/// Ligne de la watchlist
pub fn watchlist_item(entry: &WatchlistEntry) -> Line<'_> {
    crypto_card(&entry.name, &entry.symbol, entry.price, entry.change)
}

/// Ligne de la répartition du portefeuille : valeur et part en %
pub fn holding_row(holding: &Holding) -> Line<'_> {
    Line::from(vec![
        name_span(&holding.name),
        symbol_span(&holding.symbol),
        Span::styled(
            format!("{:>14}", format_currency(holding.value)),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("{:>10}", format!("{}%", holding.percentage)),
            Style::default().fg(Color::Gray),
        ),
    ])
}

/// Ligne de news : titre + heure
pub fn news_row(headline: &Headline) -> Line<'_> {
    Line::from(vec![
        Span::styled(" 📰 ", Style::default().fg(Color::Blue)),
        Span::styled(headline.title.as_str(), Style::default().fg(Color::White)),
        Span::styled(
            format!("  {}", headline.time_label()),
            Style::default().fg(Color::DarkGray),
        ),
    ])
}

/// Texte brut d'une ligne (sans style)
pub fn line_text(line: &Line<'_>) -> String {
    line.spans.iter().map(|span| span.content.as_ref()).collect()
}
