// ============================================================================
// Home - Sections de l'écran d'accueil
// ============================================================================
// Empile les sections de haut en bas, à partir de la section `scroll` :
//   1. PortfolioHeader        - valeur totale
//   2. PerformanceChartPanel  - sélecteur de période + placeholder
//   3. HoldingsSection        - "Breakdown by Asset"
//   4. WatchlistSection       - watchlist + bouton d'ajout
//   5. MarketTrendsSection    - placeholder
//   6. QuickActionsSection    - Buy / Sell / Deposit / Withdraw
//   7. MarketNewsSection      - titres de news
// Le modal d'ajout est dessiné par-dessus s'il est visible.
//
// CONCEPT : Rendu = fonction pure de l'état
// - On ne lit que &HomeScreen
// - Aucune section ne modifie l'état
// ============================================================================

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{block::Title, Block, Borders, Paragraph, Tabs},
    Frame,
};

use rust_decimal::Decimal;

use crate::format::format_currency;
use crate::models::{Headline, Holding, Timeframe, WatchlistEntry};
use crate::screens::home::SECTION_COUNT;
use crate::screens::{HomeScreen, SectionState};
use crate::services::OrderAction;
use crate::ui::{cards, modal};

/// Sections de l'accueil, dans l'ordre d'affichage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    PortfolioHeader,
    PerformanceChart,
    Holdings,
    Watchlist,
    MarketTrends,
    QuickActions,
    MarketNews,
}

pub const SECTIONS: [Section; SECTION_COUNT] = [
    Section::PortfolioHeader,
    Section::PerformanceChart,
    Section::Holdings,
    Section::Watchlist,
    Section::MarketTrends,
    Section::QuickActions,
    Section::MarketNews,
];

/// Hauteur des placeholders (graphique, tendances)
const CHART_HEIGHT: u16 = 5;
const TRENDS_HEIGHT: u16 = 3;

// ============================================================================
// Point d'entrée
// ============================================================================

/// Dessine l'écran d'accueil dans `area`
pub fn render_home(frame: &mut Frame, home: &HomeScreen, area: Rect) {
    let first = home.scroll.min(SECTIONS.len() - 1);
    let bottom = area.y + area.height;
    let mut y = area.y;

    for section in &SECTIONS[first..] {
        if y >= bottom {
            break;
        }
        let height = section_height(*section, home).min(bottom - y);
        let rect = Rect::new(area.x, y, area.width, height);
        render_section(frame, *section, home, rect);
        y += height;
    }

    if home.is_modal_visible() {
        modal::render_add_modal(frame, area);
    }
}

fn render_section(frame: &mut Frame, section: Section, home: &HomeScreen, area: Rect) {
    match section {
        Section::PortfolioHeader => render_portfolio_header(frame, &home.portfolio_value, area),
        Section::PerformanceChart => render_performance_chart(frame, home.selected_timeframe, area),
        Section::Holdings => render_holdings(frame, &home.holdings, area),
        Section::Watchlist => render_watchlist(frame, &home.watchlist, area),
        Section::MarketTrends => render_market_trends(frame, area),
        Section::QuickActions => render_quick_actions(frame, area),
        Section::MarketNews => render_market_news(frame, &home.headlines, area),
    }
}

/// Hauteur souhaitée d'une section (bordures comprises)
pub fn section_height(section: Section, home: &HomeScreen) -> u16 {
    fn rows<T>(state: &SectionState<Vec<T>>) -> u16 {
        match state {
            SectionState::Ready(items) => u16::try_from(items.len().max(1)).unwrap_or(u16::MAX),
            SectionState::Unavailable(_) => 1,
        }
    }

    let inner = match section {
        Section::PortfolioHeader => 2,
        Section::PerformanceChart => 1 + CHART_HEIGHT,
        Section::Holdings => rows(&home.holdings),
        Section::Watchlist => rows(&home.watchlist),
        Section::MarketTrends => TRENDS_HEIGHT,
        Section::QuickActions => 3,
        Section::MarketNews => rows(&home.headlines),
    };
    inner.saturating_add(2)
}

// ============================================================================
// Helpers communs
// ============================================================================

/// Bloc titré d'une section
fn section_block(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ))
}

/// Panneau affiché quand le service d'une section a échoué
fn render_unavailable(frame: &mut Frame, block: Block, reason: &str, area: Rect) {
    let paragraph = Paragraph::new(Line::from(Span::styled(
        format!("⚠ Unavailable: {}", reason),
        Style::default().fg(Color::Yellow),
    )))
    .block(block);
    frame.render_widget(paragraph, area);
}

/// Ligne grisée pour une liste vide
fn empty_line(text: &str) -> Line<'_> {
    Line::from(Span::styled(format!(" {}", text), Style::default().fg(Color::Gray)))
}

/// Placeholder encadré avec un texte centré
fn placeholder(text: &str) -> Paragraph<'_> {
    Paragraph::new(Line::from(Span::styled(text, Style::default().fg(Color::White))))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
}

// ============================================================================
// Lignes des sections (pures, testables)
// ============================================================================

/// Une ligne par position, dans l'ordre
pub fn holding_lines(holdings: &[Holding]) -> Vec<Line<'_>> {
    holdings.iter().map(cards::holding_row).collect()
}

/// Une ligne par entrée de watchlist, dans l'ordre
pub fn watchlist_lines(entries: &[WatchlistEntry]) -> Vec<Line<'_>> {
    entries.iter().map(cards::watchlist_item).collect()
}

/// Une ligne par titre, dans l'ordre
pub fn news_lines(headlines: &[Headline]) -> Vec<Line<'_>> {
    headlines.iter().map(cards::news_row).collect()
}

// ============================================================================
// Sections
// ============================================================================

fn render_portfolio_header(frame: &mut Frame, value: &SectionState<Decimal>, area: Rect) {
    let block = section_block("Total Portfolio Value");
    let value = match value {
        SectionState::Ready(value) => *value,
        SectionState::Unavailable(reason) => {
            render_unavailable(frame, block, reason, area);
            return;
        }
    };

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!(" {}", format_currency(value)),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
    ];
    frame.render_widget(Paragraph::new(text).block(block), area);
}

fn render_performance_chart(frame: &mut Frame, selected: Timeframe, area: Rect) {
    let block = section_block("Portfolio Performance");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    // Sélecteur de période (équivalent du segmented picker)
    let labels: Vec<Line> = Timeframe::ALL.iter().map(|tf| Line::from(tf.label())).collect();
    let selector = Tabs::new(labels)
        .select(selected.index())
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .divider("│");
    frame.render_widget(selector, chunks[0]);

    let label = format!("Interactive Chart Here ({})", selected.label());
    frame.render_widget(placeholder(&label), chunks[1]);
}

fn render_holdings(frame: &mut Frame, holdings: &SectionState<Vec<Holding>>, area: Rect) {
    let block = section_block("Breakdown by Asset");
    let lines = match holdings {
        SectionState::Ready(items) if items.is_empty() => vec![empty_line("No holdings")],
        SectionState::Ready(items) => holding_lines(items),
        SectionState::Unavailable(reason) => {
            render_unavailable(frame, block, reason, area);
            return;
        }
    };
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_watchlist(frame: &mut Frame, watchlist: &SectionState<Vec<WatchlistEntry>>, area: Rect) {
    // Bouton "+" : la touche [a] ouvre le modal d'ajout
    let block = section_block("Watchlist").title(
        Title::from(Span::styled(
            " [a] + ",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Right),
    );

    let lines = match watchlist {
        SectionState::Ready(items) if items.is_empty() => vec![empty_line("Watchlist vide")],
        SectionState::Ready(items) => watchlist_lines(items),
        SectionState::Unavailable(reason) => {
            render_unavailable(frame, block, reason, area);
            return;
        }
    };
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_market_trends(frame: &mut Frame, area: Rect) {
    let block = section_block("AI Market Trends");
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(placeholder("AI Predictions & Insights Here"), inner);
}

/// Couleur d'un bouton d'action rapide
fn action_color(action: OrderAction) -> Color {
    match action {
        OrderAction::Buy => Color::Green,
        OrderAction::Sell => Color::Red,
        OrderAction::Deposit => Color::Blue,
        OrderAction::Withdraw => Color::Rgb(255, 165, 0),
    }
}

fn render_quick_actions(frame: &mut Frame, area: Rect) {
    let block = section_block("Quick Actions");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(inner);

    for (action, chunk) in OrderAction::ALL.iter().zip(chunks.iter()) {
        let color = action_color(*action);
        let button = Paragraph::new(Line::from(vec![
            Span::styled(format!("[{}] ", action.key()), Style::default().fg(Color::Yellow)),
            Span::styled(
                action.label(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
        ]))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );
        frame.render_widget(button, *chunk);
    }
}

fn render_market_news(frame: &mut Frame, headlines: &SectionState<Vec<Headline>>, area: Rect) {
    let block = section_block("Market News");
    let lines = match headlines {
        SectionState::Ready(items) if items.is_empty() => vec![empty_line("No news")],
        SectionState::Ready(items) => news_lines(items),
        SectionState::Unavailable(reason) => {
            render_unavailable(frame, block, reason, area);
            return;
        }
    };
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::IdGenerator;
    use crate::screens::ScreenSettings;
    use crate::services::Services;
    use crate::ui::cards::line_text;
    use crate::ui::test_support::{draw, screen_text};
    use rust_decimal_macros::dec;

    fn holdings(n: usize) -> Vec<Holding> {
        let mut ids = IdGenerator::new();
        (0..n)
            .map(|i| {
                Holding::new(
                    ids.next_id(),
                    format!("Coin {}", i),
                    format!("C{}", i),
                    10,
                    dec!(100),
                    dec!(1),
                )
            })
            .collect()
    }

    fn mounted() -> HomeScreen {
        HomeScreen::mount(&Services::mock(), &ScreenSettings::default())
    }

    #[test]
    fn test_one_row_per_holding_in_order() {
        for n in [0, 1, 7] {
            let items = holdings(n);
            let lines = holding_lines(&items);
            assert_eq!(lines.len(), n);
            for (i, line) in lines.iter().enumerate() {
                assert!(line_text(line).contains(&format!("C{}", i)));
            }
        }
    }

    #[test]
    fn test_holdings_section_height_follows_rows() {
        let mut home = HomeScreen::new(dec!(0), holdings(5), Vec::new(), Vec::new());
        assert_eq!(section_height(Section::Holdings, &home), 7);

        home.holdings = SectionState::Ready(Vec::new());
        assert_eq!(section_height(Section::Holdings, &home), 3);
    }

    #[test]
    fn test_huge_watchlist_height_saturates() {
        let mut ids = IdGenerator::new();
        let entries = (0..70_000)
            .map(|_| WatchlistEntry::new(ids.next_id(), "Ripple", "XRP", dec!(1), dec!(0)))
            .collect();
        let home = HomeScreen::new(dec!(0), Vec::new(), entries, Vec::new());
        assert_eq!(section_height(Section::Watchlist, &home), u16::MAX);
    }

    #[test]
    fn test_chart_label_follows_selected_timeframe() {
        let mut home = mounted();
        home.select_timeframe(Timeframe::OneYear);
        let text = screen_text(&draw(100, 60, |f| render_home(f, &home, Rect::new(0, 0, 100, 60))));
        assert!(text.contains("Interactive Chart Here (1Y)"));
        assert!(!text.contains("Interactive Chart Here (1D)"));
    }

    #[test]
    fn test_render_home_shows_sections() {
        let home = mounted();
        let text = screen_text(&draw(100, 60, |f| render_home(f, &home, Rect::new(0, 0, 100, 60))));

        assert!(text.contains("Total Portfolio Value"));
        assert!(text.contains("$125000.45"));
        assert!(text.contains("Interactive Chart Here (1D)"));
        assert!(text.contains("Breakdown by Asset"));
        assert!(text.contains("Ripple"));
        assert!(text.contains("+2.10%"));
        assert!(text.contains("-0.80%"));
        assert!(text.contains("News Headline 3"));
        assert!(!text.contains("Add Cryptocurrency"));
    }

    #[test]
    fn test_holdings_render_in_order() {
        let home = mounted();
        let text = screen_text(&draw(100, 60, |f| render_home(f, &home, Rect::new(0, 0, 100, 60))));

        let positions: Vec<usize> = ["Bitcoin", "Ethereum", "Solana", "Cardano"]
            .iter()
            .map(|name| text.find(name).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_modal_overlay_when_visible() {
        let mut home = mounted();
        home.open_add_modal();
        let text = screen_text(&draw(100, 60, |f| render_home(f, &home, Rect::new(0, 0, 100, 60))));
        assert!(text.contains("Add Cryptocurrency"));
    }

    #[test]
    fn test_scroll_hides_leading_sections() {
        let mut home = mounted();
        home.scroll = 2;
        let text = screen_text(&draw(100, 60, |f| render_home(f, &home, Rect::new(0, 0, 100, 60))));
        assert!(!text.contains("Total Portfolio Value"));
        assert!(text.contains("Breakdown by Asset"));
    }

    #[test]
    fn test_unavailable_section_renders_reason() {
        let mut home = mounted();
        home.headlines = SectionState::Unavailable("News feed unavailable: offline".to_string());
        let text = screen_text(&draw(100, 60, |f| render_home(f, &home, Rect::new(0, 0, 100, 60))));
        assert!(text.contains("Unavailable: News feed unavailable: offline"));
        assert!(text.contains("Breakdown by Asset"));
    }

    #[test]
    fn test_small_terminal_does_not_panic() {
        let home = mounted();
        draw(20, 5, |f| render_home(f, &home, Rect::new(0, 0, 20, 5)));
    }
}
