// ============================================================================
// Shell - Rendu de l'interface principale
// ============================================================================
// Dessine la barre d'onglets, l'écran monté et le footer
//
// CONCEPTS RATATUI :
// 1. Frame : surface de dessin
// 2. Widgets : composants UI (Block, Tabs, Paragraph, etc.)
// 3. Layout : découpage de l'espace en zones
// 4. Style : couleurs et attributs de texte
// ============================================================================

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

use crate::app::App;
use crate::screens::{Screen, Tab};
use crate::ui::{home, market};

/// Dessine l'interface complète
///
/// CONCEPT RUST : Routing avec match sur enum
/// - Pattern matching sur l'écran monté
/// - Le compilateur garantit l'exhaustivité (tous les cas gérés)
pub fn render(frame: &mut Frame, app: &App) {
    let size = frame.size();
    let chunks = create_layout(size);

    render_tab_bar(frame, app.selected_tab(), chunks[0]);

    match app.screen() {
        Screen::Home(state) => home::render_home(frame, state, chunks[1]),
        Screen::Market(state) => market::render_market(frame, state, chunks[1]),
        other => market::render_placeholder(frame, other.tab(), chunks[1]),
    }

    render_footer(frame, app, chunks[2]);
}

/// Crée le layout principal (onglets, contenu, footer)
fn create_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Onglets : 3 lignes
            Constraint::Min(0),    // Contenu : tout le reste
            Constraint::Length(3), // Footer : 3 lignes
        ])
        .split(area)
        .to_vec()
}

// ============================================================================
// Barre d'onglets
// ============================================================================

/// Dessine les cinq onglets, l'onglet sélectionné en surbrillance
fn render_tab_bar(frame: &mut Frame, selected: Tab, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" OnyxTrading ")
        .title_alignment(Alignment::Center);

    let titles: Vec<Line> = Tab::ALL
        .iter()
        .map(|tab| Line::from(format!("{} {}", tab.index() + 1, tab.label())))
        .collect();

    let tabs = Tabs::new(titles)
        .block(block)
        .select(selected.index())
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(tabs, area);
}

// ============================================================================
// Footer : Instructions
// ============================================================================

fn key_span(key: &str, color: Color) -> Span<'_> {
    Span::styled(key, Style::default().fg(color).add_modifier(Modifier::BOLD))
}

/// Dessine le footer : confirmation de quit, statut ou raccourcis
fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let line = if app.is_awaiting_quit_confirmation() {
        Line::from(vec![
            Span::styled(
                "⚠  Appuyez sur ",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "[q]",
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD)
                    .add_modifier(Modifier::SLOW_BLINK),
            ),
            Span::styled(
                " à nouveau pour quitter, ou n'importe quelle autre touche pour annuler ⚠",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
        ])
    } else if app.is_modal_open() {
        Line::from(vec![key_span("[Esc/Enter]", Color::Blue), Span::raw(" Dismiss")])
    } else if let Some(status) = app.home().and_then(|h| h.status.as_deref()) {
        Line::from(Span::styled(status, Style::default().fg(Color::Green)))
    } else if app.is_on_home() {
        Line::from(vec![
            key_span("[q]", Color::Yellow),
            Span::raw(" Quit  "),
            key_span("[1-5/Tab]", Color::Yellow),
            Span::raw(" Tabs  "),
            key_span("[h l]", Color::Yellow),
            Span::raw(" Timeframe  "),
            key_span("[j k]", Color::Yellow),
            Span::raw(" Scroll  "),
            key_span("[a]", Color::Green),
            Span::raw(" Add  "),
            key_span("[b s i o]", Color::Green),
            Span::raw(" Actions"),
        ])
    } else {
        Line::from(vec![
            key_span("[q]", Color::Yellow),
            Span::raw(" Quit  "),
            key_span("[1-5/Tab]", Color::Yellow),
            Span::raw(" Tabs"),
        ])
    };

    let paragraph = Paragraph::new(vec![line])
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
