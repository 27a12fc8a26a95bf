// ============================================================================
// Modal - "Add Cryptocurrency"
// ============================================================================
// Overlay centré dessiné par-dessus l'écran d'accueil.
//
// CONCEPT RATATUI : Clear
// - Efface la zone avant de dessiner le modal
// - Sinon le contenu en dessous "transparaît"
// ============================================================================

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

const MODAL_WIDTH: u16 = 40;
const MODAL_HEIGHT: u16 = 6;

/// Rectangle de taille (width, height) centré dans `area`, borné par `area`
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Dessine le modal d'ajout au centre de `area`
pub fn render_add_modal(frame: &mut Frame, area: Rect) {
    let rect = centered_rect(MODAL_WIDTH, MODAL_HEIGHT, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Blue))
        .title(Span::styled(
            " Add Cryptocurrency ",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ))
        .title_alignment(Alignment::Center);

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Pick an asset to track",
            Style::default().fg(Color::Gray),
        )),
        Line::from(vec![
            Span::styled(
                "[Esc]",
                Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Dismiss"),
        ]),
    ];

    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(text).block(block).alignment(Alignment::Center),
        rect,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 50);
        assert_eq!(centered_rect(40, 6, area), Rect::new(30, 22, 40, 6));
    }

    #[test]
    fn test_centered_rect_is_bounded() {
        let area = Rect::new(2, 3, 10, 4);
        assert_eq!(centered_rect(40, 6, area), area);
    }
}
