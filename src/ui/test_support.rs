// Helpers de rendu pour les tests (TestBackend)

use ratatui::{backend::TestBackend, buffer::Buffer, Frame, Terminal};

/// Dessine dans un terminal virtuel et retourne le buffer obtenu
pub fn draw(width: u16, height: u16, render: impl FnOnce(&mut Frame)) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(render).unwrap();
    terminal.backend().buffer().clone()
}

/// Texte du buffer, une ligne par rangée
pub fn screen_text(buffer: &Buffer) -> String {
    let width = buffer.area.width as usize;
    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
