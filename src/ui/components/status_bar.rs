//! Status bar component

use crate::constants::{LOADING_MESSAGE, STATUS_HINTS};
use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, loading: bool, error_message: Option<&String>) {
        let (status_text, status_color) = if let Some(error) = error_message {
            (error.clone(), Color::Red)
        } else if loading {
            (LOADING_MESSAGE.to_string(), Color::Yellow)
        } else {
            (STATUS_HINTS.to_string(), Color::Gray)
        };

        let status_bar = Paragraph::new(status_text)
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }
}
