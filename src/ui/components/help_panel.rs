//! Help panel component

use crate::constants::HELP_TITLE;
use crate::ui::layout::LayoutManager;
use ratatui::{
    style::{Color, Style},
    widgets::{block::BorderType, Block, Borders, Clear, Paragraph},
    Frame,
};

const HELP_CONTENT: &str = r"
GALLERIST - Record Gallery Browser
==================================

FOCUS
-----
Tab         Focus next widget (filter, sort, gallery)
Shift+Tab   Focus previous widget

DROP-DOWNS
----------
Enter/Space Open the drop-down / pick the highlighted option
j/k or ↑↓   Move the highlight inside an open drop-down
Esc         Close the drop-down
d           Toggle sort direction (sort widget)

Multi-select filters stay open while toggling checkboxes;
single-select drop-downs close on pick.

GALLERY
-------
j/k or ↑↓   Move between records
g/G         Jump to first/last record
Mouse wheel Scroll records

DATA
----
r           Reload the dataset from its source

GENERAL CONTROLS
----------------
?           Toggle this help panel
↑↓          Scroll help content
q / Ctrl+C  Quit application

Press 'Esc' or '?' to close this help panel
";

/// Help panel component
pub struct HelpPanel;

impl HelpPanel {
    /// Render the help panel as a centered overlay.
    pub fn render(f: &mut Frame, scroll_offset: usize) -> usize {
        let screen = f.area();
        let (help_width, help_height) = LayoutManager::help_panel_dimensions(screen.width, screen.height);
        let help_area = LayoutManager::centered_rect(help_width, help_height, screen);
        f.render_widget(Clear, help_area);

        let lines: Vec<&str> = HELP_CONTENT.lines().collect();
        let visible_height = help_area.height.saturating_sub(2) as usize;
        let max_scroll = lines.len().saturating_sub(visible_height);
        let scroll_offset = scroll_offset.min(max_scroll);

        let visible: Vec<&str> = lines.iter().skip(scroll_offset).take(visible_height).copied().collect();

        let panel = Paragraph::new(visible.join("\n")).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(HELP_TITLE)
                .title_style(Style::default().fg(Color::White))
                .border_style(Style::default().fg(Color::Cyan)),
        );

        f.render_widget(panel, help_area);
        max_scroll
    }
}
