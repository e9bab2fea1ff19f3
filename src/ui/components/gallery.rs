//! Record gallery component.
//!
//! Renders the records matching the current filter/sort instructions as a
//! scrollable list, one row per record, with up to `gallery_columns`
//! attribute values per row. Shows a placeholder when filtering leaves
//! nothing to display.

use crate::constants::GALLERY_TITLE;
use crate::dataset::{Attribute, Record};
use crate::ui::components::scrollbar_helper::ScrollbarHelper;
use crate::ui::core::{actions::Action, Component};
use crate::utils::text;
use crossterm::event::{KeyCode, KeyEvent, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{block::BorderType, Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

pub struct GalleryView {
    records: Vec<Record>,
    attributes: Vec<Attribute>,
    total_records: usize,
    columns: usize,
    show_record_ids: bool,
    empty_placeholder: String,
    list_state: ListState,
    scrollbar_helper: ScrollbarHelper,
    focused: bool,
}

impl GalleryView {
    pub fn new(columns: u16, show_record_ids: bool, empty_placeholder: impl Into<String>) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            records: Vec::new(),
            attributes: Vec::new(),
            total_records: 0,
            columns: columns as usize,
            show_record_ids,
            empty_placeholder: empty_placeholder.into(),
            list_state,
            scrollbar_helper: ScrollbarHelper::new(),
            focused: false,
        }
    }

    /// Replace the visible records after an instruction or data change.
    /// The cursor is clamped rather than reset so small filter changes
    /// don't throw the user back to the top.
    pub fn update_data(&mut self, records: Vec<Record>, attributes: Vec<Attribute>, total_records: usize) {
        self.records = records;
        self.attributes = attributes;
        self.total_records = total_records;

        let last = self.records.len().saturating_sub(1);
        let selected = self.list_state.selected().unwrap_or(0).min(last);
        self.list_state.select(Some(selected));
    }

    pub fn visible_count(&self) -> usize {
        self.records.len()
    }

    pub fn selected_record(&self) -> Option<&Record> {
        self.records.get(self.list_state.selected()?)
    }

    fn select_next(&mut self) {
        if self.records.is_empty() {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0);
        let next = (current + 1).min(self.records.len() - 1);
        self.list_state.select(Some(next));
    }

    fn select_previous(&mut self) {
        let current = self.list_state.selected().unwrap_or(0);
        self.list_state.select(Some(current.saturating_sub(1)));
    }

    fn select_first(&mut self) {
        if !self.records.is_empty() {
            self.list_state.select(Some(0));
        }
    }

    fn select_last(&mut self) {
        if !self.records.is_empty() {
            self.list_state.select(Some(self.records.len() - 1));
        }
    }

    /// Handle mouse events within the gallery area.
    pub fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect) -> Action {
        let is_in_area = mouse.column >= area.x
            && mouse.column < area.x + area.width
            && mouse.row >= area.y
            && mouse.row < area.y + area.height;

        if !is_in_area {
            return Action::None;
        }

        match mouse.kind {
            MouseEventKind::ScrollUp => self.select_previous(),
            MouseEventKind::ScrollDown => self.select_next(),
            _ => {}
        }
        Action::None
    }

    fn record_line(&self, record: &Record, width: usize) -> String {
        let mut cells: Vec<String> = Vec::new();
        if self.show_record_ids {
            cells.push(record.id.to_string());
        }
        for attribute in self.attributes.iter().take(self.columns) {
            cells.push(record.value(&attribute.id).unwrap_or("-").to_string());
        }
        text::truncate(&cells.join(" │ "), width)
    }
}

impl Component for GalleryView {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.select_previous(),
            KeyCode::Home | KeyCode::Char('g') => self.select_first(),
            KeyCode::End | KeyCode::Char('G') => self.select_last(),
            _ => {}
        }
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let border_color = if self.focused { Color::Cyan } else { Color::DarkGray };
        let title = format!("{} ({}/{})", GALLERY_TITLE, self.records.len(), self.total_records);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(title)
            .title_style(Style::default().fg(Color::White))
            .border_style(Style::default().fg(border_color));

        if self.records.is_empty() {
            let placeholder = Paragraph::new(self.empty_placeholder.clone())
                .block(block)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray));
            f.render_widget(placeholder, rect);
            return;
        }

        let total_items = self.records.len();
        let (list_area, scrollbar_area) = ScrollbarHelper::calculate_areas(rect, total_items);
        let row_width = list_area.width.saturating_sub(2) as usize;

        let items: Vec<ListItem> = self
            .records
            .iter()
            .map(|record| ListItem::new(self.record_line(record, row_width)))
            .collect();

        let available_height = rect.height.saturating_sub(2) as usize;
        let current_position = self.list_state.selected().unwrap_or(0);
        self.scrollbar_helper
            .update_state(total_items, current_position, Some(available_height));

        let list = List::new(items)
            .block(block)
            .style(Style::default().fg(Color::White))
            .highlight_style(Style::default().bg(Color::DarkGray));

        f.render_stateful_widget(list, list_area, &mut self.list_state);
        self.scrollbar_helper.render(f, scrollbar_area);
    }

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn on_blur(&mut self) {
        self.focused = false;
    }
}
