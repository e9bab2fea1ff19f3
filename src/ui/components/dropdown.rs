//! Shared mechanics of the drop-down widgets.
//!
//! A drop-down is a one-line bordered trigger showing the current
//! selection, plus a popup option list overlaid on whatever sits below the
//! header while the drop-down is open. The filter and sort widgets wrap a
//! [`DropdownCore`] and add their own key handling and dispatch on top.

use crate::constants::{CHECKBOX_CHECKED, CHECKBOX_UNCHECKED, DROPDOWN_MAX_POPUP_ROWS};
use crate::selector::{OptionSelector, SelectOption};
use crate::utils::text;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, Clear, List, ListItem, ListState},
    Frame,
};

pub struct DropdownCore {
    title: String,
    pub selector: OptionSelector,
    open: bool,
    highlight: usize,
    list_state: ListState,
    focused: bool,
}

impl DropdownCore {
    pub fn new(title: impl Into<String>, selector: OptionSelector) -> Self {
        Self {
            title: title.into(),
            selector,
            open: false,
            highlight: 0,
            list_state: ListState::default(),
            focused: false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
        if !focused {
            self.close_popup();
        }
    }

    /// Open the popup with the cursor on the first selected option, or at
    /// the top when nothing is selected.
    pub fn open_popup(&mut self) {
        if self.selector.options().is_empty() {
            return;
        }
        self.highlight = self
            .selector
            .selection()
            .first()
            .and_then(|selected| {
                self.selector
                    .options()
                    .iter()
                    .position(|option| option.value == selected.value)
            })
            .unwrap_or(0);
        self.list_state.select(Some(self.highlight));
        self.open = true;
    }

    pub fn close_popup(&mut self) {
        self.open = false;
    }

    pub fn highlight_next(&mut self) {
        let count = self.selector.options().len();
        if count == 0 {
            return;
        }
        self.highlight = (self.highlight + 1) % count;
        self.list_state.select(Some(self.highlight));
    }

    pub fn highlight_previous(&mut self) {
        let count = self.selector.options().len();
        if count == 0 {
            return;
        }
        self.highlight = (self.highlight + count - 1) % count;
        self.list_state.select(Some(self.highlight));
    }

    pub fn highlighted_option(&self) -> Option<SelectOption> {
        self.selector.options().get(self.highlight).cloned()
    }

    /// Toggle the highlighted option through the selector. Selection
    /// change notification happens inside the selector, not here.
    pub fn toggle_highlighted(&mut self) {
        if let Some(option) = self.highlighted_option() {
            self.selector.toggle(&option);
        }
    }

    /// Render the closed trigger line, with an optional right-aligned
    /// indicator (the sort widget's direction arrow).
    pub fn render_trigger(&mut self, f: &mut Frame, rect: Rect, indicator: Option<&str>) {
        let border_color = if self.focused { Color::Cyan } else { Color::DarkGray };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(self.title.clone())
            .title_style(Style::default().fg(Color::White))
            .border_style(Style::default().fg(border_color));

        let inner = block.inner(rect);
        f.render_widget(block, rect);

        let is_placeholder = self
            .selector
            .selection()
            .iter()
            .all(|option| option.value.is_empty());
        let caption_style = if is_placeholder {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::White)
        };

        let indicator_width = indicator.map(|ind| ind.chars().count() + 1).unwrap_or(0);
        let caption_width = (inner.width as usize).saturating_sub(indicator_width);
        let mut spans = vec![Span::styled(
            text::fit(&self.selector.display_caption(), caption_width),
            caption_style,
        )];
        if let Some(indicator) = indicator {
            spans.push(Span::styled(
                format!(" {indicator}"),
                Style::default().fg(Color::Yellow),
            ));
        }

        f.render_widget(Line::from(spans), inner);
    }

    /// Render the popup option list below the trigger. Must run after the
    /// widgets underneath so the popup overlays them.
    pub fn render_popup(&mut self, f: &mut Frame, rect: Rect) {
        if !self.open {
            return;
        }

        let screen = f.area();
        let below = screen.height.saturating_sub(rect.y + rect.height);
        let wanted = (self.selector.options().len() as u16).saturating_add(2);
        let height = wanted.min(DROPDOWN_MAX_POPUP_ROWS).min(below);
        if height < 3 {
            return;
        }
        let popup_area = Rect::new(rect.x, rect.y + rect.height, rect.width, height);

        let multi_select = self.selector.is_multi_select();
        let items: Vec<ListItem> = self
            .selector
            .options()
            .iter()
            .map(|option| {
                let selected = self.selector.is_selected(&option.value);
                let line = if multi_select {
                    let marker = if selected { CHECKBOX_CHECKED } else { CHECKBOX_UNCHECKED };
                    format!("{marker}{}", option.caption)
                } else {
                    option.caption.clone()
                };
                let style = if selected && !multi_select {
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                ListItem::new(text::truncate(&line, popup_area.width.saturating_sub(2) as usize)).style(style)
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD));

        f.render_widget(Clear, popup_area);
        f.render_stateful_widget(list, popup_area, &mut self.list_state);
    }
}
