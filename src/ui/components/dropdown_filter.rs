//! Drop-down filter widget.
//!
//! Offers the distinct values of one filterable attribute. Single-select
//! mode gets a synthetic "no filter" entry at the top; multi-select mode
//! toggles checkboxes and keeps the popup open between toggles. Every
//! selection change is dispatched as [`Action::FilterChanged`] through the
//! selector's listener.

use crate::constants::FILTER_TITLE;
use crate::dataset::Dataset;
use crate::selector::{OptionSelector, SelectOption};
use crate::ui::components::dropdown::DropdownCore;
use crate::ui::core::{actions::Action, Component};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, Frame};
use tokio::sync::mpsc;

pub struct DropdownFilter {
    core: DropdownCore,
    attribute_id: String,
}

impl DropdownFilter {
    /// Build the widget and wire its selector to the action channel.
    ///
    /// `default_spec` is the initial selection: a single value, or
    /// comma-separated values in multi-select mode. It is resolved once
    /// per option list generation; unmatched values degrade silently.
    pub fn new(
        attribute_id: impl Into<String>,
        multi_select: bool,
        empty_caption: impl Into<String>,
        default_spec: &str,
        action_tx: mpsc::UnboundedSender<Action>,
    ) -> Self {
        let mut selector = OptionSelector::new(multi_select, empty_caption);
        selector.set_default_spec(default_spec);
        selector.set_listener(Box::new(move |selection| {
            let values = selection.iter().map(|option| option.value.clone()).collect();
            let _ = action_tx.send(Action::FilterChanged(values));
        }));

        Self {
            core: DropdownCore::new(FILTER_TITLE, selector),
            attribute_id: attribute_id.into(),
        }
    }

    pub fn attribute_id(&self) -> &str {
        &self.attribute_id
    }

    pub fn is_open(&self) -> bool {
        self.core.is_open()
    }

    pub fn selection(&self) -> &[SelectOption] {
        self.core.selector.selection()
    }

    /// Rebuild the option list from the dataset. Single-select mode is
    /// prefixed with the synthetic empty option so the filter can be
    /// cleared again; multi-select clears by unchecking everything.
    pub fn update_options(&mut self, dataset: &Dataset) {
        let mut options = Vec::new();
        if !self.core.selector.is_multi_select() {
            options.push(SelectOption::empty(self.core.selector.empty_caption()));
        }
        options.extend(dataset.filter_options(&self.attribute_id));
        self.core.selector.set_options(options);
    }
}

impl Component for DropdownFilter {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if !self.core.is_open() {
            return match key.code {
                KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Down => {
                    self.core.open_popup();
                    Action::None
                }
                _ => Action::None,
            };
        }

        match key.code {
            KeyCode::Esc => {
                self.core.close_popup();
                Action::None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.core.highlight_next();
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.core.highlight_previous();
                Action::None
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.core.toggle_highlighted();
                // Single-select closes on pick, multi-select keeps the
                // popup open for further toggles
                if !self.core.selector.is_multi_select() {
                    self.core.close_popup();
                }
                Action::None
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        self.core.render_trigger(f, rect, None);
        self.core.render_popup(f, rect);
    }

    fn on_focus(&mut self) {
        self.core.set_focused(true);
    }

    fn on_blur(&mut self) {
        self.core.set_focused(false);
    }
}
