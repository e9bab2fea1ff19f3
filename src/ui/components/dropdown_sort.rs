//! Drop-down sort widget.
//!
//! Single-select over the dataset's sortable attributes, prefixed with a
//! "no sorting" entry. The sort direction lives next to the selection and
//! is toggled with `d` (or Left/Right while the popup is closed); the
//! trigger line shows it as an arrow indicator.

use crate::constants::{SORT_ASCENDING_INDICATOR, SORT_DESCENDING_INDICATOR, SORT_TITLE};
use crate::dataset::Dataset;
use crate::query::{SortDirection, SortInstruction};
use crate::selector::{OptionSelector, SelectOption};
use crate::ui::components::dropdown::DropdownCore;
use crate::ui::core::{actions::Action, Component};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, Frame};
use tokio::sync::mpsc;

pub struct DropdownSort {
    core: DropdownCore,
    direction: SortDirection,
}

impl DropdownSort {
    /// Build the widget and wire its selector to the action channel.
    ///
    /// The listener cannot see the direction this widget holds, so it
    /// reports the raw selection; the root component combines it with
    /// [`current_instruction`](Self::current_instruction).
    pub fn new(
        empty_caption: impl Into<String>,
        default_attribute: &str,
        default_direction: SortDirection,
        action_tx: mpsc::UnboundedSender<Action>,
    ) -> Self {
        let mut selector = OptionSelector::new(false, empty_caption);
        selector.set_default_spec(default_attribute);
        selector.set_listener(Box::new(move |selection| {
            let values = selection.iter().map(|option| option.value.clone()).collect();
            let _ = action_tx.send(Action::SortSelectionChanged(values));
        }));

        Self {
            core: DropdownCore::new(SORT_TITLE, selector),
            direction: default_direction,
        }
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    pub fn is_open(&self) -> bool {
        self.core.is_open()
    }

    pub fn selection(&self) -> &[SelectOption] {
        self.core.selector.selection()
    }

    /// The instruction the current selection and direction describe, or
    /// `None` when the "no sorting" entry is picked.
    pub fn current_instruction(&self) -> Option<SortInstruction> {
        let values: Vec<String> = self
            .core
            .selector
            .selection()
            .iter()
            .map(|option| option.value.clone())
            .collect();
        SortInstruction::from_values(&values, self.direction)
    }

    /// Rebuild the option list from the dataset's sortable attributes.
    pub fn update_options(&mut self, dataset: &Dataset) {
        let mut options = vec![SelectOption::empty(self.core.selector.empty_caption())];
        options.extend(dataset.sort_options());
        self.core.selector.set_options(options);
    }

    fn toggle_direction(&mut self) -> Action {
        self.direction = self.direction.toggled();
        log::info!("Sort direction toggled to {}", self.direction.as_str());
        Action::SortChanged(self.current_instruction())
    }
}

impl Component for DropdownSort {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if !self.core.is_open() {
            return match key.code {
                KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Down => {
                    self.core.open_popup();
                    Action::None
                }
                KeyCode::Char('d') | KeyCode::Left | KeyCode::Right => self.toggle_direction(),
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
                self.core.close_popup();
                Action::None
            }
            KeyCode::Char('d') => self.toggle_direction(),
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let indicator = match self.direction {
            SortDirection::Ascending => SORT_ASCENDING_INDICATOR,
            SortDirection::Descending => SORT_DESCENDING_INDICATOR,
        };
        self.core.render_trigger(f, rect, Some(indicator));
        self.core.render_popup(f, rect);
    }

    fn on_focus(&mut self) {
        self.core.set_focused(true);
    }

    fn on_blur(&mut self) {
        self.core.set_focused(false);
    }
}
