//! Root application component.
//!
//! Owns the widget tree, the focus order, and the [`AppContext`]. All
//! actions funnel through here: key events go to the focused widget, the
//! widgets' selector listeners dispatch selection changes onto the action
//! channel, and this component translates them into filter/sort
//! instructions and pushes the resulting record view into the gallery.

use std::sync::Arc;

use crate::config::Config;
use crate::dataset::DataSource;
use crate::query::FilterInstruction;
use crate::ui::components::{DropdownFilter, DropdownSort, GalleryView, HelpPanel, StatusBar};
use crate::ui::core::{
    actions::{Action, FocusTarget},
    event_handler::EventType,
    AppContext, Component,
};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::{layout::Rect, Frame};
use tokio::sync::mpsc;

pub struct AppComponent {
    // Component composition
    filter: DropdownFilter,
    sort: DropdownSort,
    gallery: GalleryView,

    // Application state
    ctx: AppContext,
    focus: FocusTarget,
    loading: bool,
    error_message: Option<String>,
    show_help: bool,
    help_scroll_offset: usize,
    help_max_scroll: usize,

    // Action plumbing
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,

    // Services
    source: Arc<dyn DataSource>,

    // Last rendered gallery area, for mouse routing
    gallery_area: Option<Rect>,

    should_quit: bool,
}

impl AppComponent {
    pub fn new(config: Config, source: Arc<dyn DataSource>) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        let filter = DropdownFilter::new(
            config.data.filter_attribute.clone(),
            config.ui.filter_multi_select,
            config.ui.empty_option_caption.clone(),
            &config.data.default_filter,
            action_tx.clone(),
        );
        let sort = DropdownSort::new(
            config.ui.empty_option_caption.clone(),
            &config.data.default_sort,
            config.data.sort_direction(),
            action_tx.clone(),
        );
        let gallery = GalleryView::new(
            config.display.gallery_columns,
            config.display.show_record_ids,
            config.display.empty_placeholder.clone(),
        );

        Self {
            filter,
            sort,
            gallery,
            ctx: AppContext::new(config),
            focus: FocusTarget::default(),
            loading: true,
            error_message: None,
            show_help: false,
            help_scroll_offset: 0,
            help_max_scroll: 0,
            action_tx,
            action_rx,
            source,
            gallery_area: None,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Start loading the dataset in the background. The result arrives on
    /// the action channel as `DataLoaded` or `LoadFailed`.
    pub fn trigger_load(&mut self) {
        self.loading = true;
        self.error_message = None;

        let source = Arc::clone(&self.source);
        let action_tx = self.action_tx.clone();
        tokio::spawn(async move {
            match source.fetch().await {
                Ok(dataset) => {
                    let _ = action_tx.send(Action::DataLoaded(dataset));
                }
                Err(e) => {
                    log::error!("Failed to load dataset from {}: {e}", source.describe());
                    let _ = action_tx.send(Action::LoadFailed(e.to_string()));
                }
            }
        });
    }

    /// Process one terminal event, then whatever actions it queued.
    pub fn handle_event(&mut self, event: EventType) -> anyhow::Result<()> {
        match event {
            EventType::Key(key) => {
                let action = self.route_key(key);
                self.handle_app_action(action);
            }
            EventType::Mouse(mouse) => self.handle_mouse(mouse),
            EventType::Resize(_, _) | EventType::Tick | EventType::Other => {}
        }
        self.drain_pending_actions();
        Ok(())
    }

    /// Drain the action channel; returns how many actions were processed
    /// so the event loop knows whether to re-render.
    pub fn drain_pending_actions(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(action) = self.action_rx.try_recv() {
            self.handle_app_action(action);
            processed += 1;
        }
        processed
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if !self.ctx.config.ui.mouse_enabled || self.show_help {
            return;
        }
        if let Some(area) = self.gallery_area {
            let action = self.gallery.handle_mouse(mouse, area);
            self.handle_app_action(action);
        }
    }

    /// Decide whether a key is handled globally or by the focused widget.
    fn route_key(&mut self, key: KeyEvent) -> Action {
        if self.show_help {
            return match key.code {
                KeyCode::Up => Action::HelpScrollUp,
                KeyCode::Down => Action::HelpScrollDown,
                KeyCode::Char('?') | KeyCode::Esc => Action::ShowHelp(false),
                KeyCode::Char('q') => Action::Quit,
                _ => Action::None,
            };
        }

        match key.code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
            KeyCode::Char('?') => Action::ShowHelp(true),
            KeyCode::Char('r') => Action::ReloadData,
            KeyCode::Tab => Action::FocusNext,
            KeyCode::BackTab => Action::FocusPrevious,
            _ => match self.focus {
                FocusTarget::Filter => self.filter.handle_key_events(key),
                FocusTarget::Sort => self.sort.handle_key_events(key),
                FocusTarget::Gallery => self.gallery.handle_key_events(key),
            },
        }
    }

    fn set_focus(&mut self, target: FocusTarget) {
        if self.focus == target {
            return;
        }
        match self.focus {
            FocusTarget::Filter => self.filter.on_blur(),
            FocusTarget::Sort => self.sort.on_blur(),
            FocusTarget::Gallery => self.gallery.on_blur(),
        }
        self.focus = target;
        match self.focus {
            FocusTarget::Filter => self.filter.on_focus(),
            FocusTarget::Sort => self.sort.on_focus(),
            FocusTarget::Gallery => self.gallery.on_focus(),
        }
    }

    fn handle_app_action(&mut self, action: Action) {
        match action {
            Action::FocusNext => self.set_focus(self.focus.next()),
            Action::FocusPrevious => self.set_focus(self.focus.previous()),
            Action::Focus(target) => self.set_focus(target),

            Action::FilterChanged(values) => {
                log::info!("Filter selection changed: {values:?}");
                let instruction = FilterInstruction::from_values(self.filter.attribute_id(), values);
                self.ctx.set_filter(Some(instruction));
                self.refresh_gallery();
            }
            Action::SortSelectionChanged(_) => {
                // The listener only sees the selection; combine it with the
                // direction the sort widget holds
                let instruction = self.sort.current_instruction();
                log::info!("Sort selection changed: {instruction:?}");
                self.ctx.set_sort(instruction);
                self.refresh_gallery();
            }
            Action::SortChanged(instruction) => {
                self.ctx.set_sort(instruction);
                self.refresh_gallery();
            }

            Action::DataLoaded(dataset) => {
                self.loading = false;
                self.error_message = None;
                self.filter.update_options(&dataset);
                self.sort.update_options(&dataset);
                self.ctx.set_dataset(dataset);
                self.refresh_gallery();
            }
            Action::LoadFailed(message) => {
                self.loading = false;
                self.error_message = Some(message);
            }
            Action::ReloadData => self.trigger_load(),

            Action::ShowHelp(show) => {
                self.show_help = show;
                self.help_scroll_offset = 0;
            }
            Action::HelpScrollUp => {
                self.help_scroll_offset = self.help_scroll_offset.saturating_sub(1);
            }
            Action::HelpScrollDown => {
                self.help_scroll_offset = (self.help_scroll_offset + 1).min(self.help_max_scroll);
            }

            Action::Quit => self.should_quit = true,
            Action::None => {}
        }
    }

    fn refresh_gallery(&mut self) {
        let records = self.ctx.visible_records();
        let attributes = self
            .ctx
            .dataset()
            .map(|dataset| dataset.attributes.clone())
            .unwrap_or_default();
        self.gallery.update_data(records, attributes, self.ctx.total_records());
    }
}

impl Component for AppComponent {
    fn init(&mut self) -> anyhow::Result<()> {
        match self.focus {
            FocusTarget::Filter => self.filter.on_focus(),
            FocusTarget::Sort => self.sort.on_focus(),
            FocusTarget::Gallery => self.gallery.on_focus(),
        }
        Ok(())
    }

    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let action = self.route_key(key);
        self.handle_app_action(action);
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let areas = LayoutManager::main_layout(rect, self.ctx.config.ui.header_height);
        let header_areas = LayoutManager::header_layout(areas[0]);
        self.gallery_area = Some(areas[1]);

        // Gallery first so the drop-down popups overlay it
        self.gallery.render(f, areas[1]);
        self.filter.render(f, header_areas[0]);
        self.sort.render(f, header_areas[1]);
        StatusBar::render(f, areas[2], self.loading, self.error_message.as_ref());

        if self.show_help {
            self.help_max_scroll = HelpPanel::render(f, self.help_scroll_offset);
        }
    }
}
