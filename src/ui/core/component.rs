use super::actions::Action;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

/// Base trait every widget in the component tree implements.
///
/// Key events flow top-down from the root component to whichever widget
/// has focus; the returned [`Action`] bubbles back up for the root to act
/// on. Focus hooks let widgets adjust their visual state without the root
/// reaching into their internals.
pub trait Component {
    fn init(&mut self) -> anyhow::Result<()> {
        Ok(())
    }

    fn handle_key_events(&mut self, key: KeyEvent) -> Action;

    fn render(&mut self, f: &mut Frame, rect: Rect);

    // Optional focus lifecycle
    fn on_focus(&mut self) {}
    fn on_blur(&mut self) {}
}
