//! Key handling for TimelineView

use crossterm::event::KeyEvent;

use crate::keys;
use crate::timeline::TreeDataProvider;

use super::{TimelineAction, TimelineView};

impl TimelineView {
    /// Handle key input; `provider` answers child queries on expand
    pub fn handle_key(
        &mut self,
        key: KeyEvent,
        provider: &impl TreeDataProvider,
    ) -> TimelineAction {
        if keys::is_refresh_key(&key) {
            return TimelineAction::Refresh;
        }

        match key.code {
            code if keys::is_move_down(code) => {
                self.move_down();
                TimelineAction::None
            }
            code if keys::is_move_up(code) => {
                self.move_up();
                TimelineAction::None
            }
            keys::GO_TOP => {
                self.move_to_top();
                TimelineAction::None
            }
            keys::GO_BOTTOM => {
                self.move_to_bottom();
                TimelineAction::None
            }
            code if keys::is_expand(code) => {
                self.expand(provider);
                TimelineAction::None
            }
            code if keys::is_collapse(code) => {
                self.collapse();
                TimelineAction::None
            }
            keys::ACTIVATE => self.activate(provider),
            keys::NEXT_FILE | keys::TAB => TimelineAction::NextFile,
            keys::PREV_FILE => TimelineAction::PrevFile,
            keys::OPEN_FILE => TimelineAction::OpenFile,
            keys::DETAILS => {
                self.show_details = !self.show_details;
                TimelineAction::None
            }
            _ => TimelineAction::None,
        }
    }
}
