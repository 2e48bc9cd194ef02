//! Input handling for the application

use std::path::PathBuf;

use crossterm::event::KeyEvent;
use tui_textarea::TextArea;

use super::state::{App, View};
use crate::keys;
use crate::ui::views::{DiffAction, TimelineAction};

impl App {
    /// Handle key events
    pub fn on_key_event(&mut self, key: KeyEvent) {
        // Clear error message on any key press
        self.error_message = None;

        if keys::is_interrupt_key(&key) {
            self.quit();
            return;
        }

        // The prompt takes every key while open
        if self.prompt.is_some() {
            self.handle_prompt_key(key);
            return;
        }

        match self.current_view {
            View::Timeline => self.handle_timeline_key(key),
            View::Diff => self.handle_diff_key(key),
        }
    }

    fn handle_timeline_key(&mut self, key: KeyEvent) {
        if key.code == keys::QUIT {
            self.quit();
            return;
        }

        let action = self.timeline_view.handle_key(key, &*self.timeline);
        self.handle_timeline_action(action);
    }

    fn handle_timeline_action(&mut self, action: TimelineAction) {
        match action {
            TimelineAction::None => {}
            TimelineAction::Run(command) => self.run_command(command),
            TimelineAction::NextFile => self.cycle_focus(1),
            TimelineAction::PrevFile => self.cycle_focus(-1),
            TimelineAction::OpenFile => self.prompt = Some(TextArea::default()),
            TimelineAction::Refresh => self.refresh(),
        }
    }

    fn handle_diff_key(&mut self, key: KeyEvent) {
        // Header (4) and status bar (1) are not scrollable
        let visible_height = self.last_frame_height.get().saturating_sub(5) as usize;
        let Some(diff_view) = self.diff_view.as_mut() else {
            self.go_back();
            return;
        };

        match diff_view.handle_key_with_height(key, visible_height) {
            DiffAction::None => {}
            DiffAction::Back => self.go_back(),
        }
    }

    fn handle_prompt_key(&mut self, key: KeyEvent) {
        match key.code {
            keys::ESC => self.prompt = None,
            keys::SUBMIT => {
                let Some(textarea) = self.prompt.take() else {
                    return;
                };
                let path = textarea.lines().join("");
                let path = path.trim();
                // Empty = cancel
                if !path.is_empty() {
                    self.open_file(PathBuf::from(path));
                }
            }
            _ => {
                if let Some(textarea) = self.prompt.as_mut() {
                    textarea.input(key);
                }
            }
        }
    }
}
