//! Rendering logic for the application

use ratatui::{Frame, prelude::*};

use super::state::{App, View};
use crate::ui::widgets::{
    render_diff_status_bar, render_error_banner, render_path_prompt, render_prompt_status_bar,
    render_timeline_status_bar,
};

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        self.last_frame_height.set(frame.area().height);

        let notification = self
            .notification
            .as_ref()
            .filter(|n| !n.is_expired())
            .cloned();

        // Status bar takes the last line
        let area = frame.area();
        let main_area = Rect {
            height: area.height.saturating_sub(1),
            ..area
        };

        match self.current_view {
            View::Timeline => {
                self.timeline_view
                    .render(frame, main_area, notification.as_ref());
                if let Some(prompt) = self.prompt.as_mut() {
                    render_path_prompt(frame, main_area, prompt);
                    render_prompt_status_bar(frame);
                } else {
                    let focus = self.focus_index.map(|index| (index, self.files.len()));
                    render_timeline_status_bar(frame, focus);
                }
            }
            View::Diff => {
                if let Some(diff_view) = &self.diff_view {
                    diff_view.render(frame, main_area, notification.as_ref());
                    render_diff_status_bar(frame, diff_view);
                }
            }
        }

        if let Some(error) = &self.error_message {
            render_error_banner(frame, error);
        }
    }
}
