//! Path prompt widget (focus a file by path)

use ratatui::{
    Frame,
    prelude::*,
    widgets::{Block, Borders, Clear},
};
use tui_textarea::TextArea;

/// Render the prompt as a 3-line box at the bottom of `area`
pub fn render_path_prompt(frame: &mut Frame, area: Rect, textarea: &mut TextArea<'static>) {
    if area.height < 3 {
        return;
    }

    let prompt_area = Rect {
        x: area.x,
        y: area.y + area.height - 3,
        width: area.width,
        height: 3,
    };

    textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(Line::from(" Focus file ").bold()),
    );
    textarea.set_cursor_line_style(Style::default());

    frame.render_widget(Clear, prompt_area);
    frame.render_widget(&*textarea, prompt_area);
}
