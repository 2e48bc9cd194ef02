//! Reusable UI widgets

mod error_banner;
mod path_prompt;
mod status_bar;

pub use error_banner::render_error_banner;
pub use path_prompt::render_path_prompt;
pub use status_bar::{
    render_diff_status_bar, render_prompt_status_bar, render_timeline_status_bar,
};
