mod app_events;
mod app_render;
mod app_state;
mod settings;

pub use app_state::App;
pub use settings::{Overrides, Settings, parse_colour};
