mod config;
mod crop;
mod image_utils;
mod rect;
mod selection;
mod widget;

mod app;

pub use app::run_native;
pub use config::*;
pub use crop::*;
pub use image_utils::*;
pub use rect::*;
pub use selection::*;
pub use widget::*;
