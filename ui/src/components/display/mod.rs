pub mod loading_indicator;
pub mod toast_display;

pub use loading_indicator::*;
pub use toast_display::*;
