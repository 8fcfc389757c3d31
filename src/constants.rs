//! Application constants and configuration

pub const APP_NAME: &str = "Hello GUI";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const WINDOW_TITLE: &str = "My First egui App";

/// Default inner size of the native window, used when nothing was remembered
pub const DEFAULT_WINDOW_SIZE: [f32; 2] = [1280.0, 720.0];
pub const MIN_WINDOW_SIZE: [f32; 2] = [640.0, 360.0];

/// Side length of the rasterized window/taskbar icon
pub const ICON_SIZE: u32 = 64;

// Example panel
pub const PANEL_TITLE: &str = "Hello, world!";
pub const PANEL_TEXT: &str = "This is some useful text.";
pub const PANEL_BUTTON: &str = "Click Me";

// Build-it-yourself guide
pub const GUIDE_TITLE: &str = "Getting started";
