//! UI layer for the desktop shell: app frame, tab panels, widgets and theme.

pub mod app;
pub mod panels;
pub mod theme;
pub mod widgets;

pub use app::MenuGuiApp;
