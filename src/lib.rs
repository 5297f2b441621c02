pub mod inventory;
pub mod logging;
pub mod model;
pub mod nav;
pub mod projector;
pub mod theme;
pub mod tui;

mod tui_shell;
