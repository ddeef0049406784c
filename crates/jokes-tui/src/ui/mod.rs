pub mod app;
pub mod components;
pub mod layout;
pub mod services;
pub mod terminal;
pub mod theme;
pub mod views;

pub use app::App;
pub use terminal::{init as init_terminal, restore as restore_terminal, Tui};
