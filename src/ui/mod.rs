//! Terminal UI: an immediate-mode game view driven by keyboard and mouse,
//! with selectable cosmetic themes.

mod app;
pub mod context;
mod game_view;
pub mod theme;

pub use app::App;
pub use context::RenderContext;
pub use theme::Theme;
