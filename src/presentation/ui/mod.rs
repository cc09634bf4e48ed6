//! UI screens.

mod app;
mod books_screen;
mod context;
mod cursors;
mod details_screen;
mod lectures_screen;
mod list_screen;
mod publications_screen;
mod student_house_screen;

pub use app::App;
pub use context::ScreenContext;
pub use cursors::{Cursors, ListFocus};
