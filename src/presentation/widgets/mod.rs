mod footer_bar;
mod header_bar;
mod input;
mod notice;
mod translation_popup;

pub use footer_bar::{FooterBar, FooterBarStyle};
pub use header_bar::HeaderBar;
pub use input::{TextInput, TextInputView};
pub use notice::{ErrorPanel, LoaderPanel};
pub use translation_popup::TranslationPopup;
