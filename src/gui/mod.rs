pub mod app;
pub mod deck_form;
pub mod deck_list;
pub mod error_modal;
pub mod session_view;
pub mod settings;
pub mod theme;
pub mod top_bar;

pub use app::MazoApp;
