pub mod core;
pub mod gui;
pub mod i18n;
pub mod persistence;
pub mod session;
pub mod store;
