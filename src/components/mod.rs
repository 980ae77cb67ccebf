pub mod app;
pub mod contact;
pub mod cursor_layer;
pub mod hero;
pub mod loader;
pub mod navbar;
pub mod notifications;
pub mod reveal;
pub mod sections;
