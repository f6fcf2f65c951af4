pub mod app;
pub mod handlers;
pub mod timer;
pub mod ui;
