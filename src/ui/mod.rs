pub mod app;
pub mod components;
pub mod controller;
pub mod input;
pub mod layout;
pub mod message;
pub mod notify;
pub mod state;
pub mod theme;
pub mod tui;
pub mod util;
pub mod views;
