pub mod audio;
pub mod config;
pub mod content;
pub mod event;
pub mod form;
pub mod http;
pub mod ui;
pub mod util;
