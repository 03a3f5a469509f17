pub mod header;
pub mod menu;
pub mod player;
pub mod sidebar;
pub mod toast;
