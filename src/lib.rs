pub mod bot;
pub mod config;
pub mod menu;
pub mod portal;
