pub mod app_settings;
pub mod fixture;
pub mod form;
pub mod messages;
pub mod network;
pub mod refresher;
