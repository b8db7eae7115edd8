pub mod clipboard;
pub mod format;
pub mod platform;
pub mod schedule;
pub mod settings;
pub mod timing;
