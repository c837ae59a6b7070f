pub mod config;
pub mod event;
pub mod handler;
pub mod stores;

pub use config::Config;
pub use event::AccountCreationDetail;
pub use handler::{LogEntry, Notifier};
