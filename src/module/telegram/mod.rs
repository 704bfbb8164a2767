///! Telegram notification module
///!
///! Delivers status messages to a single chat via the Bot API.

pub mod notifier;

pub use notifier::{Notifier, TelegramNotifier};
