// Utils compartidos

pub mod constants;
pub mod storage;
pub mod browser;

pub use constants::*;
pub use storage::{load_json, remove_key, save_json, BrowserSessionStorage, KeyValueStore};
pub use browser::show_alert;
