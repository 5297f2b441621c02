mod config;
mod inventory;

pub use self::config::{ColorConfig, ThemeConfig};
pub use self::inventory::{Dataset, Inventory, Pool, Snapshot, ZBox};
