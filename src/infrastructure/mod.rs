pub mod config;
pub mod tier_table;

pub use self::config::*;
pub use self::tier_table::*;
