pub mod blog;
pub mod catalog;
pub mod config;
pub mod error;
pub mod types;

pub use catalog::Catalog;
pub use config::{load_site, load_site_with, parse_site_toml_str, process_env};
pub use error::{Error, Result};
pub use types::*;
