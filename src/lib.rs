pub mod config;
pub mod date;
pub mod db;
mod error;
pub mod normalize;
pub mod scrape;
pub mod service;

pub use config::{AppConfig, Place};
pub use db::Database;
pub use error::{Error, Result};
pub use scrape::MenuScraper;
pub use service::{LunchService, RefreshReport};
