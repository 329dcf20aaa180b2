pub mod api;
pub mod config;
pub mod error;
pub mod ml;
pub mod swc;
pub mod toolkit;

pub use config::AppConfig;
pub use error::{Result, WaiverBidError};
