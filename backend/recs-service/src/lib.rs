pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod http;
pub mod models;
pub mod services;

pub use config::Config;
pub use error::{AppError, Result};
