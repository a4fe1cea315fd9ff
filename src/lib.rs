//! LifeFit AI: static front-end host and form-driven demo panels.
//!
//! Two independent applications share this crate:
//! - the asset server, which serves the pre-built single-page front-end with
//!   entry-document fallback and a fixed `/api/config` endpoint
//! - the panel UI, which answers form selections with canned markdown from
//!   static lookup tables

pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod responders;
pub mod routes;
pub mod state;
pub mod templates;

pub use config::{AppConfig, ConfigError};
pub use error::AppError;
