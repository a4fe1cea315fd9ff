//! HTTP server plumbing shared by both applications.
//!
//! Provides:
//! - Plain HTTP serving through `axum-server` with a shutdown handle
//! - Graceful shutdown on SIGTERM/SIGINT
//! - The single-page-application static file service

mod server;
mod shutdown;
pub mod static_files;

pub use server::{start_server, ServerError};
