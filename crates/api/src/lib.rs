//! HTTP API: server, routing, and configuration.

pub mod app;
pub mod config;
pub mod middleware;
