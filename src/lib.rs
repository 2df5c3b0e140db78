//! Web front-end that translates text and detects its language by
//! delegating to an external translation provider.

pub mod config;
pub mod error;
pub mod gateway;
pub mod handlers;
pub mod languages;
pub mod page;
pub mod routes;
pub mod state;
pub mod validation;
